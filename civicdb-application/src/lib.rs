#[macro_use]
extern crate log;

mod change_status;
mod contact_authority;
mod create_drive;
mod create_report;
mod delete_drive;
mod delete_report;
mod discussions;
mod drive_participation;
mod escalate_reports;
mod monitorings;
mod register_user;
mod resolve_report;
mod tasks;
mod vote;

pub mod prelude {
    pub use super::{
        change_status::*, contact_authority::*, create_drive::*, create_report::*,
        delete_drive::*, delete_report::*, discussions::*, drive_participation::*,
        escalate_reports::*, monitorings::*, register_user::*, resolve_report::*, tasks::*,
        vote::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use civicdb_core::{entities::*, lifecycle::LifecycleRules, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use civicdb_db_sqlite::Connections;
}
