pub use civicdb_core::{lifecycle::LifecycleRules, usecases};

pub mod entities {
    pub use civicdb_core::entities::*;
    #[cfg(test)]
    pub use civicdb_entities::builders::*;
}

pub mod prelude {
    pub use civicdb_application::error::{AppError, BError};
    pub use civicdb_core::{
        repositories::{AuthorityQuery, DriveQuery, Pagination, ReportQuery, UserRepo},
        RepoError,
    };

    pub use super::entities::*;

    pub type Result<T> = std::result::Result<T, AppError>;
}
