mod authorities;
mod authorize;
mod change_status;
mod create_drive;
mod create_report;
mod delete_drive;
mod delete_report;
mod discussions;
mod enhancements;
mod error;
mod escalate_reports;
mod monitorings;
mod resolve_report;
mod tasks;
mod users;
mod volunteers;
mod vote_drive;
mod vote_report;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorities::*, authorize::*, change_status::*, create_drive::*, create_report::*,
    delete_drive::*, delete_report::*, discussions::*, enhancements::*, error::Error,
    escalate_reports::*, monitorings::*, resolve_report::*, tasks::*, users::*, volunteers::*,
    vote_drive::*, vote_report::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, lifecycle::LifecycleRules, repositories::*};
}
use self::prelude::*;

pub fn get_report<R: ReportRepo>(repo: &R, id: &Id) -> Result<Report> {
    Ok(repo.get_report(id)?)
}

pub fn list_reports<R: ReportRepo>(
    repo: &R,
    query: &ReportQuery,
    pagination: &Pagination,
) -> Result<Vec<Report>> {
    Ok(repo.list_reports(query, pagination)?)
}

pub fn status_log_of_report<R>(repo: &R, report_id: &Id) -> Result<Vec<StatusLog>>
where
    R: ReportRepo + StatusLogRepo,
{
    // Fail with NotFound for unknown reports instead of an empty list
    repo.get_report(report_id)?;
    Ok(repo.list_status_logs(report_id)?)
}

pub fn get_drive<R: DriveRepo>(repo: &R, id: &Id) -> Result<(Drive, Vec<Id>)> {
    let drive = repo.get_drive(id)?;
    let report_ids = repo.report_ids_of_drive(id)?;
    Ok((drive, report_ids))
}

pub fn list_drives<R: DriveRepo>(
    repo: &R,
    query: &DriveQuery,
    pagination: &Pagination,
) -> Result<Vec<Drive>> {
    Ok(repo.list_drives(query, pagination)?)
}
