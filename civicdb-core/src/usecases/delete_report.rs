use super::prelude::*;

/// Deletes a report and all rows that depend on it.
///
/// Tasks that refer to the report are kept but lose
/// their reference.
///
/// Must be executed within a single transaction.
pub fn delete_report<R: Db>(repo: &R, user: &User, report_id: &Id) -> Result<()> {
    let report = repo.get_report(report_id)?;
    super::authorize_owner_or_moderator(user, &report.reporter)?;
    let votes = repo.delete_report_votes_of_report(report_id)?;
    let contacts = repo.delete_report_authorities_of_report(report_id)?;
    repo.delete_status_logs_of_report(report_id)?;
    repo.delete_report_resolution_of_report(report_id)?;
    repo.delete_monitorings_of_report(report_id)?;
    repo.delete_discussions_of_parent(&DiscussionParent::Report(report_id.clone()))?;
    repo.delete_drive_reports_of_report(report_id)?;
    let tasks = repo.detach_tasks_from_report(report_id)?;
    repo.delete_report(report_id)?;
    log::info!(
        "Deleted report {report_id} with {votes} vote(s) and {contacts} authority contact(s), detached {tasks} task(s)"
    );
    Ok(())
}
