use super::prelude::*;

/// Number of removed rows per dependent table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletedDrive {
    pub tasks: usize,
    pub report_links: usize,
    pub votes: usize,
    pub enhancements: usize,
    pub monitorings: usize,
    pub volunteers: usize,
    pub discussions: usize,
}

/// Deletes a drive and all rows that depend on it.
///
/// Must be executed within a single transaction.
pub fn delete_drive<R: Db>(repo: &R, user: &User, drive_id: &Id) -> Result<DeletedDrive> {
    let drive = repo.get_drive(drive_id)?;
    super::authorize_owner_or_moderator(user, &drive.organizer)?;
    // The order matters
    let deleted = DeletedDrive {
        tasks: repo.delete_tasks_of_drive(drive_id)?,
        report_links: repo.delete_drive_reports_of_drive(drive_id)?,
        votes: repo.delete_drive_votes_of_drive(drive_id)?,
        enhancements: repo.delete_drive_enhancements_of_drive(drive_id)?,
        monitorings: repo.delete_monitorings_of_drive(drive_id)?,
        volunteers: repo.delete_drive_volunteers_of_drive(drive_id)?,
        discussions: repo
            .delete_discussions_of_parent(&DiscussionParent::Drive(drive_id.clone()))?,
    };
    repo.delete_drive(drive_id)?;
    log::info!("Deleted drive {drive_id}: {deleted:?}");
    Ok(deleted)
}
