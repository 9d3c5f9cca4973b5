use super::{change_status::try_advance_report, prelude::*, tasks::NewTask};
use crate::{
    util::validate::{AutoCorrect, Validate},
    RepoError,
};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewDrive {
    pub title              : String,
    pub description        : String,
    /// Must be positive
    pub participant_target : i64,
    pub date               : Option<Timestamp>,
    pub location           : Location,
    pub tasks              : Vec<NewTask>,
    pub report_id          : Option<Id>,
}

#[derive(Debug, Clone)]
pub struct CreatedDrive {
    pub drive: Drive,
    pub tasks: Vec<Task>,
    pub report_ids: Vec<Id>,
}

/// Creates a planned drive together with its initial tasks.
///
/// A linked report is moved into `IN_PROGRESS` if its current
/// status allows it.
///
/// Must be executed within a single transaction.
pub fn create_new_drive<R>(
    repo: &R,
    organizer: &User,
    new_drive: NewDrive,
    now: Timestamp,
) -> Result<CreatedDrive>
where
    R: DriveRepo + TaskRepo + ReportRepo + StatusLogRepo,
{
    let NewDrive {
        title,
        description,
        participant_target,
        date,
        location,
        tasks,
        report_id,
    } = new_drive;
    let participant_target = u32::try_from(participant_target)
        .ok()
        .filter(|t| *t > 0)
        .ok_or(Error::ParticipantTarget)?;
    let drive = Drive {
        id: Id::new(),
        title,
        description,
        status: DriveStatus::default(),
        organizer: organizer.id.clone(),
        participant_target,
        date,
        location,
        votes: VoteTally::default(),
        created_at: now,
        updated_at: now,
    }
    .auto_correct();
    drive.validate()?;
    let report = report_id.map(|id| repo.get_report(&id)).transpose()?;

    log::debug!("Creating new drive {} by {}", drive.id, drive.organizer);
    repo.create_drive(&drive)?;
    let tasks = tasks
        .into_iter()
        .map(|new_task| -> Result<Task> {
            let task = new_task.into_task(&drive.id, now)?;
            repo.create_task(&task)?;
            Ok(task)
        })
        .collect::<Result<Vec<_>>>()?;
    let mut report_ids = vec![];
    if let Some(report) = report {
        repo.link_report_to_drive(&drive.id, &report.id)?;
        try_advance_report(
            repo,
            &report,
            ReportStatus::InProgress,
            Some(&organizer.id),
            "Drive created",
            now,
        )?;
        report_ids.push(report.id);
    }
    log::info!(
        "Created drive {} with {} task(s) and {} report(s)",
        drive.id,
        tasks.len(),
        report_ids.len()
    );
    Ok(CreatedDrive {
        drive,
        tasks,
        report_ids,
    })
}

/// Adds another report to an existing drive.
pub fn link_report_to_drive<R>(
    repo: &R,
    user: &User,
    drive_id: &Id,
    report_id: &Id,
    now: Timestamp,
) -> Result<()>
where
    R: DriveRepo + ReportRepo + StatusLogRepo,
{
    let drive = repo.get_drive(drive_id)?;
    super::authorize_owner_or_moderator(user, &drive.organizer)?;
    let report = repo.get_report(report_id)?;
    repo.link_report_to_drive(drive_id, report_id)
        .map_err(|err| match err {
            RepoError::AlreadyExists => Error::AlreadyLinked,
            err => err.into(),
        })?;
    try_advance_report(
        repo,
        &report,
        ReportStatus::InProgress,
        Some(&user.id),
        "Linked to drive",
        now,
    )?;
    Ok(())
}
