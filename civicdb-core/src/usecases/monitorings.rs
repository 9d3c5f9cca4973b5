use super::{change_status::try_advance_report, prelude::*};
use crate::util::validate::non_empty;

#[derive(Debug, Clone, Default)]
pub struct NewMonitoring {
    pub drive_id: Option<Id>,
    pub notes: Option<String>,
}

/// Starts monitoring a report that is being worked on.
///
/// The first monitoring moves the report from `IN_PROGRESS`
/// to `UNDER_MONITORING`.
pub fn start_monitoring<R>(
    repo: &R,
    user: &User,
    report_id: &Id,
    new: NewMonitoring,
    now: Timestamp,
) -> Result<Monitoring>
where
    R: ReportRepo + StatusLogRepo + DriveRepo + MonitoringRepo,
{
    let NewMonitoring { drive_id, notes } = new;
    let report = repo.get_report(report_id)?;
    if !matches!(
        report.status,
        ReportStatus::InProgress | ReportStatus::UnderMonitoring
    ) {
        return Err(Error::MonitoringNotAllowed);
    }
    if let Some(drive_id) = &drive_id {
        repo.get_drive(drive_id)?;
    }
    let monitoring = Monitoring {
        id: Id::new(),
        report_id: report_id.clone(),
        drive_id,
        monitor: user.id.clone(),
        status: MonitoringStatus::Active,
        notes: non_empty(notes),
        started_at: now,
        completed_at: None,
    };
    repo.create_monitoring(&monitoring)?;
    try_advance_report(
        repo,
        &report,
        ReportStatus::UnderMonitoring,
        Some(&user.id),
        "Monitoring started",
        now,
    )?;
    Ok(monitoring)
}

pub fn complete_monitoring<R>(
    repo: &R,
    user: &User,
    monitoring_id: &Id,
    now: Timestamp,
) -> Result<Monitoring>
where
    R: MonitoringRepo,
{
    let mut monitoring = repo.get_monitoring(monitoring_id)?;
    super::authorize_owner_or_moderator(user, &monitoring.monitor)?;
    if monitoring.status == MonitoringStatus::Completed {
        return Err(Error::MonitoringCompleted);
    }
    repo.complete_monitoring(monitoring_id, now)?;
    monitoring.status = MonitoringStatus::Completed;
    monitoring.completed_at = Some(now);
    Ok(monitoring)
}

pub fn monitorings_of_report<R>(repo: &R, report_id: &Id) -> Result<Vec<Monitoring>>
where
    R: ReportRepo + MonitoringRepo,
{
    repo.get_report(report_id)?;
    Ok(repo.list_monitorings_of_report(report_id)?)
}
