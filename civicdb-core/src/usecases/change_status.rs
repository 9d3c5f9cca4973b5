use super::prelude::*;

/// A single report status change.
#[derive(Debug, Clone)]
pub struct StatusChange<'a> {
    pub report_id: &'a Id,
    pub from: ReportStatus,
    pub to: ReportStatus,
    pub changed_by: Option<&'a Id>,
    pub reason: Option<String>,
    pub at: Timestamp,
}

/// Updates the status and appends the corresponding audit record.
///
/// Every status change of a report must go through this function.
pub(crate) fn apply_status_change<R>(repo: &R, change: StatusChange) -> Result<StatusLog>
where
    R: ReportRepo + StatusLogRepo,
{
    let StatusChange {
        report_id,
        from,
        to,
        changed_by,
        reason,
        at,
    } = change;
    if !from.can_transition_to(to) {
        return Err(Error::invalid_transition(from, to));
    }
    repo.set_report_status(report_id, to, at)?;
    let log = StatusLog {
        id: Id::new(),
        report_id: report_id.clone(),
        from,
        to,
        changed_by: changed_by.cloned(),
        reason,
        created_at: at,
    };
    repo.append_status_log(&log)?;
    log::info!("Changed status of report {report_id} from {from} to {to}");
    Ok(log)
}

/// Moves the report forward if the transition is allowed and
/// silently keeps the current status otherwise.
pub(crate) fn try_advance_report<R>(
    repo: &R,
    report: &Report,
    to: ReportStatus,
    changed_by: Option<&Id>,
    reason: &str,
    at: Timestamp,
) -> Result<Option<StatusLog>>
where
    R: ReportRepo + StatusLogRepo,
{
    if !report.status.can_transition_to(to) {
        log::debug!(
            "Keeping status {} of report {} instead of {to}",
            report.status,
            report.id
        );
        return Ok(None);
    }
    let change = StatusChange {
        report_id: &report.id,
        from: report.status,
        to,
        changed_by,
        reason: Some(reason.to_string()),
        at,
    };
    apply_status_change(repo, change).map(Some)
}

pub fn change_report_status<R>(
    repo: &R,
    moderator: &User,
    report_id: &Id,
    status: ReportStatus,
    reason: Option<String>,
    now: Timestamp,
) -> Result<StatusLog>
where
    R: ReportRepo + StatusLogRepo,
{
    if !super::is_moderator(moderator) {
        return Err(Error::Forbidden);
    }
    let report = repo.get_report(report_id)?;
    let change = StatusChange {
        report_id,
        from: report.status,
        to: status,
        changed_by: Some(&moderator.id),
        reason,
        at: now,
    };
    apply_status_change(repo, change)
}

pub fn change_drive_status<R: DriveRepo>(
    repo: &R,
    user: &User,
    drive_id: &Id,
    status: DriveStatus,
    now: Timestamp,
) -> Result<Drive> {
    let drive = repo.get_drive(drive_id)?;
    super::authorize_owner_or_moderator(user, &drive.organizer)?;
    if !drive.status.can_transition_to(status) {
        return Err(Error::invalid_transition(drive.status, status));
    }
    repo.set_drive_status(drive_id, status, now)?;
    log::info!(
        "Changed status of drive {drive_id} from {} to {status}",
        drive.status
    );
    Ok(repo.get_drive(drive_id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use civicdb_entities::builders::*;

    #[test]
    fn only_moderators_change_report_status() {
        let db = MockDb::default();
        let user = db.add_user("user@example.org", Role::User);
        let report = Report::build().finish();
        db.reports.borrow_mut().push(report.clone());
        let res = change_report_status(
            &db,
            &user,
            &report.id,
            ReportStatus::EligibleForDrive,
            None,
            Timestamp::now(),
        );
        assert!(matches!(res, Err(Error::Forbidden)));
        assert_eq!(db.reports.borrow()[0].status, ReportStatus::Pending);
    }

    #[test]
    fn reject_backward_transitions() {
        let db = MockDb::default();
        let moderator = db.add_user("mod@example.org", Role::Moderator);
        let report = Report::build().status(ReportStatus::InProgress).finish();
        db.reports.borrow_mut().push(report.clone());
        let res = change_report_status(
            &db,
            &moderator,
            &report.id,
            ReportStatus::Pending,
            None,
            Timestamp::now(),
        );
        assert!(matches!(res, Err(Error::InvalidStatusTransition { .. })));
        assert!(db.status_logs.borrow().is_empty());
    }

    #[test]
    fn log_every_change() {
        let db = MockDb::default();
        let moderator = db.add_user("mod@example.org", Role::Moderator);
        let report = Report::build().finish();
        db.reports.borrow_mut().push(report.clone());
        let log = change_report_status(
            &db,
            &moderator,
            &report.id,
            ReportStatus::EligibleForDrive,
            Some("Reviewed".into()),
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(log.from, ReportStatus::Pending);
        assert_eq!(log.to, ReportStatus::EligibleForDrive);
        assert_eq!(log.changed_by.as_ref(), Some(&moderator.id));
        assert_eq!(db.status_logs.borrow().len(), 1);
        assert_eq!(db.reports.borrow()[0].status, ReportStatus::EligibleForDrive);
    }

    #[test]
    fn organizer_completes_drive() {
        let db = MockDb::default();
        let organizer = db.add_user("org@example.org", Role::User);
        let other = db.add_user("other@example.org", Role::User);
        let drive = Drive::build().organizer(organizer.id.as_str()).finish();
        db.drives.borrow_mut().push(drive.clone());
        let now = Timestamp::now();
        assert!(matches!(
            change_drive_status(&db, &other, &drive.id, DriveStatus::Completed, now),
            Err(Error::Forbidden)
        ));
        let drive = change_drive_status(&db, &organizer, &drive.id, DriveStatus::Completed, now)
            .unwrap();
        assert_eq!(drive.status, DriveStatus::Completed);
        assert!(matches!(
            change_drive_status(&db, &organizer, &drive.id, DriveStatus::Ongoing, now),
            Err(Error::InvalidStatusTransition { .. })
        ));
    }
}
