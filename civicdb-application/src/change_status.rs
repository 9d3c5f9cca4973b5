use super::*;

/// Manually changes the status of a report.
///
/// Only moderators are allowed to do this.
pub fn change_report_status(
    connections: &sqlite::Connections,
    account_id: &Id,
    report_id: &Id,
    status: ReportStatus,
    reason: Option<String>,
) -> Result<StatusLog> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let moderator = usecases::authorize_user_by_id(conn, account_id, Role::Moderator)?;
        usecases::change_report_status(conn, &moderator, report_id, status, reason, now).map_err(
            |err| {
                warn!("Failed to change status of report {}: {}", report_id, err);
                err
            },
        )
    })?)
}

pub fn change_drive_status(
    connections: &sqlite::Connections,
    account_id: &Id,
    drive_id: &Id,
    status: DriveStatus,
) -> Result<Drive> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::change_drive_status(conn, &user, drive_id, status, now).map_err(|err| {
            warn!("Failed to change status of drive {}: {}", drive_id, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn only_moderators_change_report_status() {
        let fixture = BackendFixture::new();
        let reporter = fixture.register("reporter@example.com");
        let moderator = fixture.register_with_role("moderator@example.com", Role::Moderator);
        let report = fixture.create_report(&reporter, "Fallen tree");

        let err = flows::change_report_status(
            &fixture.db_connections,
            &reporter.id,
            &report.id,
            ReportStatus::InProgress,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Forbidden))
        ));

        let log = flows::change_report_status(
            &fixture.db_connections,
            &moderator.id,
            &report.id,
            ReportStatus::InProgress,
            Some("Crew dispatched".into()),
        )
        .unwrap();
        assert_eq!(log.from, ReportStatus::Pending);
        assert_eq!(log.to, ReportStatus::InProgress);
        assert_eq!(log.changed_by.as_ref(), Some(&moderator.id));
        assert_eq!(fixture.get_report(&report.id).status, ReportStatus::InProgress);
    }

    #[test]
    fn reject_illegal_drive_transitions() {
        let fixture = BackendFixture::new();
        let organizer = fixture.register("organizer@example.com");
        let drive = flows::create_drive(&fixture.db_connections, &organizer.id, new_drive("Beach cleanup"))
            .unwrap()
            .drive;
        let drive = flows::change_drive_status(
            &fixture.db_connections,
            &organizer.id,
            &drive.id,
            DriveStatus::Completed,
        )
        .unwrap();
        assert_eq!(drive.status, DriveStatus::Completed);

        let err = flows::change_drive_status(
            &fixture.db_connections,
            &organizer.id,
            &drive.id,
            DriveStatus::Planned,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(
                usecases::Error::InvalidStatusTransition { .. }
            ))
        ));
    }
}
