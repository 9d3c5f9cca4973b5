use super::*;

pub fn resolve_report(
    connections: &sqlite::Connections,
    account_id: &Id,
    report_id: &Id,
    resolution: usecases::NewResolution,
) -> Result<usecases::ResolveOutcome> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::resolve_report(conn, &user, report_id, resolution, now).map_err(|err| {
            warn!("Failed to resolve report {}: {}", report_id, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn resolution() -> usecases::NewResolution {
        usecases::NewResolution {
            description: "The pothole has been filled".into(),
            evidence_urls: vec!["https://img.example.com/after.jpg".into()],
        }
    }

    #[test]
    fn resolve_report_and_complete_monitorings() {
        let fixture = BackendFixture::new();
        let reporter = fixture.register("reporter@example.com");
        let moderator = fixture.register_with_role("moderator@example.com", Role::Moderator);
        let report = fixture.create_report(&reporter, "Deep pothole");
        let db = &fixture.db_connections;
        flows::change_report_status(db, &moderator.id, &report.id, ReportStatus::InProgress, None)
            .unwrap();
        flows::start_monitoring(db, &moderator.id, &report.id, Default::default()).unwrap();

        let outcome = flows::resolve_report(db, &reporter.id, &report.id, resolution()).unwrap();
        assert_eq!(outcome.completed_monitorings, 1);
        assert_eq!(outcome.resolution.evidence_urls.len(), 1);

        let conn = db.shared().unwrap();
        assert_eq!(conn.get_report(&report.id).unwrap().status, ReportStatus::Resolved);
        let monitorings = usecases::monitorings_of_report(&conn, &report.id).unwrap();
        assert!(monitorings
            .iter()
            .all(|m| m.status == MonitoringStatus::Completed));
        drop(conn);

        assert!(matches!(
            flows::resolve_report(db, &reporter.id, &report.id, resolution()),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::AlreadyResolved
            )))
        ));
    }

    #[test]
    fn strangers_may_not_resolve_reports() {
        let fixture = BackendFixture::new();
        let reporter = fixture.register("reporter@example.com");
        let stranger = fixture.register("stranger@example.com");
        let report = fixture.create_report(&reporter, "Deep pothole");
        assert!(matches!(
            flows::resolve_report(&fixture.db_connections, &stranger.id, &report.id, resolution()),
            Err(AppError::Business(BError::Parameter(usecases::Error::Forbidden)))
        ));
        assert_eq!(fixture.get_report(&report.id).status, ReportStatus::Pending);
    }
}
