use super::*;

pub fn create_report(
    connections: &sqlite::Connections,
    account_id: &Id,
    new_report: usecases::NewReport,
) -> Result<Report> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let reporter = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::create_new_report(conn, &reporter, new_report, now).map_err(|err| {
            warn!("Failed to create new report: {}", err);
            err
        })
    })?)
}

pub fn update_report(
    connections: &sqlite::Connections,
    account_id: &Id,
    report_id: &Id,
    update: usecases::NewReport,
) -> Result<Report> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::update_report(conn, &user, report_id, update, now).map_err(|err| {
            warn!("Failed to update report {}: {}", report_id, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn create_pending_report() {
        let fixture = BackendFixture::new();
        let user = fixture.register("reporter@example.com");
        let report = fixture.create_report(&user, "Pothole in front of the school");
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.reporter, user.id);
        assert!(report.votes.window.is_none());
    }

    #[test]
    fn only_the_reporter_may_update_a_report() {
        let fixture = BackendFixture::new();
        let reporter = fixture.register("reporter@example.com");
        let other = fixture.register("other@example.com");
        let report = fixture.create_report(&reporter, "Broken street light");

        let update = usecases::NewReport {
            title: "Broken street lights".into(),
            ..new_report("")
        };
        let err = flows::update_report(&fixture.db_connections, &other.id, &report.id, update.clone())
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Forbidden))
        ));

        let updated =
            flows::update_report(&fixture.db_connections, &reporter.id, &report.id, update).unwrap();
        assert_eq!(updated.title, "Broken street lights");
    }

    #[test]
    fn reject_unknown_accounts() {
        let fixture = BackendFixture::new();
        let err = flows::create_report(
            &fixture.db_connections,
            &Id::new(),
            new_report("Graffiti at the station"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Unauthorized))
        ));
    }
}
