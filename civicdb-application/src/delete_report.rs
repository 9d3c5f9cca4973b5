use super::*;

pub fn delete_report(
    connections: &sqlite::Connections,
    account_id: &Id,
    report_id: &Id,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::delete_report(conn, &user, report_id).map_err(|err| {
            warn!("Failed to delete report {}: {}", report_id, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn delete_report_with_votes_and_links() {
        let fixture = BackendFixture::new();
        let reporter = fixture.register("reporter@example.com");
        let voter = fixture.register("voter@example.com");
        let report = fixture.create_report(&reporter, "Illegal dumping");
        flows::cast_report_vote(&fixture.db_connections, &fixture.rules, &voter.id, &report.id)
            .unwrap();
        let drive = flows::create_drive(
            &fixture.db_connections,
            &reporter.id,
            usecases::NewDrive {
                report_id: Some(report.id.clone()),
                tasks: vec![usecases::NewTask {
                    title: "Bring gloves".into(),
                    report_id: Some(report.id.clone()),
                    ..Default::default()
                }],
                ..new_drive("Cleanup")
            },
        )
        .unwrap();

        let err = flows::delete_report(&fixture.db_connections, &voter.id, &report.id).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Forbidden))
        ));

        flows::delete_report(&fixture.db_connections, &reporter.id, &report.id).unwrap();

        let db = fixture.db_connections.shared().unwrap();
        assert!(matches!(db.get_report(&report.id), Err(RepoError::NotFound)));
        assert!(db.report_ids_of_drive(&drive.drive.id).unwrap().is_empty());
        // Tasks of the drive survive without the report
        let tasks = db.list_tasks_of_drive(&drive.drive.id).unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].report_id.is_none());
    }
}
