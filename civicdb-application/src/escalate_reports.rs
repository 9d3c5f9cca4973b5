use super::*;

/// Escalates all pending reports that have been waiting too long.
///
/// Returns the number of escalated reports.
pub fn escalate_reports(connections: &sqlite::Connections, rules: &LifecycleRules) -> Result<usize> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::escalate_stale_reports(conn, rules, now).map_err(|err| {
            warn!("Failed to escalate stale reports: {}", err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn escalate_old_pending_reports_only() {
        let fixture = BackendFixture::new();
        let reporter = fixture.register("reporter@example.com");
        let now = Timestamp::now();
        let insert = |created_at: Timestamp| {
            let report = Report::build()
                .reporter(reporter.id.as_str())
                .created_at(created_at)
                .finish();
            fixture
                .db_connections
                .exclusive()
                .unwrap()
                .create_report(&report)
                .unwrap();
            report.id
        };
        let old = insert(now - Duration::days(8));
        let young = insert(now - Duration::days(1));

        let count = flows::escalate_reports(&fixture.db_connections, &fixture.rules).unwrap();
        assert_eq!(count, 1);
        assert_eq!(fixture.get_report(&old).status, ReportStatus::EligibleForDrive);
        assert_eq!(fixture.get_report(&young).status, ReportStatus::Pending);

        let logs = fixture
            .db_connections
            .shared()
            .unwrap()
            .list_status_logs(&old)
            .unwrap();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].changed_by.is_none());

        // Nothing left to do
        assert_eq!(
            flows::escalate_reports(&fixture.db_connections, &fixture.rules).unwrap(),
            0
        );
    }
}
