use super::prelude::*;

/// Escalates all pending reports that have been waiting for
/// longer than the configured period.
///
/// The escalation is idempotent and returns the number of
/// updated reports.
pub fn escalate_stale_reports<R>(repo: &R, rules: &LifecycleRules, now: Timestamp) -> Result<usize>
where
    R: ReportRepo + StatusLogRepo,
{
    let created_before = now - rules.escalation_after;
    let ids = repo.escalate_pending_reports(created_before, now)?;
    for report_id in &ids {
        let log = StatusLog {
            id: Id::new(),
            report_id: report_id.clone(),
            from: ReportStatus::Pending,
            to: ReportStatus::EligibleForDrive,
            changed_by: None,
            reason: Some("Pending for too long".into()),
            created_at: now,
        };
        repo.append_status_log(&log)?;
    }
    if ids.is_empty() {
        log::debug!("No pending reports created before {created_before}");
    } else {
        log::info!("Escalated {} pending report(s)", ids.len());
    }
    Ok(ids.len())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use civicdb_entities::builders::*;

    #[test]
    fn escalate_only_old_pending_reports() {
        let db = MockDb::default();
        let now = Timestamp::now();
        let old = Report::build()
            .created_at(now - Duration::days(8))
            .finish();
        let young = Report::build()
            .created_at(now - Duration::days(1))
            .finish();
        let old_but_contacted = Report::build()
            .status(ReportStatus::AuthorityContacted)
            .created_at(now - Duration::days(8))
            .finish();
        db.reports
            .borrow_mut()
            .extend([old.clone(), young.clone(), old_but_contacted.clone()]);

        let rules = LifecycleRules::default();
        assert_eq!(escalate_stale_reports(&db, &rules, now).unwrap(), 1);
        assert_eq!(
            db.get_report(&old.id).unwrap().status,
            ReportStatus::EligibleForDrive
        );
        assert_eq!(db.get_report(&young.id).unwrap().status, ReportStatus::Pending);
        assert_eq!(
            db.get_report(&old_but_contacted.id).unwrap().status,
            ReportStatus::AuthorityContacted
        );
        let logs = db.status_logs.borrow();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].report_id, old.id);
        assert!(logs[0].changed_by.is_none());
    }

    #[test]
    fn escalation_is_idempotent() {
        let db = MockDb::default();
        let now = Timestamp::now();
        db.reports
            .borrow_mut()
            .push(Report::build().created_at(now - Duration::days(30)).finish());
        let rules = LifecycleRules::default();
        assert_eq!(escalate_stale_reports(&db, &rules, now).unwrap(), 1);
        assert_eq!(escalate_stale_reports(&db, &rules, now).unwrap(), 0);
        assert_eq!(db.status_logs.borrow().len(), 1);
    }
}
