use super::{
    change_status::{apply_status_change, StatusChange},
    prelude::*,
};
use crate::{util::validate, RepoError};

#[derive(Debug, Clone, Default)]
pub struct NewResolution {
    pub description: String,
    pub evidence_urls: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ResolveOutcome {
    pub resolution: ReportResolution,
    pub completed_monitorings: usize,
}

fn may_resolve<R: DriveRepo>(repo: &R, user: &User, report: &Report) -> Result<bool> {
    if user.id == report.reporter || super::is_moderator(user) {
        return Ok(true);
    }
    for drive_id in repo.drive_ids_of_report(&report.id)? {
        if repo.get_drive(&drive_id)?.organizer == user.id {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Resolves a report.
///
/// Creates the resolution, marks the report as resolved and
/// completes all active monitorings of the report.
///
/// Must be executed within a single transaction.
pub fn resolve_report<R>(
    repo: &R,
    user: &User,
    report_id: &Id,
    resolution: NewResolution,
    now: Timestamp,
) -> Result<ResolveOutcome>
where
    R: ReportRepo + StatusLogRepo + ResolutionRepo + MonitoringRepo + DriveRepo,
{
    let NewResolution {
        description,
        evidence_urls,
    } = resolution;
    let description = description.trim().to_string();
    if description.is_empty() {
        return Err(Error::Description);
    }
    let evidence_urls: Vec<_> = evidence_urls
        .into_iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect();
    if !evidence_urls.iter().all(|u| validate::is_valid_url(u)) {
        return Err(Error::Url);
    }
    let report = repo.get_report(report_id)?;
    if !may_resolve(repo, user, &report)? {
        return Err(Error::Forbidden);
    }
    if report.status.is_terminal() || repo.try_get_report_resolution(report_id)?.is_some() {
        return Err(Error::AlreadyResolved);
    }
    let resolution = ReportResolution {
        id: Id::new(),
        report_id: report_id.clone(),
        resolved_by: user.id.clone(),
        description,
        evidence_urls,
        created_at: now,
    };
    repo.create_report_resolution(&resolution)
        .map_err(|err| match err {
            RepoError::AlreadyExists => Error::AlreadyResolved,
            err => err.into(),
        })?;
    apply_status_change(
        repo,
        StatusChange {
            report_id,
            from: report.status,
            to: ReportStatus::Resolved,
            changed_by: Some(&user.id),
            reason: Some("Resolved".into()),
            at: now,
        },
    )?;
    let completed_monitorings = repo.complete_active_monitorings_of_report(report_id, now)?;
    if completed_monitorings > 0 {
        log::info!("Completed {completed_monitorings} monitoring(s) of resolved report {report_id}");
    }
    Ok(ResolveOutcome {
        resolution,
        completed_monitorings,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use civicdb_entities::builders::*;

    fn resolution() -> NewResolution {
        NewResolution {
            description: "Filled the pothole".into(),
            evidence_urls: vec!["https://img.example.org/after.jpg".into()],
        }
    }

    #[test]
    fn resolve_and_complete_monitorings() {
        let db = MockDb::default();
        let reporter = db.add_user("user@example.org", Role::User);
        let report = Report::build()
            .reporter(reporter.id.as_str())
            .status(ReportStatus::UnderMonitoring)
            .finish();
        let id = report.id.clone();
        db.reports.borrow_mut().push(report);
        for status in [MonitoringStatus::Active, MonitoringStatus::Completed] {
            db.monitorings.borrow_mut().push(Monitoring {
                id: Id::new(),
                report_id: id.clone(),
                drive_id: None,
                monitor: reporter.id.clone(),
                status,
                notes: None,
                started_at: Timestamp::now(),
                completed_at: None,
            });
        }
        let outcome = resolve_report(&db, &reporter, &id, resolution(), Timestamp::now()).unwrap();
        assert_eq!(outcome.completed_monitorings, 1);
        assert_eq!(db.reports.borrow()[0].status, ReportStatus::Resolved);
        assert!(db
            .monitorings
            .borrow()
            .iter()
            .all(|m| m.status == MonitoringStatus::Completed));
        assert_eq!(db.status_logs.borrow().len(), 1);
    }

    #[test]
    fn resolve_only_once() {
        let db = MockDb::default();
        let moderator = db.add_user("mod@example.org", Role::Moderator);
        let report = Report::build().status(ReportStatus::InProgress).finish();
        let id = report.id.clone();
        db.reports.borrow_mut().push(report);
        resolve_report(&db, &moderator, &id, resolution(), Timestamp::now()).unwrap();
        assert!(matches!(
            resolve_report(&db, &moderator, &id, resolution(), Timestamp::now()),
            Err(Error::AlreadyResolved)
        ));
        assert_eq!(db.resolutions.borrow().len(), 1);
    }

    #[test]
    fn organizer_of_linked_drive_may_resolve() {
        let db = MockDb::default();
        let organizer = db.add_user("org@example.org", Role::User);
        let stranger = db.add_user("other@example.org", Role::User);
        let report = Report::build().status(ReportStatus::InProgress).finish();
        let drive = Drive::build().organizer(organizer.id.as_str()).finish();
        db.link_report_to_drive(&drive.id, &report.id).unwrap();
        let id = report.id.clone();
        db.reports.borrow_mut().push(report);
        db.drives.borrow_mut().push(drive);
        assert!(matches!(
            resolve_report(&db, &stranger, &id, resolution(), Timestamp::now()),
            Err(Error::Forbidden)
        ));
        assert!(resolve_report(&db, &organizer, &id, resolution(), Timestamp::now()).is_ok());
    }

    #[test]
    fn require_description() {
        let db = MockDb::default();
        let moderator = db.add_user("mod@example.org", Role::Moderator);
        let report = Report::build().finish();
        let id = report.id.clone();
        db.reports.borrow_mut().push(report);
        let mut res = resolution();
        res.description = " ".into();
        assert!(matches!(
            resolve_report(&db, &moderator, &id, res, Timestamp::now()),
            Err(Error::Description)
        ));
    }
}
