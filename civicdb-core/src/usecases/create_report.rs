use super::prelude::*;
use crate::util::validate::{AutoCorrect, Validate};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewReport {
    pub title       : String,
    pub description : String,
    pub location    : Location,
    pub media_urls  : Vec<String>,
}

pub fn create_new_report<R: ReportRepo>(
    repo: &R,
    reporter: &User,
    new_report: NewReport,
    now: Timestamp,
) -> Result<Report> {
    let NewReport {
        title,
        description,
        location,
        media_urls,
    } = new_report;
    let report = Report {
        id: Id::new(),
        title,
        description,
        status: ReportStatus::default(),
        location,
        media_urls,
        reporter: reporter.id.clone(),
        votes: VoteTally::default(),
        created_at: now,
        updated_at: now,
    }
    .auto_correct();
    report.validate()?;
    log::debug!("Creating new report {} by {}", report.id, report.reporter);
    repo.create_report(&report)?;
    Ok(report)
}

/// Replaces the editable content of an existing report.
///
/// The lifecycle fields (status, votes) are never touched here.
pub fn update_report<R: ReportRepo>(
    repo: &R,
    user: &User,
    id: &Id,
    update: NewReport,
    now: Timestamp,
) -> Result<Report> {
    let old = repo.get_report(id)?;
    super::authorize_owner_or_moderator(user, &old.reporter)?;
    let NewReport {
        title,
        description,
        location,
        media_urls,
    } = update;
    let report = Report {
        title,
        description,
        location,
        media_urls,
        updated_at: now,
        ..old
    }
    .auto_correct();
    report.validate()?;
    repo.update_report_content(&report)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn pothole() -> NewReport {
        NewReport {
            title: "Pothole".into(),
            description: "A deep pothole in front of the school".into(),
            location: Location {
                city: Some("Springfield".into()),
                ..Default::default()
            },
            media_urls: vec![],
        }
    }

    #[test]
    fn new_reports_are_pending() {
        let db = MockDb::default();
        let user = db.add_user("user@example.org", Role::User);
        let report = create_new_report(&db, &user, pothole(), Timestamp::now()).unwrap();
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.votes.vote_count, 0);
        assert!(report.votes.window.is_none());
        assert_eq!(db.reports.borrow().len(), 1);
    }

    #[test]
    fn reject_missing_title() {
        let db = MockDb::default();
        let user = db.add_user("user@example.org", Role::User);
        let mut new_report = pothole();
        new_report.title = " ".into();
        assert!(matches!(
            create_new_report(&db, &user, new_report, Timestamp::now()),
            Err(Error::Title)
        ));
        assert!(db.reports.borrow().is_empty());
    }

    #[test]
    fn only_reporter_or_moderator_may_update() {
        let db = MockDb::default();
        let reporter = db.add_user("user@example.org", Role::User);
        let other = db.add_user("other@example.org", Role::User);
        let report = create_new_report(&db, &reporter, pothole(), Timestamp::now()).unwrap();
        let mut update = pothole();
        update.title = "Huge pothole".into();
        assert!(matches!(
            update_report(&db, &other, &report.id, update.clone(), Timestamp::now()),
            Err(Error::Forbidden)
        ));
        let updated = update_report(&db, &reporter, &report.id, update, Timestamp::now()).unwrap();
        assert_eq!(updated.title, "Huge pothole");
        assert_eq!(db.reports.borrow()[0].title, "Huge pothole");
    }
}
