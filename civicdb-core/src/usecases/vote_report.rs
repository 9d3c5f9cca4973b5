use super::{
    change_status::{apply_status_change, StatusChange},
    prelude::*,
};
use crate::RepoError;

#[derive(Debug, Clone)]
pub struct ReportVoteOutcome {
    pub vote: ReportVote,
    pub vote_count: u32,
    pub status: ReportStatus,
    /// Set if this vote has reached the threshold.
    pub final_vote_count: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteSummary {
    pub count: u32,
    pub has_voted: bool,
}

/// Casts a vote for a report.
///
/// The first vote opens the voting window and moves the report
/// into `ELIGIBLE_FOR_VOTE`. Reaching the configured threshold
/// moves it into `IN_PROGRESS` and freezes the final vote count.
///
/// Must be executed within a single transaction.
pub fn cast_report_vote<R>(
    repo: &R,
    rules: &LifecycleRules,
    voter: &Id,
    report_id: &Id,
    now: Timestamp,
) -> Result<ReportVoteOutcome>
where
    R: ReportRepo + ReportVoteRepo + StatusLogRepo,
{
    let report = repo.get_report(report_id)?;
    if report.votes.is_closed_at(now) || !report.status.accepts_votes() {
        log::debug!("Rejecting vote for report {report_id}: voting is closed");
        return Err(Error::VotingClosed);
    }
    let vote = ReportVote {
        id: Id::new(),
        report_id: report_id.clone(),
        user_id: voter.clone(),
        created_at: now,
    };
    repo.create_report_vote(&vote).map_err(|err| match err {
        RepoError::AlreadyExists => Error::AlreadyVoted,
        err => err.into(),
    })?;

    let mut status = report.status;
    if report.votes.window.is_none() {
        let window = VotingWindow::open(now, rules.voting_window);
        if repo.open_report_voting(report_id, &window)? {
            log::info!(
                "Opened voting for report {report_id} until {}",
                window.close_at
            );
            if status.can_transition_to(ReportStatus::EligibleForVote) {
                apply_status_change(
                    repo,
                    StatusChange {
                        report_id,
                        from: status,
                        to: ReportStatus::EligibleForVote,
                        changed_by: Some(voter),
                        reason: Some("Voting opened".into()),
                        at: now,
                    },
                )?;
                status = ReportStatus::EligibleForVote;
            }
        }
    }

    let vote_count = repo.increment_report_vote_count(report_id)?;
    let final_vote_count =
        repo.promote_report_on_vote_threshold(report_id, rules.report_vote_threshold, now)?;
    if let Some(final_count) = final_vote_count {
        log::info!("Report {report_id} reached {final_count} votes");
        // The status has already been updated by the conditional promotion
        let log = StatusLog {
            id: Id::new(),
            report_id: report_id.clone(),
            from: status,
            to: ReportStatus::InProgress,
            changed_by: Some(voter.clone()),
            reason: Some(format!("Vote threshold of {} reached", rules.report_vote_threshold)),
            created_at: now,
        };
        repo.append_status_log(&log)?;
        status = ReportStatus::InProgress;
    }
    Ok(ReportVoteOutcome {
        vote,
        vote_count,
        status,
        final_vote_count,
    })
}

pub fn report_vote_summary<R>(repo: &R, report_id: &Id, user: Option<&Id>) -> Result<VoteSummary>
where
    R: ReportRepo + ReportVoteRepo,
{
    let report = repo.get_report(report_id)?;
    let has_voted = match user {
        Some(user_id) => repo.has_voted_for_report(report_id, user_id)?,
        None => false,
    };
    Ok(VoteSummary {
        count: report.votes.vote_count,
        has_voted,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use civicdb_entities::builders::*;

    fn setup(status: ReportStatus) -> (MockDb, Id) {
        let db = MockDb::default();
        let report = Report::build().status(status).finish();
        let id = report.id.clone();
        db.reports.borrow_mut().push(report);
        (db, id)
    }

    #[test]
    fn first_vote_opens_window() {
        let (db, id) = setup(ReportStatus::Pending);
        let rules = LifecycleRules::default();
        let now = Timestamp::now();
        let outcome = cast_report_vote(&db, &rules, &Id::new(), &id, now).unwrap();
        assert_eq!(outcome.vote_count, 1);
        assert_eq!(outcome.status, ReportStatus::EligibleForVote);
        let report = db.get_report(&id).unwrap();
        let window = report.votes.window.unwrap();
        assert_eq!(window.open_at, now);
        assert_eq!(window.close_at, now + rules.voting_window);
        assert_eq!(db.status_logs.borrow().len(), 1);
    }

    #[test]
    fn vote_only_once() {
        let (db, id) = setup(ReportStatus::Pending);
        let rules = LifecycleRules::default();
        let voter = Id::new();
        cast_report_vote(&db, &rules, &voter, &id, Timestamp::now()).unwrap();
        assert!(matches!(
            cast_report_vote(&db, &rules, &voter, &id, Timestamp::now()),
            Err(Error::AlreadyVoted)
        ));
        assert_eq!(db.get_report(&id).unwrap().votes.vote_count, 1);
        assert_eq!(db.report_votes.borrow().len(), 1);
    }

    #[test]
    fn reject_votes_after_window_closed() {
        let (db, id) = setup(ReportStatus::Pending);
        let rules = LifecycleRules {
            report_vote_threshold: 100,
            ..Default::default()
        };
        let start = Timestamp::now();
        cast_report_vote(&db, &rules, &Id::new(), &id, start).unwrap();
        let later = start + rules.voting_window + Duration::seconds(1);
        assert!(matches!(
            cast_report_vote(&db, &rules, &Id::new(), &id, later),
            Err(Error::VotingClosed)
        ));
        assert_eq!(db.get_report(&id).unwrap().votes.vote_count, 1);
    }

    #[test]
    fn third_vote_promotes_to_in_progress() {
        let (db, id) = setup(ReportStatus::Pending);
        let rules = LifecycleRules::default();
        let now = Timestamp::now();
        for _ in 0..2 {
            let outcome = cast_report_vote(&db, &rules, &Id::new(), &id, now).unwrap();
            assert_eq!(outcome.status, ReportStatus::EligibleForVote);
            assert!(outcome.final_vote_count.is_none());
        }
        let outcome = cast_report_vote(&db, &rules, &Id::new(), &id, now).unwrap();
        assert_eq!(outcome.status, ReportStatus::InProgress);
        assert_eq!(outcome.final_vote_count, Some(3));

        let report = db.get_report(&id).unwrap();
        assert_eq!(report.status, ReportStatus::InProgress);
        assert_eq!(report.votes.final_vote_count, Some(3));

        // Later votes are counted but never change the status again
        let outcome = cast_report_vote(&db, &rules, &Id::new(), &id, now).unwrap();
        assert_eq!(outcome.vote_count, 4);
        assert_eq!(outcome.status, ReportStatus::InProgress);
        assert!(outcome.final_vote_count.is_none());
        let report = db.get_report(&id).unwrap();
        assert_eq!(report.votes.final_vote_count, Some(3));

        let logs = db.status_logs.borrow();
        let to: Vec<_> = logs.iter().map(|l| l.to).collect();
        assert_eq!(
            to,
            vec![ReportStatus::EligibleForVote, ReportStatus::InProgress]
        );
    }

    #[test]
    fn freeze_final_count_of_report_linked_to_drive() {
        let (db, id) = setup(ReportStatus::InProgress);
        let rules = LifecycleRules::default();
        let now = Timestamp::now();
        for _ in 0..3 {
            let outcome = cast_report_vote(&db, &rules, &Id::new(), &id, now).unwrap();
            assert_eq!(outcome.status, ReportStatus::InProgress);
        }
        cast_report_vote(&db, &rules, &Id::new(), &id, now).unwrap();
        let report = db.get_report(&id).unwrap();
        assert_eq!(report.votes.vote_count, 4);
        assert_eq!(report.votes.final_vote_count, Some(3));
        assert!(db.status_logs.borrow().is_empty());
    }

    #[test]
    fn reject_votes_for_monitored_reports() {
        let (db, id) = setup(ReportStatus::UnderMonitoring);
        assert!(matches!(
            cast_report_vote(&db, &LifecycleRules::default(), &Id::new(), &id, Timestamp::now()),
            Err(Error::VotingClosed)
        ));
    }

    #[test]
    fn vote_for_unknown_report() {
        let db = MockDb::default();
        assert!(matches!(
            cast_report_vote(&db, &LifecycleRules::default(), &Id::new(), &Id::new(), Timestamp::now()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn summary() {
        let (db, id) = setup(ReportStatus::Pending);
        let voter = Id::new();
        cast_report_vote(&db, &LifecycleRules::default(), &voter, &id, Timestamp::now()).unwrap();
        let summary = report_vote_summary(&db, &id, Some(&voter)).unwrap();
        assert_eq!(
            summary,
            VoteSummary {
                count: 1,
                has_voted: true
            }
        );
        assert!(!report_vote_summary(&db, &id, None).unwrap().has_voted);
    }
}
