use super::prelude::*;
use super::VoteSummary;
use crate::RepoError;

#[derive(Debug, Clone)]
pub struct DriveVoteOutcome {
    pub vote: DriveVote,
    pub vote_count: u32,
    pub status: DriveStatus,
    pub final_vote_count: Option<u32>,
}

/// Casts a vote for a drive.
///
/// Works like voting for a report: the first vote opens the window
/// and reaching the threshold turns a planned drive into an ongoing one.
pub fn cast_drive_vote<R>(
    repo: &R,
    rules: &LifecycleRules,
    voter: &Id,
    drive_id: &Id,
    now: Timestamp,
) -> Result<DriveVoteOutcome>
where
    R: DriveRepo + DriveVoteRepo,
{
    let drive = repo.get_drive(drive_id)?;
    if drive.votes.is_closed_at(now) || !drive.status.accepts_votes() {
        log::debug!("Rejecting vote for drive {drive_id}: voting is closed");
        return Err(Error::VotingClosed);
    }
    let vote = DriveVote {
        id: Id::new(),
        drive_id: drive_id.clone(),
        user_id: voter.clone(),
        created_at: now,
    };
    repo.create_drive_vote(&vote).map_err(|err| match err {
        RepoError::AlreadyExists => Error::AlreadyVoted,
        err => err.into(),
    })?;
    if drive.votes.window.is_none() {
        let window = VotingWindow::open(now, rules.voting_window);
        if repo.open_drive_voting(drive_id, &window)? {
            log::info!("Opened voting for drive {drive_id} until {}", window.close_at);
        }
    }
    let vote_count = repo.increment_drive_vote_count(drive_id)?;
    let final_vote_count =
        repo.promote_drive_on_vote_threshold(drive_id, rules.drive_vote_threshold, now)?;
    let status = if let Some(final_count) = final_vote_count {
        log::info!("Drive {drive_id} reached {final_count} votes and is now ongoing");
        DriveStatus::Ongoing
    } else {
        drive.status
    };
    Ok(DriveVoteOutcome {
        vote,
        vote_count,
        status,
        final_vote_count,
    })
}

pub fn drive_vote_summary<R>(repo: &R, drive_id: &Id, user: Option<&Id>) -> Result<VoteSummary>
where
    R: DriveRepo + DriveVoteRepo,
{
    let drive = repo.get_drive(drive_id)?;
    let has_voted = match user {
        Some(user_id) => repo.has_voted_for_drive(drive_id, user_id)?,
        None => false,
    };
    Ok(VoteSummary {
        count: drive.votes.vote_count,
        has_voted,
    })
}
