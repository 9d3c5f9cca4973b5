use super::prelude::*;

pub const MAX_DISCUSSION_LEN: usize = 5_000;

#[derive(Debug, Clone)]
pub struct NewDiscussion {
    pub report_id: Option<Id>,
    pub drive_id: Option<Id>,
    pub phase: DiscussionPhase,
    pub content: String,
}

pub fn discussion_parent(report_id: Option<Id>, drive_id: Option<Id>) -> Result<DiscussionParent> {
    match (report_id, drive_id) {
        (Some(id), None) => Ok(DiscussionParent::Report(id)),
        (None, Some(id)) => Ok(DiscussionParent::Drive(id)),
        _ => Err(Error::DiscussionParent),
    }
}

/// Checks if the parent accepts discussions of the given phase.
fn is_phase_open<R>(
    repo: &R,
    parent: &DiscussionParent,
    phase: DiscussionPhase,
    now: Timestamp,
) -> Result<bool>
where
    R: ReportRepo + DriveRepo,
{
    let open = match (phase, parent) {
        (DiscussionPhase::General, DiscussionParent::Report(id)) => {
            repo.get_report(id)?;
            true
        }
        (DiscussionPhase::General, DiscussionParent::Drive(id)) => {
            repo.get_drive(id)?;
            true
        }
        (DiscussionPhase::ReportVoting, DiscussionParent::Report(id)) => {
            let report = repo.get_report(id)?;
            report.status == ReportStatus::EligibleForVote
                && report.votes.window.is_some()
                && !report.votes.is_closed_at(now)
        }
        (DiscussionPhase::DriveVoting, DiscussionParent::Drive(id)) => {
            let drive = repo.get_drive(id)?;
            drive.status == DriveStatus::Planned && !drive.votes.is_closed_at(now)
        }
        (DiscussionPhase::ReportVoting, DiscussionParent::Drive(_))
        | (DiscussionPhase::DriveVoting, DiscussionParent::Report(_)) => false,
    };
    Ok(open)
}

pub fn create_discussion<R>(
    repo: &R,
    user: &User,
    new: NewDiscussion,
    now: Timestamp,
) -> Result<Discussion>
where
    R: ReportRepo + DriveRepo + DiscussionRepo,
{
    let NewDiscussion {
        report_id,
        drive_id,
        phase,
        content,
    } = new;
    let parent = discussion_parent(report_id, drive_id)?;
    let content = content.trim().to_string();
    if content.is_empty() || content.len() > MAX_DISCUSSION_LEN {
        return Err(Error::EmptyContent);
    }
    if !is_phase_open(repo, &parent, phase, now)? {
        log::debug!("Rejecting discussion: phase {phase} is closed for {parent:?}");
        return Err(Error::PhaseClosed);
    }
    let discussion = Discussion {
        id: Id::new(),
        parent,
        author: user.id.clone(),
        phase,
        content,
        created_at: now,
    };
    repo.create_discussion(&discussion)?;
    Ok(discussion)
}

pub fn list_discussions<R: DiscussionRepo>(
    repo: &R,
    parent: &DiscussionParent,
    phase: Option<DiscussionPhase>,
) -> Result<Vec<Discussion>> {
    Ok(repo.list_discussions(parent, phase)?)
}
