// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.
//
// Cascading deletes are not performed by the repositories.
// The use cases remove dependent rows explicitly.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user_role(&self, id: &Id, role: Role) -> Result<()>;

    fn get_user_by_id(&self, id: &Id) -> Result<User>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn count_users(&self) -> Result<usize>;
}

#[derive(Clone, Debug, Default)]
pub struct ReportQuery {
    pub status: Option<ReportStatus>,
    pub reporter: Option<Id>,
}

pub trait ReportRepo {
    fn create_report(&self, report: &Report) -> Result<()>;
    fn get_report(&self, id: &Id) -> Result<Report>;
    fn list_reports(&self, query: &ReportQuery, pagination: &Pagination) -> Result<Vec<Report>>;

    /// Replaces the content fields (title, description, location, media).
    fn update_report_content(&self, report: &Report) -> Result<()>;
    fn set_report_status(&self, id: &Id, status: ReportStatus, at: Timestamp) -> Result<()>;

    /// Opens the voting window unless it has already been opened.
    ///
    /// Returns `true` if this call has opened the window.
    fn open_report_voting(&self, id: &Id, window: &VotingWindow) -> Result<bool>;

    /// Increments the vote counter in place and returns the new count.
    fn increment_report_vote_count(&self, id: &Id) -> Result<u32>;

    /// Conditionally promotes the report to `IN_PROGRESS` in a single
    /// statement if the vote count has reached the threshold, the final
    /// count has not been frozen yet and the report has not reached
    /// this stage.
    ///
    /// The final count of a report that is already past `IN_PROGRESS`
    /// gets frozen as well when the threshold is reached, but its
    /// status is kept.
    ///
    /// Returns the frozen final vote count if the promotion happened.
    fn promote_report_on_vote_threshold(
        &self,
        id: &Id,
        threshold: u32,
        at: Timestamp,
    ) -> Result<Option<u32>>;

    /// Moves all `PENDING` reports created before the given time
    /// to `ELIGIBLE_FOR_DRIVE` and returns their ids.
    fn escalate_pending_reports(&self, created_before: Timestamp, at: Timestamp)
        -> Result<Vec<Id>>;

    fn delete_report(&self, id: &Id) -> Result<()>;
}

pub trait ReportVoteRepo {
    fn create_report_vote(&self, vote: &ReportVote) -> Result<()>;
    fn has_voted_for_report(&self, report_id: &Id, user_id: &Id) -> Result<bool>;
    fn delete_report_votes_of_report(&self, report_id: &Id) -> Result<usize>;
}

pub trait StatusLogRepo {
    fn append_status_log(&self, log: &StatusLog) -> Result<()>;
    fn list_status_logs(&self, report_id: &Id) -> Result<Vec<StatusLog>>;
    fn delete_status_logs_of_report(&self, report_id: &Id) -> Result<usize>;
}

pub trait ResolutionRepo {
    fn create_report_resolution(&self, resolution: &ReportResolution) -> Result<()>;
    fn try_get_report_resolution(&self, report_id: &Id) -> Result<Option<ReportResolution>>;
    fn delete_report_resolution_of_report(&self, report_id: &Id) -> Result<usize>;
}

#[derive(Clone, Debug, Default)]
pub struct AuthorityQuery {
    pub city: Option<String>,
    pub category: Option<String>,
}

pub trait AuthorityRepo {
    fn create_authority(&self, authority: &Authority) -> Result<()>;
    fn get_authority(&self, id: &Id) -> Result<Authority>;
    fn list_authorities(
        &self,
        query: &AuthorityQuery,
        pagination: &Pagination,
    ) -> Result<Vec<Authority>>;

    /// Finds an existing authority that describes the same office.
    fn find_same_authority(&self, authority: &Authority) -> Result<Option<Authority>>;
}

pub trait ReportAuthorityRepo {
    fn create_report_authority(&self, contact: &ReportAuthority) -> Result<()>;
    fn try_get_report_authority(
        &self,
        report_id: &Id,
        authority_id: &Id,
    ) -> Result<Option<ReportAuthority>>;
    fn update_report_authority_status(
        &self,
        id: &Id,
        status: ContactStatus,
        at: Timestamp,
    ) -> Result<()>;
    fn list_report_authorities(&self, report_id: &Id) -> Result<Vec<ReportAuthority>>;
    fn delete_report_authorities_of_report(&self, report_id: &Id) -> Result<usize>;
}

#[derive(Clone, Debug, Default)]
pub struct DriveQuery {
    pub status: Option<DriveStatus>,
    pub organizer: Option<Id>,
}

pub trait DriveRepo {
    fn create_drive(&self, drive: &Drive) -> Result<()>;
    fn get_drive(&self, id: &Id) -> Result<Drive>;
    fn list_drives(&self, query: &DriveQuery, pagination: &Pagination) -> Result<Vec<Drive>>;
    fn set_drive_status(&self, id: &Id, status: DriveStatus, at: Timestamp) -> Result<()>;

    fn open_drive_voting(&self, id: &Id, window: &VotingWindow) -> Result<bool>;
    fn increment_drive_vote_count(&self, id: &Id) -> Result<u32>;

    /// Conditionally promotes a `PLANNED` drive to `ONGOING`.
    /// See [`ReportRepo::promote_report_on_vote_threshold`].
    fn promote_drive_on_vote_threshold(
        &self,
        id: &Id,
        threshold: u32,
        at: Timestamp,
    ) -> Result<Option<u32>>;

    fn delete_drive(&self, id: &Id) -> Result<()>;

    fn link_report_to_drive(&self, drive_id: &Id, report_id: &Id) -> Result<()>;
    fn report_ids_of_drive(&self, drive_id: &Id) -> Result<Vec<Id>>;
    fn drive_ids_of_report(&self, report_id: &Id) -> Result<Vec<Id>>;
    fn delete_drive_reports_of_drive(&self, drive_id: &Id) -> Result<usize>;
    fn delete_drive_reports_of_report(&self, report_id: &Id) -> Result<usize>;
}

pub trait DriveVoteRepo {
    fn create_drive_vote(&self, vote: &DriveVote) -> Result<()>;
    fn has_voted_for_drive(&self, drive_id: &Id, user_id: &Id) -> Result<bool>;
    fn delete_drive_votes_of_drive(&self, drive_id: &Id) -> Result<usize>;
}

pub trait VolunteerRepo {
    fn add_drive_volunteer(&self, volunteer: &DriveVolunteer) -> Result<()>;
    /// Fails with [`Error::NotFound`] if the user has not joined the drive.
    fn remove_drive_volunteer(&self, drive_id: &Id, user_id: &Id) -> Result<()>;
    fn list_drive_volunteers(&self, drive_id: &Id) -> Result<Vec<DriveVolunteer>>;
    fn delete_drive_volunteers_of_drive(&self, drive_id: &Id) -> Result<usize>;
}

pub trait EnhancementRepo {
    fn create_drive_enhancement(&self, enhancement: &DriveEnhancement) -> Result<()>;
    fn list_drive_enhancements(&self, drive_id: &Id) -> Result<Vec<DriveEnhancement>>;
    fn delete_drive_enhancements_of_drive(&self, drive_id: &Id) -> Result<usize>;
}

pub trait TaskRepo {
    fn create_task(&self, task: &Task) -> Result<()>;
    fn get_task(&self, id: &Id) -> Result<Task>;
    /// Updates status and assignee.
    fn update_task(&self, task: &Task) -> Result<()>;
    fn list_tasks_of_drive(&self, drive_id: &Id) -> Result<Vec<Task>>;
    fn delete_task(&self, id: &Id) -> Result<()>;
    fn delete_tasks_of_drive(&self, drive_id: &Id) -> Result<usize>;
    /// Keeps the tasks but removes their reference to the report.
    fn detach_tasks_from_report(&self, report_id: &Id) -> Result<usize>;
}

pub trait MonitoringRepo {
    fn create_monitoring(&self, monitoring: &Monitoring) -> Result<()>;
    fn get_monitoring(&self, id: &Id) -> Result<Monitoring>;
    fn complete_monitoring(&self, id: &Id, at: Timestamp) -> Result<()>;
    /// Completes all `ACTIVE` monitorings and returns how many were affected.
    fn complete_active_monitorings_of_report(&self, report_id: &Id, at: Timestamp)
        -> Result<usize>;
    fn list_monitorings_of_report(&self, report_id: &Id) -> Result<Vec<Monitoring>>;
    fn delete_monitorings_of_report(&self, report_id: &Id) -> Result<usize>;
    fn delete_monitorings_of_drive(&self, drive_id: &Id) -> Result<usize>;
}

pub trait DiscussionRepo {
    fn create_discussion(&self, discussion: &Discussion) -> Result<()>;
    fn list_discussions(
        &self,
        parent: &DiscussionParent,
        phase: Option<DiscussionPhase>,
    ) -> Result<Vec<Discussion>>;
    fn delete_discussions_of_parent(&self, parent: &DiscussionParent) -> Result<usize>;
}
