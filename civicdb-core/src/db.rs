use crate::repositories::*;

/// The complete set of repositories.
///
/// Use cases that touch several entities (cascading deletes,
/// lifecycle transitions with audit logs) are generic over this
/// trait instead of listing every single repository.
pub trait Db:
    UserRepo
    + ReportRepo
    + ReportVoteRepo
    + StatusLogRepo
    + ResolutionRepo
    + AuthorityRepo
    + ReportAuthorityRepo
    + DriveRepo
    + DriveVoteRepo
    + VolunteerRepo
    + EnhancementRepo
    + TaskRepo
    + MonitoringRepo
    + DiscussionRepo
{
}

impl<T> Db for T where
    T: UserRepo
        + ReportRepo
        + ReportVoteRepo
        + StatusLogRepo
        + ResolutionRepo
        + AuthorityRepo
        + ReportAuthorityRepo
        + DriveRepo
        + DriveVoteRepo
        + VolunteerRepo
        + EnhancementRepo
        + TaskRepo
        + MonitoringRepo
        + DiscussionRepo
{
}
