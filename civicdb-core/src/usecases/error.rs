use crate::{
    repositories,
    util::validate::{ContactInvalidation, DriveInvalidation, LocationInvalidation, ReportInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The description is invalid")]
    Description,
    #[error("Invalid location")]
    Location,
    #[error("Invalid URL")]
    Url,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
    #[error("Invalid display name")]
    DisplayName,
    #[error("The participant target must be positive")]
    ParticipantTarget,
    #[error("The content must not be empty")]
    EmptyContent,
    #[error("New authority requires category, role, and city")]
    NewAuthorityIncomplete,
    #[error("Invalid contact mode")]
    ContactMode,
    #[error("The contact matching the contact mode is missing")]
    MissingContact,
    #[error("A discussion requires either a report or a drive")]
    DiscussionParent,
    #[error("Invalid status")]
    Status,

    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,

    #[error("Voting is closed")]
    VotingClosed,
    #[error("You have already voted")]
    AlreadyVoted,
    #[error("The authority has already been contacted for this report")]
    AlreadyContacted,
    #[error("You have already joined this drive")]
    AlreadyVolunteered,
    #[error("The report is already linked to this drive")]
    AlreadyLinked,
    #[error("The authority already exists")]
    AuthorityExists,
    #[error("The user already exists")]
    UserExists,
    #[error("The report has already been resolved")]
    AlreadyResolved,
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },
    #[error("Discussions of this phase are closed")]
    PhaseClosed,
    #[error("Monitoring requires a report in progress")]
    MonitoringNotAllowed,
    #[error("The drive is completed")]
    DriveClosed,
    #[error("The task cannot be changed in its current state")]
    TaskState,
    #[error("The monitoring has already been completed")]
    MonitoringCompleted,

    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    pub fn invalid_transition(from: impl ToString, to: impl ToString) -> Self {
        Self::InvalidStatusTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

impl From<civicdb_entities::password::ParseError> for Error {
    fn from(_: civicdb_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<civicdb_entities::email::EmailAddressParseError> for Error {
    fn from(_: civicdb_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}

impl From<civicdb_entities::url::ParseError> for Error {
    fn from(_: civicdb_entities::url::ParseError) -> Self {
        Self::Url
    }
}

impl From<ReportInvalidation> for Error {
    fn from(err: ReportInvalidation) -> Self {
        match err {
            ReportInvalidation::Title => Self::Title,
            ReportInvalidation::Description => Self::Description,
            ReportInvalidation::Location(err) => err.into(),
            ReportInvalidation::MediaUrl => Self::Url,
        }
    }
}

impl From<DriveInvalidation> for Error {
    fn from(err: DriveInvalidation) -> Self {
        match err {
            DriveInvalidation::Title => Self::Title,
            DriveInvalidation::ParticipantTarget => Self::ParticipantTarget,
            DriveInvalidation::Location(err) => err.into(),
        }
    }
}

impl From<LocationInvalidation> for Error {
    fn from(err: LocationInvalidation) -> Self {
        match err {
            LocationInvalidation::Coordinates => Self::Location,
        }
    }
}

impl From<ContactInvalidation> for Error {
    fn from(err: ContactInvalidation) -> Self {
        match err {
            ContactInvalidation::Email => Self::Email,
            ContactInvalidation::Empty => Self::MissingContact,
        }
    }
}
