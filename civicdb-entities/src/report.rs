use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};
use thiserror::Error;

use crate::{id::Id, location::Location, time::Timestamp, voting::VoteTally};

pub type ReportStatusPrimitive = i16;

/// Lifecycle of a report.
///
/// The primitive values are ordered along the lifecycle and are persisted,
/// i.e. they must never change.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ReportStatus {
    Pending            = 0,
    AuthorityContacted = 1,
    EligibleForDrive   = 2,
    EligibleForVote    = 3,
    InProgress         = 4,
    UnderMonitoring    = 5,
    Resolved           = 6,
}

impl ReportStatus {
    pub const fn default() -> Self {
        Self::Pending
    }

    /// All statuses that may directly follow `self`.
    pub const fn successors(self) -> &'static [Self] {
        use ReportStatus::*;
        match self {
            Pending => &[
                AuthorityContacted,
                EligibleForDrive,
                EligibleForVote,
                InProgress,
                Resolved,
            ],
            AuthorityContacted => &[EligibleForDrive, EligibleForVote, InProgress, Resolved],
            EligibleForDrive => &[EligibleForVote, InProgress, Resolved],
            EligibleForVote => &[InProgress, Resolved],
            InProgress => &[UnderMonitoring, Resolved],
            UnderMonitoring => &[Resolved],
            Resolved => &[],
        }
    }

    pub fn can_transition_to(self, next: Self) -> bool {
        self.successors().contains(&next)
    }

    /// Votes are accepted until the report is being monitored.
    pub const fn accepts_votes(self) -> bool {
        !matches!(self, Self::UnderMonitoring | Self::Resolved)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

#[derive(Debug, Error)]
#[error("Invalid report status primitive: {0}")]
pub struct InvalidReportStatusPrimitive(ReportStatusPrimitive);

impl TryFrom<ReportStatusPrimitive> for ReportStatus {
    type Error = InvalidReportStatusPrimitive;
    fn try_from(from: ReportStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidReportStatusPrimitive(from))
    }
}

impl From<ReportStatus> for ReportStatusPrimitive {
    fn from(from: ReportStatus) -> Self {
        from.to_i16().expect("report status primitive")
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id          : Id,
    pub title       : String,
    pub description : String,
    pub status      : ReportStatus,
    pub location    : Location,
    pub media_urls  : Vec<String>,
    pub reporter    : Id,
    pub votes       : VoteTally,
    pub created_at  : Timestamp,
    pub updated_at  : Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportVote {
    pub id: Id,
    pub report_id: Id,
    pub user_id: Id,
    pub created_at: Timestamp,
}

/// Audit record of a single status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLog {
    pub id: Id,
    pub report_id: Id,
    pub from: ReportStatus,
    pub to: ReportStatus,
    /// `None` for automatic transitions
    pub changed_by: Option<Id>,
    pub reason: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportResolution {
    pub id: Id,
    pub report_id: Id,
    pub resolved_by: Id,
    pub description: String,
    pub evidence_urls: Vec<String>,
    pub created_at: Timestamp,
}
