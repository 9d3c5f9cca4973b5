use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{AsRefStr, Display, EnumString};

use crate::{authority::InvalidPrimitive, id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum DiscussionPhase {
    General      = 0,
    ReportVoting = 1,
    DriveVoting  = 2,
}

impl TryFrom<i16> for DiscussionPhase {
    type Error = InvalidPrimitive;
    fn try_from(from: i16) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPrimitive(from))
    }
}

impl From<DiscussionPhase> for i16 {
    fn from(from: DiscussionPhase) -> Self {
        from.to_i16().expect("discussion phase primitive")
    }
}

/// The entity a discussion is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscussionParent {
    Report(Id),
    Drive(Id),
}

impl DiscussionParent {
    pub const fn report_id(&self) -> Option<&Id> {
        match self {
            Self::Report(id) => Some(id),
            Self::Drive(_) => None,
        }
    }

    pub const fn drive_id(&self) -> Option<&Id> {
        match self {
            Self::Drive(id) => Some(id),
            Self::Report(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discussion {
    pub id: Id,
    pub parent: DiscussionParent,
    pub author: Id,
    pub phase: DiscussionPhase,
    pub content: String,
    pub created_at: Timestamp,
}
