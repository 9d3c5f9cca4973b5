use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};
use thiserror::Error;

use crate::{id::Id, location::Location, time::Timestamp, voting::VoteTally};

pub type DriveStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum DriveStatus {
    Planned         = 0,
    Ongoing         = 1,
    VotingFinalized = 2,
    Completed       = 3,
}

impl DriveStatus {
    pub const fn default() -> Self {
        Self::Planned
    }

    pub const fn successors(self) -> &'static [Self] {
        use DriveStatus::*;
        match self {
            Planned => &[Ongoing, VotingFinalized, Completed],
            VotingFinalized => &[Ongoing, Completed],
            Ongoing => &[Completed],
            Completed => &[],
        }
    }

    pub fn can_transition_to(self, next: Self) -> bool {
        self.successors().contains(&next)
    }

    pub const fn accepts_votes(self) -> bool {
        !matches!(self, Self::Completed)
    }

    pub const fn accepts_volunteers(self) -> bool {
        !matches!(self, Self::Completed)
    }
}

#[derive(Debug, Error)]
#[error("Invalid drive status primitive: {0}")]
pub struct InvalidDriveStatusPrimitive(DriveStatusPrimitive);

impl TryFrom<DriveStatusPrimitive> for DriveStatus {
    type Error = InvalidDriveStatusPrimitive;
    fn try_from(from: DriveStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidDriveStatusPrimitive(from))
    }
}

impl From<DriveStatus> for DriveStatusPrimitive {
    fn from(from: DriveStatus) -> Self {
        from.to_i16().expect("drive status primitive")
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Drive {
    pub id                 : Id,
    pub title              : String,
    pub description        : String,
    pub status             : DriveStatus,
    pub organizer          : Id,
    pub participant_target : u32,
    pub date               : Option<Timestamp>,
    pub location           : Location,
    pub votes              : VoteTally,
    pub created_at         : Timestamp,
    pub updated_at         : Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveVote {
    pub id: Id,
    pub drive_id: Id,
    pub user_id: Id,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveVolunteer {
    pub drive_id: Id,
    pub user_id: Id,
    pub joined_at: Timestamp,
}

/// A suggestion for improving a planned drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveEnhancement {
    pub id: Id,
    pub drive_id: Id,
    pub suggested_by: Id,
    pub content: String,
    pub created_at: Timestamp,
}
