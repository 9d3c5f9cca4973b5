use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{authority::InvalidPrimitive, id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum TaskStatus {
    Open      = 0,
    Assigned  = 1,
    Completed = 2,
}

impl TryFrom<i16> for TaskStatus {
    type Error = InvalidPrimitive;
    fn try_from(from: i16) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPrimitive(from))
    }
}

impl From<TaskStatus> for i16 {
    fn from(from: TaskStatus) -> Self {
        from.to_i16().expect("task status primitive")
    }
}

/// A unit of work of a drive.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id          : Id,
    pub drive_id    : Id,
    pub report_id   : Option<Id>,
    pub title       : String,
    pub description : Option<String>,
    pub status      : TaskStatus,
    pub assignee    : Option<Id>,
    pub created_at  : Timestamp,
    pub updated_at  : Timestamp,
}
