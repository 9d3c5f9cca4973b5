use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{AsRefStr, Display, EnumString};

use crate::{authority::InvalidPrimitive, id::Id, time::Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum MonitoringStatus {
    Active = 0,
    Completed = 1,
}

impl TryFrom<i16> for MonitoringStatus {
    type Error = InvalidPrimitive;
    fn try_from(from: i16) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPrimitive(from))
    }
}

impl From<MonitoringStatus> for i16 {
    fn from(from: MonitoringStatus) -> Self {
        from.to_i16().expect("monitoring status primitive")
    }
}

/// Follow-up observation of a report after work has been done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitoring {
    pub id: Id,
    pub report_id: Id,
    pub drive_id: Option<Id>,
    pub monitor: Id,
    pub status: MonitoringStatus,
    pub notes: Option<String>,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}
