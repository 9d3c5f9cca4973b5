use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

use crate::{email::EmailAddress, id::Id, time::Timestamp, url::Url};

/// How an authority wants to be contacted.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ContactMode {
    Email       = 0,
    Phone       = 1,
    Website     = 2,
    SocialMedia = 3,
    InPerson    = 4,
    Other       = 5,
}

/// The single contact channel of an authority.
///
/// Exactly one channel exists per authority and it always
/// agrees with the contact mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactChannel {
    Email(EmailAddress),
    Phone(String),
    Website(Url),
    /// Social media, in person or any other channel
    Other { mode: ContactMode, contact: String },
}

impl ContactChannel {
    pub const fn mode(&self) -> ContactMode {
        match self {
            Self::Email(_) => ContactMode::Email,
            Self::Phone(_) => ContactMode::Phone,
            Self::Website(_) => ContactMode::Website,
            Self::Other { mode, .. } => *mode,
        }
    }

    pub const fn email(&self) -> Option<&EmailAddress> {
        match self {
            Self::Email(email) => Some(email),
            _ => None,
        }
    }

    pub fn phone(&self) -> Option<&str> {
        match self {
            Self::Phone(phone) => Some(phone),
            _ => None,
        }
    }

    pub const fn website(&self) -> Option<&Url> {
        match self {
            Self::Website(url) => Some(url),
            _ => None,
        }
    }

    pub fn other_contact(&self) -> Option<&str> {
        match self {
            Self::Other { contact, .. } => Some(contact),
            _ => None,
        }
    }

    /// The populated contact field as plain text.
    pub fn value(&self) -> &str {
        match self {
            Self::Email(email) => email.as_str(),
            Self::Phone(phone) => phone,
            Self::Website(url) => url.as_str(),
            Self::Other { contact, .. } => contact,
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority {
    pub id           : Id,
    pub name         : Option<String>,
    pub category     : String,
    pub role         : String,
    pub city         : String,
    pub contact      : ContactChannel,
    pub submitted_by : Id,
    pub created_at   : Timestamp,
}

impl Authority {
    /// Two authorities describe the same office if they only differ
    /// in their identity and bookkeeping fields.
    pub fn is_same_office(&self, other: &Self) -> bool {
        self.category.eq_ignore_ascii_case(&other.category)
            && self.role.eq_ignore_ascii_case(&other.role)
            && self.city.eq_ignore_ascii_case(&other.city)
            && self.contact == other.contact
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ContactStatus {
    Contacted  = 0,
    Responded  = 1,
    NoResponse = 2,
}

/// One contact attempt between a report and an authority.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportAuthority {
    pub id           : Id,
    pub report_id    : Id,
    pub authority_id : Id,
    pub status       : ContactStatus,
    pub contacted_by : Id,
    pub message      : Option<String>,
    pub contacted_at : Timestamp,
    pub updated_at   : Timestamp,
}

#[derive(Debug, Error)]
#[error("Invalid enum primitive: {0}")]
pub struct InvalidPrimitive(pub i16);

impl TryFrom<i16> for ContactMode {
    type Error = InvalidPrimitive;
    fn try_from(from: i16) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPrimitive(from))
    }
}

impl From<ContactMode> for i16 {
    fn from(from: ContactMode) -> Self {
        from.to_i16().expect("contact mode primitive")
    }
}

impl TryFrom<i16> for ContactStatus {
    type Error = InvalidPrimitive;
    fn try_from(from: i16) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPrimitive(from))
    }
}

impl From<ContactStatus> for i16 {
    fn from(from: ContactStatus) -> Self {
        from.to_i16().expect("contact status primitive")
    }
}
