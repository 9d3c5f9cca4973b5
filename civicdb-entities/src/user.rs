use num_derive::{FromPrimitive, ToPrimitive};

use crate::{email::EmailAddress, id::Id, password::Password, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id           : Id,
    pub email        : EmailAddress,
    pub display_name : String,
    pub password     : Password,
    pub role         : Role,
    pub created_at   : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Role {
    #[default]
    Guest     = 0,
    User      = 1,
    Moderator = 2,
    Admin     = 3,
}
