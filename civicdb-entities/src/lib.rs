#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # civicdb-entities
//!
//! Reusable, agnostic domain entities for civicdb.
//!
//! The entities only contain generic functionality that does not reveal
//! any application-specific business logic. Status enums know which
//! transitions are possible, but not when they are triggered.

pub mod authority;
pub mod discussion;
pub mod drive;
pub mod email;
pub mod id;
pub mod location;
pub mod monitoring;
pub mod password;
pub mod report;
pub mod task;
pub mod time;
pub mod user;
pub mod voting;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
