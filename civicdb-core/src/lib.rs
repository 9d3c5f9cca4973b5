pub mod db;
pub mod lifecycle;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use civicdb_entities::{
        authority::*, discussion::*, drive::*, email::*, id::*, location::*, monitoring::*,
        password::*, report::*, task::*, time::*, user::*, voting::*,
    };
    pub use civicdb_entities::url::Url;
}

pub use self::repositories::Error as RepoError;
