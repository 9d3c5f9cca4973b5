// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    query_dsl::methods::{LimitDsl, OffsetDsl},
    result::{DatabaseErrorKind, Error as DieselError},
};

use civicdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod authority;
mod discussion;
mod drive;
mod monitoring;
mod report;
mod task;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

/// Converts a persisted enum primitive.
fn load_primitive<T>(primitive: i16) -> Result<T>
where
    T: TryFrom<i16>,
    T::Error: std::error::Error + Send + Sync + 'static,
{
    T::try_from(primitive).map_err(|err| repo::Error::Other(err.into()))
}

fn load_count(count: i32) -> Result<u32> {
    u32::try_from(count).map_err(|_| anyhow!("Invalid count: {count}").into())
}

fn store_count(count: u32) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

fn load_vote_tally(
    vote_count: i32,
    final_vote_count: Option<i32>,
    voting_open_at: Option<i64>,
    voting_close_at: Option<i64>,
) -> Result<VoteTally> {
    let window = match (voting_open_at, voting_close_at) {
        (Some(open_at), Some(close_at)) => Some(VotingWindow {
            open_at: Timestamp::from_millis(open_at),
            close_at: Timestamp::from_millis(close_at),
        }),
        (None, None) => None,
        _ => {
            return Err(anyhow!("Incomplete voting window").into());
        }
    };
    Ok(VoteTally {
        vote_count: load_count(vote_count)?,
        final_vote_count: final_vote_count.map(load_count).transpose()?,
        window,
    })
}

fn apply_pagination<Q>(mut query: Q, pagination: &Pagination) -> Q
where
    Q: LimitDsl<Output = Q> + OffsetDsl<Output = Q>,
{
    let offset = pagination.offset.unwrap_or(0) as i64;
    if let Some(limit) = pagination.limit {
        query = LimitDsl::limit(query, limit as i64);
        if offset > 0 {
            query = OffsetDsl::offset(query, offset);
        }
    } else if offset > 0 {
        // SQLite requires a limit when using an offset
        query = LimitDsl::limit(query, i64::MAX);
        query = OffsetDsl::offset(query, offset);
    }
    query
}

/// Ensures that an update affected a row.
fn expect_affected(count: usize) -> Result<()> {
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
