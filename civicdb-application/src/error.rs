use civicdb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

pub use civicdb_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ParameterError> for BError {
    fn from(err: ParameterError) -> Self {
        // Repository errors are reported the same way,
        // no matter which layer detected them.
        match err {
            ParameterError::Repo(err) => Self::Repo(err),
            err => Self::Parameter(err),
        }
    }
}

impl From<civicdb_entities::password::ParseError> for AppError {
    fn from(_: civicdb_entities::password::ParseError) -> Self {
        BError::Parameter(ParameterError::Password).into()
    }
}

impl From<civicdb_entities::email::EmailAddressParseError> for AppError {
    fn from(_: civicdb_entities::email::EmailAddressParseError) -> Self {
        BError::Parameter(ParameterError::Email).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_repository_errors() {
        let err = AppError::from(ParameterError::Repo(RepoError::NotFound));
        assert!(matches!(
            err,
            AppError::Business(BError::Repo(RepoError::NotFound))
        ));
        let err = AppError::from(ParameterError::AlreadyVoted);
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(ParameterError::AlreadyVoted))
        ));
    }
}
