use super::json_error_response;
use anyhow::anyhow;
use civicdb_application::error::{AppError, BError};
pub use civicdb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

/// Returned for every failure that must not leak details.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
            JsonError::Parse(_str, err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
        }
    }
}

fn repo_error_status(err: &RepoError) -> Option<Status> {
    match err {
        RepoError::NotFound => Some(Status::NotFound),
        RepoError::AlreadyExists => Some(Status::Conflict),
        RepoError::Other(_) => None,
    }
}

fn parameter_error_status(err: &ParameterError) -> Option<Status> {
    use ParameterError as E;
    let status = match err {
        E::Credentials | E::Unauthorized => Status::Unauthorized,
        E::Forbidden
        | E::VotingClosed
        | E::PhaseClosed
        | E::MonitoringNotAllowed
        | E::DriveClosed => Status::Forbidden,
        E::AlreadyVoted
        | E::AlreadyContacted
        | E::AlreadyVolunteered
        | E::AlreadyLinked
        | E::AuthorityExists
        | E::UserExists
        | E::AlreadyResolved
        | E::InvalidStatusTransition { .. }
        | E::TaskState
        | E::MonitoringCompleted => Status::Conflict,
        E::Repo(err) => return repo_error_status(err),
        _ => Status::BadRequest,
    };
    Some(status)
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    let status = match err {
                        BError::Parameter(err) => parameter_error_status(err),
                        BError::Repo(err) => repo_error_status(err),
                    };
                    if let Some(status) = status {
                        return json_error_response(req, err, status);
                    }
                }
                error!("Error: {err}");
                json_error_response(req, &INTERNAL_ERROR_MESSAGE, Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &INTERNAL_ERROR_MESSAGE, Status::InternalServerError)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

impl From<civicdb_entities::email::EmailAddressParseError> for Error {
    fn from(err: civicdb_entities::email::EmailAddressParseError) -> Self {
        AppError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_lifecycle_errors_to_status_codes() {
        let status = |err| parameter_error_status(&err);
        assert_eq!(status(ParameterError::VotingClosed), Some(Status::Forbidden));
        assert_eq!(status(ParameterError::AlreadyVoted), Some(Status::Conflict));
        assert_eq!(
            status(ParameterError::invalid_transition("PENDING", "RESOLVED")),
            Some(Status::Conflict)
        );
        assert_eq!(
            status(ParameterError::NewAuthorityIncomplete),
            Some(Status::BadRequest)
        );
        assert_eq!(status(ParameterError::Unauthorized), Some(Status::Unauthorized));
        assert_eq!(
            status(ParameterError::Repo(RepoError::NotFound)),
            Some(Status::NotFound)
        );
        assert_eq!(
            status(ParameterError::Repo(RepoError::Other(anyhow!("db")))),
            None
        );
    }
}
