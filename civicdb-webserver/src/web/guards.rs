use rocket::request::{FromRequest, Outcome, Request};

use crate::core::{prelude::*, usecases};
use civicdb_core::usecases::Error as ParameterError;

use super::Cfg;

pub const COOKIE_USER_KEY: &str = "civicdb-user-id";

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// Credentials of the current request.
///
/// Never fails: handlers decide whether an account
/// or a bearer token is required.
#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    account_id: Option<Id>,
}

impl Auth {
    pub fn account_id(&self) -> Result<&Id> {
        self.account_id
            .as_ref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    pub fn try_account_id(&self) -> Option<&Id> {
        self.account_id.as_ref()
    }

    pub fn bearer_tokens(&self) -> &[String] {
        &self.bearer_tokens
    }

    pub fn user_with_min_role<R>(&self, repo: &R, min_required_role: Role) -> Result<User>
    where
        R: UserRepo,
    {
        Ok(usecases::authorize_user_by_id(
            repo,
            self.account_id()?,
            min_required_role,
        )?)
    }

    /// Succeeds if no cron secret is configured or one of
    /// the bearer tokens matches it.
    pub fn cron_job(&self, cfg: &Cfg) -> Result<()> {
        match &cfg.cron_secret {
            None => Ok(()),
            Some(secret) if self.bearer_tokens.iter().any(|t| t == secret) => Ok(()),
            Some(_) => Err(ParameterError::Unauthorized.into()),
        }
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    fn account_id_from_cookie(request: &Request) -> Option<Id> {
        request
            .cookies()
            .get_private(COOKIE_USER_KEY)
            .map(|cookie| Id::from(cookie.value()))
            .filter(Id::is_valid)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = Self {
            bearer_tokens: Self::bearer_tokens_from_header(request),
            account_id: Self::account_id_from_cookie(request),
        };
        Outcome::Success(auth)
    }
}

pub struct Version(pub &'static str);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bearer_tokens() {
        assert_eq!(get_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(get_bearer_token("Basic abc"), None);
        assert_eq!(get_bearer_token("Bearer"), None);
    }

    #[test]
    fn cron_job_requires_matching_secret() {
        let auth = Auth {
            bearer_tokens: vec!["foo".into()],
            account_id: None,
        };
        assert!(auth.cron_job(&Cfg::default()).is_ok());
        let cfg = Cfg {
            cron_secret: Some("foo".into()),
            ..Default::default()
        };
        assert!(auth.cron_job(&cfg).is_ok());
        let cfg = Cfg {
            cron_secret: Some("bar".into()),
            ..Default::default()
        };
        assert!(auth.cron_job(&cfg).is_err());
    }
}
