use std::{fmt, str::FromStr};
use thiserror::Error;

/// A bcrypt password hash.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("The password is too short")]
    TooShort,
    #[error("The password is too long")]
    TooLong,
    #[error(transparent)]
    Hash(#[from] pwhash::error::Error),
}

impl Password {
    pub const fn min_len() -> usize {
        6
    }

    pub const fn max_len() -> usize {
        72
    }

    pub fn verify(&self, password: &str) -> bool {
        pwhash::bcrypt::verify(password, &self.0)
    }

    /// Wrap an already hashed password, e.g. loaded from the database.
    pub const fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_hash(&self) -> &str {
        &self.0
    }
}

impl FromStr for Password {
    type Err = ParseError;

    fn from_str(password: &str) -> Result<Self, Self::Err> {
        if password.len() < Self::min_len() {
            return Err(ParseError::TooShort);
        }
        if password.len() > Self::max_len() {
            return Err(ParseError::TooLong);
        }
        let res = Self(pwhash::bcrypt::hash(password)?);
        debug_assert!(res.verify(password));
        Ok(res)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let pw: Password = "secret123".parse().unwrap();
        assert!(pw.verify("secret123"));
        assert!(!pw.verify("secret124"));
    }

    #[test]
    fn reject_short_passwords() {
        assert!(matches!(
            "12345".parse::<Password>(),
            Err(ParseError::TooShort)
        ));
    }
}
