use super::prelude::*;
use crate::{util::validate, RepoError};

pub const MAX_DISPLAY_NAME_LEN: usize = 100;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub display_name: String,
    pub password: String,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser, now: Timestamp) -> Result<User> {
    let email = u.email.parse::<EmailAddress>()?;
    if !validate::is_valid_email(email.as_str()) {
        return Err(Error::Email);
    }
    let display_name = u.display_name.trim().to_string();
    if display_name.is_empty() || display_name.chars().count() > MAX_DISPLAY_NAME_LEN {
        return Err(Error::DisplayName);
    }
    let password = u.password.parse::<Password>()?;
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        id: Id::new(),
        email,
        display_name,
        password,
        role: Role::User,
        created_at: now,
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user).map_err(|err| match err {
        RepoError::AlreadyExists => Error::UserExists,
        err => err.into(),
    })?;
    Ok(new_user)
}

#[derive(Debug, Clone)]
pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R: UserRepo>(repo: &R, login: &Credentials) -> Result<User> {
    let user = repo
        .try_get_user_by_email(login.email)?
        .ok_or(Error::Credentials)?;
    if !user.password.verify(login.password) {
        log::debug!("Login with invalid password: {}", login.email);
        return Err(Error::Credentials);
    }
    Ok(user)
}

pub fn get_user<R: UserRepo>(repo: &R, id: &Id) -> Result<User> {
    Ok(repo.get_user_by_id(id)?)
}

/// Changes the role of another user.
///
/// Only roles below the role of the account can be granted or
/// revoked, and only for users ranked below the account.
pub fn change_user_role<R: UserRepo>(
    repo: &R,
    account: &User,
    user_id: &Id,
    role: Role,
) -> Result<User> {
    let mut user = repo.get_user_by_id(user_id)?;
    if account.role <= user.role || role >= account.role {
        log::debug!(
            "{:?} {} must not change role of {:?} {} to {:?}",
            account.role,
            account.id,
            user.role,
            user.id,
            role
        );
        return Err(Error::Forbidden);
    }
    log::info!("Changing role of {} from {:?} to {:?}", user.id, user.role, role);
    repo.update_user_role(&user.id, role)?;
    user.role = role;
    Ok(user)
}

/// Sets the role of a user without any authorization.
///
/// Used for bootstrapping the first admin from the command line.
pub fn assign_user_role<R: UserRepo>(repo: &R, email: &EmailAddress, role: Role) -> Result<User> {
    let mut user = repo.get_user_by_email(email)?;
    log::info!("Assigning role {:?} to {}", role, user.email);
    repo.update_user_role(&user.id, role)?;
    user.role = role;
    Ok(user)
}
