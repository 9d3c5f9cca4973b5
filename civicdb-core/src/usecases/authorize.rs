use super::prelude::*;
use crate::RepoError;

pub fn authorize_user_by_id<R: UserRepo>(repo: &R, id: &Id, min_required_role: Role) -> Result<User> {
    let user = repo.get_user_by_id(id).map_err(|err| match err {
        RepoError::NotFound => Error::Unauthorized,
        err => err.into(),
    })?;
    if user.role < min_required_role {
        return Err(Error::Forbidden);
    }
    Ok(user)
}

pub fn is_moderator(user: &User) -> bool {
    user.role >= Role::Moderator
}

/// The owner of a resource or any moderator may manage it.
pub fn authorize_owner_or_moderator(user: &User, owner: &Id) -> Result<()> {
    if &user.id == owner || is_moderator(user) {
        return Ok(());
    }
    Err(Error::Forbidden)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn unknown_users_are_unauthorized() {
        let db = MockDb::default();
        assert!(matches!(
            authorize_user_by_id(&db, &Id::new(), Role::Guest),
            Err(Error::Unauthorized)
        ));
    }

    #[test]
    fn require_minimum_role() {
        let db = MockDb::default();
        let user = db.add_user("user@example.org", Role::User);
        assert!(authorize_user_by_id(&db, &user.id, Role::User).is_ok());
        assert!(matches!(
            authorize_user_by_id(&db, &user.id, Role::Moderator),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn owner_or_moderator() {
        let db = MockDb::default();
        let owner = db.add_user("owner@example.org", Role::User);
        let other = db.add_user("other@example.org", Role::User);
        let moderator = db.add_user("mod@example.org", Role::Moderator);
        assert!(authorize_owner_or_moderator(&owner, &owner.id).is_ok());
        assert!(authorize_owner_or_moderator(&moderator, &owner.id).is_ok());
        assert!(authorize_owner_or_moderator(&other, &owner.id).is_err());
    }
}
