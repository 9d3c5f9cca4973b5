use super::*;

pub fn register_user(
    connections: &sqlite::Connections,
    new_user: usecases::NewUser,
) -> Result<User> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_new_user(conn, new_user, now).map_err(|err| {
            warn!("Failed to register new user: {}", err);
            err
        })
    })?)
}

pub fn login(connections: &sqlite::Connections, credentials: &usecases::Credentials) -> Result<User> {
    Ok(usecases::login_with_email(&connections.shared()?, credentials)?)
}

pub fn change_user_role(
    connections: &sqlite::Connections,
    account_id: &Id,
    user_id: &Id,
    role: Role,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let account = usecases::authorize_user_by_id(conn, account_id, Role::Admin)?;
        usecases::change_user_role(conn, &account, user_id, role).map_err(|err| {
            warn!("Failed to change role of user {}: {}", user_id, err);
            err
        })
    })?)
}

pub fn assign_user_role(
    connections: &sqlite::Connections,
    email: &EmailAddress,
    role: Role,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::assign_user_role(conn, email, role).map_err(|err| {
            warn!("Failed to assign role {:?} to {}: {}", role, email, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn register_and_login() {
        let fixture = BackendFixture::new();
        let user = fixture.register("alice@example.com");
        assert_eq!(user.role, Role::User);

        let email = EmailAddress::new_unchecked("alice@example.com".into());
        let credentials = usecases::Credentials {
            email: &email,
            password: DEFAULT_PASSWORD,
        };
        let logged_in = flows::login(&fixture.db_connections, &credentials).unwrap();
        assert_eq!(logged_in.id, user.id);

        let credentials = usecases::Credentials {
            email: &email,
            password: "wrong password",
        };
        assert!(matches!(
            flows::login(&fixture.db_connections, &credentials),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::Credentials
            )))
        ));
    }

    #[test]
    fn reject_duplicate_email() {
        let fixture = BackendFixture::new();
        fixture.register("bob@example.com");
        let err = flows::register_user(&fixture.db_connections, new_user("bob@example.com"))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::UserExists))
        ));
        assert_eq!(fixture.db_connections.shared().unwrap().count_users().unwrap(), 1);
    }

    #[test]
    fn admin_changes_role_of_user() {
        let fixture = BackendFixture::new();
        let admin = fixture.register_with_role("admin@example.com", Role::Admin);
        let moderator = fixture.register_with_role("mod@example.com", Role::Moderator);
        let user = fixture.register("carol@example.com");

        let err = flows::change_user_role(
            &fixture.db_connections,
            &moderator.id,
            &user.id,
            Role::Guest,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Forbidden))
        ));

        let promoted =
            flows::change_user_role(&fixture.db_connections, &admin.id, &user.id, Role::Moderator)
                .unwrap();
        assert_eq!(promoted.role, Role::Moderator);
        let stored = fixture
            .db_connections
            .shared()
            .unwrap()
            .get_user_by_id(&user.id)
            .unwrap();
        assert_eq!(stored.role, Role::Moderator);
    }

    #[test]
    fn bootstrap_first_admin() {
        let fixture = BackendFixture::new();
        let user = fixture.register("dave@example.com");
        let admin = flows::assign_user_role(&fixture.db_connections, &user.email, Role::Admin)
            .unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.id, user.id);
    }
}
