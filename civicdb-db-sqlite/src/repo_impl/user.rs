use super::*;
use num_traits::FromPrimitive as _;

impl_repo_for_connections!(UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user_role(&self, id: &Id, role: Role) -> Result<()>;
    fn get_user_by_id(&self, id: &Id) -> Result<User>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn count_users(&self) -> Result<usize>;
});

impl TryFrom<models::UserEntity> for User {
    type Error = repo::Error;
    fn try_from(from: models::UserEntity) -> Result<Self> {
        let models::UserEntity {
            id,
            email,
            display_name,
            password,
            role,
            created_at,
        } = from;
        let role = Role::from_i16(role).ok_or_else(|| anyhow!("Invalid role: {role}"))?;
        Ok(Self {
            id: id.into(),
            email: EmailAddress::new_unchecked(email),
            display_name,
            password: Password::from_hash(password),
            role,
            created_at: Timestamp::from_millis(created_at),
        })
    }
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use num_traits::ToPrimitive as _;
    let new_user = models::NewUser {
        id: u.id.as_str(),
        email: u.email.as_str(),
        display_name: &u.display_name,
        password: u.password.as_hash(),
        role: u.role.to_i16().unwrap_or_default(),
        created_at: u.created_at.as_millis(),
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_user_role(conn: &mut SqliteConnection, id: &Id, role: Role) -> Result<()> {
    use num_traits::ToPrimitive as _;
    use schema::users::dsl;
    let count = diesel::update(dsl::users.filter(dsl::id.eq(id.as_str())))
        .set(dsl::role.eq(role.to_i16().unwrap_or_default()))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_user_by_id(conn: &mut SqliteConnection, id: &Id) -> Result<User> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::id.eq(id.as_str()))
        .select(models::UserEntity::as_select())
        .first(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<User> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .select(models::UserEntity::as_select())
        .first(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn try_get_user_by_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .select(models::UserEntity::as_select())
        .first(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(TryInto::try_into)
        .transpose()
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
