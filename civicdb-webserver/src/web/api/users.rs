use super::*;

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    connections: sqlite::Connections,
    new_user: JsonResult<json::NewUser>,
) -> CreatedResult<json::User> {
    let new_user = from_json::new_user(new_user?.into_inner());
    let user = flows::register_user(&connections, new_user)?;
    info!("Registered new user {}", user.id);
    created(user.into())
}

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    connections: sqlite::Connections,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
) -> Result<json::User> {
    let login = login?.into_inner();
    let user = {
        let credentials = usecases::Credentials {
            email: &login.email.parse()?,
            password: &login.password,
        };
        flows::login(&connections, &credentials).map_err(|err| {
            debug!("Login with email '{}' failed: {}", login.email, err);
            err
        })?
    };
    let mut cookie = Cookie::new(COOKIE_USER_KEY, user.id.to_string());
    cookie.set_same_site(SameSite::Lax);
    cookies.add_private(cookie);
    Ok(Json(user.into()))
}

#[post("/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Json<json::Message> {
    cookies.remove_private(COOKIE_USER_KEY);
    Json(json::Message {
        message: "Logged out".into(),
    })
}

#[get("/users/current")]
pub fn get_current_user(connections: sqlite::Connections, auth: Auth) -> Result<json::User> {
    let user = auth.user_with_min_role(&connections.shared()?, Role::Guest)?;
    Ok(Json(user.into()))
}

#[patch("/users/<id>/role", format = "application/json", data = "<update>")]
pub fn patch_user_role(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
    update: JsonResult<json::UserRoleUpdate>,
) -> Result<json::User> {
    let json::UserRoleUpdate { role } = update?.into_inner();
    let user = flows::change_user_role(&connections, auth.account_id()?, &id.into(), role.into())?;
    Ok(Json(user.into()))
}
