use super::*;

#[post(
    "/reports/<id>/contact-authority",
    format = "application/json",
    data = "<contact>"
)]
pub fn post_contact_authority(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
    contact: JsonResult<json::ContactAuthority>,
) -> CreatedResult<json::AuthorityContacted> {
    let contact = from_json::contact_authority(contact?.into_inner());
    let outcome = flows::contact_authority(&connections, auth.account_id()?, &id.into(), contact)?;
    created(to_json::authority_contacted(outcome))
}

#[get("/reports/<id>/authorities")]
pub fn get_report_authorities(
    connections: sqlite::Connections,
    id: &str,
) -> Result<Vec<json::AuthorityContact>> {
    let contacts = usecases::contacts_of_report(&connections.shared()?, &id.into())?;
    Ok(Json(contacts.into_iter().map(Into::into).collect()))
}

#[patch(
    "/reports/<id>/authorities/<authority_id>",
    format = "application/json",
    data = "<update>"
)]
pub fn patch_contact_status(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
    authority_id: &str,
    update: JsonResult<json::ContactStatusUpdate>,
) -> Result<json::ReportAuthority> {
    let status = update?.into_inner().status;
    let contact = flows::update_contact_status(
        &connections,
        auth.account_id()?,
        &id.into(),
        &authority_id.into(),
        status.into(),
    )?;
    Ok(Json(contact.into()))
}

#[post("/authorities", format = "application/json", data = "<new_authority>")]
pub fn post_authority(
    connections: sqlite::Connections,
    auth: Auth,
    new_authority: JsonResult<json::NewAuthority>,
) -> CreatedResult<json::Authority> {
    let new_authority = from_json::new_authority(new_authority?.into_inner());
    let authority = flows::create_authority(&connections, auth.account_id()?, new_authority)?;
    created(authority.into())
}

#[get("/authorities?<city>&<category>&<offset>&<limit>")]
pub fn get_authorities(
    connections: sqlite::Connections,
    city: Option<String>,
    category: Option<String>,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::Authority>> {
    let query = AuthorityQuery { city, category };
    let authorities = usecases::list_authorities(
        &connections.shared()?,
        &query,
        &pagination(offset, limit),
    )?;
    Ok(Json(authorities.into_iter().map(Into::into).collect()))
}
