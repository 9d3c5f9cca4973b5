use super::*;

#[post("/drives", format = "application/json", data = "<new_drive>")]
pub fn post_drive(
    connections: sqlite::Connections,
    auth: Auth,
    new_drive: JsonResult<json::NewDrive>,
) -> CreatedResult<json::CreatedDrive> {
    let new_drive = from_json::new_drive(new_drive?.into_inner());
    let created_drive = flows::create_drive(&connections, auth.account_id()?, new_drive)?;
    info!(
        "Created drive {} with {} tasks",
        created_drive.drive.id,
        created_drive.tasks.len()
    );
    created(to_json::created_drive(created_drive))
}

#[get("/drives?<status>&<offset>&<limit>")]
pub fn get_drives(
    connections: sqlite::Connections,
    status: Option<String>,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::Drive>> {
    let status = status
        .map(|s| s.parse::<DriveStatus>())
        .transpose()
        .map_err(|_| ParameterError::Status)?;
    let query = DriveQuery {
        status,
        ..Default::default()
    };
    let drives = usecases::list_drives(&connections.shared()?, &query, &pagination(offset, limit))?;
    Ok(Json(drives.into_iter().map(Into::into).collect()))
}

#[get("/drives/<id>")]
pub fn get_drive(connections: sqlite::Connections, id: &str) -> Result<json::Drive> {
    let drive = usecases::get_drive(&connections.shared()?, &id.into())?;
    Ok(Json(drive.into()))
}

#[patch("/drives/<id>/status", format = "application/json", data = "<update>")]
pub fn patch_drive_status(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
    update: JsonResult<json::DriveStatusUpdate>,
) -> Result<json::Drive> {
    let status = update?.into_inner().status;
    let drive =
        flows::change_drive_status(&connections, auth.account_id()?, &id.into(), status.into())?;
    Ok(Json(drive.into()))
}

#[post("/drives/<id>/reports", format = "application/json", data = "<link>")]
pub fn post_drive_report(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
    link: JsonResult<json::LinkReport>,
) -> Result<json::Drive> {
    let report_id = link?.into_inner().report_id.into();
    let drive_id = id.into();
    flows::link_report_to_drive(&connections, auth.account_id()?, &drive_id, &report_id)?;
    let drive = usecases::get_drive(&connections.shared()?, &drive_id)?;
    Ok(Json(drive.into()))
}

#[delete("/drives/<id>")]
pub fn delete_drive(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
) -> Result<json::DeletedDrive> {
    let deleted = flows::delete_drive(&connections, auth.account_id()?, &id.into())?;
    Ok(Json(to_json::deleted_drive(deleted)))
}

// ---   volunteers   --- //

#[post("/drives/<id>/volunteers")]
pub fn post_volunteer(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
) -> CreatedResult<json::Volunteer> {
    let volunteer = flows::join_drive(&connections, auth.account_id()?, &id.into())?;
    created(volunteer.into())
}

#[delete("/drives/<id>/volunteers")]
pub fn delete_volunteer(connections: sqlite::Connections, auth: Auth, id: &str) -> StatusResult {
    flows::leave_drive(&connections, auth.account_id()?, &id.into())?;
    Ok(Status::NoContent)
}

#[get("/drives/<id>/volunteers")]
pub fn get_volunteers(
    connections: sqlite::Connections,
    id: &str,
) -> Result<Vec<json::Volunteer>> {
    let volunteers = usecases::volunteers_of_drive(&connections.shared()?, &id.into())?;
    Ok(Json(volunteers.into_iter().map(Into::into).collect()))
}

// ---   enhancements   --- //

#[post(
    "/drives/<id>/enhancements",
    format = "application/json",
    data = "<enhancement>"
)]
pub fn post_enhancement(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
    enhancement: JsonResult<json::NewEnhancement>,
) -> CreatedResult<json::Enhancement> {
    let content = enhancement?.into_inner().content;
    let enhancement = flows::suggest_enhancement(&connections, auth.account_id()?, &id.into(), content)?;
    created(enhancement.into())
}

#[get("/drives/<id>/enhancements")]
pub fn get_enhancements(
    connections: sqlite::Connections,
    id: &str,
) -> Result<Vec<json::Enhancement>> {
    let enhancements = usecases::enhancements_of_drive(&connections.shared()?, &id.into())?;
    Ok(Json(enhancements.into_iter().map(Into::into).collect()))
}
