use super::*;

#[post("/reports", format = "application/json", data = "<new_report>")]
pub fn post_report(
    connections: sqlite::Connections,
    auth: Auth,
    new_report: JsonResult<json::NewReport>,
) -> Result<json::Report> {
    let new_report = from_json::new_report(new_report?.into_inner());
    let report = flows::create_report(&connections, auth.account_id()?, new_report)?;
    Ok(Json(report.into()))
}

#[get("/reports?<status>&<offset>&<limit>")]
pub fn get_reports(
    connections: sqlite::Connections,
    status: Option<String>,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::Report>> {
    let status = status
        .map(|s| s.parse::<ReportStatus>())
        .transpose()
        .map_err(|_| ParameterError::Status)?;
    let query = ReportQuery {
        status,
        ..Default::default()
    };
    let reports = usecases::list_reports(
        &connections.shared()?,
        &query,
        &pagination(offset, limit),
    )?;
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

#[get("/reports/<id>")]
pub fn get_report(connections: sqlite::Connections, id: &str) -> Result<json::Report> {
    let report = usecases::get_report(&connections.shared()?, &id.into())?;
    Ok(Json(report.into()))
}

#[patch("/reports/<id>", format = "application/json", data = "<update>")]
pub fn patch_report(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
    update: JsonResult<json::NewReport>,
) -> Result<json::Report> {
    let update = from_json::new_report(update?.into_inner());
    let report = flows::update_report(&connections, auth.account_id()?, &id.into(), update)?;
    Ok(Json(report.into()))
}

#[delete("/reports/<id>")]
pub fn delete_report(connections: sqlite::Connections, auth: Auth, id: &str) -> StatusResult {
    flows::delete_report(&connections, auth.account_id()?, &id.into())?;
    Ok(Status::NoContent)
}

#[patch("/reports/<id>/status", format = "application/json", data = "<update>")]
pub fn patch_report_status(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
    update: JsonResult<json::ReportStatusUpdate>,
) -> Result<json::StatusLog> {
    let json::ReportStatusUpdate { status, reason } = update?.into_inner();
    let log = flows::change_report_status(
        &connections,
        auth.account_id()?,
        &id.into(),
        status.into(),
        reason,
    )?;
    Ok(Json(log.into()))
}

#[get("/reports/<id>/status-log")]
pub fn get_status_log(connections: sqlite::Connections, id: &str) -> Result<Vec<json::StatusLog>> {
    let logs = usecases::status_log_of_report(&connections.shared()?, &id.into())?;
    Ok(Json(logs.into_iter().map(Into::into).collect()))
}

#[post("/reports/<id>/resolve", format = "application/json", data = "<resolution>")]
pub fn post_resolve(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
    resolution: JsonResult<json::NewResolution>,
) -> CreatedResult<json::ResolvedReport> {
    let resolution = from_json::new_resolution(resolution?.into_inner());
    let outcome = flows::resolve_report(&connections, auth.account_id()?, &id.into(), resolution)?;
    created(to_json::resolved_report(outcome))
}
