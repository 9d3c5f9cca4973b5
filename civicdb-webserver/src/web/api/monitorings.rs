use super::*;

#[post("/reports/<id>/monitorings", data = "<new_monitoring>")]
pub fn post_monitoring(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
    new_monitoring: Option<Json<json::NewMonitoring>>,
) -> CreatedResult<json::Monitoring> {
    let new_monitoring = from_json::new_monitoring(
        new_monitoring
            .map(Json::into_inner)
            .unwrap_or_default(),
    );
    let monitoring =
        flows::start_monitoring(&connections, auth.account_id()?, &id.into(), new_monitoring)?;
    created(monitoring.into())
}

#[get("/reports/<id>/monitorings")]
pub fn get_monitorings(
    connections: sqlite::Connections,
    id: &str,
) -> Result<Vec<json::Monitoring>> {
    let monitorings = usecases::monitorings_of_report(&connections.shared()?, &id.into())?;
    Ok(Json(monitorings.into_iter().map(Into::into).collect()))
}

#[post("/monitorings/<id>/complete")]
pub fn post_complete_monitoring(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
) -> Result<json::Monitoring> {
    let monitoring = flows::complete_monitoring(&connections, auth.account_id()?, &id.into())?;
    Ok(Json(monitoring.into()))
}
