use super::*;

pub fn start_monitoring(
    connections: &sqlite::Connections,
    account_id: &Id,
    report_id: &Id,
    new_monitoring: usecases::NewMonitoring,
) -> Result<Monitoring> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::start_monitoring(conn, &user, report_id, new_monitoring, now).map_err(|err| {
            warn!("Failed to start monitoring of report {}: {}", report_id, err);
            err
        })
    })?)
}

pub fn complete_monitoring(
    connections: &sqlite::Connections,
    account_id: &Id,
    monitoring_id: &Id,
) -> Result<Monitoring> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::complete_monitoring(conn, &user, monitoring_id, now).map_err(|err| {
            warn!("Failed to complete monitoring {}: {}", monitoring_id, err);
            err
        })
    })?)
}
