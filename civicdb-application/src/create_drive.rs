use super::*;

pub fn create_drive(
    connections: &sqlite::Connections,
    account_id: &Id,
    new_drive: usecases::NewDrive,
) -> Result<usecases::CreatedDrive> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let organizer = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::create_new_drive(conn, &organizer, new_drive, now).map_err(|err| {
            warn!("Failed to create new drive: {}", err);
            err
        })
    })?)
}

pub fn link_report_to_drive(
    connections: &sqlite::Connections,
    account_id: &Id,
    drive_id: &Id,
    report_id: &Id,
) -> Result<()> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::link_report_to_drive(conn, &user, drive_id, report_id, now).map_err(|err| {
            warn!("Failed to link report {} to drive {}: {}", report_id, drive_id, err);
            err
        })
    })?)
}
