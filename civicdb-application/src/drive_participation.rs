use super::*;

pub fn join_drive(
    connections: &sqlite::Connections,
    account_id: &Id,
    drive_id: &Id,
) -> Result<DriveVolunteer> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::join_drive(conn, &user, drive_id, now).map_err(|err| {
            warn!("Failed to join drive {}: {}", drive_id, err);
            err
        })
    })?)
}

pub fn leave_drive(
    connections: &sqlite::Connections,
    account_id: &Id,
    drive_id: &Id,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::leave_drive(conn, &user, drive_id).map_err(|err| {
            warn!("Failed to leave drive {}: {}", drive_id, err);
            err
        })
    })?)
}

pub fn suggest_enhancement(
    connections: &sqlite::Connections,
    account_id: &Id,
    drive_id: &Id,
    content: String,
) -> Result<DriveEnhancement> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::suggest_enhancement(conn, &user, drive_id, content, now).map_err(|err| {
            warn!("Failed to suggest enhancement for drive {}: {}", drive_id, err);
            err
        })
    })?)
}
