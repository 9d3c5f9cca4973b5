use super::*;

pub fn delete_drive(
    connections: &sqlite::Connections,
    account_id: &Id,
    drive_id: &Id,
) -> Result<usecases::DeletedDrive> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::delete_drive(conn, &user, drive_id).map_err(|err| {
            warn!("Failed to delete drive {}: {}", drive_id, err);
            err
        })
    })?)
}
