use super::prelude::*;
use crate::RepoError;

pub fn join_drive<R>(repo: &R, user: &User, drive_id: &Id, now: Timestamp) -> Result<DriveVolunteer>
where
    R: DriveRepo + VolunteerRepo,
{
    let drive = repo.get_drive(drive_id)?;
    if !drive.status.accepts_volunteers() {
        return Err(Error::DriveClosed);
    }
    let volunteer = DriveVolunteer {
        drive_id: drive_id.clone(),
        user_id: user.id.clone(),
        joined_at: now,
    };
    repo.add_drive_volunteer(&volunteer)
        .map_err(|err| match err {
            RepoError::AlreadyExists => Error::AlreadyVolunteered,
            err => err.into(),
        })?;
    log::debug!("User {} joined drive {drive_id}", user.id);
    Ok(volunteer)
}

pub fn leave_drive<R>(repo: &R, user: &User, drive_id: &Id) -> Result<()>
where
    R: DriveRepo + VolunteerRepo,
{
    repo.get_drive(drive_id)?;
    repo.remove_drive_volunteer(drive_id, &user.id)?;
    Ok(())
}

pub fn volunteers_of_drive<R>(repo: &R, drive_id: &Id) -> Result<Vec<DriveVolunteer>>
where
    R: DriveRepo + VolunteerRepo,
{
    repo.get_drive(drive_id)?;
    Ok(repo.list_drive_volunteers(drive_id)?)
}
