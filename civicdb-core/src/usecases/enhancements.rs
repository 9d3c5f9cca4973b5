use super::prelude::*;

pub const MAX_CONTENT_LEN: usize = 5_000;

pub fn suggest_enhancement<R>(
    repo: &R,
    user: &User,
    drive_id: &Id,
    content: String,
    now: Timestamp,
) -> Result<DriveEnhancement>
where
    R: DriveRepo + EnhancementRepo,
{
    let content = content.trim().to_string();
    if content.is_empty() || content.len() > MAX_CONTENT_LEN {
        return Err(Error::EmptyContent);
    }
    repo.get_drive(drive_id)?;
    let enhancement = DriveEnhancement {
        id: Id::new(),
        drive_id: drive_id.clone(),
        suggested_by: user.id.clone(),
        content,
        created_at: now,
    };
    repo.create_drive_enhancement(&enhancement)?;
    Ok(enhancement)
}

pub fn enhancements_of_drive<R>(repo: &R, drive_id: &Id) -> Result<Vec<DriveEnhancement>>
where
    R: DriveRepo + EnhancementRepo,
{
    repo.get_drive(drive_id)?;
    Ok(repo.list_drive_enhancements(drive_id)?)
}
