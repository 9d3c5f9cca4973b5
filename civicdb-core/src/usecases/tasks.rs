use super::prelude::*;
use crate::util::validate::{self, non_empty};

#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub report_id: Option<Id>,
}

impl NewTask {
    pub(crate) fn into_task(self, drive_id: &Id, now: Timestamp) -> Result<Task> {
        let Self {
            title,
            description,
            report_id,
        } = self;
        if !validate::is_valid_title(&title) {
            return Err(Error::Title);
        }
        Ok(Task {
            id: Id::new(),
            drive_id: drive_id.clone(),
            report_id,
            title: title.trim().to_string(),
            description: non_empty(description),
            status: TaskStatus::Open,
            assignee: None,
            created_at: now,
            updated_at: now,
        })
    }
}

pub fn create_task<R>(
    repo: &R,
    user: &User,
    drive_id: &Id,
    new_task: NewTask,
    now: Timestamp,
) -> Result<Task>
where
    R: DriveRepo + TaskRepo + ReportRepo,
{
    let drive = repo.get_drive(drive_id)?;
    super::authorize_owner_or_moderator(user, &drive.organizer)?;
    if let Some(report_id) = &new_task.report_id {
        repo.get_report(report_id)?;
    }
    let task = new_task.into_task(drive_id, now)?;
    repo.create_task(&task)?;
    Ok(task)
}

pub fn tasks_of_drive<R>(repo: &R, drive_id: &Id) -> Result<Vec<Task>>
where
    R: DriveRepo + TaskRepo,
{
    repo.get_drive(drive_id)?;
    Ok(repo.list_tasks_of_drive(drive_id)?)
}

/// Assigns an open task.
///
/// Without an explicit assignee the task is assigned to the
/// current user. Only the organizer or a moderator may assign
/// tasks to somebody else.
pub fn assign_task<R>(
    repo: &R,
    user: &User,
    task_id: &Id,
    assignee: Option<Id>,
    now: Timestamp,
) -> Result<Task>
where
    R: DriveRepo + TaskRepo + UserRepo,
{
    let mut task = repo.get_task(task_id)?;
    if task.status != TaskStatus::Open {
        return Err(Error::TaskState);
    }
    let assignee = match assignee {
        Some(id) if id != user.id => {
            let drive = repo.get_drive(&task.drive_id)?;
            super::authorize_owner_or_moderator(user, &drive.organizer)?;
            repo.get_user_by_id(&id)?.id
        }
        _ => user.id.clone(),
    };
    task.status = TaskStatus::Assigned;
    task.assignee = Some(assignee);
    task.updated_at = now;
    repo.update_task(&task)?;
    log::debug!("Assigned task {task_id}");
    Ok(task)
}

pub fn complete_task<R>(repo: &R, user: &User, task_id: &Id, now: Timestamp) -> Result<Task>
where
    R: DriveRepo + TaskRepo,
{
    let mut task = repo.get_task(task_id)?;
    if task.status == TaskStatus::Completed {
        return Err(Error::TaskState);
    }
    if task.assignee.as_ref() != Some(&user.id) {
        let drive = repo.get_drive(&task.drive_id)?;
        super::authorize_owner_or_moderator(user, &drive.organizer)?;
    }
    task.status = TaskStatus::Completed;
    task.updated_at = now;
    repo.update_task(&task)?;
    log::debug!("Completed task {task_id}");
    Ok(task)
}

pub fn delete_task<R>(repo: &R, user: &User, task_id: &Id) -> Result<()>
where
    R: DriveRepo + TaskRepo,
{
    let task = repo.get_task(task_id)?;
    let drive = repo.get_drive(&task.drive_id)?;
    super::authorize_owner_or_moderator(user, &drive.organizer)?;
    repo.delete_task(task_id)?;
    Ok(())
}
