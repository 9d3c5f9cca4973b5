use super::*;

pub fn create_task(
    connections: &sqlite::Connections,
    account_id: &Id,
    drive_id: &Id,
    new_task: usecases::NewTask,
) -> Result<Task> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::create_task(conn, &user, drive_id, new_task, now).map_err(|err| {
            warn!("Failed to create task for drive {}: {}", drive_id, err);
            err
        })
    })?)
}

/// Assigns a task to the given user or to the current
/// account if no assignee is given.
pub fn assign_task(
    connections: &sqlite::Connections,
    account_id: &Id,
    task_id: &Id,
    assignee: Option<Id>,
) -> Result<Task> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::assign_task(conn, &user, task_id, assignee, now).map_err(|err| {
            warn!("Failed to assign task {}: {}", task_id, err);
            err
        })
    })?)
}

pub fn complete_task(
    connections: &sqlite::Connections,
    account_id: &Id,
    task_id: &Id,
) -> Result<Task> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::complete_task(conn, &user, task_id, now).map_err(|err| {
            warn!("Failed to complete task {}: {}", task_id, err);
            err
        })
    })?)
}

pub fn delete_task(connections: &sqlite::Connections, account_id: &Id, task_id: &Id) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::delete_task(conn, &user, task_id).map_err(|err| {
            warn!("Failed to delete task {}: {}", task_id, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn assign_and_complete_a_task() {
        let fixture = BackendFixture::new();
        let organizer = fixture.register("organizer@example.com");
        let helper = fixture.register("helper@example.com");
        let db = &fixture.db_connections;
        let drive = flows::create_drive(db, &organizer.id, new_drive("Graffiti removal"))
            .unwrap()
            .drive;
        let task = flows::create_task(
            db,
            &organizer.id,
            &drive.id,
            usecases::NewTask {
                title: "Buy paint".into(),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(task.status, TaskStatus::Open);

        // Assign to self by default
        let task = flows::assign_task(db, &helper.id, &task.id, None).unwrap();
        assert_eq!(task.status, TaskStatus::Assigned);
        assert_eq!(task.assignee.as_ref(), Some(&helper.id));

        let task = flows::complete_task(db, &helper.id, &task.id).unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert!(matches!(
            flows::complete_task(db, &helper.id, &task.id),
            Err(AppError::Business(BError::Parameter(usecases::Error::TaskState)))
        ));

        assert!(matches!(
            flows::delete_task(db, &helper.id, &task.id),
            Err(AppError::Business(BError::Parameter(usecases::Error::Forbidden)))
        ));
        flows::delete_task(db, &organizer.id, &task.id).unwrap();
        assert!(usecases::tasks_of_drive(&db.shared().unwrap(), &drive.id)
            .unwrap()
            .is_empty());
    }
}
