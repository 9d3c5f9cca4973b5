use super::*;

impl_repo_for_connections!(TaskRepo {
    fn create_task(&self, task: &Task) -> Result<()>;
    fn get_task(&self, id: &Id) -> Result<Task>;
    fn update_task(&self, task: &Task) -> Result<()>;
    fn list_tasks_of_drive(&self, drive_id: &Id) -> Result<Vec<Task>>;
    fn delete_task(&self, id: &Id) -> Result<()>;
    fn delete_tasks_of_drive(&self, drive_id: &Id) -> Result<usize>;
    fn detach_tasks_from_report(&self, report_id: &Id) -> Result<usize>;
});

impl TryFrom<models::TaskEntity> for Task {
    type Error = repo::Error;
    fn try_from(from: models::TaskEntity) -> Result<Self> {
        let models::TaskEntity {
            id,
            drive_id,
            report_id,
            title,
            description,
            status,
            assignee,
            created_at,
            updated_at,
        } = from;
        Ok(Self {
            id: id.into(),
            drive_id: drive_id.into(),
            report_id: report_id.map(Id::from),
            title,
            description,
            status: load_primitive(status)?,
            assignee: assignee.map(Id::from),
            created_at: Timestamp::from_millis(created_at),
            updated_at: Timestamp::from_millis(updated_at),
        })
    }
}

fn create_task(conn: &mut SqliteConnection, t: &Task) -> Result<()> {
    let new_task = models::NewTask {
        id: t.id.as_str(),
        drive_id: t.drive_id.as_str(),
        report_id: t.report_id.as_ref().map(Id::as_str),
        title: &t.title,
        description: t.description.as_deref(),
        status: t.status.into(),
        assignee: t.assignee.as_ref().map(Id::as_str),
        created_at: t.created_at.as_millis(),
        updated_at: t.updated_at.as_millis(),
    };
    diesel::insert_into(schema::tasks::table)
        .values(&new_task)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_task(conn: &mut SqliteConnection, id: &Id) -> Result<Task> {
    use schema::tasks::dsl;
    dsl::tasks
        .filter(dsl::id.eq(id.as_str()))
        .select(models::TaskEntity::as_select())
        .first(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn update_task(conn: &mut SqliteConnection, t: &Task) -> Result<()> {
    use schema::tasks::dsl;
    let count = diesel::update(dsl::tasks.filter(dsl::id.eq(t.id.as_str())))
        .set((
            dsl::status.eq(i16::from(t.status)),
            dsl::assignee.eq(t.assignee.as_ref().map(Id::as_str)),
            dsl::updated_at.eq(t.updated_at.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn list_tasks_of_drive(conn: &mut SqliteConnection, drive_id: &Id) -> Result<Vec<Task>> {
    use schema::tasks::dsl;
    dsl::tasks
        .filter(dsl::drive_id.eq(drive_id.as_str()))
        .order_by((dsl::created_at, dsl::id))
        .select(models::TaskEntity::as_select())
        .load(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn delete_task(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::tasks::dsl;
    let count = diesel::delete(dsl::tasks.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn delete_tasks_of_drive(conn: &mut SqliteConnection, drive_id: &Id) -> Result<usize> {
    use schema::tasks::dsl;
    diesel::delete(dsl::tasks.filter(dsl::drive_id.eq(drive_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn detach_tasks_from_report(conn: &mut SqliteConnection, report_id: &Id) -> Result<usize> {
    use schema::tasks::dsl;
    diesel::update(dsl::tasks.filter(dsl::report_id.eq(report_id.as_str())))
        .set(dsl::report_id.eq(None::<String>))
        .execute(conn)
        .map_err(from_diesel_err)
}
