use super::*;

impl_repo_for_connections!(MonitoringRepo {
    fn create_monitoring(&self, monitoring: &Monitoring) -> Result<()>;
    fn get_monitoring(&self, id: &Id) -> Result<Monitoring>;
    fn complete_monitoring(&self, id: &Id, at: Timestamp) -> Result<()>;
    fn complete_active_monitorings_of_report(&self, report_id: &Id, at: Timestamp) -> Result<usize>;
    fn list_monitorings_of_report(&self, report_id: &Id) -> Result<Vec<Monitoring>>;
    fn delete_monitorings_of_report(&self, report_id: &Id) -> Result<usize>;
    fn delete_monitorings_of_drive(&self, drive_id: &Id) -> Result<usize>;
});

const ACTIVE: i16 = MonitoringStatus::Active as i16;
const COMPLETED: i16 = MonitoringStatus::Completed as i16;

impl TryFrom<models::MonitoringEntity> for Monitoring {
    type Error = repo::Error;
    fn try_from(from: models::MonitoringEntity) -> Result<Self> {
        let models::MonitoringEntity {
            id,
            report_id,
            drive_id,
            monitor,
            status,
            notes,
            started_at,
            completed_at,
        } = from;
        Ok(Self {
            id: id.into(),
            report_id: report_id.into(),
            drive_id: drive_id.map(Id::from),
            monitor: monitor.into(),
            status: load_primitive(status)?,
            notes,
            started_at: Timestamp::from_millis(started_at),
            completed_at: completed_at.map(Timestamp::from_millis),
        })
    }
}

fn create_monitoring(conn: &mut SqliteConnection, m: &Monitoring) -> Result<()> {
    let new_monitoring = models::NewMonitoring {
        id: m.id.as_str(),
        report_id: m.report_id.as_str(),
        drive_id: m.drive_id.as_ref().map(Id::as_str),
        monitor: m.monitor.as_str(),
        status: m.status.into(),
        notes: m.notes.as_deref(),
        started_at: m.started_at.as_millis(),
        completed_at: m.completed_at.map(Timestamp::as_millis),
    };
    diesel::insert_into(schema::monitorings::table)
        .values(&new_monitoring)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_monitoring(conn: &mut SqliteConnection, id: &Id) -> Result<Monitoring> {
    use schema::monitorings::dsl;
    dsl::monitorings
        .filter(dsl::id.eq(id.as_str()))
        .select(models::MonitoringEntity::as_select())
        .first(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn complete_monitoring(conn: &mut SqliteConnection, id: &Id, at: Timestamp) -> Result<()> {
    use schema::monitorings::dsl;
    let count = diesel::update(dsl::monitorings.filter(dsl::id.eq(id.as_str())))
        .set((
            dsl::status.eq(COMPLETED),
            dsl::completed_at.eq(Some(at.as_millis())),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn complete_active_monitorings_of_report(
    conn: &mut SqliteConnection,
    report_id: &Id,
    at: Timestamp,
) -> Result<usize> {
    use schema::monitorings::dsl;
    diesel::update(
        dsl::monitorings
            .filter(dsl::report_id.eq(report_id.as_str()))
            .filter(dsl::status.eq(ACTIVE)),
    )
    .set((
        dsl::status.eq(COMPLETED),
        dsl::completed_at.eq(Some(at.as_millis())),
    ))
    .execute(conn)
    .map_err(from_diesel_err)
}

fn list_monitorings_of_report(conn: &mut SqliteConnection, report_id: &Id) -> Result<Vec<Monitoring>> {
    use schema::monitorings::dsl;
    dsl::monitorings
        .filter(dsl::report_id.eq(report_id.as_str()))
        .order_by((dsl::started_at, dsl::id))
        .select(models::MonitoringEntity::as_select())
        .load(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn delete_monitorings_of_report(conn: &mut SqliteConnection, report_id: &Id) -> Result<usize> {
    use schema::monitorings::dsl;
    diesel::delete(dsl::monitorings.filter(dsl::report_id.eq(report_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn delete_monitorings_of_drive(conn: &mut SqliteConnection, drive_id: &Id) -> Result<usize> {
    use schema::monitorings::dsl;
    diesel::delete(dsl::monitorings.filter(dsl::drive_id.eq(drive_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)
}
