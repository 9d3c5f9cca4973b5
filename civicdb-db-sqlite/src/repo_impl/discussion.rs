use super::*;

impl_repo_for_connections!(DiscussionRepo {
    fn create_discussion(&self, discussion: &Discussion) -> Result<()>;
    fn list_discussions(&self, parent: &DiscussionParent, phase: Option<DiscussionPhase>) -> Result<Vec<Discussion>>;
    fn delete_discussions_of_parent(&self, parent: &DiscussionParent) -> Result<usize>;
});

impl TryFrom<models::DiscussionEntity> for Discussion {
    type Error = repo::Error;
    fn try_from(from: models::DiscussionEntity) -> Result<Self> {
        let models::DiscussionEntity {
            id,
            report_id,
            drive_id,
            author,
            phase,
            content,
            created_at,
        } = from;
        let parent = match (report_id, drive_id) {
            (Some(report_id), None) => DiscussionParent::Report(report_id.into()),
            (None, Some(drive_id)) => DiscussionParent::Drive(drive_id.into()),
            _ => return Err(anyhow!("Discussion {id} without a unique parent").into()),
        };
        Ok(Self {
            id: id.into(),
            parent,
            author: author.into(),
            phase: load_primitive(phase)?,
            content,
            created_at: Timestamp::from_millis(created_at),
        })
    }
}

fn create_discussion(conn: &mut SqliteConnection, d: &Discussion) -> Result<()> {
    let new_discussion = models::NewDiscussion {
        id: d.id.as_str(),
        report_id: d.parent.report_id().map(Id::as_str),
        drive_id: d.parent.drive_id().map(Id::as_str),
        author: d.author.as_str(),
        phase: d.phase.into(),
        content: &d.content,
        created_at: d.created_at.as_millis(),
    };
    diesel::insert_into(schema::discussions::table)
        .values(&new_discussion)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn list_discussions(
    conn: &mut SqliteConnection,
    parent: &DiscussionParent,
    phase: Option<DiscussionPhase>,
) -> Result<Vec<Discussion>> {
    use schema::discussions::dsl;
    let mut select = dsl::discussions
        .select(models::DiscussionEntity::as_select())
        .order_by((dsl::created_at, dsl::id))
        .into_boxed();
    select = match parent {
        DiscussionParent::Report(id) => select.filter(dsl::report_id.eq(id.as_str().to_owned())),
        DiscussionParent::Drive(id) => select.filter(dsl::drive_id.eq(id.as_str().to_owned())),
    };
    if let Some(phase) = phase {
        select = select.filter(dsl::phase.eq(i16::from(phase)));
    }
    select
        .load(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn delete_discussions_of_parent(
    conn: &mut SqliteConnection,
    parent: &DiscussionParent,
) -> Result<usize> {
    use schema::discussions::dsl;
    match parent {
        DiscussionParent::Report(id) => {
            diesel::delete(dsl::discussions.filter(dsl::report_id.eq(id.as_str())))
                .execute(conn)
        }
        DiscussionParent::Drive(id) => {
            diesel::delete(dsl::discussions.filter(dsl::drive_id.eq(id.as_str())))
                .execute(conn)
        }
    }
    .map_err(from_diesel_err)
}
