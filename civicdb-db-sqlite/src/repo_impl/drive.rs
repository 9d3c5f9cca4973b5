use super::*;

impl_repo_for_connections!(DriveRepo {
    fn create_drive(&self, drive: &Drive) -> Result<()>;
    fn get_drive(&self, id: &Id) -> Result<Drive>;
    fn list_drives(&self, query: &DriveQuery, pagination: &Pagination) -> Result<Vec<Drive>>;
    fn set_drive_status(&self, id: &Id, status: DriveStatus, at: Timestamp) -> Result<()>;
    fn open_drive_voting(&self, id: &Id, window: &VotingWindow) -> Result<bool>;
    fn increment_drive_vote_count(&self, id: &Id) -> Result<u32>;
    fn promote_drive_on_vote_threshold(&self, id: &Id, threshold: u32, at: Timestamp) -> Result<Option<u32>>;
    fn delete_drive(&self, id: &Id) -> Result<()>;
    fn link_report_to_drive(&self, drive_id: &Id, report_id: &Id) -> Result<()>;
    fn report_ids_of_drive(&self, drive_id: &Id) -> Result<Vec<Id>>;
    fn drive_ids_of_report(&self, report_id: &Id) -> Result<Vec<Id>>;
    fn delete_drive_reports_of_drive(&self, drive_id: &Id) -> Result<usize>;
    fn delete_drive_reports_of_report(&self, report_id: &Id) -> Result<usize>;
});

impl_repo_for_connections!(DriveVoteRepo {
    fn create_drive_vote(&self, vote: &DriveVote) -> Result<()>;
    fn has_voted_for_drive(&self, drive_id: &Id, user_id: &Id) -> Result<bool>;
    fn delete_drive_votes_of_drive(&self, drive_id: &Id) -> Result<usize>;
});

impl_repo_for_connections!(VolunteerRepo {
    fn add_drive_volunteer(&self, volunteer: &DriveVolunteer) -> Result<()>;
    fn remove_drive_volunteer(&self, drive_id: &Id, user_id: &Id) -> Result<()>;
    fn list_drive_volunteers(&self, drive_id: &Id) -> Result<Vec<DriveVolunteer>>;
    fn delete_drive_volunteers_of_drive(&self, drive_id: &Id) -> Result<usize>;
});

impl_repo_for_connections!(EnhancementRepo {
    fn create_drive_enhancement(&self, enhancement: &DriveEnhancement) -> Result<()>;
    fn list_drive_enhancements(&self, drive_id: &Id) -> Result<Vec<DriveEnhancement>>;
    fn delete_drive_enhancements_of_drive(&self, drive_id: &Id) -> Result<usize>;
});

const PLANNED: i16 = DriveStatus::Planned as i16;
const ONGOING: i16 = DriveStatus::Ongoing as i16;

impl TryFrom<models::DriveEntity> for Drive {
    type Error = repo::Error;
    fn try_from(from: models::DriveEntity) -> Result<Self> {
        let models::DriveEntity {
            id,
            title,
            description,
            status,
            organizer,
            participant_target,
            date,
            lat,
            lng,
            address,
            city,
            vote_count,
            final_vote_count,
            voting_open_at,
            voting_close_at,
            created_at,
            updated_at,
        } = from;
        Ok(Self {
            id: id.into(),
            title,
            description,
            status: load_primitive(status)?,
            organizer: organizer.into(),
            participant_target: load_count(participant_target)?,
            date: date.map(Timestamp::from_millis),
            location: Location {
                lat,
                lng,
                address,
                city,
            },
            votes: load_vote_tally(vote_count, final_vote_count, voting_open_at, voting_close_at)?,
            created_at: Timestamp::from_millis(created_at),
            updated_at: Timestamp::from_millis(updated_at),
        })
    }
}

fn create_drive(conn: &mut SqliteConnection, d: &Drive) -> Result<()> {
    let window = d.votes.window.as_ref();
    let new_drive = models::NewDrive {
        id: d.id.as_str(),
        title: &d.title,
        description: &d.description,
        status: d.status.into(),
        organizer: d.organizer.as_str(),
        participant_target: store_count(d.participant_target),
        date: d.date.map(Timestamp::as_millis),
        lat: d.location.lat,
        lng: d.location.lng,
        address: d.location.address.as_deref(),
        city: d.location.city.as_deref(),
        vote_count: store_count(d.votes.vote_count),
        final_vote_count: d.votes.final_vote_count.map(store_count),
        voting_open_at: window.map(|w| w.open_at.as_millis()),
        voting_close_at: window.map(|w| w.close_at.as_millis()),
        created_at: d.created_at.as_millis(),
        updated_at: d.updated_at.as_millis(),
    };
    diesel::insert_into(schema::drives::table)
        .values(&new_drive)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_drive(conn: &mut SqliteConnection, id: &Id) -> Result<Drive> {
    use schema::drives::dsl;
    dsl::drives
        .filter(dsl::id.eq(id.as_str()))
        .select(models::DriveEntity::as_select())
        .first(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn list_drives(
    conn: &mut SqliteConnection,
    query: &DriveQuery,
    pagination: &Pagination,
) -> Result<Vec<Drive>> {
    use schema::drives::dsl;
    let mut select = dsl::drives
        .select(models::DriveEntity::as_select())
        .order_by((dsl::created_at.desc(), dsl::id))
        .into_boxed();
    if let Some(status) = query.status {
        select = select.filter(dsl::status.eq(i16::from(status)));
    }
    if let Some(organizer) = &query.organizer {
        select = select.filter(dsl::organizer.eq(organizer.as_str().to_owned()));
    }
    apply_pagination(select, pagination)
        .load(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn set_drive_status(
    conn: &mut SqliteConnection,
    id: &Id,
    status: DriveStatus,
    at: Timestamp,
) -> Result<()> {
    use schema::drives::dsl;
    let count = diesel::update(dsl::drives.filter(dsl::id.eq(id.as_str())))
        .set((
            dsl::status.eq(i16::from(status)),
            dsl::updated_at.eq(at.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn drive_exists(conn: &mut SqliteConnection, id: &Id) -> Result<bool> {
    use schema::drives::dsl;
    diesel::select(diesel::dsl::exists(
        dsl::drives.filter(dsl::id.eq(id.as_str())),
    ))
    .get_result(conn)
    .map_err(from_diesel_err)
}

fn open_drive_voting(conn: &mut SqliteConnection, id: &Id, window: &VotingWindow) -> Result<bool> {
    use schema::drives::dsl;
    let count = diesel::update(
        dsl::drives
            .filter(dsl::id.eq(id.as_str()))
            .filter(dsl::voting_open_at.is_null()),
    )
    .set((
        dsl::voting_open_at.eq(window.open_at.as_millis()),
        dsl::voting_close_at.eq(window.close_at.as_millis()),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count > 0 {
        return Ok(true);
    }
    if !drive_exists(conn, id)? {
        return Err(repo::Error::NotFound);
    }
    Ok(false)
}

fn increment_drive_vote_count(conn: &mut SqliteConnection, id: &Id) -> Result<u32> {
    use schema::drives::dsl;
    let count = diesel::update(dsl::drives.filter(dsl::id.eq(id.as_str())))
        .set(dsl::vote_count.eq(dsl::vote_count + 1))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)?;
    let vote_count = dsl::drives
        .select(dsl::vote_count)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i32>(conn)
        .map_err(from_diesel_err)?;
    load_count(vote_count)
}

fn promote_drive_on_vote_threshold(
    conn: &mut SqliteConnection,
    id: &Id,
    threshold: u32,
    at: Timestamp,
) -> Result<Option<u32>> {
    use schema::drives::dsl;
    let count = diesel::update(
        dsl::drives
            .filter(dsl::id.eq(id.as_str()))
            .filter(dsl::vote_count.ge(store_count(threshold)))
            .filter(dsl::final_vote_count.is_null())
            .filter(dsl::status.eq(PLANNED)),
    )
    .set((
        dsl::status.eq(ONGOING),
        dsl::final_vote_count.eq(dsl::vote_count.nullable()),
        dsl::updated_at.eq(at.as_millis()),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        if !drive_exists(conn, id)? {
            return Err(repo::Error::NotFound);
        }
        return Ok(None);
    }
    let final_vote_count = dsl::drives
        .select(dsl::final_vote_count)
        .filter(dsl::id.eq(id.as_str()))
        .first::<Option<i32>>(conn)
        .map_err(from_diesel_err)?;
    final_vote_count.map(load_count).transpose()
}

fn delete_drive(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::drives::dsl;
    let count = diesel::delete(dsl::drives.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn link_report_to_drive(conn: &mut SqliteConnection, drive_id: &Id, report_id: &Id) -> Result<()> {
    let link = models::NewDriveReport {
        drive_id: drive_id.as_str(),
        report_id: report_id.as_str(),
    };
    diesel::insert_into(schema::drive_reports::table)
        .values(&link)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn report_ids_of_drive(conn: &mut SqliteConnection, drive_id: &Id) -> Result<Vec<Id>> {
    use schema::drive_reports::dsl;
    Ok(dsl::drive_reports
        .select(dsl::report_id)
        .filter(dsl::drive_id.eq(drive_id.as_str()))
        .order_by(dsl::report_id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect())
}

fn drive_ids_of_report(conn: &mut SqliteConnection, report_id: &Id) -> Result<Vec<Id>> {
    use schema::drive_reports::dsl;
    Ok(dsl::drive_reports
        .select(dsl::drive_id)
        .filter(dsl::report_id.eq(report_id.as_str()))
        .order_by(dsl::drive_id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect())
}

fn delete_drive_reports_of_drive(conn: &mut SqliteConnection, drive_id: &Id) -> Result<usize> {
    use schema::drive_reports::dsl;
    diesel::delete(dsl::drive_reports.filter(dsl::drive_id.eq(drive_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn delete_drive_reports_of_report(conn: &mut SqliteConnection, report_id: &Id) -> Result<usize> {
    use schema::drive_reports::dsl;
    diesel::delete(dsl::drive_reports.filter(dsl::report_id.eq(report_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn create_drive_vote(conn: &mut SqliteConnection, vote: &DriveVote) -> Result<()> {
    let new_vote = models::NewDriveVote {
        id: vote.id.as_str(),
        drive_id: vote.drive_id.as_str(),
        user_id: vote.user_id.as_str(),
        created_at: vote.created_at.as_millis(),
    };
    diesel::insert_into(schema::drive_votes::table)
        .values(&new_vote)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn has_voted_for_drive(conn: &mut SqliteConnection, drive_id: &Id, user_id: &Id) -> Result<bool> {
    use schema::drive_votes::dsl;
    diesel::select(diesel::dsl::exists(
        dsl::drive_votes
            .filter(dsl::drive_id.eq(drive_id.as_str()))
            .filter(dsl::user_id.eq(user_id.as_str())),
    ))
    .get_result(conn)
    .map_err(from_diesel_err)
}

fn delete_drive_votes_of_drive(conn: &mut SqliteConnection, drive_id: &Id) -> Result<usize> {
    use schema::drive_votes::dsl;
    diesel::delete(dsl::drive_votes.filter(dsl::drive_id.eq(drive_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn add_drive_volunteer(conn: &mut SqliteConnection, v: &DriveVolunteer) -> Result<()> {
    let volunteer = models::DriveVolunteer {
        drive_id: v.drive_id.to_string(),
        user_id: v.user_id.to_string(),
        joined_at: v.joined_at.as_millis(),
    };
    diesel::insert_into(schema::drive_volunteers::table)
        .values(&volunteer)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn remove_drive_volunteer(conn: &mut SqliteConnection, drive_id: &Id, user_id: &Id) -> Result<()> {
    use schema::drive_volunteers::dsl;
    let count = diesel::delete(
        dsl::drive_volunteers
            .filter(dsl::drive_id.eq(drive_id.as_str()))
            .filter(dsl::user_id.eq(user_id.as_str())),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn list_drive_volunteers(conn: &mut SqliteConnection, drive_id: &Id) -> Result<Vec<DriveVolunteer>> {
    use schema::drive_volunteers::dsl;
    Ok(dsl::drive_volunteers
        .filter(dsl::drive_id.eq(drive_id.as_str()))
        .order_by((dsl::joined_at, dsl::user_id))
        .select(models::DriveVolunteer::as_select())
        .load(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|v| DriveVolunteer {
            drive_id: v.drive_id.into(),
            user_id: v.user_id.into(),
            joined_at: Timestamp::from_millis(v.joined_at),
        })
        .collect())
}

fn delete_drive_volunteers_of_drive(conn: &mut SqliteConnection, drive_id: &Id) -> Result<usize> {
    use schema::drive_volunteers::dsl;
    diesel::delete(dsl::drive_volunteers.filter(dsl::drive_id.eq(drive_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn create_drive_enhancement(conn: &mut SqliteConnection, e: &DriveEnhancement) -> Result<()> {
    let enhancement = models::DriveEnhancement {
        id: e.id.to_string(),
        drive_id: e.drive_id.to_string(),
        suggested_by: e.suggested_by.to_string(),
        content: e.content.clone(),
        created_at: e.created_at.as_millis(),
    };
    diesel::insert_into(schema::drive_enhancements::table)
        .values(&enhancement)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn list_drive_enhancements(
    conn: &mut SqliteConnection,
    drive_id: &Id,
) -> Result<Vec<DriveEnhancement>> {
    use schema::drive_enhancements::dsl;
    Ok(dsl::drive_enhancements
        .filter(dsl::drive_id.eq(drive_id.as_str()))
        .order_by((dsl::created_at, dsl::id))
        .select(models::DriveEnhancement::as_select())
        .load(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|e| DriveEnhancement {
            id: e.id.into(),
            drive_id: e.drive_id.into(),
            suggested_by: e.suggested_by.into(),
            content: e.content,
            created_at: Timestamp::from_millis(e.created_at),
        })
        .collect())
}

fn delete_drive_enhancements_of_drive(conn: &mut SqliteConnection, drive_id: &Id) -> Result<usize> {
    use schema::drive_enhancements::dsl;
    diesel::delete(dsl::drive_enhancements.filter(dsl::drive_id.eq(drive_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)
}
