use super::*;

impl_repo_for_connections!(ReportRepo {
    fn create_report(&self, report: &Report) -> Result<()>;
    fn get_report(&self, id: &Id) -> Result<Report>;
    fn list_reports(&self, query: &ReportQuery, pagination: &Pagination) -> Result<Vec<Report>>;
    fn update_report_content(&self, report: &Report) -> Result<()>;
    fn set_report_status(&self, id: &Id, status: ReportStatus, at: Timestamp) -> Result<()>;
    fn open_report_voting(&self, id: &Id, window: &VotingWindow) -> Result<bool>;
    fn increment_report_vote_count(&self, id: &Id) -> Result<u32>;
    fn promote_report_on_vote_threshold(&self, id: &Id, threshold: u32, at: Timestamp) -> Result<Option<u32>>;
    fn escalate_pending_reports(&self, created_before: Timestamp, at: Timestamp) -> Result<Vec<Id>>;
    fn delete_report(&self, id: &Id) -> Result<()>;
});

impl_repo_for_connections!(ReportVoteRepo {
    fn create_report_vote(&self, vote: &ReportVote) -> Result<()>;
    fn has_voted_for_report(&self, report_id: &Id, user_id: &Id) -> Result<bool>;
    fn delete_report_votes_of_report(&self, report_id: &Id) -> Result<usize>;
});

impl_repo_for_connections!(StatusLogRepo {
    fn append_status_log(&self, log: &StatusLog) -> Result<()>;
    fn list_status_logs(&self, report_id: &Id) -> Result<Vec<StatusLog>>;
    fn delete_status_logs_of_report(&self, report_id: &Id) -> Result<usize>;
});

impl_repo_for_connections!(ResolutionRepo {
    fn create_report_resolution(&self, resolution: &ReportResolution) -> Result<()>;
    fn try_get_report_resolution(&self, report_id: &Id) -> Result<Option<ReportResolution>>;
    fn delete_report_resolution_of_report(&self, report_id: &Id) -> Result<usize>;
});

const IN_PROGRESS: i16 = ReportStatus::InProgress as i16;
const PENDING: i16 = ReportStatus::Pending as i16;
const ELIGIBLE_FOR_DRIVE: i16 = ReportStatus::EligibleForDrive as i16;

// Below the bound variable limit of older SQLite versions (999)
const MAX_IDS_PER_UPDATE: usize = 500;

fn load_report(entity: models::ReportEntity, media_urls: Vec<String>) -> Result<Report> {
    let models::ReportEntity {
        id,
        title,
        description,
        status,
        lat,
        lng,
        address,
        city,
        reporter,
        vote_count,
        final_vote_count,
        voting_open_at,
        voting_close_at,
        created_at,
        updated_at,
    } = entity;
    Ok(Report {
        id: id.into(),
        title,
        description,
        status: load_primitive(status)?,
        location: Location {
            lat,
            lng,
            address,
            city,
        },
        media_urls,
        reporter: reporter.into(),
        votes: load_vote_tally(vote_count, final_vote_count, voting_open_at, voting_close_at)?,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn load_media_urls(conn: &mut SqliteConnection, report_id: &str) -> Result<Vec<String>> {
    use schema::report_media::dsl;
    dsl::report_media
        .select(dsl::url)
        .filter(dsl::report_id.eq(report_id))
        .order_by(dsl::pos)
        .load(conn)
        .map_err(from_diesel_err)
}

fn insert_media_urls(conn: &mut SqliteConnection, report_id: &str, urls: &[String]) -> Result<()> {
    let media: Vec<_> = urls
        .iter()
        .enumerate()
        .map(|(pos, url)| models::ReportMedia {
            report_id: report_id.to_owned(),
            pos: pos as i32,
            url: url.clone(),
        })
        .collect();
    if media.is_empty() {
        return Ok(());
    }
    diesel::insert_into(schema::report_media::table)
        .values(&media)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn create_report(conn: &mut SqliteConnection, r: &Report) -> Result<()> {
    let window = r.votes.window.as_ref();
    let new_report = models::NewReport {
        id: r.id.as_str(),
        title: &r.title,
        description: &r.description,
        status: r.status.into(),
        lat: r.location.lat,
        lng: r.location.lng,
        address: r.location.address.as_deref(),
        city: r.location.city.as_deref(),
        reporter: r.reporter.as_str(),
        vote_count: store_count(r.votes.vote_count),
        final_vote_count: r.votes.final_vote_count.map(store_count),
        voting_open_at: window.map(|w| w.open_at.as_millis()),
        voting_close_at: window.map(|w| w.close_at.as_millis()),
        created_at: r.created_at.as_millis(),
        updated_at: r.updated_at.as_millis(),
    };
    diesel::insert_into(schema::reports::table)
        .values(&new_report)
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_media_urls(conn, r.id.as_str(), &r.media_urls)
}

fn get_report(conn: &mut SqliteConnection, id: &Id) -> Result<Report> {
    use schema::reports::dsl;
    let entity = dsl::reports
        .filter(dsl::id.eq(id.as_str()))
        .select(models::ReportEntity::as_select())
        .first(conn)
        .map_err(from_diesel_err)?;
    let media_urls = load_media_urls(conn, id.as_str())?;
    load_report(entity, media_urls)
}

fn list_reports(
    conn: &mut SqliteConnection,
    query: &ReportQuery,
    pagination: &Pagination,
) -> Result<Vec<Report>> {
    use schema::reports::dsl;
    let mut select = dsl::reports
        .select(models::ReportEntity::as_select())
        .order_by((dsl::created_at.desc(), dsl::id))
        .into_boxed();
    if let Some(status) = query.status {
        select = select.filter(dsl::status.eq(i16::from(status)));
    }
    if let Some(reporter) = &query.reporter {
        select = select.filter(dsl::reporter.eq(reporter.as_str().to_owned()));
    }
    let entities = apply_pagination(select, pagination)
        .load(conn)
        .map_err(from_diesel_err)?;
    entities
        .into_iter()
        .map(|entity| {
            let media_urls = load_media_urls(conn, &entity.id)?;
            load_report(entity, media_urls)
        })
        .collect()
}

fn update_report_content(conn: &mut SqliteConnection, r: &Report) -> Result<()> {
    use schema::reports::dsl;
    let content = models::ReportContent {
        title: &r.title,
        description: &r.description,
        lat: r.location.lat,
        lng: r.location.lng,
        address: r.location.address.as_deref(),
        city: r.location.city.as_deref(),
        updated_at: r.updated_at.as_millis(),
    };
    let count = diesel::update(dsl::reports.filter(dsl::id.eq(r.id.as_str())))
        .set(&content)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)?;
    {
        use schema::report_media::dsl;
        diesel::delete(dsl::report_media.filter(dsl::report_id.eq(r.id.as_str())))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    insert_media_urls(conn, r.id.as_str(), &r.media_urls)
}

fn set_report_status(
    conn: &mut SqliteConnection,
    id: &Id,
    status: ReportStatus,
    at: Timestamp,
) -> Result<()> {
    use schema::reports::dsl;
    let count = diesel::update(dsl::reports.filter(dsl::id.eq(id.as_str())))
        .set((
            dsl::status.eq(i16::from(status)),
            dsl::updated_at.eq(at.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn report_exists(conn: &mut SqliteConnection, id: &Id) -> Result<bool> {
    use schema::reports::dsl;
    diesel::select(diesel::dsl::exists(
        dsl::reports.filter(dsl::id.eq(id.as_str())),
    ))
    .get_result(conn)
    .map_err(from_diesel_err)
}

fn open_report_voting(conn: &mut SqliteConnection, id: &Id, window: &VotingWindow) -> Result<bool> {
    use schema::reports::dsl;
    let count = diesel::update(
        dsl::reports
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
    if !report_exists(conn, id)? {
        return Err(repo::Error::NotFound);
    }
    Ok(false)
}

fn increment_report_vote_count(conn: &mut SqliteConnection, id: &Id) -> Result<u32> {
    use schema::reports::dsl;
    let count = diesel::update(dsl::reports.filter(dsl::id.eq(id.as_str())))
        .set(dsl::vote_count.eq(dsl::vote_count + 1))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)?;
    let vote_count = dsl::reports
        .select(dsl::vote_count)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i32>(conn)
        .map_err(from_diesel_err)?;
    load_count(vote_count)
}

fn promote_report_on_vote_threshold(
    conn: &mut SqliteConnection,
    id: &Id,
    threshold: u32,
    at: Timestamp,
) -> Result<Option<u32>> {
    use schema::reports::dsl;
    let count = diesel::update(
        dsl::reports
            .filter(dsl::id.eq(id.as_str()))
            .filter(dsl::vote_count.ge(store_count(threshold)))
            .filter(dsl::final_vote_count.is_null())
            .filter(dsl::status.lt(IN_PROGRESS)),
    )
    .set((
        dsl::status.eq(IN_PROGRESS),
        dsl::final_vote_count.eq(dsl::vote_count.nullable()),
        dsl::updated_at.eq(at.as_millis()),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        // Reports that already reached IN_PROGRESS otherwise,
        // e.g. through a drive, keep their status
        let frozen = diesel::update(
            dsl::reports
                .filter(dsl::id.eq(id.as_str()))
                .filter(dsl::vote_count.ge(store_count(threshold)))
                .filter(dsl::final_vote_count.is_null()),
        )
        .set((
            dsl::final_vote_count.eq(dsl::vote_count.nullable()),
            dsl::updated_at.eq(at.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
        if frozen == 0 && !report_exists(conn, id)? {
            return Err(repo::Error::NotFound);
        }
        return Ok(None);
    }
    let final_vote_count = dsl::reports
        .select(dsl::final_vote_count)
        .filter(dsl::id.eq(id.as_str()))
        .first::<Option<i32>>(conn)
        .map_err(from_diesel_err)?;
    final_vote_count.map(load_count).transpose()
}

fn escalate_pending_reports(
    conn: &mut SqliteConnection,
    created_before: Timestamp,
    at: Timestamp,
) -> Result<Vec<Id>> {
    use schema::reports::dsl;
    let ids = dsl::reports
        .select(dsl::id)
        .filter(dsl::status.eq(PENDING))
        .filter(dsl::created_at.lt(created_before.as_millis()))
        .load::<String>(conn)
        .map_err(from_diesel_err)?;
    // The status is checked again to skip reports that have
    // been changed since they were selected
    let mut count = 0;
    for chunk in ids.chunks(MAX_IDS_PER_UPDATE) {
        count += diesel::update(
            dsl::reports
                .filter(dsl::id.eq_any(chunk))
                .filter(dsl::status.eq(PENDING)),
        )
        .set((
            dsl::status.eq(ELIGIBLE_FOR_DRIVE),
            dsl::updated_at.eq(at.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    }
    debug_assert_eq!(count, ids.len());
    Ok(ids.into_iter().map(Id::from).collect())
}

fn delete_report(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    {
        use schema::report_media::dsl;
        diesel::delete(dsl::report_media.filter(dsl::report_id.eq(id.as_str())))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    use schema::reports::dsl;
    let count = diesel::delete(dsl::reports.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn create_report_vote(conn: &mut SqliteConnection, vote: &ReportVote) -> Result<()> {
    let new_vote = models::NewReportVote {
        id: vote.id.as_str(),
        report_id: vote.report_id.as_str(),
        user_id: vote.user_id.as_str(),
        created_at: vote.created_at.as_millis(),
    };
    diesel::insert_into(schema::report_votes::table)
        .values(&new_vote)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn has_voted_for_report(conn: &mut SqliteConnection, report_id: &Id, user_id: &Id) -> Result<bool> {
    use schema::report_votes::dsl;
    diesel::select(diesel::dsl::exists(
        dsl::report_votes
            .filter(dsl::report_id.eq(report_id.as_str()))
            .filter(dsl::user_id.eq(user_id.as_str())),
    ))
    .get_result(conn)
    .map_err(from_diesel_err)
}

fn delete_report_votes_of_report(conn: &mut SqliteConnection, report_id: &Id) -> Result<usize> {
    use schema::report_votes::dsl;
    diesel::delete(dsl::report_votes.filter(dsl::report_id.eq(report_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn append_status_log(conn: &mut SqliteConnection, log: &StatusLog) -> Result<()> {
    let new_log = models::NewStatusLog {
        id: log.id.as_str(),
        report_id: log.report_id.as_str(),
        from_status: log.from.into(),
        to_status: log.to.into(),
        changed_by: log.changed_by.as_ref().map(Id::as_str),
        reason: log.reason.as_deref(),
        created_at: log.created_at.as_millis(),
    };
    diesel::insert_into(schema::status_logs::table)
        .values(&new_log)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn list_status_logs(conn: &mut SqliteConnection, report_id: &Id) -> Result<Vec<StatusLog>> {
    use schema::status_logs::dsl;
    dsl::status_logs
        .filter(dsl::report_id.eq(report_id.as_str()))
        .order_by((dsl::created_at, dsl::rowid))
        .select(models::StatusLogEntity::as_select())
        .load(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|entity| {
            let models::StatusLogEntity {
                id,
                report_id,
                from_status,
                to_status,
                changed_by,
                reason,
                created_at,
            } = entity;
            Ok(StatusLog {
                id: id.into(),
                report_id: report_id.into(),
                from: load_primitive(from_status)?,
                to: load_primitive(to_status)?,
                changed_by: changed_by.map(Id::from),
                reason,
                created_at: Timestamp::from_millis(created_at),
            })
        })
        .collect()
}

fn delete_status_logs_of_report(conn: &mut SqliteConnection, report_id: &Id) -> Result<usize> {
    use schema::status_logs::dsl;
    diesel::delete(dsl::status_logs.filter(dsl::report_id.eq(report_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn create_report_resolution(conn: &mut SqliteConnection, res: &ReportResolution) -> Result<()> {
    let new_resolution = models::NewReportResolution {
        id: res.id.as_str(),
        report_id: res.report_id.as_str(),
        resolved_by: res.resolved_by.as_str(),
        description: &res.description,
        created_at: res.created_at.as_millis(),
    };
    diesel::insert_into(schema::report_resolutions::table)
        .values(&new_resolution)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let evidence: Vec<_> = res
        .evidence_urls
        .iter()
        .enumerate()
        .map(|(pos, url)| models::ResolutionEvidence {
            resolution_id: res.id.to_string(),
            pos: pos as i32,
            url: url.clone(),
        })
        .collect();
    if !evidence.is_empty() {
        diesel::insert_into(schema::resolution_evidence::table)
            .values(&evidence)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

fn try_get_report_resolution(
    conn: &mut SqliteConnection,
    report_id: &Id,
) -> Result<Option<ReportResolution>> {
    use schema::report_resolutions::dsl;
    let Some(entity) = dsl::report_resolutions
        .filter(dsl::report_id.eq(report_id.as_str()))
        .select(models::ReportResolutionEntity::as_select())
        .first(conn)
        .optional()
        .map_err(from_diesel_err)?
    else {
        return Ok(None);
    };
    let evidence_urls = {
        use schema::resolution_evidence::dsl;
        dsl::resolution_evidence
            .select(dsl::url)
            .filter(dsl::resolution_id.eq(&entity.id))
            .order_by(dsl::pos)
            .load::<String>(conn)
            .map_err(from_diesel_err)?
    };
    let models::ReportResolutionEntity {
        id,
        report_id,
        resolved_by,
        description,
        created_at,
    } = entity;
    Ok(Some(ReportResolution {
        id: id.into(),
        report_id: report_id.into(),
        resolved_by: resolved_by.into(),
        description,
        evidence_urls,
        created_at: Timestamp::from_millis(created_at),
    }))
}

fn delete_report_resolution_of_report(
    conn: &mut SqliteConnection,
    report_id: &Id,
) -> Result<usize> {
    use schema::report_resolutions::dsl;
    let ids = dsl::report_resolutions
        .select(dsl::id)
        .filter(dsl::report_id.eq(report_id.as_str()))
        .load::<String>(conn)
        .map_err(from_diesel_err)?;
    {
        use schema::resolution_evidence::dsl;
        diesel::delete(dsl::resolution_evidence.filter(dsl::resolution_id.eq_any(&ids)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    diesel::delete(dsl::report_resolutions.filter(dsl::id.eq_any(&ids)))
        .execute(conn)
        .map_err(from_diesel_err)
}
