use super::*;

#[post("/votes/reports", format = "application/json", data = "<vote>")]
pub fn post_report_vote(
    connections: sqlite::Connections,
    cfg: &State<Cfg>,
    auth: Auth,
    vote: JsonResult<json::NewReportVote>,
) -> CreatedResult<json::ReportVoteCreated> {
    let report_id = vote?.into_inner().report_id.into();
    let outcome =
        flows::cast_report_vote(&connections, &cfg.lifecycle, auth.account_id()?, &report_id)?;
    created(to_json::report_vote_created(outcome))
}

#[derive(FromForm)]
pub struct ReportVotesQuery<'r> {
    #[field(name = "reportId")]
    report_id: &'r str,
}

#[get("/votes/reports?<query..>")]
pub fn get_report_votes(
    connections: sqlite::Connections,
    auth: Auth,
    query: ReportVotesQuery<'_>,
) -> Result<json::VoteSummary> {
    let summary = usecases::report_vote_summary(
        &connections.shared()?,
        &query.report_id.into(),
        auth.try_account_id(),
    )?;
    Ok(Json(to_json::vote_summary(summary)))
}

#[post("/votes/drives", format = "application/json", data = "<vote>")]
pub fn post_drive_vote(
    connections: sqlite::Connections,
    cfg: &State<Cfg>,
    auth: Auth,
    vote: JsonResult<json::NewDriveVote>,
) -> CreatedResult<json::DriveVoteCreated> {
    let drive_id = vote?.into_inner().drive_id.into();
    let outcome =
        flows::cast_drive_vote(&connections, &cfg.lifecycle, auth.account_id()?, &drive_id)?;
    created(to_json::drive_vote_created(outcome))
}

#[derive(FromForm)]
pub struct DriveVotesQuery<'r> {
    #[field(name = "driveId")]
    drive_id: &'r str,
}

#[get("/votes/drives?<query..>")]
pub fn get_drive_votes(
    connections: sqlite::Connections,
    auth: Auth,
    query: DriveVotesQuery<'_>,
) -> Result<json::VoteSummary> {
    let summary = usecases::drive_vote_summary(
        &connections.shared()?,
        &query.drive_id.into(),
        auth.try_account_id(),
    )?;
    Ok(Json(to_json::vote_summary(summary)))
}
