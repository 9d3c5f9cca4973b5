use super::*;

pub fn cast_report_vote(
    connections: &sqlite::Connections,
    rules: &LifecycleRules,
    account_id: &Id,
    report_id: &Id,
) -> Result<usecases::ReportVoteOutcome> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::cast_report_vote(conn, rules, account_id, report_id, now).map_err(|err| {
            warn!("Failed to vote for report {}: {}", report_id, err);
            err
        })
    })?)
}

pub fn cast_drive_vote(
    connections: &sqlite::Connections,
    rules: &LifecycleRules,
    account_id: &Id,
    drive_id: &Id,
) -> Result<usecases::DriveVoteOutcome> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::authorize_user_by_id(conn, account_id, Role::User)?;
        usecases::cast_drive_vote(conn, rules, account_id, drive_id, now).map_err(|err| {
            warn!("Failed to vote for drive {}: {}", drive_id, err);
            err
        })
    })?)
}
