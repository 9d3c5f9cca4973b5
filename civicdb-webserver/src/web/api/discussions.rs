use super::*;

#[post("/discussions", format = "application/json", data = "<new_discussion>")]
pub fn post_discussion(
    connections: sqlite::Connections,
    auth: Auth,
    new_discussion: JsonResult<json::NewDiscussion>,
) -> CreatedResult<json::Discussion> {
    let new_discussion = from_json::new_discussion(new_discussion?.into_inner());
    let discussion = flows::create_discussion(&connections, auth.account_id()?, new_discussion)?;
    created(discussion.into())
}

#[derive(FromForm)]
pub struct DiscussionQuery {
    #[field(name = "reportId")]
    report_id: Option<String>,
    #[field(name = "driveId")]
    drive_id: Option<String>,
    phase: Option<String>,
}

#[get("/discussions?<query..>")]
pub fn get_discussions(
    connections: sqlite::Connections,
    query: DiscussionQuery,
) -> Result<Vec<json::Discussion>> {
    let DiscussionQuery {
        report_id,
        drive_id,
        phase,
    } = query;
    let parent = usecases::discussion_parent(report_id.map(Id::from), drive_id.map(Id::from))?;
    let phase = phase
        .map(|p| p.parse::<DiscussionPhase>())
        .transpose()
        .map_err(|_| ParameterError::Status)?;
    let discussions = usecases::list_discussions(&connections.shared()?, &parent, phase)?;
    Ok(Json(discussions.into_iter().map(Into::into).collect()))
}
