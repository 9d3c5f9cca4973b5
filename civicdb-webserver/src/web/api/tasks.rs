use super::*;

#[post("/drives/<id>/tasks", format = "application/json", data = "<new_task>")]
pub fn post_task(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
    new_task: JsonResult<json::NewTask>,
) -> CreatedResult<json::Task> {
    let new_task = from_json::new_task(new_task?.into_inner());
    let task = flows::create_task(&connections, auth.account_id()?, &id.into(), new_task)?;
    created(task.into())
}

#[get("/drives/<id>/tasks")]
pub fn get_tasks(connections: sqlite::Connections, id: &str) -> Result<Vec<json::Task>> {
    let tasks = usecases::tasks_of_drive(&connections.shared()?, &id.into())?;
    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}

// An empty body assigns the task to the current user.
#[post("/tasks/<id>/assign", data = "<assignment>")]
pub fn post_assign_task(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
    assignment: Option<Json<json::AssignTask>>,
) -> Result<json::Task> {
    let assignee = assignment
        .and_then(|json| json.into_inner().assignee_id)
        .filter(|id| !id.trim().is_empty())
        .map(Id::from);
    let task = flows::assign_task(&connections, auth.account_id()?, &id.into(), assignee)?;
    Ok(Json(task.into()))
}

#[post("/tasks/<id>/complete")]
pub fn post_complete_task(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
) -> Result<json::Task> {
    let task = flows::complete_task(&connections, auth.account_id()?, &id.into())?;
    Ok(Json(task.into()))
}

#[delete("/tasks/<id>")]
pub fn delete_task(connections: sqlite::Connections, auth: Auth, id: &str) -> StatusResult {
    flows::delete_task(&connections, auth.account_id()?, &id.into())?;
    Ok(Status::NoContent)
}
