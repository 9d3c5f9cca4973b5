use std::{fmt::Display, result};

use civicdb_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, catch, catchers, delete, get,
    http::{Cookie, CookieJar, SameSite, Status},
    patch, post,
    response::{self, Responder},
    routes, Catcher, FromForm, Request, Route, State,
};

use super::{guards::*, sqlite, Cfg};
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
};
use civicdb_application::prelude as flows;
use civicdb_core::usecases::Error as ParameterError;

mod authorities;
mod cron;
mod discussions;
mod drives;
mod error;
mod monitorings;
mod reports;
mod tasks;
mod users;
mod util;
mod votes;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type CreatedResult<T> = result::Result<(Status, Json<T>), ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_user,
        users::post_login,
        users::post_logout,
        users::get_current_user,
        users::patch_user_role,
        // ---   reports   --- //
        reports::post_report,
        reports::get_reports,
        reports::get_report,
        reports::patch_report,
        reports::delete_report,
        reports::patch_report_status,
        reports::get_status_log,
        reports::post_resolve,
        // ---   votes   --- //
        votes::post_report_vote,
        votes::get_report_votes,
        votes::post_drive_vote,
        votes::get_drive_votes,
        // ---   authorities   --- //
        authorities::post_contact_authority,
        authorities::get_report_authorities,
        authorities::patch_contact_status,
        authorities::post_authority,
        authorities::get_authorities,
        // ---   drives   --- //
        drives::post_drive,
        drives::get_drives,
        drives::get_drive,
        drives::patch_drive_status,
        drives::post_drive_report,
        drives::delete_drive,
        drives::post_volunteer,
        drives::delete_volunteer,
        drives::get_volunteers,
        drives::post_enhancement,
        drives::get_enhancements,
        // ---   tasks   --- //
        tasks::post_task,
        tasks::get_tasks,
        tasks::post_assign_task,
        tasks::post_complete_task,
        tasks::delete_task,
        // ---   monitorings   --- //
        monitorings::post_monitoring,
        monitorings::get_monitorings,
        monitorings::post_complete_monitoring,
        // ---   discussions   --- //
        discussions::post_discussion,
        discussions::get_discussions,
        // ---   cron   --- //
        cron::post_auto_update_reports,
        cron::get_auto_update_reports,
        util::get_version,
    ]
}

/// Answers requests that no route could handle with the
/// same JSON error structure as the handlers.
#[catch(default)]
fn default_catcher(status: Status, _: &Request<'_>) -> (Status, Json<JsonErrorResponse>) {
    let message = status.reason_lossy().to_owned();
    let error = JsonErrorResponse {
        http_status: status.code,
        error: message.clone(),
        message,
    };
    (status, Json(error))
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        error: message.clone(),
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

fn pagination(offset: Option<u64>, limit: Option<u64>) -> Pagination {
    Pagination { offset, limit }
}

fn created<T>(value: T) -> CreatedResult<T> {
    Ok((Status::Created, Json(value)))
}
