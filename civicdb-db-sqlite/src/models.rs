#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix and the drive date
// are stored as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub display_name: &'a str,
    pub password: &'a str,
    pub role: i16,
    pub created_at: i64,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
pub struct UserEntity {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub password: String,
    pub role: i16,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = reports)]
pub struct NewReport<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub status: i16,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub reporter: &'a str,
    pub vote_count: i32,
    pub final_vote_count: Option<i32>,
    pub voting_open_at: Option<i64>,
    pub voting_close_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = reports, treat_none_as_null = true)]
pub struct ReportContent<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub updated_at: i64,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = reports)]
pub struct ReportEntity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: i16,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub reporter: String,
    pub vote_count: i32,
    pub final_vote_count: Option<i32>,
    pub voting_open_at: Option<i64>,
    pub voting_close_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable, Queryable, Selectable)]
#[diesel(table_name = report_media)]
pub struct ReportMedia {
    pub report_id: String,
    pub pos: i32,
    pub url: String,
}

#[derive(Insertable)]
#[diesel(table_name = report_votes)]
pub struct NewReportVote<'a> {
    pub id: &'a str,
    pub report_id: &'a str,
    pub user_id: &'a str,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = status_logs)]
pub struct NewStatusLog<'a> {
    pub id: &'a str,
    pub report_id: &'a str,
    pub from_status: i16,
    pub to_status: i16,
    pub changed_by: Option<&'a str>,
    pub reason: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = status_logs)]
pub struct StatusLogEntity {
    pub id: String,
    pub report_id: String,
    pub from_status: i16,
    pub to_status: i16,
    pub changed_by: Option<String>,
    pub reason: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = report_resolutions)]
pub struct NewReportResolution<'a> {
    pub id: &'a str,
    pub report_id: &'a str,
    pub resolved_by: &'a str,
    pub description: &'a str,
    pub created_at: i64,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = report_resolutions)]
pub struct ReportResolutionEntity {
    pub id: String,
    pub report_id: String,
    pub resolved_by: String,
    pub description: String,
    pub created_at: i64,
}

#[derive(Insertable, Queryable, Selectable)]
#[diesel(table_name = resolution_evidence)]
pub struct ResolutionEvidence {
    pub resolution_id: String,
    pub pos: i32,
    pub url: String,
}

#[derive(Insertable)]
#[diesel(table_name = authorities)]
pub struct NewAuthority<'a> {
    pub id: &'a str,
    pub name: Option<&'a str>,
    pub category: &'a str,
    pub role: &'a str,
    pub city: &'a str,
    pub contact_mode: i16,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub website: Option<&'a str>,
    pub other_contact: Option<&'a str>,
    pub submitted_by: &'a str,
    pub created_at: i64,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = authorities)]
pub struct AuthorityEntity {
    pub id: String,
    pub name: Option<String>,
    pub category: String,
    pub role: String,
    pub city: String,
    pub contact_mode: i16,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub other_contact: Option<String>,
    pub submitted_by: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = report_authorities)]
pub struct NewReportAuthority<'a> {
    pub id: &'a str,
    pub report_id: &'a str,
    pub authority_id: &'a str,
    pub status: i16,
    pub contacted_by: &'a str,
    pub message: Option<&'a str>,
    pub contacted_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = report_authorities)]
pub struct ReportAuthorityEntity {
    pub id: String,
    pub report_id: String,
    pub authority_id: String,
    pub status: i16,
    pub contacted_by: String,
    pub message: Option<String>,
    pub contacted_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = drives)]
pub struct NewDrive<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub status: i16,
    pub organizer: &'a str,
    pub participant_target: i32,
    pub date: Option<i64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub vote_count: i32,
    pub final_vote_count: Option<i32>,
    pub voting_open_at: Option<i64>,
    pub voting_close_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = drives)]
pub struct DriveEntity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: i16,
    pub organizer: String,
    pub participant_target: i32,
    pub date: Option<i64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub vote_count: i32,
    pub final_vote_count: Option<i32>,
    pub voting_open_at: Option<i64>,
    pub voting_close_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = drive_reports)]
pub struct NewDriveReport<'a> {
    pub drive_id: &'a str,
    pub report_id: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = drive_votes)]
pub struct NewDriveVote<'a> {
    pub id: &'a str,
    pub drive_id: &'a str,
    pub user_id: &'a str,
    pub created_at: i64,
}

#[derive(Insertable, Queryable, Selectable)]
#[diesel(table_name = drive_volunteers)]
pub struct DriveVolunteer {
    pub drive_id: String,
    pub user_id: String,
    pub joined_at: i64,
}

#[derive(Insertable, Queryable, Selectable)]
#[diesel(table_name = drive_enhancements)]
pub struct DriveEnhancement {
    pub id: String,
    pub drive_id: String,
    pub suggested_by: String,
    pub content: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTask<'a> {
    pub id: &'a str,
    pub drive_id: &'a str,
    pub report_id: Option<&'a str>,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub status: i16,
    pub assignee: Option<&'a str>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = tasks)]
pub struct TaskEntity {
    pub id: String,
    pub drive_id: String,
    pub report_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub status: i16,
    pub assignee: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = monitorings)]
pub struct NewMonitoring<'a> {
    pub id: &'a str,
    pub report_id: &'a str,
    pub drive_id: Option<&'a str>,
    pub monitor: &'a str,
    pub status: i16,
    pub notes: Option<&'a str>,
    pub started_at: i64,
    pub completed_at: Option<i64>,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = monitorings)]
pub struct MonitoringEntity {
    pub id: String,
    pub report_id: String,
    pub drive_id: Option<String>,
    pub monitor: String,
    pub status: i16,
    pub notes: Option<String>,
    pub started_at: i64,
    pub completed_at: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = discussions)]
pub struct NewDiscussion<'a> {
    pub id: &'a str,
    pub report_id: Option<&'a str>,
    pub drive_id: Option<&'a str>,
    pub author: &'a str,
    pub phase: i16,
    pub content: &'a str,
    pub created_at: i64,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = discussions)]
pub struct DiscussionEntity {
    pub id: String,
    pub report_id: Option<String>,
    pub drive_id: Option<String>,
    pub author: String,
    pub phase: i16,
    pub content: String,
    pub created_at: i64,
}
