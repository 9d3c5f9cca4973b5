//! JSON structures of the civicdb API.
//!
//! All timestamps are unix timestamps in milliseconds.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, thiserror::Error),
    error("{message} ({http_status})")
)]
pub struct Error {
    pub http_status: u16,
    pub message: String,
    /// Same as `message`
    pub error: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Guest,
    User,
    Moderator,
    Admin,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub display_name: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UserRoleUpdate {
    pub role: UserRole,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat     : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng     : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city    : Option<String>,
}

// ---   reports   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Pending,
    AuthorityContacted,
    EligibleForDrive,
    EligibleForVote,
    InProgress,
    UnderMonitoring,
    Resolved,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: ReportStatus,
    pub location: Location,
    pub media_urls: Vec<String>,
    pub reporter_id: String,
    pub vote_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_vote_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voting_open_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voting_close_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Request body for creating or updating a report.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub media_urls: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct StatusLog {
    pub id: String,
    pub report_id: String,
    pub from: ReportStatus,
    pub to: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ReportStatusUpdate {
    pub status: ReportStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewResolution {
    pub description: String,
    #[serde(default)]
    pub evidence_urls: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub id: String,
    pub report_id: String,
    pub resolved_by: String,
    pub description: String,
    pub evidence_urls: Vec<String>,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct ResolvedReport {
    pub resolution: Resolution,
    pub completed_monitorings: usize,
}

// ---   votes   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewReportVote {
    pub report_id: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewDriveVote {
    pub drive_id: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: String,
    /// Either a report or a drive
    pub target_id: String,
    pub user_id: String,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct ReportVoteCreated {
    pub message: String,
    pub vote: Vote,
    pub vote_count: u32,
    pub status: ReportStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct DriveVoteCreated {
    pub message: String,
    pub vote: Vote,
    pub vote_count: u32,
    pub status: DriveStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct VoteSummary {
    pub count: u32,
    pub has_voted: bool,
}

// ---   authorities   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactMode {
    Email,
    Phone,
    Website,
    SocialMedia,
    InPerson,
    Other,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactStatus {
    Contacted,
    Responded,
    NoResponse,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Authority {
    pub id            : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name          : Option<String>,
    pub category      : String,
    pub role          : String,
    pub city          : String,
    pub contact_mode  : ContactMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email         : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone         : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_contact : Option<String>,
    pub submitted_by  : String,
    pub created_at    : i64,
}

/// Request body for a new authority.
///
/// The contact mode is kept as plain text to report
/// missing or unknown modes as validation errors.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewAuthority {
    #[serde(default)]
    pub name          : Option<String>,
    #[serde(default)]
    pub category      : Option<String>,
    #[serde(default)]
    pub role          : Option<String>,
    #[serde(default)]
    pub city          : Option<String>,
    #[serde(default)]
    pub contact_mode  : Option<String>,
    #[serde(default)]
    pub email         : Option<String>,
    #[serde(default)]
    pub phone         : Option<String>,
    #[serde(default)]
    pub website       : Option<String>,
    #[serde(default)]
    pub other_contact : Option<String>,
}

/// Request body for contacting either an existing
/// or a new authority about a report.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct ContactAuthority {
    #[serde(default)]
    pub authority_id: Option<String>,
    #[serde(flatten)]
    pub new_authority: NewAuthority,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct ReportAuthority {
    pub id: String,
    pub report_id: String,
    pub authority_id: String,
    pub status: ContactStatus,
    pub contacted_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub contacted_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct AuthorityContact {
    pub contact: ReportAuthority,
    pub authority: Authority,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct AuthorityContacted {
    pub message: String,
    pub contact: ReportAuthority,
    pub authority: Authority,
    pub report_status: ReportStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ContactStatusUpdate {
    pub status: ContactStatus,
}

// ---   drives   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriveStatus {
    Planned,
    Ongoing,
    VotingFinalized,
    Completed,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Drive {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: DriveStatus,
    pub organizer_id: String,
    pub participant_target: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    pub location: Location,
    pub vote_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_vote_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voting_open_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voting_close_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub report_ids: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewDrive {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub participant_target: i64,
    #[serde(default)]
    pub date: Option<i64>,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub tasks: Vec<NewTask>,
    #[serde(default)]
    pub report_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct CreatedDrive {
    pub drive: Drive,
    pub tasks: Vec<Task>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct DriveStatusUpdate {
    pub status: DriveStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct LinkReport {
    pub report_id: String,
}

/// Number of removed rows per dependent resource.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct DeletedDrive {
    pub tasks: usize,
    pub report_links: usize,
    pub votes: usize,
    pub enhancements: usize,
    pub monitorings: usize,
    pub volunteers: usize,
    pub discussions: usize,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub drive_id: String,
    pub user_id: String,
    pub joined_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewEnhancement {
    pub content: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Enhancement {
    pub id: String,
    pub drive_id: String,
    pub suggested_by: String,
    pub content: String,
    pub created_at: i64,
}

// ---   tasks   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Open,
    Assigned,
    Completed,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub drive_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub report_id: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct AssignTask {
    #[serde(default)]
    pub assignee_id: Option<String>,
}

// ---   monitorings   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MonitoringStatus {
    Active,
    Completed,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Monitoring {
    pub id: String,
    pub report_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_id: Option<String>,
    pub monitor_id: String,
    pub status: MonitoringStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub started_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewMonitoring {
    #[serde(default)]
    pub drive_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

// ---   discussions   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscussionPhase {
    General,
    ReportVoting,
    DriveVoting,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_id: Option<String>,
    pub author_id: String,
    pub phase: DiscussionPhase,
    pub content: String,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewDiscussion {
    #[serde(default)]
    pub report_id: Option<String>,
    #[serde(default)]
    pub drive_id: Option<String>,
    #[serde(default = "default_phase")]
    pub phase: DiscussionPhase,
    pub content: String,
}

const fn default_phase() -> DiscussionPhase {
    DiscussionPhase::General
}

// ---   misc   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Message {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct SweepResult {
    pub success: bool,
    pub updated: usize,
}
