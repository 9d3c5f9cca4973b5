//! Tunable parameters of the report and drive lifecycles.

use crate::entities::Duration;

pub const DEFAULT_REPORT_VOTE_THRESHOLD: u32 = 3;
pub const DEFAULT_DRIVE_VOTE_THRESHOLD: u32 = 5;
pub const DEFAULT_VOTING_WINDOW_DAYS: i64 = 7;
pub const DEFAULT_ESCALATION_AFTER_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleRules {
    /// Number of votes that moves a report into `IN_PROGRESS`.
    pub report_vote_threshold: u32,
    /// Number of votes that moves a planned drive into `ONGOING`.
    pub drive_vote_threshold: u32,
    /// Duration of a voting window, starting with the first vote.
    pub voting_window: Duration,
    /// Age of a pending report before it becomes eligible for a drive.
    pub escalation_after: Duration,
}

impl Default for LifecycleRules {
    fn default() -> Self {
        Self {
            report_vote_threshold: DEFAULT_REPORT_VOTE_THRESHOLD,
            drive_vote_threshold: DEFAULT_DRIVE_VOTE_THRESHOLD,
            voting_window: Duration::days(DEFAULT_VOTING_WINDOW_DAYS),
            escalation_after: Duration::days(DEFAULT_ESCALATION_AFTER_DAYS),
        }
    }
}
