use crate::time::{Duration, Timestamp};

/// The period during which votes are accepted.
///
/// The window is opened by the first vote and closes after a fixed
/// duration. It is never reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VotingWindow {
    pub open_at: Timestamp,
    pub close_at: Timestamp,
}

impl VotingWindow {
    pub fn open(now: Timestamp, duration: Duration) -> Self {
        Self {
            open_at: now,
            close_at: now + duration,
        }
    }

    pub fn is_closed_at(&self, now: Timestamp) -> bool {
        now > self.close_at
    }
}

/// Vote counters shared by reports and drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub vote_count: u32,
    /// Frozen once the promotion threshold has been reached.
    pub final_vote_count: Option<u32>,
    pub window: Option<VotingWindow>,
}

impl VoteTally {
    pub fn is_closed_at(&self, now: Timestamp) -> bool {
        self.window.is_some_and(|w| w.is_closed_at(now))
    }

    pub const fn is_finalized(&self) -> bool {
        self.final_vote_count.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_closes_after_duration() {
        let now = Timestamp::from_secs(100);
        let window = VotingWindow::open(now, Duration::days(7));
        assert!(!window.is_closed_at(now));
        assert!(!window.is_closed_at(now + Duration::days(7)));
        assert!(window.is_closed_at(now + Duration::days(7) + Duration::milliseconds(1)));
    }

    #[test]
    fn tally_without_window_is_open() {
        let tally = VoteTally::default();
        assert!(!tally.is_closed_at(Timestamp::now()));
        assert!(!tally.is_finalized());
    }
}
