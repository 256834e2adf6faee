use crate::quest::Objective;
use crate::streak::next_streak;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Percentage of objectives completed, rounded half away from zero.
///
/// A quest without objectives reports `0`.
#[must_use]
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let done = completed.min(total);
    // round(100 * done / total) in integer arithmetic
    let pct = (200 * done + total) / (2 * total);
    u8::try_from(pct).unwrap_or(100)
}

/// Client-local progress for the current session. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionProgress {
    pub completed: BTreeSet<String>,
    pub points: i64,
    pub streak: u32,
    pub last_completion: Option<DateTime<Utc>>,
}

impl SessionProgress {
    #[must_use]
    pub fn is_completed(&self, objective_id: &str) -> bool {
        self.completed.contains(objective_id)
    }

    /// Clear the completion set and the point total for a fresh quest.
    pub fn reset_for_new_quest(&mut self) {
        self.completed.clear();
        self.points = 0;
    }

    /// Record a confirmed completion. Returns `false` without touching any
    /// field when the objective was already recorded.
    pub fn record(&mut self, objective: &Objective, now: DateTime<Utc>) -> bool {
        if !self.completed.insert(objective.id.clone()) {
            return false;
        }
        self.points = self.points.saturating_add(objective.points);
        self.streak = next_streak(self.streak, self.last_completion, now);
        self.last_completion = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use chrono::{Duration, TimeZone};

    fn objective(id: &str, points: i64) -> Objective {
        Objective {
            id: id.into(),
            platform: Platform::GoRide,
            description: format!("task {id}"),
            points,
            promotion: None,
            location: None,
            required: None,
        }
    }

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(progress_percent(0, 3), 0);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(1, 8), 13);
        assert_eq!(progress_percent(5, 5), 100);
    }

    #[test]
    fn empty_quest_reports_zero() {
        assert_eq!(progress_percent(0, 0), 0);
        assert_eq!(progress_percent(3, 0), 0);
    }

    #[test]
    fn percent_never_exceeds_hundred() {
        assert_eq!(progress_percent(9, 4), 100);
    }

    #[test]
    fn record_is_idempotent_per_objective() {
        let now = Utc
            .with_ymd_and_hms(2024, 11, 1, 9, 0, 0)
            .single()
            .expect("timestamp");
        let mut progress = SessionProgress::default();
        assert!(progress.record(&objective("a", 40), now));
        let snapshot = progress.clone();
        assert!(!progress.record(&objective("a", 40), now + Duration::days(1)));
        assert_eq!(progress, snapshot);
        assert_eq!(progress.points, 40);
        assert_eq!(progress.streak, 1);
    }

    #[test]
    fn reset_keeps_streak_history() {
        let now = Utc
            .with_ymd_and_hms(2024, 11, 1, 9, 0, 0)
            .single()
            .expect("timestamp");
        let mut progress = SessionProgress::default();
        progress.record(&objective("a", 10), now);
        progress.reset_for_new_quest();
        assert!(progress.completed.is_empty());
        assert_eq!(progress.points, 0);
        assert_eq!(progress.streak, 1);
        assert_eq!(progress.last_completion, Some(now));
    }
}
