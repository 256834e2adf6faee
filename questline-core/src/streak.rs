use crate::constants::SECONDS_PER_DAY;
use chrono::{DateTime, Utc};

/// Whole elapsed days between two instants, truncated toward zero.
///
/// Negative when `now` precedes `earlier`.
#[must_use]
pub fn whole_days_between(earlier: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - earlier).num_seconds() / SECONDS_PER_DAY
}

/// Streak after a completion at `now`, given the previous completion time.
///
/// `last` must be the timestamp from *before* this completion is recorded.
#[must_use]
pub fn next_streak(previous: u32, last: Option<DateTime<Utc>>, now: DateTime<Utc>) -> u32 {
    let Some(last) = last else {
        return 1;
    };
    match whole_days_between(last, now) {
        1 => previous.saturating_add(1),
        days if days > 1 => 1,
        // same day, or the clock moved backwards
        _ => previous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, day, hour, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn first_completion_starts_streak() {
        assert_eq!(next_streak(0, None, at(1, 9)), 1);
        assert_eq!(next_streak(7, None, at(1, 9)), 1);
    }

    #[test]
    fn consecutive_days_extend_streak() {
        let first = next_streak(0, None, at(1, 9));
        let second = next_streak(first, Some(at(1, 9)), at(2, 9));
        assert_eq!(second, 2);
    }

    #[test]
    fn same_day_keeps_streak() {
        assert_eq!(next_streak(3, Some(at(4, 8)), at(4, 22)), 3);
    }

    #[test]
    fn gap_of_three_days_resets() {
        assert_eq!(next_streak(5, Some(at(1, 9)), at(4, 9)), 1);
    }

    #[test]
    fn day_count_truncates_partial_days() {
        let last = at(1, 9);
        assert_eq!(whole_days_between(last, last + Duration::hours(23)), 0);
        assert_eq!(whole_days_between(last, last + Duration::hours(47)), 1);
        assert_eq!(whole_days_between(last, last - Duration::hours(30)), -1);
    }

    #[test]
    fn clock_skew_does_not_reset() {
        assert_eq!(next_streak(4, Some(at(5, 9)), at(3, 9)), 4);
    }

    #[test]
    fn streak_saturates() {
        assert_eq!(next_streak(u32::MAX, Some(at(1, 9)), at(2, 9)), u32::MAX);
    }
}
