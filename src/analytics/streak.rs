//! Consecutive-day check-in streaks.
//!
//! Derived data only: streaks are recomputed from the full entry timestamp
//! set on every render, never persisted. The source of truth is always the
//! entry timestamps.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use std::collections::BTreeSet;

use crate::analytics::dates::day_key;
use crate::format::format_relative_time;

/// Streak view-model for the dashboard header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreakData {
    /// Consecutive days ending today or yesterday (0 once a gap opens)
    pub current: i64,
    /// Best consecutive-day run anywhere in the history
    pub longest: i64,
    /// Most recent check-in instant
    pub last_check_in: Option<DateTime<Utc>>,
    /// Relative display string for the most recent check-in
    pub last_check_in_relative: Option<String>,
    /// Whether today already has a check-in
    pub is_active_today: bool,
    /// Days left before the current streak breaks (0 if already active today)
    pub days_until_break: i64,
}

/// Calculate streak data from check-in timestamps.
///
/// Duplicates on the same calendar day count once. A streak continues as
/// long as each successive day is exactly one calendar day apart; the
/// current streak requires its most recent day to be today or yesterday.
pub fn calculate_streak(dates: &[DateTime<Utc>]) -> StreakData {
    let Some(&last_check_in) = dates.iter().max() else {
        return StreakData::default();
    };

    let days: BTreeSet<NaiveDate> = dates.iter().map(|&ts| day_key(ts)).collect();
    let today = Local::now().date_naive();

    let longest = longest_run(&days);
    let most_recent = *days.iter().next_back().unwrap_or(&today);
    let current = if today - most_recent <= Duration::days(1) {
        run_ending_at(&days, most_recent)
    } else {
        0
    };

    let is_active_today = days.contains(&today);

    StreakData {
        current,
        longest,
        last_check_in: Some(last_check_in),
        last_check_in_relative: Some(format_relative_time(last_check_in)),
        is_active_today,
        days_until_break: if is_active_today { 0 } else { 1 },
    }
}

/// Length of the consecutive run whose most recent day is `end`.
fn run_ending_at(days: &BTreeSet<NaiveDate>, end: NaiveDate) -> i64 {
    let mut run = 0;
    let mut cursor = end;
    while days.contains(&cursor) {
        run += 1;
        cursor -= Duration::days(1);
    }
    run
}

/// Best consecutive-day run anywhere in the set.
fn longest_run(days: &BTreeSet<NaiveDate>) -> i64 {
    let mut longest = 0i64;
    let mut run = 0i64;
    let mut previous: Option<NaiveDate> = None;

    for &day in days {
        run = match previous {
            Some(prev) if day - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days_ago(n: i64) -> DateTime<Utc> {
        Utc::now() - Duration::days(n)
    }

    #[test]
    fn test_empty_input() {
        let streak = calculate_streak(&[]);
        assert_eq!(streak.current, 0);
        assert_eq!(streak.longest, 0);
        assert!(streak.last_check_in.is_none());
        assert!(!streak.is_active_today);
    }

    #[test]
    fn test_single_entry_today() {
        let streak = calculate_streak(&[Utc::now()]);
        assert_eq!(streak.current, 1);
        assert_eq!(streak.longest, 1);
        assert!(streak.is_active_today);
        assert_eq!(streak.days_until_break, 0);
    }

    #[test]
    fn test_three_day_run_ending_today() {
        let streak = calculate_streak(&[days_ago(0), days_ago(1), days_ago(2)]);
        assert_eq!(streak.current, 3);
        assert_eq!(streak.longest, 3);
    }

    #[test]
    fn test_run_ending_yesterday_still_current() {
        let streak = calculate_streak(&[days_ago(1), days_ago(2)]);
        assert_eq!(streak.current, 2);
        assert!(!streak.is_active_today);
        assert_eq!(streak.days_until_break, 1);
    }

    #[test]
    fn test_gap_breaks_current_but_keeps_longest() {
        let streak = calculate_streak(&[days_ago(5), days_ago(6)]);
        assert_eq!(streak.current, 0);
        assert_eq!(streak.longest, 2);
    }

    #[test]
    fn test_duplicates_on_same_day_count_once() {
        let streak = calculate_streak(&[days_ago(0), days_ago(0), days_ago(1)]);
        assert_eq!(streak.current, 2);
        assert_eq!(streak.longest, 2);
    }

    #[test]
    fn test_longest_run_in_the_middle() {
        let dates = [
            days_ago(0),
            days_ago(10),
            days_ago(11),
            days_ago(12),
            days_ago(13),
        ];
        let streak = calculate_streak(&dates);
        assert_eq!(streak.current, 1);
        assert_eq!(streak.longest, 4);
    }

    #[test]
    fn test_last_check_in_is_most_recent_instant() {
        let newest = days_ago(0);
        let streak = calculate_streak(&[days_ago(3), newest, days_ago(1)]);
        assert_eq!(streak.last_check_in, Some(newest));
        assert!(streak.last_check_in_relative.is_some());
    }
}
