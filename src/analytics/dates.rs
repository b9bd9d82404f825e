//! Calendar-day bucketing and date-range filters.
//!
//! Foundation for the rest of the analytics layer. All day bucketing uses
//! the local calendar day, applied consistently: the key for an instant is
//! its `NaiveDate` in the local timezone.

use chrono::{DateTime, Local, NaiveDate, Utc};
use std::collections::HashMap;

use crate::types::LogEntry;

/// The local calendar day an instant falls on.
pub fn day_key(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

/// Group items by local calendar day.
///
/// `date_of` projects an item to its timestamp; items yielding `None`
/// (unresolvable dates) are silently dropped. Every remaining item lands in
/// exactly one bucket, in input order. Bucket keys carry no ordering
/// guarantee; callers sort.
pub fn group_by_day<T, F>(items: &[T], date_of: F) -> HashMap<NaiveDate, Vec<&T>>
where
    F: Fn(&T) -> Option<DateTime<Utc>>,
{
    let mut buckets: HashMap<NaiveDate, Vec<&T>> = HashMap::new();
    for item in items {
        if let Some(ts) = date_of(item) {
            buckets.entry(day_key(ts)).or_default().push(item);
        }
    }
    buckets
}

/// Group check-ins by local calendar day.
pub fn group_entries_by_day(entries: &[LogEntry]) -> HashMap<NaiveDate, Vec<&LogEntry>> {
    group_by_day(entries, |e| Some(e.date))
}

/// Filter items to those whose projected date falls in `[start, end]`.
///
/// Both bounds are inclusive; this is the one boundary policy used
/// everywhere in the crate. Preserves input order.
pub fn filter_by_date_range<T, F>(
    items: &[T],
    date_of: F,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<&T>
where
    F: Fn(&T) -> Option<DateTime<Utc>>,
{
    items
        .iter()
        .filter(|item| matches!(date_of(item), Some(ts) if ts >= start && ts <= end))
        .collect()
}

/// Check-ins from the trailing `days` window, bounds inclusive.
pub fn filter_last_days(entries: &[LogEntry], days: i64) -> Vec<&LogEntry> {
    let end = Utc::now();
    let start = end - chrono::Duration::days(days);
    filter_by_date_range(entries, |e| Some(e.date), start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LogEntry;
    use chrono::Duration;

    fn entry_days_ago(days: i64) -> LogEntry {
        LogEntry::new("Joy").dated(Utc::now() - Duration::days(days))
    }

    #[test]
    fn test_group_by_day_is_a_partition() {
        let entries: Vec<LogEntry> = vec![
            entry_days_ago(0),
            entry_days_ago(0),
            entry_days_ago(1),
            entry_days_ago(3),
        ];
        let buckets = group_entries_by_day(&entries);
        let total: usize = buckets.values().map(|b| b.len()).sum();
        assert_eq!(total, entries.len());
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[&day_key(entries[0].date)].len(), 2);
    }

    #[test]
    fn test_group_by_day_drops_unresolvable_dates() {
        let items = vec![Some(Utc::now()), None, Some(Utc::now())];
        let buckets = group_by_day(&items, |d| *d);
        let total: usize = buckets.values().map(|b| b.len()).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_range_filter_is_inclusive_on_both_bounds() {
        let start = Utc::now() - Duration::days(7);
        let end = Utc::now();
        let entries = vec![
            LogEntry::new("Joy").dated(start),
            LogEntry::new("Joy").dated(end),
            LogEntry::new("Joy").dated(start - Duration::seconds(1)),
            LogEntry::new("Joy").dated(end + Duration::seconds(1)),
        ];
        let kept = filter_by_date_range(&entries, |e| Some(e.date), start, end);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].date, start);
        assert_eq!(kept[1].date, end);
    }

    #[test]
    fn test_range_filter_preserves_input_order() {
        let entries: Vec<LogEntry> = (0..5).map(entry_days_ago).collect();
        let kept = filter_last_days(&entries, 30);
        let dates: Vec<_> = kept.iter().map(|e| e.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }
}
