//! Daily trend series, trend direction, and period comparison.
//!
//! Produces the line-chart series and the period-over-period stat cards.
//! Values are rounded to one decimal place at the boundary so the series is
//! idempotent under its own rounding.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::analytics::aggregate::{average_sensation_intensity, emotion_frequency, EmotionFrequency};
use crate::analytics::dates::{filter_by_date_range, group_entries_by_day};
use crate::analytics::round1;
use crate::types::{ChartPoint, LogEntry};

/// Absolute mean-intensity difference below which a series is "stable".
const SERIES_THRESHOLD: f64 = 0.5;
/// Percent change below which a period comparison is "stable".
const COMPARISON_THRESHOLD_PCT: f64 = 5.0;

// ============================================
// Series
// ============================================

/// Which per-day value the trend series carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrendMetric {
    /// Mean sensation intensity across the day's entries
    #[default]
    Intensity,
    /// Number of check-ins that day
    Count,
}

impl TrendMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendMetric::Intensity => "intensity",
            TrendMetric::Count => "count",
        }
    }
}

/// Direction a value series is moving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    #[default]
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Stable => "stable",
        }
    }

    /// Display text for stat cards.
    pub fn display_name(&self) -> &'static str {
        match self {
            TrendDirection::Up => "Increasing",
            TrendDirection::Down => "Decreasing",
            TrendDirection::Stable => "Stable",
        }
    }
}

/// Bucket entries by calendar day and emit one chart point per day.
///
/// Days are sorted ascending. `date` is the short month+day, `label` the
/// weekday abbreviation, `value` the selected metric rounded to one decimal.
pub fn trend_data(entries: &[LogEntry], metric: TrendMetric) -> Vec<ChartPoint> {
    let grouped = group_entries_by_day(entries);
    let mut days: Vec<NaiveDate> = grouped.keys().copied().collect();
    days.sort();

    days.into_iter()
        .map(|day| {
            let day_entries = &grouped[&day];
            let value = match metric {
                TrendMetric::Count => day_entries.len() as f64,
                TrendMetric::Intensity => {
                    let intensities: Vec<f64> = day_entries
                        .iter()
                        .flat_map(|e| e.sensations.iter().map(|s| s.intensity as f64))
                        .collect();
                    mean(&intensities)
                }
            };
            ChartPoint {
                date: day.format("%b %-d").to_string(),
                value: round1(value),
                label: day.format("%a").to_string(),
            }
        })
        .collect()
}

/// Classify a value series by comparing its first and last thirds.
///
/// Window size is `max(1, len / 3)`, so short series degenerate to a
/// single-point comparison. Differences within [`SERIES_THRESHOLD`] are
/// stable. Empty input is stable.
pub fn trend_direction(values: &[f64]) -> TrendDirection {
    if values.is_empty() {
        return TrendDirection::Stable;
    }
    let window = (values.len() / 3).max(1);
    let first_avg = mean(&values[..window]);
    let last_avg = mean(&values[values.len() - window..]);

    let diff = last_avg - first_avg;
    if diff.abs() > SERIES_THRESHOLD {
        if diff > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    } else {
        TrendDirection::Stable
    }
}

/// Min/max/avg/direction summary for a trend series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendSeriesStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub direction: TrendDirection,
}

/// Summarize an already-computed trend series for the stat row under the
/// chart. Zeroes for an empty series.
pub fn trend_series_stats(series: &[ChartPoint]) -> TrendSeriesStats {
    if series.is_empty() {
        return TrendSeriesStats::default();
    }
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    TrendSeriesStats {
        min: round1(min),
        max: round1(max),
        avg: round1(mean(&values)),
        direction: trend_direction(&values),
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

// ============================================
// Period comparison
// ============================================

/// Period-over-period intensity comparison (e.g., this week vs last week).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonData {
    /// Current period mean intensity, one decimal
    pub current_avg: f64,
    /// Previous period mean intensity, one decimal
    pub previous_avg: f64,
    /// Absolute change, one decimal
    pub change: f64,
    /// Percent change (0 when the previous average is 0), one decimal
    pub change_percent: f64,
    /// Classification using the 5% change threshold
    pub trend: TrendDirection,
}

/// Compare average sensation intensity between two entry subsets.
pub fn comparison_data(current: &[LogEntry], previous: &[LogEntry]) -> ComparisonData {
    let current_avg = average_sensation_intensity(current);
    let previous_avg = average_sensation_intensity(previous);
    let change = current_avg - previous_avg;
    let change_percent = if previous_avg > 0.0 {
        change / previous_avg * 100.0
    } else {
        0.0
    };

    let trend = if change_percent.abs() > COMPARISON_THRESHOLD_PCT {
        if change > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    } else {
        TrendDirection::Stable
    };

    ComparisonData {
        current_avg: round1(current_avg),
        previous_avg: round1(previous_avg),
        change: round1(change),
        change_percent: round1(change_percent),
        trend,
    }
}

/// Per-period snapshot used by [`monthly_comparison`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodSnapshot {
    /// Emotion frequencies within the period
    pub emotions: Vec<EmotionFrequency>,
    /// Mean sensation intensity within the period (unrounded)
    pub avg_intensity: f64,
    /// Check-ins within the period
    pub count: usize,
}

/// Two period snapshots plus their comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyComparison {
    pub current: PeriodSnapshot,
    pub previous: PeriodSnapshot,
    pub comparison: ComparisonData,
}

/// Compare two date ranges of the same entry set (typically adjacent
/// months). Both ranges are inclusive of their bounds.
pub fn monthly_comparison(
    entries: &[LogEntry],
    current_start: DateTime<Utc>,
    current_end: DateTime<Utc>,
    previous_start: DateTime<Utc>,
    previous_end: DateTime<Utc>,
) -> MonthlyComparison {
    let current: Vec<LogEntry> = filter_by_date_range(entries, |e| Some(e.date), current_start, current_end)
        .into_iter()
        .cloned()
        .collect();
    let previous: Vec<LogEntry> =
        filter_by_date_range(entries, |e| Some(e.date), previous_start, previous_end)
            .into_iter()
            .cloned()
            .collect();

    MonthlyComparison {
        comparison: comparison_data(&current, &previous),
        current: snapshot(&current),
        previous: snapshot(&previous),
    }
}

fn snapshot(entries: &[LogEntry]) -> PeriodSnapshot {
    PeriodSnapshot {
        emotions: emotion_frequency(entries),
        avg_intensity: average_sensation_intensity(entries),
        count: entries.len(),
    }
}

/// First instant of a month, UTC.
pub fn month_start(year: i32, month: u32) -> Option<DateTime<Utc>> {
    let date = NaiveDate::from_ymd_opt(year, month, 1)?;
    Utc.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).single()
}

/// Last instant (inclusive bound) of a month, UTC.
pub fn month_end(year: i32, month: u32) -> Option<DateTime<Utc>> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let next = month_start(next_year, next_month)?;
    Some(next - chrono::Duration::nanoseconds(1))
}

/// The month preceding (year, month).
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sensation;
    use chrono::{Datelike, Duration};

    fn entry_with_intensity(days_ago: i64, intensity: u8) -> LogEntry {
        LogEntry::new("Joy")
            .dated(Utc::now() - Duration::days(days_ago))
            .with_sensation(Sensation::new("Chest", intensity))
    }

    #[test]
    fn test_trend_data_sorted_ascending_with_rounded_values() {
        let entries = vec![
            entry_with_intensity(2, 3),
            entry_with_intensity(1, 5),
            entry_with_intensity(1, 6),
            entry_with_intensity(0, 8),
        ];
        let series = trend_data(&entries, TrendMetric::Intensity);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].value, 3.0);
        assert_eq!(series[1].value, 5.5);
        assert_eq!(series[2].value, 8.0);
    }

    #[test]
    fn test_trend_data_count_metric() {
        let entries = vec![
            entry_with_intensity(1, 3),
            entry_with_intensity(1, 4),
            entry_with_intensity(0, 5),
        ];
        let series = trend_data(&entries, TrendMetric::Count);
        assert_eq!(series[0].value, 2.0);
        assert_eq!(series[1].value, 1.0);
    }

    #[test]
    fn test_trend_data_day_without_sensations_is_zero() {
        let entries = vec![LogEntry::new("Joy").dated(Utc::now())];
        let series = trend_data(&entries, TrendMetric::Intensity);
        assert_eq!(series[0].value, 0.0);
    }

    #[test]
    fn test_series_rounding_is_idempotent() {
        let entries = vec![
            entry_with_intensity(1, 3),
            entry_with_intensity(1, 4),
            entry_with_intensity(1, 4),
        ];
        let series = trend_data(&entries, TrendMetric::Intensity);
        for point in &series {
            assert_eq!(round1(point.value), point.value);
        }
    }

    #[test]
    fn test_trend_direction_thirds() {
        assert_eq!(
            trend_direction(&[2.0, 2.0, 2.0, 8.0, 8.0, 8.0]),
            TrendDirection::Up
        );
        assert_eq!(
            trend_direction(&[8.0, 8.0, 8.0, 2.0, 2.0, 2.0]),
            TrendDirection::Down
        );
        assert_eq!(
            trend_direction(&[5.0, 5.2, 5.1, 5.3, 5.0, 5.2]),
            TrendDirection::Stable
        );
    }

    #[test]
    fn test_trend_direction_degenerates_to_single_point() {
        assert_eq!(trend_direction(&[2.0, 8.0]), TrendDirection::Up);
        assert_eq!(trend_direction(&[4.0]), TrendDirection::Stable);
        assert_eq!(trend_direction(&[]), TrendDirection::Stable);
    }

    #[test]
    fn test_series_stats() {
        let series = vec![
            ChartPoint { date: "Jan 1".into(), value: 2.0, label: "Mon".into() },
            ChartPoint { date: "Jan 2".into(), value: 4.0, label: "Tue".into() },
            ChartPoint { date: "Jan 3".into(), value: 6.0, label: "Wed".into() },
        ];
        let stats = trend_series_stats(&series);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 6.0);
        assert_eq!(stats.avg, 4.0);
        assert_eq!(stats.direction, TrendDirection::Up);
    }

    #[test]
    fn test_comparison_trend_and_percent() {
        let current = vec![entry_with_intensity(0, 8)];
        let previous = vec![entry_with_intensity(8, 4)];
        let cmp = comparison_data(&current, &previous);
        assert_eq!(cmp.current_avg, 8.0);
        assert_eq!(cmp.previous_avg, 4.0);
        assert_eq!(cmp.change, 4.0);
        assert_eq!(cmp.change_percent, 100.0);
        assert_eq!(cmp.trend, TrendDirection::Up);
    }

    #[test]
    fn test_comparison_zero_previous_average() {
        let current = vec![entry_with_intensity(0, 6)];
        let cmp = comparison_data(&current, &[]);
        assert_eq!(cmp.change_percent, 0.0);
        assert_eq!(cmp.trend, TrendDirection::Stable);
    }

    #[test]
    fn test_small_change_is_stable() {
        let current = vec![entry_with_intensity(0, 5)];
        let previous = vec![
            entry_with_intensity(8, 5),
            entry_with_intensity(8, 5),
            entry_with_intensity(8, 5),
            entry_with_intensity(8, 5),
            entry_with_intensity(8, 5),
        ];
        // 5.0 vs 5.0: 0% change
        let cmp = comparison_data(&current, &previous);
        assert_eq!(cmp.trend, TrendDirection::Stable);
    }

    #[test]
    fn test_month_helpers() {
        let start = month_start(2025, 2).unwrap();
        let end = month_end(2025, 2).unwrap();
        assert_eq!(start.month(), 2);
        assert_eq!(end.month(), 2);
        assert_eq!(end.day(), 28);
        assert_eq!(previous_month(2025, 1), (2024, 12));
        assert_eq!(previous_month(2025, 7), (2025, 6));
    }

    #[test]
    fn test_monthly_comparison_buckets_by_range() {
        let now = Utc::now();
        let entries = vec![
            entry_with_intensity(1, 8),
            entry_with_intensity(2, 8),
            entry_with_intensity(40, 4),
        ];
        let cmp = monthly_comparison(
            &entries,
            now - Duration::days(30),
            now,
            now - Duration::days(61),
            now - Duration::days(31),
        );
        assert_eq!(cmp.current.count, 2);
        assert_eq!(cmp.previous.count, 1);
        assert_eq!(cmp.comparison.trend, TrendDirection::Up);
    }
}
