//! Analytics module for aluna-core
//!
//! Pure, deterministic, total functions over in-memory check-in slices.
//! Every function here degrades to a neutral default (0, empty list, `None`)
//! on empty input rather than raising; there is no I/O and no shared state,
//! so everything is safe to recompute on every render.
//!
//! - [`dates`]: calendar-day bucketing and range filters
//! - [`streak`]: consecutive-day streak derivation
//! - [`aggregate`]: frequency, intensity, and consistency statistics
//! - [`trend`]: daily trend series, direction, and period comparison

pub mod aggregate;
pub mod dates;
pub mod streak;
pub mod trend;

pub use aggregate::{
    average_sensation_intensity, category_frequency, consistency_score, dominant_emotion,
    emotion_distribution, emotion_frequency, filter_by_emotion, filter_by_sensation_location,
    filter_by_thought, insights_summary, sensation_intensity_points, thought_pattern_frequency,
    top_sensations, EmotionFrequency, InsightsSummary, SensationSummary, ThoughtFrequency,
    DEFAULT_TOP_SENSATIONS,
};
pub use dates::{day_key, filter_by_date_range, filter_last_days, group_by_day, group_entries_by_day};
pub use streak::{calculate_streak, StreakData};
pub use trend::{
    comparison_data, monthly_comparison, trend_data, trend_direction, trend_series_stats,
    ComparisonData, MonthlyComparison, PeriodSnapshot, TrendDirection, TrendMetric,
    TrendSeriesStats,
};

/// Round to one decimal place, the resolution every chart value uses.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::round1;

    #[test]
    fn test_round1_is_idempotent() {
        for raw in [0.0, 3.14159, 6.66, 9.95, 10.0] {
            let once = round1(raw);
            assert_eq!(round1(once), once);
        }
    }
}
