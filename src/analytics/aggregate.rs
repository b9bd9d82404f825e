//! Frequency, intensity, and consistency statistics.
//!
//! Direct view-model producers for the dashboard stat cards and
//! distribution charts. All counting that can tie preserves the insertion
//! order of first occurrence, so repeated renders are stable.

use crate::analytics::dates::group_entries_by_day;
use crate::analytics::round1;
use crate::catalog;
use crate::types::{ChartPoint, LogEntry};

/// Default number of locations returned by [`top_sensations`].
pub const DEFAULT_TOP_SENSATIONS: usize = 5;

/// Points awarded for breadth of coverage (distinct active days).
const FREQUENCY_POINTS: f64 = 70.0;
/// Points awarded for depth (check-ins per active day).
const REGULARITY_POINTS: f64 = 30.0;

// ============================================
// View-models
// ============================================

/// How often one emotion label was logged.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionFrequency {
    /// Emotion label (leaf, category, or rolled-up category name)
    pub emotion: String,
    /// Occurrences across the entry set
    pub count: usize,
    /// Share of total check-ins, 0-100
    pub percentage: f64,
}

/// Aggregate for one body location.
#[derive(Debug, Clone, PartialEq)]
pub struct SensationSummary {
    /// Body location label
    pub location: String,
    /// Number of sensations recorded there
    pub count: usize,
    /// Mean intensity, rounded to one decimal
    pub avg_intensity: f64,
}

/// How often one thought pattern was tagged.
#[derive(Debug, Clone, PartialEq)]
pub struct ThoughtFrequency {
    /// Thought-pattern id
    pub pattern: String,
    /// Occurrences across the entry set
    pub count: usize,
    /// Share of total check-ins (not of total thought mentions), 0-100
    pub percentage: f64,
}

/// One-look summary for the insights panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightsSummary {
    /// Total check-ins in the set
    pub total_check_ins: usize,
    /// Most frequent emotion, if any
    pub dominant_emotion: Option<String>,
    /// Mean sensation intensity, rounded to one decimal
    pub avg_intensity: f64,
    /// Most frequent sensation location, if any
    pub most_frequent_sensation: Option<String>,
    /// Most frequent thought pattern, if any
    pub most_frequent_thought: Option<String>,
    /// Composite 0-100 consistency score over the default window
    pub consistency_score: i64,
}

// ============================================
// Emotion statistics
// ============================================

/// Count occurrences of each distinct emotion label.
///
/// Sorted descending by count; ties keep the insertion order of first
/// occurrence. Percentages are of total check-ins and sum to ~100 for
/// non-empty input.
pub fn emotion_frequency(entries: &[LogEntry]) -> Vec<EmotionFrequency> {
    frequency_over(entries.iter().map(|e| e.emotion.as_str()), entries.len())
}

/// Count check-ins per top-level category, rolling leaf labels up through
/// the taxonomy. Labels outside the taxonomy count under "Unknown".
pub fn category_frequency(entries: &[LogEntry]) -> Vec<EmotionFrequency> {
    frequency_over(
        entries.iter().map(|e| {
            catalog::category_of(&e.emotion)
                .map(|c| c.name)
                .unwrap_or("Unknown")
        }),
        entries.len(),
    )
}

fn frequency_over<'a>(
    labels: impl Iterator<Item = &'a str>,
    total: usize,
) -> Vec<EmotionFrequency> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }

    let mut frequencies: Vec<EmotionFrequency> = counts
        .into_iter()
        .map(|(emotion, count)| EmotionFrequency {
            emotion: emotion.to_string(),
            count,
            percentage: if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    frequencies
}

/// The most frequent emotion, or `None` for an empty set.
pub fn dominant_emotion(entries: &[LogEntry]) -> Option<String> {
    emotion_frequency(entries).into_iter().next().map(|f| f.emotion)
}

/// Emotion counts shaped for a pie/donut chart.
pub fn emotion_distribution(entries: &[LogEntry]) -> Vec<ChartPoint> {
    emotion_frequency(entries)
        .into_iter()
        .map(|freq| ChartPoint {
            date: freq.emotion.clone(),
            value: freq.count as f64,
            label: freq.emotion,
        })
        .collect()
}

// ============================================
// Sensation statistics
// ============================================

/// Mean intensity across every sensation in the set, 0 when there are none.
pub fn average_sensation_intensity(entries: &[LogEntry]) -> f64 {
    let mut total = 0u64;
    let mut count = 0u64;
    for entry in entries {
        for sensation in &entry.sensations {
            total += sensation.intensity as u64;
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// One chart point per recorded sensation, oldest entry first.
///
/// `date` is the entry's short date, `label` the body location, `value` the
/// raw intensity.
pub fn sensation_intensity_points(entries: &[LogEntry]) -> Vec<ChartPoint> {
    let mut ordered: Vec<&LogEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.date);

    ordered
        .into_iter()
        .flat_map(|entry| {
            let date = entry
                .date
                .with_timezone(&chrono::Local)
                .format("%b %-d")
                .to_string();
            entry.sensations.iter().map(move |s| ChartPoint {
                date: date.clone(),
                value: s.intensity as f64,
                label: s.location.clone(),
            })
        })
        .collect()
}

/// Most frequent sensation locations, with per-location mean intensity.
///
/// Sorted descending by count (ties keep first-occurrence order), truncated
/// to `limit` (see [`DEFAULT_TOP_SENSATIONS`]).
pub fn top_sensations(entries: &[LogEntry], limit: usize) -> Vec<SensationSummary> {
    let mut grouped: Vec<(&str, usize, u64)> = Vec::new();
    for entry in entries {
        for sensation in &entry.sensations {
            match grouped
                .iter_mut()
                .find(|(location, _, _)| *location == sensation.location)
            {
                Some((_, count, total)) => {
                    *count += 1;
                    *total += sensation.intensity as u64;
                }
                None => grouped.push((sensation.location.as_str(), 1, sensation.intensity as u64)),
            }
        }
    }

    let mut summaries: Vec<SensationSummary> = grouped
        .into_iter()
        .map(|(location, count, total)| SensationSummary {
            location: location.to_string(),
            count,
            avg_intensity: round1(total as f64 / count as f64),
        })
        .collect();
    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries.truncate(limit);
    summaries
}

// ============================================
// Thought patterns
// ============================================

/// Count occurrences of each thought-pattern id across entries.
///
/// Percentage is of total check-ins, so an id tagged on every entry shows
/// 100 even when entries carry several thoughts each.
pub fn thought_pattern_frequency(entries: &[LogEntry]) -> Vec<ThoughtFrequency> {
    let total = entries.len();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entry in entries {
        for thought in &entry.thoughts {
            match counts.iter_mut().find(|(seen, _)| *seen == thought.as_str()) {
                Some((_, count)) => *count += 1,
                None => counts.push((thought.as_str(), 1)),
            }
        }
    }

    let mut frequencies: Vec<ThoughtFrequency> = counts
        .into_iter()
        .map(|(pattern, count)| ThoughtFrequency {
            pattern: pattern.to_string(),
            count,
            percentage: if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    frequencies
}

// ============================================
// Consistency score
// ============================================

/// Composite 0-100 check-in consistency score over a trailing `days` window.
///
/// `frequency` (up to 70 points) rewards breadth: the share of window days
/// with at least one check-in. `regularity` (up to 30 points) rewards depth:
/// check-ins per active day. Capped so neither dimension alone reaches 100.
pub fn consistency_score(entries: &[LogEntry], days: i64) -> i64 {
    if entries.is_empty() {
        return 0;
    }
    let days = days.max(1);

    let days_with_entries = group_entries_by_day(entries).len();

    let frequency_score =
        (days_with_entries as f64 / days as f64 * FREQUENCY_POINTS).min(FREQUENCY_POINTS);

    let entries_per_active_day = entries.len() as f64 / days_with_entries as f64;
    let regularity_score = (entries_per_active_day * 10.0).min(REGULARITY_POINTS);

    (frequency_score + regularity_score).round() as i64
}

// ============================================
// Insights summary
// ============================================

/// Assemble the one-look insights panel for an entry set.
pub fn insights_summary(entries: &[LogEntry]) -> InsightsSummary {
    let top_sensation = top_sensations(entries, 1).into_iter().next();
    let top_thought = thought_pattern_frequency(entries).into_iter().next();

    InsightsSummary {
        total_check_ins: entries.len(),
        dominant_emotion: dominant_emotion(entries),
        avg_intensity: round1(average_sensation_intensity(entries)),
        most_frequent_sensation: top_sensation.map(|s| s.location),
        most_frequent_thought: top_thought.map(|t| t.pattern),
        consistency_score: consistency_score(entries, crate::config::DEFAULT_CONSISTENCY_WINDOW),
    }
}

// ============================================
// Entry filters
// ============================================

/// Entries whose primary emotion matches `emotion` exactly.
pub fn filter_by_emotion<'a>(entries: &'a [LogEntry], emotion: &str) -> Vec<&'a LogEntry> {
    entries.iter().filter(|e| e.emotion == emotion).collect()
}

/// Entries with at least one sensation at `location`.
pub fn filter_by_sensation_location<'a>(
    entries: &'a [LogEntry],
    location: &str,
) -> Vec<&'a LogEntry> {
    entries
        .iter()
        .filter(|e| e.sensations.iter().any(|s| s.location == location))
        .collect()
}

/// Entries tagged with the thought-pattern id.
pub fn filter_by_thought<'a>(entries: &'a [LogEntry], thought_id: &str) -> Vec<&'a LogEntry> {
    entries
        .iter()
        .filter(|e| e.thoughts.iter().any(|t| t == thought_id))
        .collect()
}
