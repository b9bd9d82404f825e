//! Normalization boundary between the external document store and the core.
//!
//! The store hands back check-in documents in two shapes (a legacy v1 shape
//! with ISO-string dates, and the current versioned shape with store-native
//! timestamps), and timestamps arrive in three encodings. Everything is
//! resolved here, exactly once: past this module the core only ever sees
//! [`LogEntry`] values with a concrete UTC instant.
//!
//! ## Design Principles
//!
//! 1. **Resilience**: a malformed document logs a warning and is skipped;
//!    it never fails the whole snapshot
//! 2. **One conversion**: shape sniffing happens in [`EntryDocument::shape`],
//!    not scattered through consumers
//! 3. **Exclusion over fabrication**: documents whose date cannot be
//!    resolved are excluded rather than backdated to "now", so bad data
//!    never pollutes day bucketing

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::error::Result;
use crate::types::{ContextTags, LogEntry, Sensation, MAX_INTENSITY};

// ============================================
// Raw timestamps
// ============================================

/// A timestamp as it may appear in a store document.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    /// ISO-8601 / RFC-3339 string (legacy shape)
    Iso(String),
    /// Store-native timestamp object
    Store { seconds: i64, nanoseconds: u32 },
    /// Epoch seconds
    Epoch(f64),
}

impl RawDate {
    /// Resolve to a UTC instant, `None` if unresolvable.
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            RawDate::Iso(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            RawDate::Store {
                seconds,
                nanoseconds,
            } => Utc.timestamp_opt(*seconds, *nanoseconds).single(),
            RawDate::Epoch(secs) => {
                if !secs.is_finite() {
                    return None;
                }
                let seconds = secs.trunc() as i64;
                let nanos = (secs.fract() * 1e9) as u32;
                Utc.timestamp_opt(seconds, nanos).single()
            }
        }
    }
}

// ============================================
// Store document shapes
// ============================================

/// Which document generation a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryShape {
    /// v1 shape: ISO-string date, no version marker
    Legacy,
    /// Versioned shape with store-native timestamps
    Current,
}

impl EntryShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryShape::Legacy => "legacy",
            EntryShape::Current => "current",
        }
    }
}

/// A sensation as stored in a document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensationDocument {
    #[serde(default)]
    pub id: Option<String>,
    pub location: String,
    pub intensity: i64,
    #[serde(default)]
    pub notes: String,
}

impl SensationDocument {
    fn normalize(self) -> Sensation {
        Sensation {
            id: self
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            location: self.location,
            intensity: self.intensity.clamp(0, MAX_INTENSITY as i64) as u8,
            notes: self.notes,
        }
    }
}

/// Context tags as stored in a document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextTagsDocument {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub activity: Vec<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub people: Option<String>,
    #[serde(default)]
    pub time_of_day: Option<String>,
}

impl ContextTagsDocument {
    fn normalize(self) -> ContextTags {
        ContextTags {
            location: self.location,
            activity: self.activity,
            triggers: self.triggers,
            people: self.people,
            time_of_day: self.time_of_day,
        }
    }
}

/// A check-in document as it arrives from the store, either shape.
///
/// Unknown fields (attachments, goals, migration metadata) are ignored;
/// the core does not aggregate them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDocument {
    #[serde(default)]
    pub id: Option<String>,
    pub date: Option<RawDate>,
    pub emotion: String,
    #[serde(default)]
    pub specific_emotions: Vec<String>,
    #[serde(default)]
    pub sensations: Vec<SensationDocument>,
    #[serde(default)]
    pub thoughts: Vec<String>,
    #[serde(default)]
    pub context_tags: Option<ContextTagsDocument>,
    #[serde(default)]
    pub journal_entry: Option<String>,
    /// Migration marker; present from v1 of the current shape onward
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub created_at: Option<RawDate>,
}

impl EntryDocument {
    /// Resolve the document generation, once.
    pub fn shape(&self) -> EntryShape {
        let string_date = matches!(self.date, Some(RawDate::Iso(_)));
        if string_date && self.version.is_none() && self.created_at.is_none() {
            EntryShape::Legacy
        } else {
            EntryShape::Current
        }
    }

    /// Convert to the canonical entry.
    ///
    /// Returns `None` when the check-in date cannot be resolved; such
    /// entries must not reach day bucketing.
    pub fn normalize(self) -> Option<LogEntry> {
        let date = self.date.as_ref().and_then(RawDate::resolve)?;

        Some(LogEntry {
            id: self
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            date,
            emotion: self.emotion,
            specific_emotions: self.specific_emotions,
            sensations: self
                .sensations
                .into_iter()
                .map(SensationDocument::normalize)
                .collect(),
            thoughts: self.thoughts,
            context_tags: self.context_tags.map(ContextTagsDocument::normalize),
            journal_entry: self.journal_entry,
        })
    }
}

// ============================================
// Snapshot ingest
// ============================================

/// Result of ingesting one store snapshot.
#[derive(Debug, Default)]
pub struct IngestResult {
    /// Normalized entries, in snapshot order
    pub entries: Vec<LogEntry>,
    /// Warnings for skipped documents (non-fatal)
    pub warnings: Vec<String>,
}

/// Ingest a JSON snapshot (array of check-in documents).
///
/// Fatal only when the snapshot itself is not a JSON array; individual
/// document failures are logged, recorded as warnings, and skipped.
pub fn parse_snapshot(json: &str) -> Result<IngestResult> {
    let documents: Vec<serde_json::Value> = serde_json::from_str(json)?;

    let mut result = IngestResult::default();
    for (index, value) in documents.into_iter().enumerate() {
        let document: EntryDocument = match serde_json::from_value(value) {
            Ok(doc) => doc,
            Err(e) => {
                let warning = format!("skipping malformed document at index {}: {}", index, e);
                tracing::warn!(index, error = %e, "Skipping malformed check-in document");
                result.warnings.push(warning);
                continue;
            }
        };

        let shape = document.shape();
        match document.normalize() {
            Some(entry) => result.entries.push(entry),
            None => {
                let warning = format!(
                    "skipping {} document at index {}: unresolvable date",
                    shape.as_str(),
                    index
                );
                tracing::warn!(index, shape = shape.as_str(), "Skipping check-in with unresolvable date");
                result.warnings.push(warning);
            }
        }
    }

    tracing::debug!(
        entries = result.entries.len(),
        skipped = result.warnings.len(),
        "Ingested store snapshot"
    );

    Ok(result)
}

/// Convenience wrapper over [`parse_snapshot`] that discards warnings.
pub fn parse_entries(json: &str) -> Result<Vec<LogEntry>> {
    Ok(parse_snapshot(json)?.entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_date_iso() {
        let date = RawDate::Iso("2025-03-04T10:30:00Z".to_string());
        let resolved = date.resolve().unwrap();
        assert_eq!(resolved.to_rfc3339(), "2025-03-04T10:30:00+00:00");
    }

    #[test]
    fn test_raw_date_store_timestamp() {
        let date = RawDate::Store {
            seconds: 1_700_000_000,
            nanoseconds: 0,
        };
        assert!(date.resolve().is_some());
    }

    #[test]
    fn test_raw_date_epoch() {
        let date = RawDate::Epoch(1_700_000_000.5);
        assert!(date.resolve().is_some());
        assert!(RawDate::Epoch(f64::NAN).resolve().is_none());
    }

    #[test]
    fn test_raw_date_garbage_string() {
        assert!(RawDate::Iso("not a date".to_string()).resolve().is_none());
    }

    #[test]
    fn test_shape_detection() {
        let legacy: EntryDocument = serde_json::from_value(json!({
            "id": "1",
            "date": "2025-03-04T10:30:00Z",
            "emotion": "Sadness",
            "sensations": [],
            "thoughts": []
        }))
        .unwrap();
        assert_eq!(legacy.shape(), EntryShape::Legacy);

        let current: EntryDocument = serde_json::from_value(json!({
            "id": "2",
            "date": { "seconds": 1700000000, "nanoseconds": 0 },
            "emotion": "Joy",
            "version": 1,
            "createdAt": { "seconds": 1700000000, "nanoseconds": 0 }
        }))
        .unwrap();
        assert_eq!(current.shape(), EntryShape::Current);
    }

    #[test]
    fn test_legacy_and_current_normalize_to_same_model() {
        let snapshot = json!([
            {
                "id": "legacy-1",
                "date": "2025-03-04T10:30:00Z",
                "emotion": "Fear",
                "sensations": [
                    { "location": "Stomach", "intensity": 8, "notes": "Butterflies" }
                ],
                "thoughts": ["worrying"]
            },
            {
                "id": "current-1",
                "date": { "seconds": 1741084200, "nanoseconds": 0 },
                "emotion": "Anxious",
                "specificEmotions": ["Worried"],
                "sensations": [
                    { "id": "s1", "location": "Hands", "intensity": 6, "notes": "" }
                ],
                "thoughts": ["worrying"],
                "contextTags": { "location": "work", "activity": ["working"] },
                "journalEntry": "Big meeting today.",
                "version": 1,
                "createdAt": { "seconds": 1741084200, "nanoseconds": 0 }
            }
        ]);

        let result = parse_snapshot(&snapshot.to_string()).unwrap();
        assert_eq!(result.entries.len(), 2);
        assert!(result.warnings.is_empty());

        let legacy = &result.entries[0];
        assert_eq!(legacy.id, "legacy-1");
        assert_eq!(legacy.sensations[0].intensity, 8);

        let current = &result.entries[1];
        assert_eq!(current.specific_emotions, vec!["Worried".to_string()]);
        assert_eq!(
            current.context_tags.as_ref().unwrap().location.as_deref(),
            Some("work")
        );
    }

    #[test]
    fn test_unresolvable_date_is_skipped_with_warning() {
        let snapshot = json!([
            { "id": "1", "date": "not a date", "emotion": "Joy" },
            { "id": "2", "date": "2025-03-04T10:30:00Z", "emotion": "Joy" },
            { "id": "3", "emotion": "Joy" }
        ]);

        let result = parse_snapshot(&snapshot.to_string()).unwrap();
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].id, "2");
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_intensity_clamped_into_scale() {
        let snapshot = json!([
            {
                "id": "1",
                "date": "2025-03-04T10:30:00Z",
                "emotion": "Anger",
                "sensations": [
                    { "location": "Head", "intensity": 14 },
                    { "location": "Neck", "intensity": -3 }
                ]
            }
        ]);

        let entries = parse_entries(&snapshot.to_string()).unwrap();
        assert_eq!(entries[0].sensations[0].intensity, 10);
        assert_eq!(entries[0].sensations[1].intensity, 0);
    }

    #[test]
    fn test_missing_ids_are_assigned() {
        let snapshot = json!([
            {
                "date": "2025-03-04T10:30:00Z",
                "emotion": "Trust",
                "sensations": [ { "location": "Chest", "intensity": 3 } ]
            }
        ]);

        let entries = parse_entries(&snapshot.to_string()).unwrap();
        assert!(!entries[0].id.is_empty());
        assert!(!entries[0].sensations[0].id.is_empty());
    }

    #[test]
    fn test_non_array_snapshot_is_fatal() {
        assert!(parse_snapshot("{\"not\": \"an array\"}").is_err());
    }
}
