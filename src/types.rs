//! Core domain types for aluna-core
//!
//! These types represent the canonical check-in model that every analytics
//! function operates on. Raw store documents (legacy and current shapes,
//! heterogeneous timestamp encodings) are converted into these types exactly
//! once, at the [`crate::ingest`] boundary.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Check-in** | One user-submitted wellness log entry ([`LogEntry`]) |
//! | **Sensation** | A located, intensity-rated physical feeling tied to a check-in |
//! | **Thought pattern** | A tag from a fixed catalog describing a mode of thinking |
//! | **Emotion** | A label from the two-level taxonomy in [`crate::catalog`] |
//!
//! The analytics layer only ever reads entries; it never mutates or deletes
//! them. Entries are created through the check-in submission flow and are
//! immutable afterward.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum sensation intensity on the 0-10 scale.
pub const MAX_INTENSITY: u8 = 10;

// ============================================
// Sensations
// ============================================

/// A located bodily feeling recorded during a check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensation {
    /// Unique identifier
    pub id: String,
    /// Body part label (see [`crate::catalog::BODY_PARTS`], free-form allowed)
    pub location: String,
    /// Intensity on a 0-10 scale
    pub intensity: u8,
    /// Optional descriptive text
    #[serde(default)]
    pub notes: String,
}

impl Sensation {
    /// Create a sensation with a fresh id, clamping intensity into 0-10.
    pub fn new(location: impl Into<String>, intensity: u8) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            location: location.into(),
            intensity: intensity.min(MAX_INTENSITY),
            notes: String::new(),
        }
    }

    /// Attach descriptive notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

// ============================================
// Context tags
// ============================================

/// Optional contextual metadata attached to a check-in.
///
/// Carried through unchanged; the analytics layer does not aggregate these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextTags {
    /// Where the check-in happened ("home", "work", ...)
    pub location: Option<String>,
    /// Activities at the time (multiple allowed)
    #[serde(default)]
    pub activity: Vec<String>,
    /// Identified triggers (multiple allowed)
    #[serde(default)]
    pub triggers: Vec<String>,
    /// Social context ("alone", "with_friends", ...)
    pub people: Option<String>,
    /// Time-of-day bucket, auto-captured but overridable
    pub time_of_day: Option<String>,
}

// ============================================
// Log entries
// ============================================

/// One check-in record.
///
/// `date` is always a resolved UTC instant: documents whose timestamp cannot
/// be resolved never make it past the ingest boundary, so the analytics
/// functions do not need to defend against invalid dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique identifier
    pub id: String,
    /// The moment of check-in
    pub date: DateTime<Utc>,
    /// Primary emotion label (category or leaf from the taxonomy)
    pub emotion: String,
    /// Finer-grained emotion labels, insertion order = display order
    #[serde(default)]
    pub specific_emotions: Vec<String>,
    /// Body sensations, in entry order
    #[serde(default)]
    pub sensations: Vec<Sensation>,
    /// Thought-pattern ids (membership only, no ordering guarantee)
    #[serde(default)]
    pub thoughts: Vec<String>,
    /// Optional contextual metadata
    pub context_tags: Option<ContextTags>,
    /// Free-form journal text
    pub journal_entry: Option<String>,
}

impl LogEntry {
    /// Create a new check-in dated now, with a fresh id.
    pub fn new(emotion: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: Utc::now(),
            emotion: emotion.into(),
            specific_emotions: Vec::new(),
            sensations: Vec::new(),
            thoughts: Vec::new(),
            context_tags: None,
            journal_entry: None,
        }
    }

    /// Builder-style date override.
    pub fn dated(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Builder-style sensation append.
    pub fn with_sensation(mut self, sensation: Sensation) -> Self {
        self.sensations.push(sensation);
        self
    }

    /// Builder-style thought-pattern append.
    pub fn with_thought(mut self, thought: impl Into<String>) -> Self {
        self.thoughts.push(thought.into());
        self
    }
}

// ============================================
// Chart view-models
// ============================================

/// A single point ready for direct chart consumption.
///
/// Plain data record; no dependency on any rendering library's types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Formatted date (or series key for categorical charts)
    pub date: String,
    /// Numeric value
    pub value: f64,
    /// Short display label (weekday abbreviation, body location, ...)
    pub label: String,
}
