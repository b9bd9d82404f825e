//! Static reference catalogs
//!
//! Process-wide immutable reference data: the two-level emotion taxonomy,
//! the thought-pattern catalog, and the body-part list. These are loaded
//! once as `'static` tables and injected by reference into the components
//! that need them; nothing here is ever mutated at runtime.
//!
//! Taxonomy shape: eight top-level categories (Plutchik's primaries), each
//! owning an ordered set of leaf emotion labels. Leaf -> category is
//! many-to-one; [`category_of`] performs the roll-up used by distribution
//! charts.

// ============================================
// Emotion taxonomy
// ============================================

/// A top-level emotion category with its leaf emotions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionCategory {
    /// Category display name
    pub name: &'static str,
    /// Display color (HSL), used by the wheel and distribution charts
    pub color: &'static str,
    /// Leaf emotions, in wheel display order
    pub emotions: &'static [&'static str],
}

/// The canonical two-level emotion taxonomy.
pub static EMOTION_CATEGORIES: &[EmotionCategory] = &[
    EmotionCategory {
        name: "Joy",
        color: "hsl(48, 100%, 50%)",
        emotions: &["Happy", "Content", "Proud", "Optimistic"],
    },
    EmotionCategory {
        name: "Trust",
        color: "hsl(90, 60%, 55%)",
        emotions: &["Accepted", "Secure", "Grateful", "Connected"],
    },
    EmotionCategory {
        name: "Fear",
        color: "hsl(255, 30%, 50%)",
        emotions: &["Anxious", "Insecure", "Overwhelmed", "Worried"],
    },
    EmotionCategory {
        name: "Surprise",
        color: "hsl(180, 70%, 60%)",
        emotions: &["Amazed", "Confused", "Startled", "Curious"],
    },
    EmotionCategory {
        name: "Sadness",
        color: "hsl(210, 60%, 50%)",
        emotions: &["Lonely", "Hurt", "Disappointed", "Grieving"],
    },
    EmotionCategory {
        name: "Disgust",
        color: "hsl(75, 40%, 40%)",
        emotions: &["Disapproving", "Repelled", "Awkward", "Judgmental"],
    },
    EmotionCategory {
        name: "Anger",
        color: "hsl(0, 80%, 60%)",
        emotions: &["Frustrated", "Irritated", "Resentful", "Enraged"],
    },
    EmotionCategory {
        name: "Anticipation",
        color: "hsl(30, 90%, 55%)",
        emotions: &["Eager", "Hopeful", "Excited", "Vigilant"],
    },
];

/// Look up a category by its display name.
pub fn category_by_name(name: &str) -> Option<&'static EmotionCategory> {
    EMOTION_CATEGORIES.iter().find(|c| c.name == name)
}

/// Roll an emotion label up to its top-level category.
///
/// Accepts either a leaf emotion ("Content") or a bare category name
/// ("Joy", which maps to itself). Returns `None` for labels outside the
/// taxonomy; callers decide how to display unknowns.
pub fn category_of(emotion: &str) -> Option<&'static EmotionCategory> {
    EMOTION_CATEGORIES
        .iter()
        .find(|c| c.name == emotion || c.emotions.contains(&emotion))
}

// ============================================
// Thought patterns
// ============================================

/// A mode-of-thinking tag from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThoughtPattern {
    /// Stable identifier stored on entries
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
}

/// The thought-pattern catalog.
pub static THOUGHT_PATTERNS: &[ThoughtPattern] = &[
    ThoughtPattern { id: "planning", label: "Planning or problem-solving" },
    ThoughtPattern { id: "worrying", label: "Worrying about the future" },
    ThoughtPattern { id: "ruminating", label: "Ruminating on the past" },
    ThoughtPattern { id: "self-critical", label: "Self-critical thoughts" },
    ThoughtPattern { id: "grateful", label: "Grateful or appreciative thoughts" },
    ThoughtPattern { id: "neutral", label: "Neutral or observational" },
    ThoughtPattern { id: "daydreaming", label: "Daydreaming or wandering" },
];

/// Look up the display label for a thought-pattern id.
pub fn thought_pattern_label(id: &str) -> Option<&'static str> {
    THOUGHT_PATTERNS.iter().find(|p| p.id == id).map(|p| p.label)
}

// ============================================
// Body parts
// ============================================

/// Enumerated body-part labels offered by the sensation picker.
///
/// Sensation locations are free-form; this list seeds the UI.
pub static BODY_PARTS: &[&str] = &[
    "Head", "Neck", "Shoulders", "Arms", "Hands", "Chest", "Stomach", "Back",
    "Hips", "Legs", "Feet", "Other",
];
