//! Two-level radial emotion selector.
//!
//! The wheel is rendered as concentric rings around the origin: an outer
//! ring with one wedge per emotion category, an inner ring (visible only
//! while a category is open) with one wedge per specific emotion in that
//! category, and a center disc showing the current selection.
//!
//! Rendering is left to the caller; this module owns the two pieces a
//! renderer should not reimplement:
//!
//! - **Geometry**: wedge boundaries, SVG path data, label anchors, and
//!   point-to-wedge hit testing, all in the wheel's own coordinate space
//!   (origin at the center, y growing downward as in SVG)
//! - **Selection state**: which category ring is open and which emotion is
//!   selected, with the toggle and precedence rules applied consistently
//!
//! Angles are measured clockwise starting at 12 o'clock, so segment 0
//! always begins at the top of the wheel.

use std::f64::consts::PI;

use crate::catalog::{category_of, EmotionCategory, EMOTION_CATEGORIES};

/// Outer ring outer radius
pub const OUTER_RADIUS: f64 = 250.0;
/// Outer ring inner radius, also the inner ring outer radius
pub const INNER_RADIUS: f64 = 150.0;
/// Center disc radius; clicks inside it never hit a wedge
pub const CENTER_RADIUS: f64 = 60.0;

/// Placeholder shown on the center disc before anything is selected
pub const PLACEHOLDER: &str = "Select";

// ============================================
// Geometry
// ============================================

/// A point in wheel coordinates (origin at the wheel center).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The point at `angle` radians (screen convention, 0 = 3 o'clock) and
/// distance `radius` from the center.
pub fn point_at(angle: f64, radius: f64) -> Point {
    Point {
        x: angle.cos() * radius,
        y: angle.sin() * radius,
    }
}

/// Start angle of segment `index` out of `segments`, clockwise from the top.
fn segment_start(index: usize, segments: usize) -> f64 {
    index as f64 * segment_step(segments) - PI / 2.0
}

fn segment_step(segments: usize) -> f64 {
    2.0 * PI / segments as f64
}

/// SVG path data for outer-ring wedge `index`, an annular sector between
/// [`INNER_RADIUS`] and [`OUTER_RADIUS`].
pub fn category_wedge_path(index: usize, segments: usize) -> String {
    let step = segment_step(segments);
    let start = segment_start(index, segments);
    let end = start + step;

    let inner_start = point_at(start, INNER_RADIUS);
    let inner_end = point_at(end, INNER_RADIUS);
    let outer_start = point_at(start, OUTER_RADIUS);
    let outer_end = point_at(end, OUTER_RADIUS);
    let large_arc = if step > PI { 1 } else { 0 };

    format!(
        "M {} {} L {} {} A {} {} 0 {} 1 {} {} L {} {} A {} {} 0 {} 0 {} {} Z",
        inner_start.x,
        inner_start.y,
        outer_start.x,
        outer_start.y,
        OUTER_RADIUS,
        OUTER_RADIUS,
        large_arc,
        outer_end.x,
        outer_end.y,
        inner_end.x,
        inner_end.y,
        INNER_RADIUS,
        INNER_RADIUS,
        large_arc,
        inner_start.x,
        inner_start.y,
    )
}

/// SVG path data for inner-ring wedge `index`, a pie sector from the origin
/// out to [`INNER_RADIUS`]. The center disc is drawn on top of it.
pub fn emotion_wedge_path(index: usize, segments: usize) -> String {
    let step = segment_step(segments);
    let start = segment_start(index, segments);
    let end = start + step;

    let p1 = point_at(start, INNER_RADIUS);
    let p2 = point_at(end, INNER_RADIUS);
    let large_arc = if step > PI { 1 } else { 0 };

    format!(
        "M 0 0 L {} {} A {} {} 0 {} 1 {} {} Z",
        p1.x, p1.y, INNER_RADIUS, INNER_RADIUS, large_arc, p2.x, p2.y,
    )
}

/// Label anchor for outer-ring wedge `index`, at the wedge's angular
/// midpoint on the ring's median circle.
pub fn category_label_anchor(index: usize, segments: usize) -> Point {
    let mid = segment_start(index, segments) + segment_step(segments) / 2.0;
    point_at(mid, (OUTER_RADIUS + INNER_RADIUS) / 2.0)
}

/// Label anchor for inner-ring wedge `index`.
pub fn emotion_label_anchor(index: usize, segments: usize) -> Point {
    let mid = segment_start(index, segments) + segment_step(segments) / 2.0;
    point_at(mid, INNER_RADIUS / 1.5)
}

/// Which part of the wheel a point lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelHit {
    /// The center disc
    Center,
    /// Outer-ring wedge for category `index`
    Category(usize),
    /// Inner-ring wedge `index` of the open category's emotions
    Emotion(usize),
}

/// Map a point to the segment whose angular span contains it.
///
/// `segments` is the count of equal wedges in the ring the point's radius
/// falls in; the caller picks the right count per ring.
fn segment_at(point: Point, segments: usize) -> usize {
    // atan2 gives (-pi, pi] from 3 o'clock; shift so 0 is 12 o'clock
    // and the value grows clockwise, matching segment_start.
    let angle = (point.y.atan2(point.x) + PI / 2.0).rem_euclid(2.0 * PI);
    let index = (angle / segment_step(segments)) as usize;
    index.min(segments - 1)
}

// ============================================
// Selection state
// ============================================

/// Selection state for the emotion wheel.
///
/// Tracks which category ring is open and which emotion string is selected.
/// Selecting a category selects the category name itself; drilling into the
/// inner ring refines it to a specific emotion without closing the ring.
#[derive(Debug, Clone, Default)]
pub struct EmotionWheel {
    open_category: Option<usize>,
    selected_emotion: Option<String>,
}

impl EmotionWheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// All categories on the outer ring, in display order.
    pub fn categories(&self) -> &'static [EmotionCategory] {
        EMOTION_CATEGORIES
    }

    /// The category whose inner ring is currently open.
    pub fn open_category(&self) -> Option<&'static EmotionCategory> {
        self.open_category.map(|i| &EMOTION_CATEGORIES[i])
    }

    /// The currently selected emotion (a category name or a specific
    /// emotion), `None` when nothing is selected.
    pub fn selected_emotion(&self) -> Option<&str> {
        self.selected_emotion.as_deref()
    }

    /// The category a renderer should color the center disc with: the
    /// category owning the selected emotion, whether it is a category name
    /// or a specific emotion.
    pub fn selected_category(&self) -> Option<&'static EmotionCategory> {
        self.selected_emotion
            .as_deref()
            .and_then(category_of)
    }

    /// Text for the center disc.
    pub fn display_label(&self) -> &str {
        match (&self.selected_emotion, self.open_category) {
            (Some(emotion), _) => emotion,
            (None, Some(index)) => EMOTION_CATEGORIES[index].name,
            (None, None) => PLACEHOLDER,
        }
    }

    /// Select (or toggle off) the category at `index` on the outer ring.
    ///
    /// Re-selecting the open category closes its ring and clears the
    /// selection. Selecting a different category switches the ring and
    /// replaces any specific emotion with the new category name.
    pub fn select_category(&mut self, index: usize) {
        if index >= EMOTION_CATEGORIES.len() {
            return;
        }
        if self.open_category == Some(index) {
            self.open_category = None;
            self.selected_emotion = None;
        } else {
            self.open_category = Some(index);
            self.selected_emotion = Some(EMOTION_CATEGORIES[index].name.to_string());
        }
    }

    /// Select the specific emotion at `index` on the open inner ring.
    /// The ring stays open so the user can change their mind.
    pub fn select_emotion(&mut self, index: usize) {
        let Some(category) = self.open_category() else {
            return;
        };
        if let Some(&emotion) = category.emotions.get(index) {
            self.selected_emotion = Some(emotion.to_string());
        }
    }

    /// Resolve a click at wheel coordinates into a hit without applying it.
    ///
    /// Inner-ring hits are only reported while a category ring is open;
    /// clicks in that band fall through to `None` otherwise. Clicks beyond
    /// the outer ring also return `None`.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<WheelHit> {
        let point = Point { x, y };
        let distance = (x * x + y * y).sqrt();

        if distance <= CENTER_RADIUS {
            return Some(WheelHit::Center);
        }
        if distance <= INNER_RADIUS {
            let category = self.open_category()?;
            return Some(WheelHit::Emotion(segment_at(point, category.emotions.len())));
        }
        if distance <= OUTER_RADIUS {
            return Some(WheelHit::Category(segment_at(
                point,
                EMOTION_CATEGORIES.len(),
            )));
        }
        None
    }

    /// Apply a click at wheel coordinates, returning what was hit.
    pub fn click(&mut self, x: f64, y: f64) -> Option<WheelHit> {
        let hit = self.hit_test(x, y)?;
        match hit {
            WheelHit::Center => {}
            WheelHit::Category(index) => self.select_category(index),
            WheelHit::Emotion(index) => self.select_emotion(index),
        }
        Some(hit)
    }

    /// Restore selection state from a previously saved emotion string,
    /// reopening the owning category's ring when one matches.
    pub fn with_selection(emotion: &str) -> Self {
        let mut wheel = Self::new();
        if emotion.is_empty() {
            return wheel;
        }
        if let Some(category) = category_of(emotion) {
            wheel.open_category = EMOTION_CATEGORIES
                .iter()
                .position(|c| c.name == category.name);
            wheel.selected_emotion = Some(emotion.to_string());
        }
        wheel
    }
}
