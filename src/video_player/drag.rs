// SPDX-License-Identifier: MPL-2.0
//! Scrubbing state management
//!
//! Tracks pointer drags over the progress bar and converts pointer
//! positions into fractions of the bar. Applying those fractions to the
//! media is the controller's job.

/// Horizontal bounding box of the progress bar, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackBounds {
    pub left: f64,
    pub width: f64,
}

impl TrackBounds {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Fraction of the bar under `pointer_x`, clamped to `[0, 1]`.
    ///
    /// A bar that has not been laid out yet (zero or invalid width) maps
    /// every position to 0.
    #[must_use]
    pub fn fraction_at(&self, pointer_x: f64) -> f64 {
        if !self.width.is_finite() || self.width <= 0.0 || !pointer_x.is_finite() {
            return 0.0;
        }
        ((pointer_x - self.left) / self.width).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Manages scrub-drag state
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    phase: DragPhase,
    bounds: TrackBounds,
}

impl DragTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bounds(&mut self, bounds: TrackBounds) {
        self.bounds = bounds;
    }

    #[must_use]
    pub fn bounds(&self) -> TrackBounds {
        self.bounds
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Starts a drag and returns the fraction under the pointer, so the
    /// press alone already positions the media.
    pub fn start(&mut self, pointer_x: f64) -> f64 {
        self.phase = DragPhase::Dragging;
        self.bounds.fraction_at(pointer_x)
    }

    /// Returns the fraction under the pointer while dragging.
    #[must_use]
    pub fn update(&self, pointer_x: f64) -> Option<f64> {
        if !self.is_dragging() {
            return None;
        }
        Some(self.bounds.fraction_at(pointer_x))
    }

    /// Ends the drag. Returns true if a drag was active.
    pub fn stop(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.phase = DragPhase::Idle;
        was_dragging
    }

    /// Returns the fraction for a click-to-seek, or `None` while a drag owns
    /// the bar.
    #[must_use]
    pub fn click(&self, click_x: f64) -> Option<f64> {
        if self.is_dragging() {
            return None;
        }
        Some(self.bounds.fraction_at(click_x))
    }
}
