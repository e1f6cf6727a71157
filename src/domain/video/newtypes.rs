// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges. Every constructor also
//! absorbs `NaN` so no invalid number can reach display or surface state.

use crate::config::{
    DEFAULT_INFO_OVERLAY_MS, DEFAULT_PROGRESS_REFRESH_MS, DEFAULT_SKIP_STEP_SECS,
    DEFAULT_VOLUME_PERCENT, DEFAULT_VOLUME_STEP_PERCENT, MAX_INFO_OVERLAY_MS,
    MAX_PROGRESS_REFRESH_MS, MAX_SKIP_STEP_SECS, MAX_VOLUME_PERCENT, MAX_VOLUME_STEP_PERCENT,
    MIN_INFO_OVERLAY_MS, MIN_PROGRESS_REFRESH_MS, MIN_SKIP_STEP_SECS, MIN_VOLUME_PERCENT,
    MIN_VOLUME_STEP_PERCENT,
};
use std::time::Duration;

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value
    }
}

// =============================================================================
// VolumePercent
// =============================================================================

/// Volume level in percent, guaranteed to be within 0–100.
///
/// The media surface works in unit volume; use [`VolumePercent::as_unit`]
/// when handing the value over.
///
/// # Example
///
/// ```
/// use media_controls::domain::VolumePercent;
///
/// let vol = VolumePercent::new(60.0);
/// assert_eq!(vol.value(), 60.0);
/// assert_eq!(vol.as_unit(), 0.6);
///
/// // Values outside range are clamped
/// assert_eq!(VolumePercent::new(140.0).value(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct VolumePercent(f64);

impl VolumePercent {
    /// Silence.
    pub const SILENT: Self = Self(MIN_VOLUME_PERCENT);

    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(percent: f64) -> Self {
        Self(finite_or(percent, MIN_VOLUME_PERCENT).clamp(MIN_VOLUME_PERCENT, MAX_VOLUME_PERCENT))
    }

    /// Returns the volume in percent.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the volume as a fraction in `[0, 1]`.
    #[must_use]
    pub fn as_unit(self) -> f64 {
        self.0 / MAX_VOLUME_PERCENT
    }

    /// Returns true if the volume is silent.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 <= MIN_VOLUME_PERCENT
    }

    /// Raises the volume by one step, clamping to maximum.
    #[must_use]
    pub fn increase(self, step: VolumeStep) -> Self {
        Self::new(self.0 + step.value())
    }

    /// Lowers the volume by one step, clamping to minimum.
    #[must_use]
    pub fn decrease(self, step: VolumeStep) -> Self {
        Self::new(self.0 - step.value())
    }
}

impl Default for VolumePercent {
    fn default() -> Self {
        Self(DEFAULT_VOLUME_PERCENT)
    }
}

// =============================================================================
// VolumeStep
// =============================================================================

/// Percent points applied by a single volume up/down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeStep(f64);

impl VolumeStep {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(
            finite_or(value, DEFAULT_VOLUME_STEP_PERCENT)
                .clamp(MIN_VOLUME_STEP_PERCENT, MAX_VOLUME_STEP_PERCENT),
        )
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for VolumeStep {
    fn default() -> Self {
        Self(DEFAULT_VOLUME_STEP_PERCENT)
    }
}

// =============================================================================
// ProgressPercent
// =============================================================================

/// Playback position as a percentage of the total duration (0–100).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ProgressPercent(f64);

impl ProgressPercent {
    pub const START: Self = Self(0.0);

    /// Creates a progress value, clamping to `[0, 100]`. `NaN` becomes 0.
    #[must_use]
    pub fn new(percent: f64) -> Self {
        Self(finite_or(percent, 0.0).clamp(0.0, 100.0))
    }

    /// Computes progress from telemetry.
    ///
    /// An unknown, zero, or non-finite duration yields 0.
    #[must_use]
    pub fn from_position(current_secs: f64, duration_secs: f64) -> Self {
        if !duration_secs.is_finite() || duration_secs <= 0.0 || !current_secs.is_finite() {
            return Self::START;
        }
        Self::new(current_secs / duration_secs * 100.0)
    }

    /// Creates progress from a pointer fraction in `[0, 1]`.
    #[must_use]
    pub fn from_fraction(fraction: f64) -> Self {
        Self::new(fraction * 100.0)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// Converts this progress into a media time for the given duration.
    ///
    /// Returns 0 when the duration is unknown.
    #[must_use]
    pub fn to_time(self, duration_secs: f64) -> f64 {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return 0.0;
        }
        self.fraction() * duration_secs
    }
}

// =============================================================================
// SkipStep
// =============================================================================

/// Seconds skipped by a keyboard arrow press.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step value, clamping to valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(finite_or(value, DEFAULT_SKIP_STEP_SECS).clamp(MIN_SKIP_STEP_SECS, MAX_SKIP_STEP_SECS))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the step as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for SkipStep {
    fn default() -> Self {
        Self(DEFAULT_SKIP_STEP_SECS)
    }
}

// =============================================================================
// RefreshInterval
// =============================================================================

/// Period of the progress refresh timer in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshInterval(u64);

impl RefreshInterval {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_PROGRESS_REFRESH_MS, MAX_PROGRESS_REFRESH_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RefreshInterval {
    fn default() -> Self {
        Self(DEFAULT_PROGRESS_REFRESH_MS)
    }
}

// =============================================================================
// OverlayDelay
// =============================================================================

/// Auto-hide delay of the play/pause info overlay in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayDelay(u64);

impl OverlayDelay {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_INFO_OVERLAY_MS, MAX_INFO_OVERLAY_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for OverlayDelay {
    fn default() -> Self {
        Self(DEFAULT_INFO_OVERLAY_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
