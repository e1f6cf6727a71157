// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Volume percentage bounds and step
//! - **Seek**: Keyboard skip step
//! - **Timing**: Progress refresh period and info overlay delay
//! - **Presentation**: Inert values handed to the view layer

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default volume when the controller attaches (percent).
pub const DEFAULT_VOLUME_PERCENT: f64 = 100.0;

/// Minimum volume level (percent).
pub const MIN_VOLUME_PERCENT: f64 = 0.0;

/// Maximum volume level (percent).
pub const MAX_VOLUME_PERCENT: f64 = 100.0;

/// Default volume step for volume up/down (percent points).
pub const DEFAULT_VOLUME_STEP_PERCENT: f64 = 10.0;

/// Minimum volume step (percent points).
pub const MIN_VOLUME_STEP_PERCENT: f64 = 1.0;

/// Maximum volume step (percent points).
pub const MAX_VOLUME_STEP_PERCENT: f64 = 50.0;

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Default skip applied by the arrow keys (in seconds).
pub const DEFAULT_SKIP_STEP_SECS: f64 = 10.0;

/// Minimum skip step (in seconds).
pub const MIN_SKIP_STEP_SECS: f64 = 0.5;

/// Maximum skip step (in seconds).
pub const MAX_SKIP_STEP_SECS: f64 = 120.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Period of the progress refresh timer while playing (in milliseconds).
pub const DEFAULT_PROGRESS_REFRESH_MS: u64 = 1000;

/// Minimum progress refresh period (in milliseconds).
pub const MIN_PROGRESS_REFRESH_MS: u64 = 50;

/// Maximum progress refresh period (in milliseconds).
pub const MAX_PROGRESS_REFRESH_MS: u64 = 10_000;

/// Delay before the play/pause info overlay hides (in milliseconds).
pub const DEFAULT_INFO_OVERLAY_MS: u64 = 1500;

/// Minimum info overlay delay (in milliseconds).
pub const MIN_INFO_OVERLAY_MS: u64 = 100;

/// Maximum info overlay delay (in milliseconds).
pub const MAX_INFO_OVERLAY_MS: u64 = 10_000;

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Accent color for the progress bar, as a CSS-style hex string.
pub const DEFAULT_ACCENT_COLOR: &str = "#e50914";

/// Progress bar height in logical pixels.
pub const DEFAULT_BAR_HEIGHT: f32 = 4.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Volume validation
    assert!(MIN_VOLUME_PERCENT >= 0.0);
    assert!(MAX_VOLUME_PERCENT > MIN_VOLUME_PERCENT);
    assert!(DEFAULT_VOLUME_PERCENT >= MIN_VOLUME_PERCENT);
    assert!(DEFAULT_VOLUME_PERCENT <= MAX_VOLUME_PERCENT);
    assert!(MIN_VOLUME_STEP_PERCENT > 0.0);
    assert!(MAX_VOLUME_STEP_PERCENT >= MIN_VOLUME_STEP_PERCENT);
    assert!(DEFAULT_VOLUME_STEP_PERCENT >= MIN_VOLUME_STEP_PERCENT);
    assert!(DEFAULT_VOLUME_STEP_PERCENT <= MAX_VOLUME_STEP_PERCENT);

    // Seek validation
    assert!(MIN_SKIP_STEP_SECS > 0.0);
    assert!(MAX_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS <= MAX_SKIP_STEP_SECS);

    // Timing validation
    assert!(MIN_PROGRESS_REFRESH_MS > 0);
    assert!(MAX_PROGRESS_REFRESH_MS >= MIN_PROGRESS_REFRESH_MS);
    assert!(DEFAULT_PROGRESS_REFRESH_MS >= MIN_PROGRESS_REFRESH_MS);
    assert!(DEFAULT_PROGRESS_REFRESH_MS <= MAX_PROGRESS_REFRESH_MS);
    assert!(MIN_INFO_OVERLAY_MS > 0);
    assert!(MAX_INFO_OVERLAY_MS >= MIN_INFO_OVERLAY_MS);
    assert!(DEFAULT_INFO_OVERLAY_MS >= MIN_INFO_OVERLAY_MS);
    assert!(DEFAULT_INFO_OVERLAY_MS <= MAX_INFO_OVERLAY_MS);

    // Presentation validation
    assert!(DEFAULT_BAR_HEIGHT > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_defaults_are_valid() {
        assert_eq!(DEFAULT_VOLUME_PERCENT, 100.0);
        assert!(DEFAULT_VOLUME_PERCENT >= MIN_VOLUME_PERCENT);
        assert!(DEFAULT_VOLUME_PERCENT <= MAX_VOLUME_PERCENT);
        assert_eq!(DEFAULT_VOLUME_STEP_PERCENT, 10.0);
    }

    #[test]
    fn skip_step_defaults_are_valid() {
        assert_eq!(DEFAULT_SKIP_STEP_SECS, 10.0);
        assert!(DEFAULT_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
        assert!(DEFAULT_SKIP_STEP_SECS <= MAX_SKIP_STEP_SECS);
    }

    #[test]
    fn timing_defaults_are_valid() {
        assert_eq!(DEFAULT_PROGRESS_REFRESH_MS, 1000);
        assert_eq!(DEFAULT_INFO_OVERLAY_MS, 1500);
    }

    #[test]
    fn accent_color_is_hex() {
        assert!(DEFAULT_ACCENT_COLOR.starts_with('#'));
        assert_eq!(DEFAULT_ACCENT_COLOR.len(), 7);
    }
}
