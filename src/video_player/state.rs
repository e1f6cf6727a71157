// SPDX-License-Identifier: MPL-2.0
//! Observable playback state handed to the view layer.

use crate::video_player::time_format::format_hms;

/// Snapshot of everything a view needs to render the controls.
///
/// Produced by [`PlaybackController::state`](super::PlaybackController::state);
/// mutating a snapshot has no effect on the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Is the video playing? Set on user toggles, not polled.
    pub is_playing: bool,

    /// Volume in percent (0–100).
    pub volume: f64,

    /// Is audio muted?
    pub muted: bool,

    /// Volume saved when mute engaged. `Some` only while muted.
    pub last_volume_before_mute: Option<f64>,

    /// Playback position in percent (0–100).
    pub progress: f64,

    /// Current position as `HH:MM:SS`.
    pub current_time_display: String,

    /// Total duration as `HH:MM:SS`.
    pub duration_display: String,

    pub is_full_screen: bool,

    /// Should the control bar be visible?
    pub show_controls: bool,

    /// Is the user scrubbing the progress bar?
    pub is_dragging: bool,

    /// Is the transient play/pause indicator visible?
    pub info_overlay_visible: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            volume: crate::config::DEFAULT_VOLUME_PERCENT,
            muted: false,
            last_volume_before_mute: None,
            progress: 0.0,
            current_time_display: format_hms(0.0),
            duration_display: format_hms(0.0),
            is_full_screen: false,
            show_controls: true,
            is_dragging: false,
            info_overlay_visible: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn playback_state_defaults() {
        let state = PlaybackState::default();
        assert!(!state.is_playing);
        assert_abs_diff_eq!(state.volume, 100.0);
        assert!(!state.muted);
        assert!(state.last_volume_before_mute.is_none());
        assert_abs_diff_eq!(state.progress, 0.0);
        assert_eq!(state.current_time_display, "00:00:00");
        assert_eq!(state.duration_display, "00:00:00");
        assert!(!state.is_full_screen);
        assert!(state.show_controls);
        assert!(!state.is_dragging);
        assert!(!state.info_overlay_visible);
    }
}
