// SPDX-License-Identifier: MPL-2.0
//! Input events routed to the playback controller.
//!
//! The host translates its native keyboard, pointer, and fullscreen events
//! into [`InputEvent`] and hands them to
//! [`PlaybackController::handle_event`](crate::video_player::PlaybackController::handle_event).

use crate::video_player::TrackBounds;

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    /// Any key without a shortcut.
    Unbound,
}

impl Key {
    /// Maps a DOM-style key name (`"ArrowRight"`, `" "`, `"Space"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use media_controls::input::Key;
    ///
    /// assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
    /// assert_eq!(Key::from_name(" "), Key::Space);
    /// assert_eq!(Key::from_name("m"), Key::Unbound);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            " " | "Space" | "Spacebar" => Key::Space,
            _ => Key::Unbound,
        }
    }
}

/// Messages accepted by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Global key press.
    KeyPressed(Key),

    /// Pointer entered the player area.
    PointerEntered,

    /// Pointer left the player area.
    PointerLeft,

    /// Pointer pressed on the progress bar (starts scrubbing).
    ProgressBarPressed { x: f64 },

    /// Click on the progress bar.
    ProgressBarClicked { x: f64 },

    /// Global pointer move.
    PointerMoved { x: f64 },

    /// Global pointer release (ends scrubbing).
    PointerReleased,

    /// The environment reported the actual fullscreen state.
    FullscreenChanged(bool),

    /// The view laid out the progress bar.
    TrackLaidOut(TrackBounds),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_arrow_keys() {
        assert_eq!(Key::from_name("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
    }

    #[test]
    fn recognizes_space_spellings() {
        assert_eq!(Key::from_name(" "), Key::Space);
        assert_eq!(Key::from_name("Space"), Key::Space);
        assert_eq!(Key::from_name("Spacebar"), Key::Space);
    }

    #[test]
    fn other_keys_are_unbound() {
        assert_eq!(Key::from_name("ArrowUp"), Key::Unbound);
        assert_eq!(Key::from_name("Enter"), Key::Unbound);
        assert_eq!(Key::from_name(""), Key::Unbound);
    }

    #[test]
    fn event_debug_includes_payload() {
        let event = InputEvent::PointerMoved { x: 30.5 };
        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("PointerMoved"));
        assert!(debug_str.contains("30.5"));
    }
}
