// SPDX-License-Identifier: MPL-2.0
//! Playback controls for a single video element.
//!
//! The [`PlaybackController`] drives a [`MediaSurface`] from user input and
//! exposes a [`PlaybackState`] snapshot for rendering. Gesture tracking and
//! visibility rules live in their own modules so they can be tested without
//! a surface.

mod controller;
pub mod drag;
mod state;
pub mod surface;
pub mod time_format;
pub mod visibility;

pub use controller::{PlaybackController, VolumeDirection};
pub use drag::{DragPhase, DragTracker, TrackBounds};
pub use state::PlaybackState;
pub use surface::{MediaSurface, MemorySurface};
pub use time_format::format_hms;
pub use visibility::VisibilityCoordinator;
