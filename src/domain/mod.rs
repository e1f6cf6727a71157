// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects for the playback controller.
//!
//! # Modules
//!
//! - [`video`]: Playback value types ([`VolumePercent`](video::VolumePercent),
//!   [`ProgressPercent`](video::ProgressPercent), [`SkipStep`](video::SkipStep),
//!   [`OverlayDelay`](video::OverlayDelay))

pub mod video;

pub use video::{
    OverlayDelay, ProgressPercent, RefreshInterval, SkipStep, VolumePercent, VolumeStep,
};
