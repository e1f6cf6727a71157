// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains video-related value objects that are
//! independent of any presentation or host concerns.

pub mod newtypes;

// Re-export commonly used types
pub use newtypes::{
    OverlayDelay, ProgressPercent, RefreshInterval, SkipStep, VolumePercent, VolumeStep,
};
