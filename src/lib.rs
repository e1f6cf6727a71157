// SPDX-License-Identifier: MPL-2.0
//! `media_controls` is the interaction layer of a video player.
//!
//! It keeps the state of the control bar (play/pause, progress, volume,
//! fullscreen) in sync with a media element, and turns keyboard and pointer
//! input into playback commands. Rendering and decoding are left to the
//! host, which plugs in through the [`video_player::MediaSurface`],
//! [`fullscreen::FullscreenCapability`], and [`host::Host`] traits.

pub mod config;
pub mod domain;
pub mod error;
pub mod fullscreen;
pub mod host;
pub mod input;
pub mod video_player;

#[cfg(test)]
mod test_utils;
