// SPDX-License-Identifier: MPL-2.0
//! Host fullscreen capability.
//!
//! Environments differ in how (and whether) they can put the presentation
//! surface in fullscreen. The host picks one implementation at startup,
//! usually with [`first_supported`], and the controller only talks to the
//! trait.

use crate::error::FullscreenError;

/// Requests and exits OS-level fullscreen for the presentation surface.
///
/// Requests may complete asynchronously; the environment confirms the
/// actual state through a fullscreen-change notification.
pub trait FullscreenCapability {
    /// Returns true if this environment can actually enter fullscreen.
    fn is_supported(&self) -> bool;

    fn request(&mut self) -> Result<(), FullscreenError>;

    fn exit(&mut self) -> Result<(), FullscreenError>;
}

impl<T: FullscreenCapability + ?Sized> FullscreenCapability for Box<T> {
    fn is_supported(&self) -> bool {
        (**self).is_supported()
    }

    fn request(&mut self) -> Result<(), FullscreenError> {
        (**self).request()
    }

    fn exit(&mut self) -> Result<(), FullscreenError> {
        (**self).exit()
    }
}

/// Capability for environments with no fullscreen API.
///
/// The controller still flips its logical flag so the view can switch
/// layout; nothing happens at the OS level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnsupportedFullscreen;

impl FullscreenCapability for UnsupportedFullscreen {
    fn is_supported(&self) -> bool {
        false
    }

    fn request(&mut self) -> Result<(), FullscreenError> {
        Err(FullscreenError::Unsupported)
    }

    fn exit(&mut self) -> Result<(), FullscreenError> {
        Err(FullscreenError::Unsupported)
    }
}

/// Picks the first supported capability, probing candidates in order.
///
/// Falls back to [`UnsupportedFullscreen`] when none is supported.
#[must_use]
pub fn first_supported(
    candidates: Vec<Box<dyn FullscreenCapability>>,
) -> Box<dyn FullscreenCapability> {
    candidates
        .into_iter()
        .find(|candidate| candidate.is_supported())
        .unwrap_or_else(|| Box::new(UnsupportedFullscreen))
}
