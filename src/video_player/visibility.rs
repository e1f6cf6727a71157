// SPDX-License-Identifier: MPL-2.0
//! Fullscreen and control visibility coordination.
//!
//! Owns the logical fullscreen flag, hover visibility of the controls, and
//! the transient play/pause info overlay.

use crate::domain::OverlayDelay;
use crate::fullscreen::FullscreenCapability;
use crate::host::{Scheduler, TimerId};

#[derive(Debug, Clone)]
pub struct VisibilityCoordinator {
    is_fullscreen: bool,
    show_controls: bool,
    /// A fullscreen request was accepted and the environment has not
    /// confirmed the new state yet. Hover changes are ignored meanwhile.
    transition_pending: bool,
    info_overlay_visible: bool,
    overlay_timer: Option<TimerId>,
    overlay_delay: OverlayDelay,
}

impl VisibilityCoordinator {
    #[must_use]
    pub fn new(overlay_delay: OverlayDelay) -> Self {
        Self {
            is_fullscreen: false,
            show_controls: true,
            transition_pending: false,
            info_overlay_visible: false,
            overlay_timer: None,
            overlay_delay,
        }
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    #[must_use]
    pub fn show_controls(&self) -> bool {
        self.show_controls
    }

    #[must_use]
    pub fn is_transition_pending(&self) -> bool {
        self.transition_pending
    }

    #[must_use]
    pub fn info_overlay_visible(&self) -> bool {
        self.info_overlay_visible
    }

    /// Shows the controls unless a fullscreen transition is pending.
    /// Returns true if the hover was applied.
    pub fn pointer_entered(&mut self) -> bool {
        self.apply_hover(true)
    }

    /// Hides the controls unless a fullscreen transition is pending.
    /// Returns true if the hover was applied.
    pub fn pointer_left(&mut self) -> bool {
        self.apply_hover(false)
    }

    fn apply_hover(&mut self, visible: bool) -> bool {
        if self.transition_pending {
            return false;
        }
        self.show_controls = visible;
        true
    }

    /// Enters or leaves fullscreen.
    ///
    /// The logical flag always flips. When the capability refuses, the
    /// toggle stays logical-only and no confirmation is awaited.
    pub fn toggle_fullscreen<F>(&mut self, capability: &mut F)
    where
        F: FullscreenCapability + ?Sized,
    {
        let entering = !self.is_fullscreen;
        let result = if entering {
            capability.request()
        } else {
            capability.exit()
        };

        match result {
            Ok(()) => self.transition_pending = true,
            Err(err) => {
                log::warn!("fullscreen toggle is logical only: {err}");
                self.transition_pending = false;
            }
        }

        self.is_fullscreen = entering;
        self.show_controls = !entering;
    }

    /// Resynchronizes with the state reported by the environment, e.g.
    /// after the user left fullscreen with Escape.
    pub fn fullscreen_changed(&mut self, is_fullscreen: bool) {
        if self.is_fullscreen != is_fullscreen {
            log::debug!("fullscreen resynchronized to {is_fullscreen}");
        }
        self.transition_pending = false;
        self.is_fullscreen = is_fullscreen;
        self.show_controls = !is_fullscreen;
    }

    /// Shows the info overlay and restarts its hide delay.
    ///
    /// A pending hide from an earlier toggle is cancelled, so the overlay
    /// always hides one full delay after the most recent toggle.
    pub fn show_info_overlay<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler + ?Sized,
    {
        if let Some(previous) = self.overlay_timer.take() {
            scheduler.cancel(previous);
        }
        self.info_overlay_visible = true;
        self.overlay_timer = Some(scheduler.start_timeout(self.overlay_delay.as_duration()));
    }

    /// Handles a fired timer. Returns true if it was the overlay hide timer.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.overlay_timer != Some(id) {
            return false;
        }
        self.overlay_timer = None;
        self.info_overlay_visible = false;
        true
    }

    /// Cancels the pending overlay hide.
    pub fn teardown<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler + ?Sized,
    {
        if let Some(timer) = self.overlay_timer.take() {
            scheduler.cancel(timer);
        }
        self.info_overlay_visible = false;
        self.transition_pending = false;
    }
}

impl Default for VisibilityCoordinator {
    fn default() -> Self {
        Self::new(OverlayDelay::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FullscreenError;
    use crate::fullscreen::UnsupportedFullscreen;
    use crate::host::DeadlineHost;
    use std::time::Duration;

    #[derive(Default)]
    struct AcceptingFullscreen {
        requests: usize,
        exits: usize,
    }

    impl FullscreenCapability for AcceptingFullscreen {
        fn is_supported(&self) -> bool {
            true
        }

        fn request(&mut self) -> Result<(), FullscreenError> {
            self.requests += 1;
            Ok(())
        }

        fn exit(&mut self) -> Result<(), FullscreenError> {
            self.exits += 1;
            Ok(())
        }
    }

    #[test]
    fn starts_windowed_with_controls_shown() {
        let coordinator = VisibilityCoordinator::default();
        assert!(!coordinator.is_fullscreen());
        assert!(coordinator.show_controls());
        assert!(!coordinator.info_overlay_visible());
    }

    #[test]
    fn hover_toggles_controls() {
        let mut coordinator = VisibilityCoordinator::default();
        assert!(coordinator.pointer_left());
        assert!(!coordinator.show_controls());
        assert!(coordinator.pointer_entered());
        assert!(coordinator.show_controls());
    }

    #[test]
    fn unsupported_toggle_is_logical_only() {
        let mut coordinator = VisibilityCoordinator::default();
        let mut capability = UnsupportedFullscreen;

        coordinator.toggle_fullscreen(&mut capability);
        assert!(coordinator.is_fullscreen());
        assert!(!coordinator.show_controls());
        assert!(!coordinator.is_transition_pending());

        // Hover still works since no confirmation is awaited.
        assert!(coordinator.pointer_entered());
        assert!(coordinator.show_controls());
    }

    #[test]
    fn supported_toggle_waits_for_confirmation() {
        let mut coordinator = VisibilityCoordinator::default();
        let mut capability = AcceptingFullscreen::default();

        coordinator.toggle_fullscreen(&mut capability);
        assert_eq!(capability.requests, 1);
        assert!(coordinator.is_transition_pending());
        assert!(!coordinator.pointer_entered());
        assert!(!coordinator.show_controls());

        coordinator.fullscreen_changed(true);
        assert!(!coordinator.is_transition_pending());
        assert!(coordinator.pointer_entered());
    }

    #[test]
    fn toggle_back_exits_fullscreen() {
        let mut coordinator = VisibilityCoordinator::default();
        let mut capability = AcceptingFullscreen::default();

        coordinator.toggle_fullscreen(&mut capability);
        coordinator.fullscreen_changed(true);
        coordinator.toggle_fullscreen(&mut capability);

        assert_eq!(capability.exits, 1);
        assert!(!coordinator.is_fullscreen());
        assert!(coordinator.show_controls());
    }

    #[test]
    fn external_exit_resynchronizes() {
        let mut coordinator = VisibilityCoordinator::default();
        let mut capability = AcceptingFullscreen::default();
        coordinator.toggle_fullscreen(&mut capability);
        coordinator.fullscreen_changed(true);

        // User pressed Escape
        coordinator.fullscreen_changed(false);
        assert!(!coordinator.is_fullscreen());
        assert!(coordinator.show_controls());
    }

    #[test]
    fn overlay_hides_after_delay() {
        let mut coordinator = VisibilityCoordinator::default();
        let mut host = DeadlineHost::new();

        coordinator.show_info_overlay(&mut host);
        assert!(coordinator.info_overlay_visible());

        for id in host.advance(Duration::from_millis(1500)) {
            coordinator.on_timer(id);
        }
        assert!(!coordinator.info_overlay_visible());
    }

    #[test]
    fn overlay_delay_restarts_on_each_show() {
        let mut coordinator = VisibilityCoordinator::default();
        let mut host = DeadlineHost::new();

        coordinator.show_info_overlay(&mut host);
        for id in host.advance(Duration::from_millis(1000)) {
            coordinator.on_timer(id);
        }
        coordinator.show_info_overlay(&mut host);
        assert_eq!(host.scheduled_timers(), 1);

        for id in host.advance(Duration::from_millis(1000)) {
            coordinator.on_timer(id);
        }
        assert!(coordinator.info_overlay_visible());

        for id in host.advance(Duration::from_millis(500)) {
            coordinator.on_timer(id);
        }
        assert!(!coordinator.info_overlay_visible());
    }

    #[test]
    fn teardown_cancels_overlay_timer() {
        let mut coordinator = VisibilityCoordinator::default();
        let mut host = DeadlineHost::new();
        coordinator.show_info_overlay(&mut host);

        coordinator.teardown(&mut host);
        assert_eq!(host.scheduled_timers(), 0);
        assert!(!coordinator.info_overlay_visible());
    }
}
