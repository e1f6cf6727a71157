// SPDX-License-Identifier: MPL-2.0
//! Playback state controller.
//!
//! Owns the interaction state of one video element and turns user input
//! into commands for the [`MediaSurface`]:
//! - Play/pause with a recurring progress refresh while playing
//! - Relative skips, click-to-seek, and drag scrubbing
//! - Volume, with a mute that remembers the previous level
//! - Fullscreen and control visibility
//!
//! The controller is attached to a surface for its whole lifetime.
//! [`PlaybackController::detach`] (or dropping the controller) cancels every
//! timer and releases every listener it acquired in one step.

use super::drag::{DragTracker, TrackBounds};
use super::state::PlaybackState;
use super::surface::MediaSurface;
use super::time_format::format_hms;
use super::visibility::VisibilityCoordinator;
use crate::config::{Config, Presentation};
use crate::domain::{ProgressPercent, RefreshInterval, SkipStep, VolumePercent, VolumeStep};
use crate::fullscreen::FullscreenCapability;
use crate::host::{DeadlineHost, Host, ListenerId, ListenerKind, TimerId};
use crate::input::{InputEvent, Key};
use std::time::Duration;

/// Direction of a stepped volume change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeDirection {
    Up,
    Down,
}

/// Duration usable for arithmetic: unknown, zero, or invalid metadata is 0.
fn known_duration(duration_secs: f64) -> f64 {
    if duration_secs.is_finite() && duration_secs > 0.0 {
        duration_secs
    } else {
        0.0
    }
}

/// Controller for a single media surface.
///
/// Generic over the surface, the fullscreen capability chosen by the host,
/// and the host's timer/listener facilities.
pub struct PlaybackController<S, F, H>
where
    S: MediaSurface,
    F: FullscreenCapability,
    H: Host,
{
    surface: S,
    fullscreen: F,
    host: H,

    is_playing: bool,
    volume: VolumePercent,
    muted: bool,
    last_volume_before_mute: Option<VolumePercent>,
    progress: ProgressPercent,
    current_time_display: String,
    duration_display: String,

    drag: DragTracker,
    visibility: VisibilityCoordinator,

    /// Recurring progress refresh, `Some` exactly while playing.
    refresh_timer: Option<TimerId>,
    listeners: Vec<ListenerId>,
    attached: bool,

    skip_step: SkipStep,
    volume_step: VolumeStep,
    refresh_interval: RefreshInterval,
    presentation: Presentation,
}

impl<S, F, H> PlaybackController<S, F, H>
where
    S: MediaSurface,
    F: FullscreenCapability,
    H: Host,
{
    /// Attaches a controller to a media surface.
    ///
    /// Registers the keyboard, pointer-move, pointer-up, and
    /// fullscreen-change listeners once each, pushes the configured initial
    /// volume to the surface, and computes the initial time displays.
    pub fn attach(surface: S, fullscreen: F, host: H, config: &Config) -> Self {
        let mut controller = Self {
            surface,
            fullscreen,
            host,
            is_playing: false,
            volume: config.initial_volume(),
            muted: false,
            last_volume_before_mute: None,
            progress: ProgressPercent::START,
            current_time_display: format_hms(0.0),
            duration_display: format_hms(0.0),
            drag: DragTracker::new(),
            visibility: VisibilityCoordinator::new(config.overlay_delay()),
            refresh_timer: None,
            listeners: Vec::with_capacity(ListenerKind::ALL.len()),
            attached: true,
            skip_step: config.skip_step(),
            volume_step: config.volume_step(),
            refresh_interval: config.refresh_interval(),
            presentation: config.presentation.clone(),
        };

        for kind in ListenerKind::ALL {
            let id = controller.host.register(kind);
            controller.listeners.push(id);
        }

        controller.push_volume();
        controller.update_progress_bar();

        log::info!(
            "playback controller attached (volume {}%, {} listeners)",
            controller.volume.value(),
            controller.listeners.len()
        );
        controller
    }

    /// Tears the controller down: cancels the progress refresh and overlay
    /// timers, releases every listener, and ends any drag.
    ///
    /// Idempotent. Once detached, every entry point is a no-op.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;

        self.stop_refresh_timer();
        self.visibility.teardown(&mut self.host);
        for id in self.listeners.drain(..) {
            self.host.unregister(id);
        }
        self.drag.stop();

        log::info!("playback controller detached");
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // ═══════════════════════════════════════════════════════════════════════
    // OBSERVABLE STATE
    // ═══════════════════════════════════════════════════════════════════════

    /// Returns a snapshot of the state for rendering.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            is_playing: self.is_playing,
            volume: self.volume.value(),
            muted: self.muted,
            last_volume_before_mute: self.last_volume_before_mute.map(VolumePercent::value),
            progress: self.progress.value(),
            current_time_display: self.current_time_display.clone(),
            duration_display: self.duration_display.clone(),
            is_full_screen: self.visibility.is_fullscreen(),
            show_controls: self.visibility.show_controls(),
            is_dragging: self.drag.is_dragging(),
            info_overlay_visible: self.visibility.info_overlay_visible(),
        }
    }

    /// Returns true while the progress refresh timer is running.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refresh_timer.is_some()
    }

    #[must_use]
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, for loading media or feeding
    /// telemetry. Commands should go through the controller.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn fullscreen_capability(&self) -> &F {
        &self.fullscreen
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PLAYBACK
    // ═══════════════════════════════════════════════════════════════════════

    /// Toggles between playing and paused.
    ///
    /// Decides from the surface's paused flag rather than `is_playing`, so
    /// it stays correct when playback stopped on its own (end of media).
    ///
    /// State transitions:
    /// - Paused → Playing: `play()`, refresh timer started
    /// - Playing → Paused: `pause()`, refresh timer cancelled
    ///
    /// Both transitions show the info overlay.
    pub fn toggle_play_pause(&mut self) {
        if !self.attached {
            return;
        }

        if self.surface.is_paused() {
            self.surface.play();
            self.is_playing = true;
            self.start_refresh_timer();
            log::debug!("playback started");
        } else {
            self.surface.pause();
            self.is_playing = false;
            self.stop_refresh_timer();
            log::debug!("playback paused");
        }

        self.visibility.show_info_overlay(&mut self.host);
    }

    /// Moves the position by `delta_secs`, clamped to `[0, duration]`.
    ///
    /// With unknown duration the position is forced to 0. A `NaN` delta is
    /// ignored.
    pub fn skip_video(&mut self, delta_secs: f64) {
        if !self.attached {
            return;
        }
        if delta_secs.is_nan() {
            log::debug!("ignoring NaN skip");
            return;
        }

        let duration = known_duration(self.surface.duration());
        let current = self.surface.current_time();
        let current = if current.is_finite() { current } else { 0.0 };
        let target = (current + delta_secs).clamp(0.0, duration);

        self.surface.set_current_time(target);
        self.update_progress_bar();
    }

    /// Recomputes progress and the time displays from surface telemetry.
    ///
    /// While a drag is active the pointer owns the progress value, so only
    /// the displays are refreshed.
    pub fn update_progress_bar(&mut self) {
        if !self.attached {
            return;
        }

        let current = self.surface.current_time();
        let duration = self.surface.duration();

        if !self.drag.is_dragging() {
            self.progress = ProgressPercent::from_position(current, duration);
        }
        self.current_time_display = format_hms(current);
        self.duration_display = format_hms(known_duration(duration));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // VOLUME
    // ═══════════════════════════════════════════════════════════════════════

    /// Sets the volume in percent and pushes it to the surface.
    ///
    /// Out-of-range values are clamped to 0–100. `None` re-pushes the
    /// current volume. An audible volume set while muted ends the mute.
    pub fn set_volume(&mut self, value: Option<f64>) {
        if !self.attached {
            return;
        }

        if let Some(percent) = value {
            let volume = VolumePercent::new(percent);
            if self.muted && !volume.is_silent() {
                self.muted = false;
                self.last_volume_before_mute = None;
                log::debug!("unmuted by explicit volume change");
            }
            self.volume = volume;
        }
        self.push_volume();
    }

    /// Raises or lowers the volume by the configured step.
    pub fn adjust_volume(&mut self, direction: VolumeDirection) {
        let next = match direction {
            VolumeDirection::Up => self.volume.increase(self.volume_step),
            VolumeDirection::Down => self.volume.decrease(self.volume_step),
        };
        self.set_volume(Some(next.value()));
    }

    /// Mutes when audible, unmutes when muted.
    pub fn toggle_mute_video(&mut self) {
        if self.muted {
            self.unmute();
        } else {
            self.mute();
        }
    }

    /// Saves the current volume and silences the surface.
    ///
    /// Does nothing when already muted, so the saved volume survives
    /// redundant calls.
    pub fn mute(&mut self) {
        if !self.attached || self.muted {
            return;
        }
        self.last_volume_before_mute = Some(self.volume);
        self.volume = VolumePercent::SILENT;
        self.push_volume();
        self.muted = true;
        log::debug!("muted");
    }

    /// Restores the volume saved by [`mute`](Self::mute).
    pub fn unmute(&mut self) {
        if !self.attached || !self.muted {
            return;
        }
        if let Some(saved) = self.last_volume_before_mute.take() {
            self.volume = saved;
        }
        self.push_volume();
        self.muted = false;
        log::debug!("unmuted at {}%", self.volume.value());
    }

    fn push_volume(&mut self) {
        self.surface.set_volume(self.volume.as_unit());
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SEEK BAR
    // ═══════════════════════════════════════════════════════════════════════

    /// Records where the progress bar sits, for pointer conversions.
    pub fn set_track_bounds(&mut self, bounds: TrackBounds) {
        self.drag.set_bounds(bounds);
    }

    /// Starts scrubbing and immediately seeks to the pressed position, so a
    /// press-and-release without movement still seeks.
    pub fn start_dragging(&mut self, pointer_x: f64) {
        if !self.attached {
            return;
        }
        let fraction = self.drag.start(pointer_x);
        log::debug!("scrub started at {:.1}%", fraction * 100.0);
        self.seek_to_fraction(fraction);
    }

    /// Follows the pointer while scrubbing. Ignored when not dragging.
    pub fn drag_progress(&mut self, pointer_x: f64) {
        if !self.attached {
            return;
        }
        if let Some(fraction) = self.drag.update(pointer_x) {
            self.seek_to_fraction(fraction);
        }
    }

    /// Ends scrubbing. Progress resynchronizes on the next refresh.
    pub fn stop_dragging(&mut self) {
        if !self.attached {
            return;
        }
        if self.drag.stop() {
            log::debug!("scrub ended at {:.1}%", self.progress.value());
        }
    }

    /// Click-to-seek. Ignored while a drag owns the bar.
    pub fn seek_video(&mut self, click_x: f64) {
        if !self.attached {
            return;
        }
        if let Some(fraction) = self.drag.click(click_x) {
            self.seek_to_fraction(fraction);
        }
    }

    fn seek_to_fraction(&mut self, fraction: f64) {
        self.progress = ProgressPercent::from_fraction(fraction);
        let target = self.progress.to_time(self.surface.duration());
        self.surface.set_current_time(target);
        self.current_time_display = format_hms(target);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // FULLSCREEN & VISIBILITY
    // ═══════════════════════════════════════════════════════════════════════

    /// Enters or leaves fullscreen. Degrades to a logical toggle when the
    /// host cannot do it.
    pub fn toggle_full_screen(&mut self) {
        if !self.attached {
            return;
        }
        self.visibility.toggle_fullscreen(&mut self.fullscreen);
    }

    /// Applies a fullscreen change reported by the environment.
    pub fn on_fullscreen_change(&mut self, is_fullscreen: bool) {
        if !self.attached {
            return;
        }
        self.visibility.fullscreen_changed(is_fullscreen);
    }

    pub fn on_mouse_enter(&mut self) {
        if self.attached {
            self.visibility.pointer_entered();
        }
    }

    pub fn on_mouse_leave(&mut self) {
        if self.attached {
            self.visibility.pointer_left();
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // EVENT ROUTING
    // ═══════════════════════════════════════════════════════════════════════

    /// Applies a keyboard shortcut. Returns true if the key was consumed.
    ///
    /// - `ArrowRight`: skip forward
    /// - `ArrowLeft`: skip backward
    /// - `Space`: toggle play/pause
    ///
    /// Callers should not forward keys typed into unrelated inputs.
    pub fn handle_keyboard_event(&mut self, key: Key) -> bool {
        if !self.attached {
            return false;
        }
        match key {
            Key::ArrowRight => self.skip_video(self.skip_step.value()),
            Key::ArrowLeft => self.skip_video(-self.skip_step.value()),
            Key::Space => self.toggle_play_pause(),
            Key::Unbound => return false,
        }
        true
    }

    /// Routes an input event to the matching operation.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyPressed(key) => {
                self.handle_keyboard_event(key);
            }
            InputEvent::PointerEntered => self.on_mouse_enter(),
            InputEvent::PointerLeft => self.on_mouse_leave(),
            InputEvent::ProgressBarPressed { x } => self.start_dragging(x),
            InputEvent::ProgressBarClicked { x } => self.seek_video(x),
            InputEvent::PointerMoved { x } => self.drag_progress(x),
            InputEvent::PointerReleased => self.stop_dragging(),
            InputEvent::FullscreenChanged(is_fullscreen) => {
                self.on_fullscreen_change(is_fullscreen);
            }
            InputEvent::TrackLaidOut(bounds) => self.set_track_bounds(bounds),
        }
    }

    /// Handles a timer fired by the host. Unknown or stale ids are ignored.
    pub fn on_timer(&mut self, id: TimerId) {
        if !self.attached {
            return;
        }
        if self.refresh_timer == Some(id) {
            self.update_progress_bar();
        } else if !self.visibility.on_timer(id) {
            log::trace!("ignoring stale {id}");
        }
    }

    fn start_refresh_timer(&mut self) {
        self.stop_refresh_timer();
        self.refresh_timer = Some(self.host.start_interval(self.refresh_interval.as_duration()));
    }

    fn stop_refresh_timer(&mut self) {
        if let Some(id) = self.refresh_timer.take() {
            self.host.cancel(id);
        }
    }
}

impl<S, F> PlaybackController<S, F, DeadlineHost>
where
    S: MediaSurface,
    F: FullscreenCapability,
{
    /// Advances the host clock and delivers every timer that fired.
    pub fn advance(&mut self, by: Duration) {
        for id in self.host.advance(by) {
            self.on_timer(id);
        }
    }
}

impl<S, F, H> Drop for PlaybackController<S, F, H>
where
    S: MediaSurface,
    F: FullscreenCapability,
    H: Host,
{
    fn drop(&mut self) {
        self.detach();
    }
}
