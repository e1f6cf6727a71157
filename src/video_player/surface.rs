// SPDX-License-Identifier: MPL-2.0
//! Media surface contract.
//!
//! The controller never decodes or renders anything itself. It drives an
//! opaque native playback primitive through [`MediaSurface`] and reads its
//! telemetry back.

/// Playback primitive driven by the controller.
///
/// Implementations wrap whatever actually decodes and renders the video
/// (a GStreamer pipeline, an mpv handle, a browser `<video>` element).
/// `play` and `pause` may complete asynchronously on the implementation
/// side; the controller does not wait for them.
pub trait MediaSurface {
    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback.
    fn pause(&mut self);

    /// Returns true while the media is not playing, including before the
    /// first `play` and after playback stopped for external reasons.
    fn is_paused(&self) -> bool;

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the playback position, in seconds.
    fn set_current_time(&mut self, secs: f64);

    /// Total duration in seconds. May be `NaN` or 0 before metadata loads.
    fn duration(&self) -> f64;

    /// Sets the output volume as a fraction in `[0, 1]`.
    fn set_volume(&mut self, unit: f64);
}

/// Headless surface that only records what it is told.
///
/// Useful for hosts without a renderer attached yet and for driving the
/// controller in tests. Playback does not advance on its own; move the
/// position with [`MemorySurface::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySurface {
    paused: bool,
    current_time: f64,
    duration: f64,
    volume: f64,
    play_calls: usize,
    pause_calls: usize,
}

impl MemorySurface {
    /// Creates a paused surface at position 0 with the given duration.
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self {
            paused: true,
            current_time: 0.0,
            duration,
            volume: 1.0,
            play_calls: 0,
            pause_calls: 0,
        }
    }

    /// Creates a surface whose metadata has not loaded yet.
    #[must_use]
    pub fn without_metadata() -> Self {
        Self::new(f64::NAN)
    }

    /// Sets the reported position without going through a seek.
    #[must_use]
    pub fn at(mut self, secs: f64) -> Self {
        self.current_time = secs;
        self
    }

    /// Simulates metadata arriving.
    pub fn set_duration(&mut self, secs: f64) {
        self.duration = secs;
    }

    /// Advances the position as if the media played for `secs`, stopping at
    /// the end of the media.
    pub fn advance(&mut self, secs: f64) {
        if self.paused {
            return;
        }
        let next = self.current_time + secs;
        if self.duration.is_finite() && next >= self.duration {
            self.current_time = self.duration;
            self.paused = true;
        } else {
            self.current_time = next;
        }
    }

    /// Simulates playback stopping for an external reason.
    pub fn stop_externally(&mut self) {
        self.paused = true;
    }

    /// Last volume written, as a fraction.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    #[must_use]
    pub fn play_calls(&self) -> usize {
        self.play_calls
    }

    #[must_use]
    pub fn pause_calls(&self) -> usize {
        self.pause_calls
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::without_metadata()
    }
}

impl MediaSurface for MemorySurface {
    fn play(&mut self) {
        self.play_calls += 1;
        self.paused = false;
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, secs: f64) {
        self.current_time = secs;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn set_volume(&mut self, unit: f64) {
        self.volume = unit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn new_surface_is_paused_at_start() {
        let surface = MemorySurface::new(120.0);
        assert!(surface.is_paused());
        assert_abs_diff_eq!(surface.current_time(), 0.0);
        assert_abs_diff_eq!(surface.duration(), 120.0);
    }

    #[test]
    fn advance_only_moves_while_playing() {
        let mut surface = MemorySurface::new(120.0);
        surface.advance(5.0);
        assert_abs_diff_eq!(surface.current_time(), 0.0);

        surface.play();
        surface.advance(5.0);
        assert_abs_diff_eq!(surface.current_time(), 5.0);
    }

    #[test]
    fn advance_stops_at_end() {
        let mut surface = MemorySurface::new(10.0).at(8.0);
        surface.play();
        surface.advance(5.0);
        assert_abs_diff_eq!(surface.current_time(), 10.0);
        assert!(surface.is_paused());
    }

    #[test]
    fn without_metadata_reports_nan_duration() {
        assert!(MemorySurface::without_metadata().duration().is_nan());
    }

    #[test]
    fn counts_play_and_pause_calls() {
        let mut surface = MemorySurface::new(10.0);
        surface.play();
        surface.pause();
        surface.pause();
        assert_eq!(surface.play_calls(), 1);
        assert_eq!(surface.pause_calls(), 2);
    }
}
