// SPDX-License-Identifier: MPL-2.0
//! Host environment facilities consumed by the controller.
//!
//! The controller runs on a single event loop owned by the host. It never
//! spawns timers or installs listeners on its own: it asks the host through
//! [`Scheduler`] and [`ListenerRegistry`] and keeps the returned handles, so
//! teardown can release exactly what was acquired.
//!
//! [`DeadlineHost`] is a deterministic implementation driven by explicit
//! clock advances, suited to immediate-mode UIs that already tick every frame.

mod deadline;

pub use deadline::DeadlineHost;

use std::fmt;
use std::time::Duration;

/// Handle to a timer started through a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Wraps a host-specific timer identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Handle to a listener registered through a [`ListenerRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Wraps a host-specific listener identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Process-wide event streams the controller subscribes to while attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListenerKind {
    /// Global key presses.
    Keyboard,
    /// Pointer movement anywhere in the window (drives scrubbing).
    PointerMove,
    /// Pointer release anywhere in the window (ends scrubbing).
    PointerUp,
    /// Fullscreen state changes made by the environment.
    FullscreenChange,
}

impl ListenerKind {
    /// Every stream the controller listens to, in registration order.
    pub const ALL: [ListenerKind; 4] = [
        ListenerKind::Keyboard,
        ListenerKind::PointerMove,
        ListenerKind::PointerUp,
        ListenerKind::FullscreenChange,
    ];
}

/// Timer facility of the host event loop.
///
/// Fired timers are delivered back to the controller through
/// [`PlaybackController::on_timer`](crate::video_player::PlaybackController::on_timer).
pub trait Scheduler {
    /// Starts a recurring timer.
    fn start_interval(&mut self, period: Duration) -> TimerId;

    /// Starts a timer that fires once after `delay`.
    fn start_timeout(&mut self, delay: Duration) -> TimerId;

    /// Cancels a timer. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Listener registration facility of the host.
pub trait ListenerRegistry {
    fn register(&mut self, kind: ListenerKind) -> ListenerId;

    /// Removes a listener. Unknown ids are ignored.
    fn unregister(&mut self, id: ListenerId);
}

impl<T: Scheduler + ?Sized> Scheduler for &mut T {
    fn start_interval(&mut self, period: Duration) -> TimerId {
        (**self).start_interval(period)
    }

    fn start_timeout(&mut self, delay: Duration) -> TimerId {
        (**self).start_timeout(delay)
    }

    fn cancel(&mut self, id: TimerId) {
        (**self).cancel(id);
    }
}

impl<T: ListenerRegistry + ?Sized> ListenerRegistry for &mut T {
    fn register(&mut self, kind: ListenerKind) -> ListenerId {
        (**self).register(kind)
    }

    fn unregister(&mut self, id: ListenerId) {
        (**self).unregister(id);
    }
}

/// Everything the controller needs from its host.
pub trait Host: Scheduler + ListenerRegistry {}

impl<T: Scheduler + ListenerRegistry> Host for T {}
