// SPDX-License-Identifier: MPL-2.0
//! Deterministic host driven by explicit clock advances.

use super::{ListenerId, ListenerKind, ListenerRegistry, Scheduler, TimerId};
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
struct Timer {
    due: Duration,
    period: Option<Duration>,
}

/// Host whose clock only moves when [`DeadlineHost::advance`] is called.
///
/// Timers are kept as deadlines relative to the host's own clock. Advancing
/// the clock returns the ids that fired, in firing order; the caller hands
/// them to the controller. Ids are never reused, so a handle cancelled and
/// replaced in the meantime can be told apart from the current one.
#[derive(Debug, Default)]
pub struct DeadlineHost {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, Timer>,
    listeners: BTreeMap<ListenerId, ListenerKind>,
    total_registrations: usize,
}

impl DeadlineHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the host clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Moves the clock forward and returns every timer firing in between.
    ///
    /// A recurring timer fires once per elapsed period. Ties fire in
    /// creation order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        let target = self.now + by;
        let mut fired = Vec::new();

        loop {
            let next = self
                .timers
                .iter()
                .filter(|(_, timer)| timer.due <= target)
                .min_by_key(|(id, timer)| (timer.due, **id))
                .map(|(id, timer)| (*id, *timer));

            let Some((id, timer)) = next else {
                break;
            };

            self.now = timer.due;
            fired.push(id);
            match timer.period {
                Some(period) => {
                    if let Some(entry) = self.timers.get_mut(&id) {
                        entry.due += period;
                    }
                }
                None => {
                    self.timers.remove(&id);
                }
            }
        }

        self.now = target;
        fired
    }

    /// Returns true if the timer is still scheduled.
    #[must_use]
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Number of scheduled timers.
    #[must_use]
    pub fn scheduled_timers(&self) -> usize {
        self.timers.len()
    }

    /// Number of registered listeners of the given kind.
    #[must_use]
    pub fn listener_count(&self, kind: ListenerKind) -> usize {
        self.listeners.values().filter(|k| **k == kind).count()
    }

    /// Number of registered listeners of any kind.
    #[must_use]
    pub fn active_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Registrations performed over the host's whole lifetime.
    #[must_use]
    pub fn total_registrations(&self) -> usize {
        self.total_registrations
    }

    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Scheduler for DeadlineHost {
    fn start_interval(&mut self, period: Duration) -> TimerId {
        let id = TimerId::new(self.allocate());
        // A zero period would fire forever within one advance.
        let period = period.max(Duration::from_millis(1));
        self.timers.insert(
            id,
            Timer {
                due: self.now + period,
                period: Some(period),
            },
        );
        id
    }

    fn start_timeout(&mut self, delay: Duration) -> TimerId {
        let id = TimerId::new(self.allocate());
        self.timers.insert(
            id,
            Timer {
                due: self.now + delay,
                period: None,
            },
        );
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.remove(&id);
    }
}

impl ListenerRegistry for DeadlineHost {
    fn register(&mut self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId::new(self.allocate());
        self.listeners.insert(id, kind);
        self.total_registrations += 1;
        id
    }

    fn unregister(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }
}
