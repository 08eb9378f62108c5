use std::time::{Duration, Instant};

/// Fixed-period tick source that is driven by explicit instants instead of a
/// background timer.
///
/// The owner calls [`TickScheduler::poll`] from its loop; each call reports at
/// most one due tick, so ticks never overlap or burst after a stall.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickScheduler {
    interval: Duration,
    next_due: Option<Instant>,
}

impl TickScheduler {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Arms the scheduler; the first tick is due one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when a tick is due at `now` and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        self.next_due = Some(now + self.interval);
        true
    }

    /// Time left until the next tick, or `None` while stopped.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
