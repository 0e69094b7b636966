use std::time::{Duration, Instant};

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// A cancellable deferred value. Each `schedule` replaces the pending value
/// and restarts the quiet period, so only the last value is delivered.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending value fires.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|pending| pending.deadline.saturating_duration_since(now))
    }

    /// Takes the pending value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.cancel(),
            _ => None,
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}
