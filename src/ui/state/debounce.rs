// SPDX-License-Identifier: MPL-2.0
//! Deadline-based helpers driven by the application tick.
//!
//! Neither type spawns timers. The caller records input with the current
//! [`Instant`] and polls on every tick, which keeps both fully testable.

use std::time::{Duration, Instant};

/// Holds the latest value until no new input arrived for `delay`.
///
/// # Example
///
/// ```
/// use pedidos_backoffice::ui::state::Debounce;
/// use std::time::{Duration, Instant};
///
/// let t0 = Instant::now();
/// let mut search = Debounce::new(Duration::from_millis(300));
/// search.input("an".to_string(), t0);
/// search.input("ana".to_string(), t0 + Duration::from_millis(100));
///
/// assert_eq!(search.poll(t0 + Duration::from_millis(350)), None);
/// assert_eq!(
///     search.poll(t0 + Duration::from_millis(400)),
///     Some("ana".to_string())
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounce<T> {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replaces the pending value and restarts the quiet period.
    pub fn input(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Releases the pending value once its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending value without releasing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Marks one key (a row id) until a deadline passes.
#[derive(Debug, Clone)]
pub struct Highlight {
    duration: Duration,
    current: Option<(String, Instant)>,
}

impl Highlight {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    /// Highlights `key` from `now`, replacing any previous highlight.
    pub fn set(&mut self, key: impl Into<String>, now: Instant) {
        self.current = Some((key.into(), now + self.duration));
    }

    /// Clears the highlight when it has run out.
    pub fn tick(&mut self, now: Instant) {
        if matches!(&self.current, Some((_, until)) if now >= *until) {
            self.current = None;
        }
    }

    #[must_use]
    pub fn is_highlighted(&self, key: &str) -> bool {
        matches!(&self.current, Some((current, _)) if current == key)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}
