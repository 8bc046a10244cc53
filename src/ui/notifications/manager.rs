// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` keeps the visible toasts in display order, caps how many are
//! shown at once by evicting the oldest, and drops expired ones on each tick.

use super::notification::{Notification, Phase, Severity, DEFAULT_DURATION};
use crate::config::DEFAULT_MAX_VISIBLE_NOTIFICATIONS;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Owns the visible notifications (oldest first).
#[derive(Debug)]
pub struct Manager {
    visible: VecDeque<Notification>,
    max_visible: usize,
    default_duration: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates an empty manager with the stock limits (4 toasts, 3 s).
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_VISIBLE_NOTIFICATIONS, DEFAULT_DURATION)
    }

    /// Creates an empty manager; `max_visible` is at least one.
    #[must_use]
    pub fn with_limits(max_visible: usize, default_duration: Duration) -> Self {
        Self {
            visible: VecDeque::new(),
            max_visible: max_visible.max(1),
            default_duration,
        }
    }

    /// Shows a notification. If more than `max_visible` are then shown, the
    /// oldest ones are removed at once, whatever their remaining time.
    ///
    /// Warnings and errors are also written to the log.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(text = notification.message(), "notification"),
            Severity::Error => tracing::error!(text = notification.message(), "notification"),
            Severity::Info | Severity::Success | Severity::Neutral => {
                tracing::debug!(text = notification.message(), "notification");
            }
        }

        let notification = if notification.has_duration() {
            notification
        } else {
            notification.with_duration(self.default_duration)
        };

        self.visible.push_back(notification);
        while self.visible.len() > self.max_visible {
            self.visible.pop_front();
        }
    }

    /// Shorthand for pushing a message with a severity.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.push(Notification::new(severity, message));
    }

    /// Removes notifications whose fade-out has finished by `now`.
    pub fn tick(&mut self, now: Instant) {
        self.visible.retain(|n| n.phase(now) != Phase::Expired);
    }

    /// Visible notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().rev()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn clear(&mut self) {
        self.visible.clear();
    }
}
