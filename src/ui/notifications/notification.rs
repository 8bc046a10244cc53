// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A notification is shown for its duration, then fades out over
//! [`FADE_DURATION`], then expires. There is no manual dismiss.

use crate::config::DEFAULT_NOTIFICATION_DURATION_MS;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Length of the fade-out that follows the visible period.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Duration used when neither the notification nor the manager sets one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity drives the accent colour only; every severity expires the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    /// Fallback style for unrecognised severity names.
    Neutral,
}

impl Severity {
    /// Parses `info`, `success`, `warning` or `error`; anything else is
    /// [`Severity::Neutral`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "info" => Severity::Info,
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Neutral,
        }
    }

    /// Accent colour of the toast.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::PRIMARY_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
            Severity::Neutral => palette::SECONDARY_500,
        }
    }
}

/// Where a notification is in its lifetime at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Visible,
    /// Fading out; `alpha` goes from 1.0 to 0.0.
    Fading { alpha: f32 },
    Expired,
}

/// A transient message shown as a toast.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: Instant,
    duration: Option<Duration>,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
            duration: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Overrides how long the toast stays fully visible.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Overrides the creation instant.
    #[must_use]
    pub fn issued_at(mut self, instant: Instant) -> Self {
        self.created_at = instant;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Visible period; falls back to [`DEFAULT_DURATION`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration.unwrap_or(DEFAULT_DURATION)
    }

    pub(super) fn has_duration(&self) -> bool {
        self.duration.is_some()
    }

    #[must_use]
    pub fn phase(&self, now: Instant) -> Phase {
        let age = now.saturating_duration_since(self.created_at);
        let duration = self.duration();
        if age <= duration {
            return Phase::Visible;
        }
        let fading = age - duration;
        if fading >= FADE_DURATION {
            Phase::Expired
        } else {
            let alpha = 1.0 - fading.as_secs_f32() / FADE_DURATION.as_secs_f32();
            Phase::Fading { alpha }
        }
    }

    /// Opacity at `now`: 1.0 while visible, ramping to 0.0 while fading.
    #[must_use]
    pub fn alpha(&self, now: Instant) -> f32 {
        match self.phase(now) {
            Phase::Visible => 1.0,
            Phase::Fading { alpha } => alpha,
            Phase::Expired => 0.0,
        }
    }
}
