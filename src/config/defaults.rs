// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: backend location
//! - **Notifications**: toast lifetime and stacking cap
//! - **Orders**: search debounce and row highlight timing

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of the REST backend, including the `/api` prefix.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a toast stays fully visible before fading out (milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;

/// Shortest accepted toast duration.
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 500;

/// Longest accepted toast duration.
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;

/// Maximum number of toasts on screen at once.
pub const DEFAULT_MAX_VISIBLE_NOTIFICATIONS: usize = 4;

/// Lower bound for the stacking cap.
pub const MIN_MAX_VISIBLE_NOTIFICATIONS: usize = 1;

/// Upper bound for the stacking cap.
pub const MAX_MAX_VISIBLE_NOTIFICATIONS: usize = 10;

// ==========================================================================
// Orders Page Defaults
// ==========================================================================

/// Quiet period after the last keystroke before the search filter runs.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Upper bound for the search debounce.
pub const MAX_SEARCH_DEBOUNCE_MS: u64 = 2000;

/// How long an updated row stays highlighted.
pub const DEFAULT_HIGHLIGHT_MS: u64 = 2500;

/// Upper bound for the highlight duration.
pub const MAX_HIGHLIGHT_MS: u64 = 10_000;
