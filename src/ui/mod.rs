// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Every component follows the Elm-style "state down, messages up" pattern:
//! a `Message` for its own widgets, an `Event` for what the application has
//! to act on, and a `view` that borrows its state.
//!
//! # Pages
//!
//! - [`login`] - Access token entry
//! - [`orders`] - Orders table with search and filters
//! - [`products`] - Catalog with the admin active toggle
//! - [`statistics`] - Sales summary for an optional date range
//!
//! # Shared Infrastructure
//!
//! - [`overlay`] - Modal visibility, backdrop and scroll lock
//! - [`modals`] - Order detail, edit and delete dialogs
//! - [`notifications`] - Toast notification queue
//! - [`navbar`] - Page tabs and logout
//! - [`state`] - Debounced input and row highlight timers
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod login;
pub mod modals;
pub mod navbar;
pub mod notifications;
pub mod orders;
pub mod overlay;
pub mod products;
pub mod state;
pub mod statistics;
pub mod styles;
