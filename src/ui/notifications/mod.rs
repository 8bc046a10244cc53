// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! Notifications stack in the bottom-right corner, newest on top. At most a
//! few are visible at once (four by default); pushing beyond the cap evicts
//! the oldest immediately. Each toast stays for its duration (3 s by
//! default), fades out over 300 ms, and is then removed. There is no manual
//! dismiss.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Severity` and lifetime phases
//! - [`manager`] - `Manager`, the bounded queue
//! - [`toast`] - `Toast`, the rendering
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification, Toast};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("Pedido actualizado"));
//!
//! // on every tick
//! manager.tick(Instant::now());
//!
//! // in view
//! let toasts = Toast::view_overlay(&manager, Instant::now());
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::Manager;
pub use notification::{Notification, NotificationId, Phase, Severity, FADE_DURATION};
pub use toast::Toast;
