// SPDX-License-Identifier: MPL-2.0
//! Domain layer: backend payloads and pure presentation helpers.
//!
//! Nothing here touches the network or the UI toolkit. The only external
//! crates involved are `serde` (payload decoding) and `chrono` (timestamps).
//!
//! # Modules
//!
//! - [`order`]: orders, comments, attachments, update payloads, and the
//!   client-side [`OrderFilter`](order::OrderFilter)
//! - [`catalog`]: products and statistics
//! - [`format`]: currency, badges, dates, file sizes, MIME guessing
//! - [`lenient`]: tolerant serde field decoders

pub mod catalog;
pub mod format;
pub mod lenient;
pub mod order;

pub use catalog::{ChannelSales, DateRange, Product, Statistics, StatusCount, Summary};
pub use order::{Attachment, Comment, DownloadLink, Order, OrderFilter, OrderUpdate, Outcome};
