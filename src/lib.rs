// SPDX-License-Identifier: MPL-2.0
//! `pedidos_backoffice` is a desktop console for the staff of an embroidery
//! shop, built with the Iced GUI framework.
//!
//! It lists, inspects, edits and deletes orders through the shop's REST
//! backend, manages the product catalog and shows sales statistics. Modals
//! are coordinated by a single overlay controller and feedback is given
//! through auto-expiring toast notifications.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod session;
pub mod ui;
