// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::ApiResult;
use crate::session::User;
use crate::ui::login;
use crate::ui::modals::{self, Origin, Ticket};
use crate::ui::navbar;
use crate::ui::orders;
use crate::ui::products;
use crate::ui::statistics;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Login(login::Message),
    Navbar(navbar::Message),
    Orders(orders::Message),
    Products(products::Message),
    Statistics(statistics::Message),
    Detail(modals::detail::Message),
    Edit(modals::edit::Message),
    Delete(modals::delete::Message),
    /// A modal's backend call finished.
    ModalReply {
        origin: Origin,
        ticket: Ticket,
        reply: modals::Reply,
    },
    /// The stored session was checked against the backend at startup.
    SessionVerified(ApiResult<Option<User>>),
    LoggedOut,
    /// Click on the dimmed area around the active modal.
    BackdropDismiss,
    /// Keyboard or window event routed to the overlay (Escape closes).
    Overlay(iced::Event),
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Backend base URL; takes precedence over `api.base_url`.
    pub api_base: Option<String>,
    /// Optional data directory override (session and log files).
    /// Takes precedence over `PEDIDOS_BACKOFFICE_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PEDIDOS_BACKOFFICE_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
