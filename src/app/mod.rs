// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages and modals.
//!
//! The `App` struct owns the session, the backend client, the overlay and
//! every page state. Components never talk to the backend themselves: they
//! return events, and this module turns them into `Task`s whose results come
//! back as messages. After every update the session is re-checked so that a
//! 401 seen by any request sends the user back to the login screen.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::{ApiClient, ApiResult};
use crate::config::{self, Config};
use crate::session::{SessionStore, User};
use crate::ui::login;
use crate::ui::modals::{Delete, Detail, Edit};
use crate::ui::navbar::Page;
use crate::ui::notifications::{self, Notification};
use crate::ui::orders;
use crate::ui::overlay::OverlayController;
use crate::ui::products;
use crate::ui::statistics;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 960.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

const APP_TITLE: &str = "Backoffice Pedidos";
const SESSION_EXPIRED: &str = "Sesión expirada";

/// Root Iced application state.
pub struct App {
    client: ApiClient,
    session: SessionStore,
    /// Copy of the signed-in user for rendering the navbar.
    user: Option<User>,
    screen: Screen,
    overlay: OverlayController,
    detail: Detail,
    edit: Edit,
    delete: Delete,
    notifications: notifications::Manager,
    login: login::State,
    orders: orders::State,
    products: products::State,
    statistics: statistics::State,
    logging_out: bool,
    search_debounce: std::time::Duration,
    highlight_duration: std::time::Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("api", &self.client.base_url())
            .field("authenticated", &self.session.is_authenticated())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// CLI path overrides must already be registered with
/// [`paths::init_cli_overrides`].
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (mut config, config_warning) = config::load();
    if let Some(api_base) = flags.api_base {
        config.api.base_url = Some(api_base);
    }
    let (session, session_warning) = SessionStore::load();
    let warnings = config_warning.into_iter().chain(session_warning).collect();

    let started = App::new(&config, session, warnings).map_err(|err| {
        tracing::error!(%err, "cannot create the HTTP client");
        iced::Error::ExecutorCreationFailed(std::io::Error::other(err.to_string()))
    })?;

    // Wrap the prepared state in RefCell<Option<_>> to satisfy the Fn bound
    // while handing it out only once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(started));
    let boot = move || {
        boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once")
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application and its startup task.
    ///
    /// `warnings` come from loading the config and the session; each one is
    /// shown as a warning toast. A stored session opens the orders page and
    /// is re-verified in the background.
    pub fn new(
        config: &Config,
        session: SessionStore,
        warnings: Vec<String>,
    ) -> ApiResult<(Self, Task<Message>)> {
        let base_url = config.api_base_url();
        let client = ApiClient::new(base_url.as_str(), session.clone())?;
        tracing::info!(api = %base_url, "starting backoffice");

        let mut overlay = OverlayController::new();
        let detail = Detail::new(&mut overlay);
        let edit = Edit::new(&mut overlay);
        let delete = Delete::new(&mut overlay);

        let mut app = App {
            client,
            user: session.user(),
            session,
            screen: Screen::Login,
            overlay,
            detail,
            edit,
            delete,
            notifications: notifications::Manager::with_limits(
                config.max_visible_notifications(),
                config.notification_duration(),
            ),
            login: login::State::default(),
            orders: orders::State::new(config.search_debounce(), config.highlight_duration()),
            products: products::State::default(),
            statistics: statistics::State::default(),
            logging_out: false,
            search_debounce: config.search_debounce(),
            highlight_duration: config.highlight_duration(),
        };

        for warning in warnings {
            app.notifications.push(Notification::warning(warning));
        }

        let task = match app.session.token() {
            Some(token) => {
                let verify = update::verify_session(&app.client, token);
                let load = update::show_page(&mut app, Page::Orders);
                Task::batch([verify, load])
            }
            None => Task::none(),
        };

        Ok((app, task))
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn overlay(&self) -> &OverlayController {
        &self.overlay
    }

    fn title(&self) -> String {
        match self.screen.page() {
            Some(page) => format!("{} - {APP_TITLE}", page.label()),
            None => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let overlay_sub = subscription::create_overlay_subscription(self.overlay.active().is_some());
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.screen == Screen::Orders && self.orders.needs_tick(),
        );

        Subscription::batch([overlay_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Login(message) => update::handle_login_message(self, message),
            Message::Navbar(message) => update::handle_navbar_message(self, message),
            Message::Orders(message) => update::handle_orders_message(self, message),
            Message::Products(message) => update::handle_products_message(self, message),
            Message::Statistics(message) => update::handle_statistics_message(self, message),
            Message::Detail(message) => {
                let events = self.detail.update(message, &mut self.overlay);
                update::handle_modal_events(self, events)
            }
            Message::Edit(message) => {
                let events = self.edit.update(message, &mut self.overlay);
                update::handle_modal_events(self, events)
            }
            Message::Delete(message) => {
                let events = self.delete.update(message, &mut self.overlay);
                update::handle_modal_events(self, events)
            }
            Message::ModalReply {
                origin,
                ticket,
                reply,
            } => update::handle_modal_reply(self, origin, ticket, reply),
            Message::SessionVerified(result) => update::handle_session_verified(self, result),
            Message::LoggedOut => {
                update::sign_out(self, None);
                Task::none()
            }
            Message::BackdropDismiss => {
                self.overlay.dismiss();
                Task::none()
            }
            Message::Overlay(event) => {
                self.overlay.handle_event(&event);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                self.orders.tick(now);
                Task::none()
            }
        };

        if self.screen.is_protected() && !self.session.is_authenticated() {
            tracing::info!("session no longer valid, returning to login");
            update::sign_out(self, Some(SESSION_EXPIRED));
        }

        task
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            user: self.user.as_ref(),
            is_admin: self.session.is_admin(),
            logging_out: self.logging_out,
            overlay: &self.overlay,
            detail: &self.detail,
            edit: &self.edit,
            delete: &self.delete,
            notifications: &self.notifications,
            login: &self.login,
            orders: &self.orders,
            products: &self.products,
            statistics: &self.statistics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::session::Session;
    use crate::ui::modals;
    use crate::ui::navbar;
    use crate::ui::notifications::Severity;
    use std::time::{Duration, Instant};

    fn admin() -> User {
        User {
            email: "admin@example.com".into(),
            nombre: "Admin".into(),
            rol: "admin".into(),
        }
    }

    fn signed_in() -> App {
        let session = SessionStore::in_memory(Session {
            token: Some("tok".into()),
            user: Some(admin()),
        });
        let (app, _) = App::new(&Config::default(), session, Vec::new()).expect("client");
        app
    }

    fn signed_out() -> App {
        let (app, _) = App::new(
            &Config::default(),
            SessionStore::in_memory(Session::default()),
            Vec::new(),
        )
        .expect("client");
        app
    }

    #[test]
    fn starts_on_login_without_session() {
        let app = signed_out();
        assert_eq!(app.screen(), Screen::Login);
        assert_eq!(app.title(), "Backoffice Pedidos");
    }

    #[test]
    fn stored_session_opens_orders() {
        let app = signed_in();
        assert_eq!(app.screen(), Screen::Orders);
        assert!(app.orders.is_loading());
        assert_eq!(app.title(), "Pedidos - Backoffice Pedidos");
    }

    #[test]
    fn startup_warnings_become_toasts() {
        let (app, _) = App::new(
            &Config::default(),
            SessionStore::in_memory(Session::default()),
            vec!["Configuración inválida".into()],
        )
        .expect("client");

        let shown: Vec<_> = app
            .notifications()
            .visible()
            .map(|n| (n.severity(), n.message().to_string()))
            .collect();
        assert_eq!(
            shown,
            vec![(Severity::Warning, "Configuración inválida".to_string())]
        );
    }

    #[test]
    fn verified_login_stores_session_and_opens_orders() {
        let mut app = signed_out();
        let _ = app.update(Message::Login(login::Message::TokenChanged("tok".into())));
        let _ = app.update(Message::Login(login::Message::Submit));
        let _ = app.update(Message::Login(login::Message::Verified(
            "tok".into(),
            Ok(Some(admin())),
        )));

        assert_eq!(app.screen(), Screen::Orders);
        assert_eq!(app.session.token().as_deref(), Some("tok"));
        assert_eq!(app.user.as_ref().map(|u| u.nombre.as_str()), Some("Admin"));
    }

    #[test]
    fn cleared_session_returns_to_login_with_notice() {
        let mut app = signed_in();
        let _ = app.update(Message::Orders(orders::Message::View("P-1".into())));
        assert!(app.overlay().active().is_some());

        // a 401 clears the store from inside the client
        app.session.clear();
        let _ = app.update(Message::Tick(Instant::now()));

        assert_eq!(app.screen(), Screen::Login);
        assert_eq!(app.login.notice(), Some(SESSION_EXPIRED));
        assert_eq!(app.overlay().active(), None);
        assert!(app.user.is_none());
    }

    #[test]
    fn rejected_stored_session_is_expired() {
        let mut app = signed_in();
        app.session.clear();
        let _ = app.update(Message::SessionVerified(Ok(None)));
        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn unreachable_backend_keeps_stored_session() {
        let mut app = signed_in();
        let _ = app.update(Message::SessionVerified(Err(ApiError::Network(
            "refused".into(),
        ))));

        assert_eq!(app.screen(), Screen::Orders);
        assert!(app
            .notifications()
            .visible()
            .any(|n| n.severity() == Severity::Warning));
    }

    #[test]
    fn navbar_switches_pages_and_loads_them() {
        let mut app = signed_in();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Page::Products)));
        assert_eq!(app.screen(), Screen::Products);

        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Page::Statistics)));
        assert_eq!(app.screen(), Screen::Statistics);
    }

    #[test]
    fn logout_clears_session_without_notice() {
        let mut app = signed_in();
        let _ = app.update(Message::Navbar(navbar::Message::Logout));
        assert!(app.logging_out);

        let _ = app.update(Message::LoggedOut);

        assert_eq!(app.screen(), Screen::Login);
        assert!(!app.session.is_authenticated());
        assert_eq!(app.login.notice(), None);
    }

    #[test]
    fn escape_and_backdrop_close_the_active_modal() {
        let mut app = signed_in();
        let _ = app.update(Message::Orders(orders::Message::Edit("P-1".into())));
        assert_eq!(app.overlay().active(), Some(app.edit.modal()));

        let _ = app.update(Message::BackdropDismiss);
        assert_eq!(app.overlay().active(), None);

        let _ = app.update(Message::Orders(orders::Message::Delete("P-1".into())));
        assert_eq!(app.overlay().active(), Some(app.delete.modal()));

        let escape = iced::Event::Keyboard(iced::keyboard::Event::KeyPressed {
            key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape),
            modified_key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape),
            physical_key: iced::keyboard::key::Physical::Code(iced::keyboard::key::Code::Escape),
            location: iced::keyboard::Location::Standard,
            modifiers: iced::keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        });
        let _ = app.update(Message::Overlay(escape));
        assert_eq!(app.overlay().active(), None);
    }

    #[test]
    fn detail_edit_button_hands_over_to_edit_modal() {
        let mut app = signed_in();
        let _ = app.update(Message::Orders(orders::Message::View("P-1".into())));
        let _ = app.update(Message::Detail(modals::detail::Message::Edit));

        assert_eq!(app.overlay().active(), Some(app.edit.modal()));
        assert!(!app.overlay().is_open(app.detail.modal()));
    }

    #[test]
    fn toasts_expire_on_tick() {
        let mut app = signed_out();
        app.notifications.push(Notification::info("hola"));

        let later = Instant::now() + Duration::from_secs(60);
        let _ = app.update(Message::Tick(later));

        assert!(!app.notifications().has_notifications());
    }
}
