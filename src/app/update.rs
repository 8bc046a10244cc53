// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler forwards a component message to its `update`, then carries
//! out the returned event: backend calls become `Task`s through the shared
//! [`ApiClient`], notifications go to the toast manager and modal requests
//! are tagged with their origin so the reply finds its way back.

use super::{App, Message, Screen};
use crate::api::{ApiClient, ApiResult};
use crate::session::User;
use crate::ui::login::{self, Event as LoginEvent};
use crate::ui::modals::{self, Origin, Reply, Request, Ticket};
use crate::ui::navbar::{self, Event as NavbarEvent, Page};
use crate::ui::notifications::Notification;
use crate::ui::orders::{self, Event as OrdersEvent};
use crate::ui::products::{self, Event as ProductsEvent};
use crate::ui::statistics::{self, Event as StatisticsEvent};
use iced::Task;
use std::time::Instant;

const SESSION_NOT_SAVED: &str = "No se pudo guardar la sesión";

pub(super) fn verify_session(client: &ApiClient, token: String) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.verify(&token).await },
        Message::SessionVerified,
    )
}

fn load_orders(client: &ApiClient) -> Task<Message> {
    let client = client.clone();
    Task::perform(async move { client.list_orders().await }, |result| {
        Message::Orders(orders::Message::Loaded(result))
    })
}

fn load_products(client: &ApiClient) -> Task<Message> {
    let client = client.clone();
    Task::perform(async move { client.list_products().await }, |result| {
        Message::Products(products::Message::Loaded(result))
    })
}

/// Switches to `page` and refreshes its data.
pub(super) fn show_page(app: &mut App, page: Page) -> Task<Message> {
    app.screen = Screen::from(page);
    tracing::debug!(?page, "showing page");
    match page {
        Page::Orders => {
            let event = app.orders.reload(None);
            handle_orders_event(app, event)
        }
        Page::Products => {
            let event = app.products.reload();
            handle_products_event(app, event)
        }
        Page::Statistics => {
            let event = app.statistics.reload();
            handle_statistics_event(app, event)
        }
    }
}

/// Drops the session and every page state, then shows the login screen.
///
/// `notice` is displayed above the login form.
pub(super) fn sign_out(app: &mut App, notice: Option<&str>) {
    app.session.clear();
    app.user = None;
    app.overlay.close_active();
    app.screen = Screen::Login;
    app.logging_out = false;
    app.login = notice.map(login::State::with_notice).unwrap_or_default();
    app.orders = orders::State::new(app.search_debounce, app.highlight_duration);
    app.products = products::State::default();
    app.statistics = statistics::State::default();
}

pub(super) fn handle_login_message(app: &mut App, message: login::Message) -> Task<Message> {
    match login::update(&mut app.login, message) {
        LoginEvent::None => Task::none(),
        LoginEvent::Verify(token) => {
            let client = app.client.clone();
            Task::perform(
                async move {
                    let result = client.verify(&token).await;
                    (token, result)
                },
                |(token, result)| Message::Login(login::Message::Verified(token, result)),
            )
        }
        LoginEvent::LoggedIn { token, user } => {
            tracing::info!(email = %user.email, rol = %user.rol, "signed in");
            store_user(app, token, user);
            show_page(app, Page::Orders)
        }
    }
}

fn store_user(app: &mut App, token: String, user: User) {
    if let Err(err) = app.session.save_session(token, user.clone()) {
        tracing::warn!(%err, "session kept in memory only");
        app.notifications
            .push(Notification::warning(SESSION_NOT_SAVED));
    }
    app.user = Some(user);
}

pub(super) fn handle_session_verified(
    app: &mut App,
    result: ApiResult<Option<User>>,
) -> Task<Message> {
    match result {
        Ok(Some(user)) => {
            if let Some(token) = app.session.token() {
                store_user(app, token, user);
            }
        }
        Ok(None) => {
            // the client clears the store on a 401; a rejected token without
            // one still has to go
            tracing::info!("stored session rejected");
            app.session.clear();
        }
        Err(err) => {
            tracing::warn!(%err, "could not verify stored session");
            app.notifications.push(Notification::warning(err.to_string()));
        }
    }
    Task::none()
}

pub(super) fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    let current = app.screen.page().unwrap_or(Page::Orders);
    match navbar::update(message, current) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(page) => show_page(app, page),
        NavbarEvent::Logout => {
            if app.logging_out {
                return Task::none();
            }
            app.logging_out = true;
            tracing::info!("signing out");
            let client = app.client.clone();
            Task::perform(async move { client.logout().await }, |()| Message::LoggedOut)
        }
    }
}

pub(super) fn handle_orders_message(app: &mut App, message: orders::Message) -> Task<Message> {
    let event = orders::update(&mut app.orders, message, Instant::now());
    handle_orders_event(app, event)
}

fn handle_orders_event(app: &mut App, event: OrdersEvent) -> Task<Message> {
    let events = match event {
        OrdersEvent::None => return Task::none(),
        OrdersEvent::Load => return load_orders(&app.client),
        OrdersEvent::Notify(notification) => {
            app.notifications.push(notification);
            return Task::none();
        }
        OrdersEvent::OpenDetail(id) => app.detail.open(&id, &mut app.overlay),
        OrdersEvent::OpenEdit(id) => app.edit.open(&id, &mut app.overlay),
        OrdersEvent::OpenDelete(id) => {
            if !app.session.is_admin() {
                return Task::none();
            }
            app.delete.open(&id, &mut app.overlay)
        }
    };
    handle_modal_events(app, events)
}

pub(super) fn handle_products_message(
    app: &mut App,
    message: products::Message,
) -> Task<Message> {
    let is_admin = app.session.is_admin();
    let event = products::update(&mut app.products, message, is_admin);
    handle_products_event(app, event)
}

fn handle_products_event(app: &mut App, event: ProductsEvent) -> Task<Message> {
    match event {
        ProductsEvent::None => Task::none(),
        ProductsEvent::Load => load_products(&app.client),
        ProductsEvent::Toggle { id, activo } => {
            let client = app.client.clone();
            Task::perform(
                async move {
                    let result = client.toggle_product(&id, activo).await;
                    (id, activo, result)
                },
                |(id, activo, result)| {
                    Message::Products(products::Message::Toggled { id, activo, result })
                },
            )
        }
        ProductsEvent::Notify(notification) => {
            app.notifications.push(notification);
            Task::none()
        }
    }
}

pub(super) fn handle_statistics_message(
    app: &mut App,
    message: statistics::Message,
) -> Task<Message> {
    let event = statistics::update(&mut app.statistics, message);
    handle_statistics_event(app, event)
}

fn handle_statistics_event(app: &mut App, event: StatisticsEvent) -> Task<Message> {
    match event {
        StatisticsEvent::None => Task::none(),
        StatisticsEvent::Load(range) => {
            let client = app.client.clone();
            Task::perform(async move { client.statistics(&range).await }, |result| {
                Message::Statistics(statistics::Message::Loaded(result))
            })
        }
        StatisticsEvent::Notify(notification) => {
            app.notifications.push(notification);
            Task::none()
        }
    }
}

/// Delivers a finished modal call to the controller that issued it.
pub(super) fn handle_modal_reply(
    app: &mut App,
    origin: Origin,
    ticket: Ticket,
    reply: Reply,
) -> Task<Message> {
    let events = match origin {
        Origin::Detail => app
            .detail
            .update(modals::detail::Message::Reply(ticket, reply), &mut app.overlay),
        Origin::Edit => app
            .edit
            .update(modals::edit::Message::Reply(ticket, reply), &mut app.overlay),
        Origin::Delete => app
            .delete
            .update(modals::delete::Message::Reply(ticket, reply), &mut app.overlay),
    };
    handle_modal_events(app, events)
}

/// Carries out what the modal controllers asked for.
pub(super) fn handle_modal_events(app: &mut App, events: Vec<modals::Event>) -> Task<Message> {
    let mut tasks = Vec::new();
    for event in events {
        match event {
            modals::Event::Api(Request {
                origin,
                ticket,
                call,
            }) => {
                let client = app.client.clone();
                tasks.push(Task::perform(call.execute(client), move |reply| {
                    Message::ModalReply {
                        origin,
                        ticket,
                        reply,
                    }
                }));
            }
            modals::Event::Notify(notification) => app.notifications.push(notification),
            modals::Event::OrdersChanged { highlight } => {
                let event = app.orders.reload(highlight);
                tasks.push(handle_orders_event(app, event));
            }
            modals::Event::OpenEdit(id) => {
                let events = app.edit.open(&id, &mut app.overlay);
                tasks.push(handle_modal_events(app, events));
            }
        }
    }
    Task::batch(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::{Order, Outcome, Product};
    use crate::session::{Session, SessionStore};
    use crate::ui::notifications::Severity;

    fn app_with(rol: &str) -> App {
        let session = SessionStore::in_memory(Session {
            token: Some("tok".into()),
            user: Some(User {
                email: "op@example.com".into(),
                nombre: "Operador".into(),
                rol: rol.into(),
            }),
        });
        let (app, _) = App::new(&Config::default(), session, Vec::new()).expect("client");
        app
    }

    #[test]
    fn delete_modal_is_admin_only() {
        let mut app = app_with("operador");
        let _ = handle_orders_message(&mut app, orders::Message::Delete("P-1".into()));
        assert_eq!(app.overlay.active(), None);

        let mut admin = app_with("admin");
        let _ = handle_orders_message(&mut admin, orders::Message::Delete("P-1".into()));
        assert_eq!(admin.overlay.active(), Some(admin.delete.modal()));
    }

    #[test]
    fn reply_reaches_the_issuing_modal() {
        let mut app = app_with("admin");
        let events = app.detail.open("P-1", &mut app.overlay);
        let ticket = match &events[0] {
            modals::Event::Api(request) => request.ticket,
            other => panic!("unexpected event {other:?}"),
        };

        let order = Order {
            id: "P-1".into(),
            ..Order::default()
        };
        let _ = handle_modal_reply(
            &mut app,
            Origin::Detail,
            ticket,
            Reply::Order(Ok(Some(order))),
        );

        assert_eq!(
            app.detail.content().ready().map(|o| o.id.as_str()),
            Some("P-1")
        );
    }

    #[test]
    fn saved_edit_reloads_orders_with_highlight() {
        let mut app = app_with("admin");
        let events = app.edit.open("P-1", &mut app.overlay);
        let ticket = match &events[0] {
            modals::Event::Api(request) => request.ticket,
            other => panic!("unexpected event {other:?}"),
        };
        let order = Order {
            id: "P-1".into(),
            ..Order::default()
        };
        let _ = handle_modal_reply(&mut app, Origin::Edit, ticket, Reply::Order(Ok(Some(order))));
        let _ = app.update(Message::Edit(modals::edit::Message::Save));

        let _ = handle_modal_reply(
            &mut app,
            Origin::Edit,
            ticket,
            Reply::Saved(Ok(Outcome {
                success: true,
                error: None,
            })),
        );

        assert!(app.orders.is_loading());
        assert_eq!(app.overlay.active(), None);
        assert!(app
            .notifications
            .visible()
            .any(|n| n.severity() == Severity::Success && n.message() == "Pedido actualizado"));

        let now = Instant::now();
        let _ = orders::update(
            &mut app.orders,
            orders::Message::Loaded(Ok(vec![Order {
                id: "P-1".into(),
                ..Order::default()
            }])),
            now,
        );
        assert!(app.orders.is_highlighted("P-1"));
    }

    #[test]
    fn product_toggle_needs_admin() {
        let mut app = app_with("operador");
        let _ = handle_products_message(
            &mut app,
            products::Message::Loaded(Ok(vec![Product {
                id: "7".into(),
                activo: true,
                ..Product::default()
            }])),
        );
        let _ = handle_products_message(&mut app, products::Message::Toggle("7".into(), false));
        assert!(!app.products.is_toggling("7"));
    }

    #[test]
    fn invalid_statistics_range_warns() {
        let mut app = app_with("admin");
        let _ = show_page(&mut app, Page::Statistics);
        let _ = handle_statistics_message(
            &mut app,
            statistics::Message::DesdeChanged("ayer".into()),
        );
        let _ = handle_statistics_message(&mut app, statistics::Message::Apply);

        assert!(app
            .notifications
            .visible()
            .any(|n| n.severity() == Severity::Warning));
    }
}
