// SPDX-License-Identifier: MPL-2.0
//! Order deletion confirmation modal.

use super::layout::{self, BOLD};
use super::{Call, Content, Event, Origin, Reply, Ticket, Tickets};
use crate::api::ApiResult;
use crate::domain::format::{format_currency, or_dash};
use crate::domain::{Order, Outcome};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::overlay::{ModalId, OverlayController, Surface};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{Element, Length};

const DELETE_FAILED: &str = "Error al eliminar";

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Confirm,
    Reply(Ticket, Reply),
}

#[derive(Debug)]
pub struct Delete {
    modal: ModalId,
    tickets: Tickets,
    order_id: String,
    content: Content<Order>,
    deleting: bool,
}

impl Delete {
    pub fn new<S: Surface>(overlay: &mut OverlayController<S>) -> Self {
        Self {
            modal: overlay.register("eliminar"),
            tickets: Tickets::default(),
            order_id: String::new(),
            content: Content::Loading,
            deleting: false,
        }
    }

    #[must_use]
    pub fn modal(&self) -> ModalId {
        self.modal
    }

    #[must_use]
    pub fn content(&self) -> &Content<Order> {
        &self.content
    }

    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn open<S: Surface>(
        &mut self,
        order_id: &str,
        overlay: &mut OverlayController<S>,
    ) -> Vec<Event> {
        let ticket = self.tickets.issue();
        self.order_id = order_id.to_string();
        self.content = Content::Loading;
        self.deleting = false;
        overlay.open(self.modal);
        vec![Event::request(
            Origin::Delete,
            ticket,
            Call::FetchOrder(order_id.to_string()),
        )]
    }

    pub fn update<S: Surface>(
        &mut self,
        message: Message,
        overlay: &mut OverlayController<S>,
    ) -> Vec<Event> {
        match message {
            Message::Close => {
                overlay.close(self.modal);
                Vec::new()
            }
            Message::Confirm => {
                if self.deleting || self.content.ready().is_none() {
                    return Vec::new();
                }
                self.deleting = true;
                vec![Event::request(
                    Origin::Delete,
                    self.tickets.current(),
                    Call::DeleteOrder(self.order_id.clone()),
                )]
            }
            Message::Reply(ticket, reply) => {
                if self.tickets.accepts(ticket, self.modal, overlay) {
                    return self.receive(reply, overlay);
                }
                match reply {
                    // The backend already applied it: report and refresh anyway.
                    Reply::Deleted(result) => {
                        if self.tickets.is_current(ticket) {
                            self.deleting = false;
                        }
                        tracing::debug!("delete finished after its modal closed");
                        deleted(outcome(result))
                    }
                    _ => {
                        tracing::debug!(order = %self.order_id, "dropping stale delete reply");
                        Vec::new()
                    }
                }
            }
        }
    }

    fn receive<S: Surface>(
        &mut self,
        reply: Reply,
        overlay: &mut OverlayController<S>,
    ) -> Vec<Event> {
        match reply {
            Reply::Order(Ok(Some(order))) => {
                self.content = Content::Ready(order);
                Vec::new()
            }
            Reply::Order(Ok(None)) => {
                self.content = Content::NotFound;
                Vec::new()
            }
            Reply::Order(Err(err)) => {
                tracing::warn!(order = %self.order_id, %err, "loading order for deletion failed");
                overlay.close(self.modal);
                vec![Event::Notify(Notification::error(err.to_string()))]
            }
            Reply::Deleted(result) => {
                self.deleting = false;
                let outcome = outcome(result);
                if outcome.is_ok() {
                    tracing::info!(order = %self.order_id, "order deleted");
                    overlay.close(self.modal);
                }
                deleted(outcome)
            }
            Reply::Saved(_) | Reply::Extras(_) => Vec::new(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let width = sizing::MODAL_DELETE_WIDTH;
        match &self.content {
            Content::Loading => layout::loading(width),
            Content::NotFound => {
                layout::failure(super::detail::NOT_FOUND.to_string(), Message::Close, width)
            }
            Content::Failed(message) => layout::failure(message.clone(), Message::Close, width),
            Content::Ready(order) => self.view_order(order),
        }
    }

    fn view_order<'a>(&'a self, order: &'a Order) -> Element<'a, Message> {
        let question = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(Text::new("¿Estás seguro de eliminar este pedido?").size(typography::BODY))
            .push(
                Text::new("Esta acción no se puede deshacer.")
                    .size(typography::BODY)
                    .font(BOLD),
            );

        let summary = Column::with_children(summary(order).into_iter().map(|(label, value)| {
            Row::new()
                .spacing(spacing::SM)
                .push(
                    Container::new(
                        Text::new(label)
                            .size(typography::BODY_SM)
                            .color(palette::GRAY_600),
                    )
                    .width(Length::FillPortion(1)),
                )
                .push(
                    Container::new(Text::new(value).size(typography::BODY_SM).font(BOLD))
                        .width(Length::FillPortion(2)),
                )
                .into()
        }))
        .spacing(spacing::XS);

        let body = Column::new()
            .spacing(spacing::MD)
            .push(Container::new(question).width(Length::Fill).align_x(Horizontal::Center))
            .push(summary);

        let mut confirm = button(
            text(if self.deleting { "Eliminando..." } else { "Eliminar" }).size(typography::BODY),
        )
        .style(styles::button::danger);
        if !self.deleting {
            confirm = confirm.on_press(Message::Confirm);
        }

        let footer = Row::new()
            .spacing(spacing::XS)
            .push(
                button(text("Cancelar").size(typography::BODY))
                    .on_press(Message::Close)
                    .style(styles::button::secondary),
            )
            .push(confirm);

        layout::dialog(
            "Eliminar Pedido".to_string(),
            Message::Close,
            body.into(),
            Some(footer.into()),
            sizing::MODAL_DELETE_WIDTH,
        )
    }
}

fn outcome(result: ApiResult<Outcome>) -> Result<(), String> {
    result
        .map_err(|err| err.to_string())
        .and_then(|outcome| outcome.into_result(DELETE_FAILED))
}

fn deleted(outcome: Result<(), String>) -> Vec<Event> {
    match outcome {
        Ok(()) => vec![
            Event::Notify(Notification::success("Pedido eliminado")),
            Event::OrdersChanged { highlight: None },
        ],
        Err(message) => vec![Event::Notify(Notification::error(message))],
    }
}

/// Pedido, Cliente, Producto and Total rows of the confirmation.
#[must_use]
pub fn summary(order: &Order) -> Vec<(&'static str, String)> {
    vec![
        ("Pedido", order.id.clone()),
        ("Cliente", or_dash(order.cliente.as_deref())),
        ("Producto", or_dash(order.producto.as_deref())),
        ("Total", format_currency(order.precio_total)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::ui::notifications::Severity;

    fn loaded(overlay: &mut OverlayController) -> (Delete, Ticket) {
        let mut delete = Delete::new(overlay);
        delete.open("P-5", overlay);
        let ticket = delete.tickets.current();
        let order = Order {
            id: "P-5".into(),
            cliente: Some("Luis".into()),
            precio_total: Some(980.5),
            ..Order::default()
        };
        delete.update(Message::Reply(ticket, Reply::Order(Ok(Some(order)))), overlay);
        (delete, ticket)
    }

    fn notifications(events: &[Event]) -> Vec<(Severity, String)> {
        events
            .iter()
            .filter_map(|event| match event {
                Event::Notify(n) => Some((n.severity(), n.message().to_string())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn summary_lists_key_fields() {
        let mut overlay = OverlayController::new();
        let (delete, _) = loaded(&mut overlay);
        let order = delete.content().ready().expect("loaded");
        assert_eq!(
            summary(order),
            vec![
                ("Pedido", "P-5".to_string()),
                ("Cliente", "Luis".to_string()),
                ("Producto", "-".to_string()),
                ("Total", "RD$980.5".to_string()),
            ]
        );
    }

    #[test]
    fn confirm_is_guarded() {
        let mut overlay = OverlayController::new();
        let (mut delete, _) = loaded(&mut overlay);

        let first = delete.update(Message::Confirm, &mut overlay);
        let second = delete.update(Message::Confirm, &mut overlay);

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert!(delete.is_deleting());
    }

    #[test]
    fn success_closes_and_refreshes_without_highlight() {
        let mut overlay = OverlayController::new();
        let (mut delete, ticket) = loaded(&mut overlay);
        delete.update(Message::Confirm, &mut overlay);

        let events = delete.update(
            Message::Reply(
                ticket,
                Reply::Deleted(Ok(Outcome {
                    success: true,
                    error: None,
                })),
            ),
            &mut overlay,
        );

        assert!(!overlay.is_open(delete.modal()));
        assert_eq!(
            notifications(&events),
            vec![(Severity::Success, "Pedido eliminado".to_string())]
        );
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::OrdersChanged { highlight: None })));
    }

    #[test]
    fn failure_notifies_and_stays_open() {
        let mut overlay = OverlayController::new();
        let (mut delete, ticket) = loaded(&mut overlay);
        delete.update(Message::Confirm, &mut overlay);

        let events = delete.update(
            Message::Reply(ticket, Reply::Deleted(Ok(Outcome::default()))),
            &mut overlay,
        );

        assert!(overlay.is_open(delete.modal()));
        assert!(!delete.is_deleting());
        assert_eq!(
            notifications(&events),
            vec![(Severity::Error, DELETE_FAILED.to_string())]
        );
    }

    #[test]
    fn delete_finishing_after_dismiss_still_refreshes() {
        let mut overlay = OverlayController::new();
        let (mut delete, ticket) = loaded(&mut overlay);
        delete.update(Message::Confirm, &mut overlay);
        overlay.dismiss();

        let events = delete.update(
            Message::Reply(
                ticket,
                Reply::Deleted(Ok(Outcome {
                    success: true,
                    error: None,
                })),
            ),
            &mut overlay,
        );

        assert!(!delete.is_deleting());
        assert_eq!(overlay.active(), None);
        assert_eq!(
            notifications(&events),
            vec![(Severity::Success, "Pedido eliminado".to_string())]
        );
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::OrdersChanged { highlight: None })));
    }

    #[test]
    fn delete_finishing_after_reopen_keeps_new_guard() {
        let mut overlay = OverlayController::new();
        let (mut delete, first) = loaded(&mut overlay);
        delete.update(Message::Confirm, &mut overlay);
        delete.open("P-6", &mut overlay);
        let second = delete.tickets.current();
        delete.update(
            Message::Reply(second, Reply::Order(Ok(Some(Order::default())))),
            &mut overlay,
        );
        delete.update(Message::Confirm, &mut overlay);

        let events = delete.update(
            Message::Reply(first, Reply::Deleted(Err(ApiError::Network("reset".into())))),
            &mut overlay,
        );

        assert!(delete.is_deleting());
        assert!(overlay.is_open(delete.modal()));
        assert_eq!(
            notifications(&events),
            vec![(Severity::Error, "Error de conexión: reset".to_string())]
        );
    }

    #[test]
    fn order_arriving_after_close_is_ignored() {
        let mut overlay = OverlayController::new();
        let mut delete = Delete::new(&mut overlay);
        delete.open("P-5", &mut overlay);
        let ticket = delete.tickets.current();
        delete.update(Message::Close, &mut overlay);

        let events = delete.update(
            Message::Reply(ticket, Reply::Order(Ok(Some(Order::default())))),
            &mut overlay,
        );

        assert!(events.is_empty());
        assert!(delete.content().is_loading());
    }

    #[test]
    fn load_failure_closes_with_notification() {
        let mut overlay = OverlayController::new();
        let mut delete = Delete::new(&mut overlay);
        delete.open("P-5", &mut overlay);
        let ticket = delete.tickets.current();

        let events = delete.update(
            Message::Reply(ticket, Reply::Order(Err(ApiError::Forbidden("Solo admin".into())))),
            &mut overlay,
        );

        assert_eq!(overlay.active(), None);
        assert_eq!(
            notifications(&events),
            vec![(Severity::Error, "Solo admin".to_string())]
        );
    }

    #[test]
    fn opening_delete_replaces_another_modal() {
        let mut overlay = OverlayController::new();
        let other = overlay.register("detalle");
        overlay.open(other);

        let mut delete = Delete::new(&mut overlay);
        delete.open("P-5", &mut overlay);

        assert!(!overlay.is_open(other));
        assert_eq!(overlay.active(), Some(delete.modal()));
    }
}
