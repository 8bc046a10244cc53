// SPDX-License-Identifier: MPL-2.0
//! Read-only order detail modal.

use super::extras::{self, Extras};
use super::layout::{self, BOLD};
use super::{lift, Call, Content, Event, Origin, Reply, Ticket, Tickets};
use crate::domain::format::{
    format_count, format_currency, format_date, format_percent, or_dash, status_badge, Badge,
};
use crate::domain::Order;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::overlay::{ModalId, OverlayController, Surface};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{Element, Length};

pub const NOT_FOUND: &str = "Pedido no encontrado";

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Edit,
    Extras(extras::Message),
    Reply(Ticket, Reply),
}

/// Label/value rows of one detail section.
pub type Rows = Vec<(&'static str, String)>;

/// Ganancia Neta strip.
#[derive(Debug, Clone, PartialEq)]
pub struct Profit {
    pub amount: String,
    pub percent: Option<String>,
    pub positive: bool,
}

#[derive(Debug)]
pub struct Detail {
    modal: ModalId,
    tickets: Tickets,
    order_id: String,
    content: Content<Order>,
    extras: Option<Extras>,
}

impl Detail {
    pub fn new<S: Surface>(overlay: &mut OverlayController<S>) -> Self {
        Self {
            modal: overlay.register("detalle"),
            tickets: Tickets::default(),
            order_id: String::new(),
            content: Content::Loading,
            extras: None,
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
    pub fn extras(&self) -> Option<&Extras> {
        self.extras.as_ref()
    }

    /// Shows the loading placeholder and requests the order.
    pub fn open<S: Surface>(
        &mut self,
        order_id: &str,
        overlay: &mut OverlayController<S>,
    ) -> Vec<Event> {
        let ticket = self.tickets.issue();
        self.order_id = order_id.to_string();
        self.content = Content::Loading;
        self.extras = None;
        overlay.open(self.modal);
        vec![Event::request(
            Origin::Detail,
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
            Message::Edit => {
                overlay.close(self.modal);
                vec![Event::OpenEdit(self.order_id.clone())]
            }
            Message::Extras(message) => match self.extras.as_mut() {
                Some(extras) => {
                    let actions = extras.update(message);
                    lift(Origin::Detail, self.tickets.current(), actions)
                }
                None => Vec::new(),
            },
            Message::Reply(ticket, reply) => {
                if self.tickets.accepts(ticket, self.modal, overlay) {
                    return self.receive(ticket, reply);
                }
                let current = self.tickets.is_current(ticket);
                match (reply, self.extras.as_mut()) {
                    (Reply::Extras(reply), Some(extras)) if current => {
                        let actions = extras.receive_detached(reply);
                        lift(Origin::Detail, ticket, actions)
                    }
                    _ => {
                        tracing::debug!(order = %self.order_id, "dropping stale detail reply");
                        Vec::new()
                    }
                }
            }
        }
    }

    fn receive(&mut self, ticket: Ticket, reply: Reply) -> Vec<Event> {
        match reply {
            Reply::Order(Ok(Some(order))) => {
                let extras = Extras::new(order.id.clone());
                let actions = extras.load();
                self.extras = Some(extras);
                self.content = Content::Ready(order);
                lift(Origin::Detail, ticket, actions)
            }
            Reply::Order(Ok(None)) => {
                self.content = Content::NotFound;
                Vec::new()
            }
            Reply::Order(Err(err)) => {
                tracing::warn!(order = %self.order_id, %err, "loading order failed");
                self.content = Content::Failed(format!("Error: {err}"));
                Vec::new()
            }
            Reply::Extras(reply) => match self.extras.as_mut() {
                Some(extras) => {
                    let actions = extras.receive(reply);
                    lift(Origin::Detail, ticket, actions)
                }
                None => Vec::new(),
            },
            Reply::Saved(_) | Reply::Deleted(_) => Vec::new(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let width = sizing::MODAL_DETAIL_WIDTH;
        match &self.content {
            Content::Loading => layout::loading(width),
            Content::NotFound => layout::failure(NOT_FOUND.to_string(), Message::Close, width),
            Content::Failed(message) => layout::failure(message.clone(), Message::Close, width),
            Content::Ready(order) => self.view_order(order),
        }
    }

    fn view_order<'a>(&'a self, order: &'a Order) -> Element<'a, Message> {
        let (total, production, payment) = header(order);

        let summary = Row::new()
            .spacing(spacing::SM)
            .push(summary_card("Total", total_text(total)))
            .push(summary_card("Producción", layout::badge(production)))
            .push(summary_card("Pago", layout::badge(payment)));

        let [cliente, producto, precios, costos, fechas] = sections(order);
        let profit = profit(order);

        let financiero = Column::new()
            .spacing(spacing::SM)
            .push(layout::fields(precios))
            .push(
                Text::new("Costos")
                    .size(typography::BODY_SM)
                    .font(BOLD)
                    .color(palette::GRAY_600),
            )
            .push(layout::fields(costos))
            .push(profit_strip(profit));

        let mut body = Column::new()
            .spacing(spacing::MD)
            .push(summary)
            .push(layout::section("Cliente", layout::fields(cliente)))
            .push(layout::section("Producto", layout::fields(producto)))
            .push(layout::section("Financiero", financiero.into()))
            .push(layout::section("Fechas", layout::fields(fechas)));

        if let Some(extras) = &self.extras {
            body = body
                .push(extras.view_attachments().map(Message::Extras))
                .push(extras.view_comments().map(Message::Extras));
        }

        let footer = Row::new()
            .spacing(spacing::XS)
            .push(
                button(text("Cerrar").size(typography::BODY))
                    .on_press(Message::Close)
                    .style(styles::button::secondary),
            )
            .push(
                button(text("Editar").size(typography::BODY))
                    .on_press(Message::Edit)
                    .style(styles::button::primary),
            );

        layout::dialog(
            format!("Pedido {}", order.id),
            Message::Close,
            body.into(),
            Some(footer.into()),
            sizing::MODAL_DETAIL_WIDTH,
        )
    }
}

/// Total plus production and payment badges.
#[must_use]
pub fn header(order: &Order) -> (String, Badge, Badge) {
    let badge = |status: Option<&str>| status_badge(&or_dash(status));
    (
        format_currency(order.precio_total),
        badge(order.estatus_produccion.as_deref()),
        badge(order.estatus_pago.as_deref()),
    )
}

/// Cliente, Producto, prices, costs and Fechas rows.
#[must_use]
pub fn sections(order: &Order) -> [Rows; 5] {
    let value = |field: &Option<String>| or_dash(field.as_deref());

    let cliente = vec![
        ("Nombre", value(&order.cliente)),
        ("Teléfono", value(&order.telefono)),
        ("Email", value(&order.email)),
        ("Dirección", value(&order.direccion)),
    ];

    let mut producto = vec![
        ("Producto", value(&order.producto)),
        ("SKU", value(&order.sku)),
        ("Talla", value(&order.talla)),
        ("Color", value(&order.color)),
        ("Personalización", value(&order.personalizacion)),
    ];
    if let Some(puntadas) = order.puntadas.filter(|p| *p > 0.0) {
        producto.push(("Puntadas", format_count(puntadas)));
    }

    let precios = vec![
        ("Precio Venta", format_currency(order.precio_producto)),
        ("Personalización", format_currency(order.precio_person)),
        ("Envío", format_currency(order.precio_envio)),
        ("Total Cliente", format_currency(order.precio_total)),
    ];

    let mut costos = vec![
        ("Costo Prenda", format_currency(order.costo_producto)),
        ("Mano de Obra", format_currency(order.costo_mano_obra)),
    ];
    if order.costos_adicionales.is_some_and(|c| c > 0.0) {
        costos.push(("Costos Adicionales", format_currency(order.costos_adicionales)));
    }
    costos.push(("Costo Total", format_currency(order.costo_total)));

    let retraso = match order.delay_days() {
        Some(days) => format!("{days} días"),
        None => "Sin retraso".to_string(),
    };
    let fechas = vec![
        ("Pago", format_date(order.fecha_pago.as_deref())),
        ("Compromiso", format_date(order.fecha_compromiso.as_deref())),
        ("Entrega Real", format_date(order.fecha_entrega_real.as_deref())),
        ("Retraso", retraso),
    ];

    [cliente, producto, precios, costos, fechas]
}

#[must_use]
pub fn profit(order: &Order) -> Profit {
    Profit {
        amount: format_currency(order.ganancia),
        percent: order.margin_percent().map(format_percent),
        positive: order.ganancia.unwrap_or(0.0) >= 0.0,
    }
}

fn total_text<'a>(total: String) -> Element<'a, Message> {
    Text::new(total)
        .size(typography::TITLE_MD)
        .font(BOLD)
        .color(palette::PRIMARY_500)
        .into()
}

fn summary_card<'a>(label: &'static str, value: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(
                Text::new(label)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_600),
            )
            .push(value),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .align_x(Horizontal::Center)
    .style(styles::container::section)
    .into()
}

fn profit_strip<'a>(profit: Profit) -> Element<'a, Message> {
    let color = if profit.positive {
        palette::SUCCESS_500
    } else {
        palette::ERROR_500
    };

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new("Ganancia Neta").size(typography::BODY).font(BOLD))
                .width(Length::Fill),
        )
        .push(
            Text::new(profit.amount)
                .size(typography::TITLE_MD)
                .font(BOLD)
                .color(color),
        );
    if let Some(percent) = profit.percent {
        row = row.push(
            Text::new(percent)
                .size(typography::BODY)
                .font(BOLD)
                .color(palette::ACCENT_500),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::profit(profit.positive))
        .into()
}
