// SPDX-License-Identifier: MPL-2.0
//! Orders page: the filterable orders table and its row actions.
//!
//! The search box is debounced; the estado and canal filters apply at once.
//! After a modal changes an order the list is reloaded and the changed row is
//! highlighted for a short while.

use crate::api::ApiResult;
use crate::domain::format::{format_currency, or_dash, status_badge};
use crate::domain::order::{CHANNELS, PRODUCTION_STATUSES};
use crate::domain::{Order, OrderFilter};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::state::{Debounce, Highlight};
use crate::ui::styles;
use crate::ui::styles::container::RowState;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, container, pick_list, scrollable, text, text_input, Column, Container, Row, Text};
use iced::{Element, Font, Length};
use std::time::{Duration, Instant};

/// Pick-list entry that disables a filter.
const ALL_STATES: &str = "Todos los estados";
const ALL_CHANNELS: &str = "Todos los canales";

const LOAD_FAILED: &str = "Error al cargar pedidos";

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    EstadoSelected(String),
    CanalSelected(String),
    Reload,
    Loaded(ApiResult<Vec<Order>>),
    View(String),
    Edit(String),
    Delete(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Fetch the orders list.
    Load,
    OpenDetail(String),
    OpenEdit(String),
    OpenDelete(String),
    Notify(Notification),
}

#[derive(Debug, Clone)]
pub struct State {
    orders: Vec<Order>,
    loading: bool,
    search: String,
    filter: OrderFilter,
    debounce: Debounce<String>,
    highlight: Highlight,
    pending_highlight: Option<String>,
}

impl State {
    #[must_use]
    pub fn new(search_delay: Duration, highlight_duration: Duration) -> Self {
        Self {
            orders: Vec::new(),
            loading: false,
            search: String::new(),
            filter: OrderFilter::default(),
            debounce: Debounce::new(search_delay),
            highlight: Highlight::new(highlight_duration),
            pending_highlight: None,
        }
    }

    /// Marks the list as loading; `highlight` is applied once it arrives.
    pub fn reload(&mut self, highlight: Option<String>) -> Event {
        self.loading = true;
        if highlight.is_some() {
            self.pending_highlight = highlight;
        }
        Event::Load
    }

    /// Applies a settled search and expires the highlight.
    pub fn tick(&mut self, now: Instant) {
        if let Some(search) = self.debounce.poll(now) {
            self.filter.search = search;
        }
        self.highlight.tick(now);
    }

    /// Whether the page needs the tick subscription.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.debounce.is_pending() || self.highlight.is_active()
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn filter(&self) -> &OrderFilter {
        &self.filter
    }

    /// Orders passing the current filter.
    #[must_use]
    pub fn visible(&self) -> Vec<&Order> {
        self.filter.apply(&self.orders)
    }

    #[must_use]
    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlight.is_highlighted(id)
    }
}

pub fn update(state: &mut State, message: Message, now: Instant) -> Event {
    match message {
        Message::SearchChanged(search) => {
            state.search = search.clone();
            state.debounce.input(search, now);
            Event::None
        }
        Message::EstadoSelected(estado) => {
            state.filter.estado = Some(estado).filter(|e| e != ALL_STATES);
            Event::None
        }
        Message::CanalSelected(canal) => {
            state.filter.canal = Some(canal).filter(|c| c != ALL_CHANNELS);
            Event::None
        }
        Message::Reload => state.reload(None),
        Message::Loaded(result) => {
            state.loading = false;
            match result {
                Ok(orders) => {
                    tracing::info!(count = orders.len(), "orders loaded");
                    state.orders = orders;
                    if let Some(id) = state.pending_highlight.take() {
                        state.highlight.set(id, now);
                    }
                    Event::None
                }
                Err(err) => {
                    tracing::warn!(%err, "loading orders failed");
                    state.pending_highlight = None;
                    Event::Notify(Notification::error(LOAD_FAILED))
                }
            }
        }
        Message::View(id) => Event::OpenDetail(id),
        Message::Edit(id) => Event::OpenEdit(id),
        Message::Delete(id) => Event::OpenDelete(id),
    }
}

/// Contextual data needed to render the orders page.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub is_admin: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;

    let mut estados = vec![ALL_STATES.to_string()];
    estados.extend(PRODUCTION_STATUSES.iter().map(|s| (*s).to_string()));
    let mut canales = vec![ALL_CHANNELS.to_string()];
    canales.extend(CHANNELS.iter().map(|s| (*s).to_string()));

    let toolbar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            text_input("Buscar por ID, cliente, producto o teléfono...", &state.search)
                .on_input(Message::SearchChanged)
                .padding(spacing::XS)
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            pick_list(
                estados,
                Some(
                    state
                        .filter
                        .estado
                        .clone()
                        .unwrap_or_else(|| ALL_STATES.to_string()),
                ),
                Message::EstadoSelected,
            )
            .text_size(typography::BODY)
            .padding(spacing::XS),
        )
        .push(
            pick_list(
                canales,
                Some(
                    state
                        .filter
                        .canal
                        .clone()
                        .unwrap_or_else(|| ALL_CHANNELS.to_string()),
                ),
                Message::CanalSelected,
            )
            .text_size(typography::BODY)
            .padding(spacing::XS),
        )
        .push(
            button(text("Recargar").size(typography::BODY))
                .on_press(Message::Reload)
                .style(styles::button::secondary),
        );

    let rows = state.visible();
    let table: Element<'a, Message> = if state.loading && state.orders.is_empty() {
        empty("Cargando...")
    } else if rows.is_empty() {
        empty("No hay pedidos para mostrar")
    } else {
        let mut table = Column::new().push(header());
        for order in rows {
            table = table.push(order_row(order, state, ctx.is_admin));
        }
        scrollable(table).height(Length::Fill).into()
    };

    Column::new()
        .spacing(spacing::MD)
        .push(Text::new("Pedidos").size(typography::TITLE_LG).font(BOLD))
        .push(toolbar)
        .push(
            Container::new(table)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::card),
        )
        .into()
}

const COLUMNS: [(&str, u16); 6] = [
    ("ID", 2),
    ("Cliente", 3),
    ("Producto", 4),
    ("Total", 2),
    ("Estado", 3),
    ("Acciones", 3),
];

fn header<'a>() -> Element<'a, Message> {
    let row = COLUMNS.iter().fold(Row::new(), |row, (label, portion)| {
        row.push(
            Container::new(Text::new(*label).size(typography::BODY_SM).font(BOLD))
                .width(Length::FillPortion(*portion)),
        )
    });
    Container::new(row.padding([spacing::XS, spacing::SM]))
        .width(Length::Fill)
        .style(styles::container::table_header)
        .into()
}

fn order_row<'a>(order: &'a Order, state: &State, is_admin: bool) -> Element<'a, Message> {
    let row_state = if state.is_highlighted(&order.id) {
        RowState::Highlighted
    } else if !order.has_address() {
        RowState::Alert
    } else {
        RowState::Normal
    };

    let producto = match order.color.as_deref().filter(|c| !c.is_empty()) {
        Some(color) => format!("{} · {color}", order.producto.as_deref().unwrap_or_default()),
        None => order.producto.clone().unwrap_or_default(),
    };
    let badge = status_badge(&or_dash(order.estatus_produccion.as_deref()));

    let mut actions = Row::new()
        .spacing(spacing::XXS)
        .push(
            button(text("Ver").size(typography::CAPTION))
                .on_press(Message::View(order.id.clone()))
                .style(styles::button::solid(crate::domain::format::Tone::Info)),
        )
        .push(
            button(text("Editar").size(typography::CAPTION))
                .on_press(Message::Edit(order.id.clone()))
                .style(styles::button::solid(crate::domain::format::Tone::Warning)),
        );
    if is_admin {
        actions = actions.push(
            button(text("Eliminar").size(typography::CAPTION))
                .on_press(Message::Delete(order.id.clone()))
                .style(styles::button::danger),
        );
    }

    let cell = |content: Element<'a, Message>, portion: u16| {
        Container::new(content).width(Length::FillPortion(portion))
    };

    let row = Row::new()
        .align_y(Vertical::Center)
        .padding([spacing::XS, spacing::SM])
        .push(cell(
            Text::new(order.id.as_str()).size(typography::BODY).font(BOLD).into(),
            COLUMNS[0].1,
        ))
        .push(cell(
            Text::new(order.cliente.clone().unwrap_or_default())
                .size(typography::BODY)
                .into(),
            COLUMNS[1].1,
        ))
        .push(cell(
            Column::new()
                .push(Text::new(producto).size(typography::BODY))
                .push(
                    Text::new(format!(
                        "Talla: {}",
                        order.talla.as_deref().unwrap_or_default()
                    ))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_600),
                )
                .into(),
            COLUMNS[2].1,
        ))
        .push(cell(
            Text::new(format_currency(order.precio_total))
                .size(typography::BODY)
                .font(BOLD)
                .into(),
            COLUMNS[3].1,
        ))
        .push(cell(
            container(Text::new(badge.label).size(typography::CAPTION).font(BOLD))
                .padding([2.0, spacing::XS])
                .style(styles::container::badge(badge.tone))
                .into(),
            COLUMNS[4].1,
        ))
        .push(cell(actions.into(), COLUMNS[5].1));

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::table_row(row_state))
        .into()
}

fn empty<'a>(message: &'static str) -> Element<'a, Message> {
    Container::new(
        Text::new(message)
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .padding(spacing::XXL)
    .center_x(Length::Fill)
    .into()
}
