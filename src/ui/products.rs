// SPDX-License-Identifier: MPL-2.0
//! Products page: the catalog table with an admin-only active toggle.

use crate::api::ApiResult;
use crate::domain::format::{format_currency, format_percent, or_dash, Tone};
use crate::domain::{Outcome, Product};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use crate::ui::styles::container::RowState;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, container, scrollable, text, Column, Container, Row, Text};
use iced::{Element, Font, Length};
use std::collections::HashSet;

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

#[derive(Debug, Clone)]
pub enum Message {
    Reload,
    Loaded(ApiResult<Vec<Product>>),
    Toggle(String, bool),
    Toggled {
        id: String,
        activo: bool,
        result: ApiResult<Outcome>,
    },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Load,
    Toggle { id: String, activo: bool },
    Notify(Notification),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    products: Vec<Product>,
    loading: bool,
    loaded: bool,
    toggling: HashSet<String>,
}

impl State {
    pub fn reload(&mut self) -> Event {
        self.loading = true;
        Event::Load
    }

    /// Whether the catalog has been fetched at least once.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn is_toggling(&self, id: &str) -> bool {
        self.toggling.contains(id)
    }
}

pub fn update(state: &mut State, message: Message, is_admin: bool) -> Event {
    match message {
        Message::Reload => state.reload(),
        Message::Loaded(result) => {
            state.loading = false;
            match result {
                Ok(products) => {
                    tracing::info!(count = products.len(), "products loaded");
                    state.products = products;
                    state.loaded = true;
                    Event::None
                }
                Err(err) => {
                    tracing::warn!(%err, "loading products failed");
                    Event::Notify(Notification::error(format!(
                        "Error al cargar productos: {err}"
                    )))
                }
            }
        }
        Message::Toggle(id, activo) => {
            if !is_admin || !state.toggling.insert(id.clone()) {
                return Event::None;
            }
            Event::Toggle { id, activo }
        }
        Message::Toggled { id, activo, result } => {
            state.toggling.remove(&id);
            let outcome = result
                .map_err(|err| err.to_string())
                .and_then(|outcome| outcome.into_result("Error al actualizar producto"));
            match outcome {
                Ok(()) => {
                    if let Some(product) = state.products.iter_mut().find(|p| p.id == id) {
                        product.activo = activo;
                    }
                    Event::Notify(Notification::success(if activo {
                        "Producto activado"
                    } else {
                        "Producto desactivado"
                    }))
                }
                Err(message) => Event::Notify(Notification::error(message)),
            }
        }
    }
}

/// Contextual data needed to render the products page.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub is_admin: bool,
}

const COLUMNS: [(&str, u16); 7] = [
    ("SKU", 2),
    ("Nombre", 4),
    ("Categoría", 3),
    ("Precio", 2),
    ("Costo", 2),
    ("Margen", 2),
    ("Activo", 2),
];

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;

    let title = Row::new()
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new("Productos").size(typography::TITLE_LG).font(BOLD))
                .width(Length::Fill),
        )
        .push(
            button(text("Recargar").size(typography::BODY))
                .on_press(Message::Reload)
                .style(styles::button::secondary),
        );

    let body: Element<'a, Message> = if state.loading && state.products.is_empty() {
        placeholder("Cargando...")
    } else if state.products.is_empty() {
        placeholder("No hay productos")
    } else {
        let header = COLUMNS.iter().fold(Row::new(), |row, (label, portion)| {
            row.push(
                Container::new(Text::new(*label).size(typography::BODY_SM).font(BOLD))
                    .width(Length::FillPortion(*portion)),
            )
        });
        let mut table = Column::new().push(
            Container::new(header.padding([spacing::XS, spacing::SM]))
                .width(Length::Fill)
                .style(styles::container::table_header),
        );
        for product in &state.products {
            table = table.push(product_row(product, state, ctx.is_admin));
        }
        scrollable(table).height(Length::Fill).into()
    };

    Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::card),
        )
        .into()
}

fn product_row<'a>(product: &'a Product, state: &State, is_admin: bool) -> Element<'a, Message> {
    let cell = |value: String, portion: u16| {
        Container::new(Text::new(value).size(typography::BODY)).width(Length::FillPortion(portion))
    };

    let (label, tone) = if product.activo {
        ("Activo", Tone::Success)
    } else {
        ("Inactivo", Tone::Secondary)
    };
    let status: Element<'a, Message> = if is_admin {
        let mut toggle = button(text(label).size(typography::CAPTION)).style(styles::button::solid(tone));
        if !state.is_toggling(&product.id) {
            toggle = toggle.on_press(Message::Toggle(product.id.clone(), !product.activo));
        }
        toggle.into()
    } else {
        container(Text::new(label).size(typography::CAPTION).font(BOLD))
            .padding([2.0, spacing::XS])
            .style(styles::container::badge(tone))
            .into()
    };

    let row = Row::new()
        .align_y(Vertical::Center)
        .padding([spacing::XS, spacing::SM])
        .push(cell(or_dash(product.sku.as_deref()), COLUMNS[0].1))
        .push(cell(or_dash(product.nombre.as_deref()), COLUMNS[1].1))
        .push(cell(or_dash(product.categoria.as_deref()), COLUMNS[2].1))
        .push(cell(format_currency(product.precio_base), COLUMNS[3].1))
        .push(cell(format_currency(product.costo_total), COLUMNS[4].1))
        .push(cell(
            product
                .margen_porcentaje
                .map(format_percent)
                .unwrap_or_else(|| "-".to_string()),
            COLUMNS[5].1,
        ))
        .push(Container::new(status).width(Length::FillPortion(COLUMNS[6].1)));

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::table_row(RowState::Normal))
        .into()
}

fn placeholder<'a>(message: &'static str) -> Element<'a, Message> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    fn loaded() -> State {
        let mut state = State::default();
        state.reload();
        update(
            &mut state,
            Message::Loaded(Ok(vec![Product {
                id: "7".into(),
                nombre: Some("Gorra".into()),
                activo: true,
                ..Product::default()
            }])),
            true,
        );
        state
    }

    #[test]
    fn toggle_is_admin_only_and_guarded() {
        let mut state = loaded();
        assert!(matches!(
            update(&mut state, Message::Toggle("7".into(), false), false),
            Event::None
        ));

        let first = update(&mut state, Message::Toggle("7".into(), false), true);
        assert!(matches!(first, Event::Toggle { ref id, activo: false } if id == "7"));
        assert!(state.is_toggling("7"));

        let second = update(&mut state, Message::Toggle("7".into(), false), true);
        assert!(matches!(second, Event::None));
    }

    #[test]
    fn toggled_updates_row_and_releases_guard() {
        let mut state = loaded();
        update(&mut state, Message::Toggle("7".into(), false), true);

        let event = update(
            &mut state,
            Message::Toggled {
                id: "7".into(),
                activo: false,
                result: Ok(Outcome {
                    success: true,
                    error: None,
                }),
            },
            true,
        );

        assert!(matches!(event, Event::Notify(n) if n.message() == "Producto desactivado"));
        assert!(!state.products()[0].activo);
        assert!(!state.is_toggling("7"));
    }

    #[test]
    fn failed_toggle_keeps_row() {
        let mut state = loaded();
        update(&mut state, Message::Toggle("7".into(), false), true);

        let event = update(
            &mut state,
            Message::Toggled {
                id: "7".into(),
                activo: false,
                result: Err(ApiError::Forbidden("Solo administradores".into())),
            },
            true,
        );

        assert!(matches!(event, Event::Notify(n) if n.message() == "Solo administradores"));
        assert!(state.products()[0].activo);
        assert!(!state.is_toggling("7"));
    }
}
