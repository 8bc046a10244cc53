// SPDX-License-Identifier: MPL-2.0
//! Statistics page: summary cards plus sales per channel and orders per
//! production status, optionally restricted to a date range.

use crate::api::ApiResult;
use crate::domain::format::{format_count, format_currency, format_percent, or_dash};
use crate::domain::{DateRange, Statistics};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use crate::ui::styles::container::RowState;
use chrono::NaiveDate;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, scrollable, text, text_input, Column, Container, Row, Text};
use iced::{Element, Font, Length};

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

const INVALID_DATE: &str = "Fecha inválida, use el formato AAAA-MM-DD";

#[derive(Debug, Clone)]
pub enum Message {
    DesdeChanged(String),
    HastaChanged(String),
    Apply,
    Clear,
    Loaded(ApiResult<Statistics>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Load(DateRange),
    Notify(Notification),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    desde: String,
    hasta: String,
    loading: bool,
    data: Option<Statistics>,
}

impl State {
    /// Loads with the current range, if it is valid.
    pub fn reload(&mut self) -> Event {
        match self.range() {
            Ok(range) => {
                self.loading = true;
                Event::Load(range)
            }
            Err(message) => Event::Notify(Notification::warning(message)),
        }
    }

    /// Parses the range inputs; blanks mean unbounded.
    pub fn range(&self) -> Result<DateRange, &'static str> {
        let parse = |value: &str| -> Result<Option<String>, &'static str> {
            let value = value.trim();
            if value.is_empty() {
                return Ok(None);
            }
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(|date| Some(date.format("%Y-%m-%d").to_string()))
                .map_err(|_| INVALID_DATE)
        };
        Ok(DateRange {
            desde: parse(&self.desde)?,
            hasta: parse(&self.hasta)?,
        })
    }

    #[must_use]
    pub fn data(&self) -> Option<&Statistics> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::DesdeChanged(value) => {
            state.desde = value;
            Event::None
        }
        Message::HastaChanged(value) => {
            state.hasta = value;
            Event::None
        }
        Message::Apply => state.reload(),
        Message::Clear => {
            state.desde.clear();
            state.hasta.clear();
            state.reload()
        }
        Message::Loaded(result) => {
            state.loading = false;
            match result {
                Ok(data) => {
                    state.data = Some(data);
                    Event::None
                }
                Err(err) => {
                    tracing::warn!(%err, "loading statistics failed");
                    Event::Notify(Notification::error(format!(
                        "Error al cargar estadísticas: {err}"
                    )))
                }
            }
        }
    }
}

/// Label and value of each summary card.
#[must_use]
pub fn cards(data: &Statistics) -> Vec<(&'static str, String)> {
    let summary = &data.summary;
    let count = |value: Option<f64>| format_count(value.unwrap_or(0.0));
    vec![
        ("Total Pedidos", count(summary.total_pedidos)),
        ("Ventas Totales", format_currency(summary.ventas_totales)),
        ("Ganancia Neta", format_currency(summary.ganancia_neta)),
        (
            "Margen Promedio",
            format_percent(summary.margen_promedio.unwrap_or(0.0)),
        ),
        ("Pendientes", count(summary.pedidos_pendientes)),
        ("Entregados", count(summary.pedidos_entregados)),
    ]
}

pub fn view(state: &State) -> Element<'_, Message> {
    let filters = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new("Desde").size(typography::BODY_SM))
        .push(
            text_input("AAAA-MM-DD", &state.desde)
                .on_input(Message::DesdeChanged)
                .on_submit(Message::Apply)
                .padding(spacing::XS)
                .width(Length::Fixed(140.0)),
        )
        .push(Text::new("Hasta").size(typography::BODY_SM))
        .push(
            text_input("AAAA-MM-DD", &state.hasta)
                .on_input(Message::HastaChanged)
                .on_submit(Message::Apply)
                .padding(spacing::XS)
                .width(Length::Fixed(140.0)),
        )
        .push(
            button(text("Aplicar").size(typography::BODY))
                .on_press(Message::Apply)
                .style(styles::button::primary),
        )
        .push(
            button(text("Limpiar").size(typography::BODY))
                .on_press(Message::Clear)
                .style(styles::button::secondary),
        );

    let mut page = Column::new()
        .spacing(spacing::MD)
        .push(Text::new("Estadísticas").size(typography::TITLE_LG).font(BOLD))
        .push(filters);

    match &state.data {
        None => {
            page = page.push(
                Text::new(if state.loading { "Cargando..." } else { "Sin datos" })
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            );
        }
        Some(data) => {
            let cards = cards(data).into_iter().fold(
                Row::new().spacing(spacing::SM),
                |row, (label, value)| row.push(card(label, value)),
            );

            let channels = table(
                "Ventas por Canal",
                ["Canal", "Pedidos", "Total"],
                data.channels
                    .iter()
                    .map(|c| {
                        [
                            or_dash(c.canal.as_deref()),
                            format_count(c.ventas.unwrap_or(0.0)),
                            format_currency(c.total),
                        ]
                    })
                    .collect(),
            );
            let statuses = table(
                "Pedidos por Estado",
                ["Estado", "Pedidos", ""],
                data.statuses
                    .iter()
                    .map(|s| {
                        [
                            or_dash(s.estado.as_deref()),
                            format_count(s.total.unwrap_or(0.0)),
                            String::new(),
                        ]
                    })
                    .collect(),
            );

            page = page.push(cards).push(
                Row::new()
                    .spacing(spacing::MD)
                    .push(channels)
                    .push(statuses),
            );
        }
    }

    scrollable(page).height(Length::Fill).into()
}

fn card<'a>(label: &'static str, value: String) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(
                Text::new(label)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_600),
            )
            .push(
                Text::new(value)
                    .size(typography::TITLE_MD)
                    .font(BOLD)
                    .color(palette::PRIMARY_500),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

fn table<'a>(title: &'static str, headers: [&'static str; 3], rows: Vec<[String; 3]>) -> Element<'a, Message> {
    let header = headers.iter().fold(Row::new(), |row, label| {
        row.push(
            Container::new(Text::new(*label).size(typography::BODY_SM).font(BOLD))
                .width(Length::Fill),
        )
    });

    let mut column = Column::new()
        .push(Text::new(title).size(typography::TITLE_SM).font(BOLD))
        .push(
            Container::new(header.padding([spacing::XS, spacing::SM]))
                .width(Length::Fill)
                .style(styles::container::table_header),
        );

    if rows.is_empty() {
        column = column.push(
            Container::new(
                Text::new("Sin datos")
                    .size(typography::BODY_SM)
                    .color(palette::GRAY_400),
            )
            .padding(spacing::SM),
        );
    }

    for cells in rows {
        let row = cells.into_iter().fold(Row::new(), |row, value| {
            row.push(Container::new(Text::new(value).size(typography::BODY)).width(Length::Fill))
        });
        column = column.push(
            Container::new(row.padding([spacing::XS, spacing::SM]))
                .width(Length::Fill)
                .style(styles::container::table_row(RowState::Normal)),
        );
    }

    Container::new(column.spacing(spacing::XXS))
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Summary;

    #[test]
    fn blank_range_is_unbounded() {
        let mut state = State::default();
        assert!(matches!(state.reload(), Event::Load(range) if range == DateRange::default()));
    }

    #[test]
    fn valid_range_is_forwarded() {
        let mut state = State::default();
        update(&mut state, Message::DesdeChanged(" 2024-01-01 ".into()));
        update(&mut state, Message::HastaChanged("2024-01-31".into()));

        let event = update(&mut state, Message::Apply);

        assert!(matches!(
            event,
            Event::Load(DateRange { desde: Some(ref d), hasta: Some(ref h) })
                if d == "2024-01-01" && h == "2024-01-31"
        ));
    }

    #[test]
    fn invalid_date_warns_without_loading() {
        let mut state = State::default();
        update(&mut state, Message::DesdeChanged("31/01/2024".into()));

        let event = update(&mut state, Message::Apply);
        assert!(matches!(event, Event::Notify(n) if n.message() == INVALID_DATE));

        let cleared = update(&mut state, Message::Clear);
        assert!(matches!(cleared, Event::Load(_)));
    }

    #[test]
    fn cards_format_summary() {
        let data = Statistics {
            summary: Summary {
                total_pedidos: Some(1234.0),
                ventas_totales: Some(250000.0),
                margen_promedio: Some(32.456),
                ..Summary::default()
            },
            ..Statistics::default()
        };
        let cards = cards(&data);
        assert_eq!(cards[0], ("Total Pedidos", "1,234".to_string()));
        assert_eq!(cards[1], ("Ventas Totales", "RD$250,000".to_string()));
        assert_eq!(cards[2], ("Ganancia Neta", "RD$0".to_string()));
        assert_eq!(cards[3], ("Margen Promedio", "32.5%".to_string()));
    }
}
