// SPDX-License-Identifier: MPL-2.0
//! Building blocks shared by the modal views.

use crate::domain::format::Badge;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, container, scrollable, text, Column, Container, Row, Text};
use iced::{Element, Font, Length};

pub(super) const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Header with title and close button, scrollable body, optional footer.
pub(super) fn dialog<'a, M: Clone + 'a>(
    title: String,
    on_close: M,
    body: Element<'a, M>,
    footer: Option<Element<'a, M>>,
    width: f32,
) -> Element<'a, M> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(title).size(typography::TITLE_MD).font(BOLD))
                .width(Length::Fill),
        )
        .push(
            button(text("×").size(typography::TITLE_MD))
                .on_press(on_close)
                .style(styles::button::link(palette::GRAY_600)),
        );

    let mut layout = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(scrollable(body).height(Length::Shrink));

    if let Some(footer) = footer {
        layout = layout.push(
            Container::new(footer)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        );
    }

    Container::new(layout)
        .width(Length::Fixed(width))
        .max_height(sizing::MODAL_MAX_HEIGHT)
        .into()
}

/// Placeholder shown while the order is being fetched.
pub(super) fn loading<'a, M: 'a>(width: f32) -> Element<'a, M> {
    Container::new(Text::new("Cargando...").size(typography::BODY))
        .width(Length::Fixed(width))
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .into()
}

/// Terminal load error with a single close button.
pub(super) fn failure<'a, M: Clone + 'a>(message: String, on_close: M, width: f32) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Text::new(message)
                .size(typography::BODY)
                .color(palette::ERROR_500),
        )
        .push(
            button(text("Cerrar").size(typography::BODY))
                .on_press(on_close)
                .style(styles::button::secondary),
        );

    Container::new(content)
        .width(Length::Fixed(width))
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into()
}

/// Titled block with a light background.
pub(super) fn section<'a, M: 'a>(title: &str, content: Element<'a, M>) -> Element<'a, M> {
    let column = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(title.to_string())
                .size(typography::TITLE_SM)
                .font(BOLD)
                .color(palette::PRIMARY_500),
        )
        .push(content);

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::section)
        .into()
}

/// Two-column grid of label/value pairs.
pub(super) fn fields<'a, M: 'a>(rows: Vec<(&'static str, String)>) -> Element<'a, M> {
    let mut grid = Column::new().spacing(spacing::XS);
    let mut pairs = rows.into_iter().peekable();
    while let Some(first) = pairs.next() {
        let mut row = Row::new().spacing(spacing::MD).push(field(first));
        match pairs.next() {
            Some(second) => row = row.push(field(second)),
            None => row = row.push(Container::new(text("")).width(Length::Fill)),
        }
        grid = grid.push(row);
    }
    grid.into()
}

fn field<'a, M: 'a>((label, value): (&'static str, String)) -> Element<'a, M> {
    Container::new(
        Column::new()
            .spacing(2.0)
            .push(
                Text::new(label)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_600),
            )
            .push(Text::new(value).size(typography::BODY)),
    )
    .width(Length::Fill)
    .into()
}

pub(super) fn badge<'a, M: 'a>(badge: Badge) -> Element<'a, M> {
    let tone = badge.tone;
    Container::new(Text::new(badge.label).size(typography::CAPTION).font(BOLD))
        .padding([2.0, spacing::XS])
        .style(styles::container::badge(tone))
        .into()
}

/// Inline error shown inside a form.
pub(super) fn error_block<'a, M: 'a>(message: &str) -> Element<'a, M> {
    Container::new(Text::new(message.to_string()).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::error_block)
        .into()
}

/// Small grey note such as "Sin comentarios".
pub(super) fn note<'a, M: 'a>(message: &str) -> Element<'a, M> {
    Text::new(message.to_string())
        .size(typography::BODY_SM)
        .color(palette::GRAY_400)
        .into()
}

/// Labelled form control.
pub(super) fn labeled<'a, M: 'a>(label: &str, control: Element<'a, M>) -> Element<'a, M> {
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(label.to_string())
                    .size(typography::CAPTION)
                    .font(BOLD)
                    .color(palette::GRAY_600),
            )
            .push(control),
    )
    .width(Length::Fill)
    .into()
}
