// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above every authenticated page.
//!
//! It holds the page tabs on the left and the signed-in user with the
//! logout button on the right.

use crate::session::User;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{Element, Font, Length};

/// Pages reachable from the tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Orders,
    Products,
    Statistics,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Orders, Page::Products, Page::Statistics];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Page::Orders => "Pedidos",
            Page::Products => "Productos",
            Page::Statistics => "Estadísticas",
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub current: Page,
    pub user: Option<&'a User>,
    /// Logout request in flight; the button is disabled meanwhile.
    pub logging_out: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    Logout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Page),
    Logout,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, current: Page) -> Event {
    match message {
        Message::Navigate(page) if page == current => Event::None,
        Message::Navigate(page) => Event::Navigate(page),
        Message::Logout => Event::Logout,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tabs = Page::ALL.iter().fold(Row::new().spacing(spacing::XXS), |row, page| {
        let selected = *page == ctx.current;
        row.push(
            button(text(page.label()).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::Navigate(*page))
                .style(styles::button::nav_tab(selected)),
        )
    });

    let mut user_block = Column::new().align_x(iced::alignment::Horizontal::Right);
    if let Some(user) = ctx.user {
        let name = if user.nombre.trim().is_empty() {
            user.email.as_str()
        } else {
            user.nombre.as_str()
        };
        user_block = user_block
            .push(
                Text::new(name)
                    .size(typography::BODY_SM)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::DEFAULT
                    })
                    .color(palette::WHITE),
            )
            .push(
                Text::new(user.rol.as_str())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_200),
            );
    }

    let mut logout = button(
        text(if ctx.logging_out {
            "Cerrando..."
        } else {
            "Cerrar sesión"
        })
        .size(typography::BODY_SM),
    )
    .style(styles::button::secondary);
    if !ctx.logging_out {
        logout = logout.on_press(Message::Logout);
    }

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(
            Text::new("Backoffice Pedidos")
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                })
                .color(palette::WHITE),
        )
        .push(Container::new(tabs).width(Length::Fill))
        .push(user_block)
        .push(logout);

    Container::new(row)
        .width(Length::Fill)
        .center_y(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::navbar)
        .into()
}
