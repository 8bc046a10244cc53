// SPDX-License-Identifier: MPL-2.0
//! Login screen.
//!
//! Sessions are issued elsewhere; the operator pastes an access token, which
//! is checked against the backend before being stored.

use crate::api::ApiResult;
use crate::session::User;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::font::Weight;
use iced::widget::{button, center, text, text_input, Column, Container, Text};
use iced::{Element, Font, Length};

const INVALID_TOKEN: &str = "Token inválido o expirado";

#[derive(Debug, Clone)]
pub enum Message {
    TokenChanged(String),
    Submit,
    Verified(String, ApiResult<Option<User>>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Verify(String),
    LoggedIn { token: String, user: User },
}

#[derive(Debug, Clone, Default)]
pub struct State {
    token: String,
    verifying: bool,
    error: Option<String>,
    notice: Option<String>,
}

impl State {
    /// Login screen showing `notice` above the form, e.g. "Sesión expirada".
    #[must_use]
    pub fn with_notice(notice: impl Into<String>) -> Self {
        Self {
            notice: Some(notice.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_verifying(&self) -> bool {
        self.verifying
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TokenChanged(token) => {
            state.token = token;
            Event::None
        }
        Message::Submit => {
            let token = state.token.trim();
            if state.verifying || token.is_empty() {
                return Event::None;
            }
            state.verifying = true;
            state.error = None;
            Event::Verify(token.to_string())
        }
        Message::Verified(token, result) => {
            state.verifying = false;
            match result {
                Ok(Some(user)) => {
                    state.token.clear();
                    state.notice = None;
                    Event::LoggedIn { token, user }
                }
                Ok(None) => {
                    state.error = Some(INVALID_TOKEN.to_string());
                    Event::None
                }
                Err(err) => {
                    state.error = Some(err.to_string());
                    Event::None
                }
            }
        }
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let mut form = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Text::new("Backoffice Pedidos")
                .size(typography::TITLE_LG)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                })
                .color(palette::PRIMARY_500),
        )
        .push(
            Text::new("Pegue su token de acceso para continuar")
                .size(typography::BODY_SM)
                .color(palette::GRAY_600),
        );

    if let Some(notice) = &state.notice {
        form = form.push(
            Text::new(notice.as_str())
                .size(typography::BODY_SM)
                .color(palette::WARNING_500),
        );
    }

    let mut input = text_input("Token de acceso", &state.token)
        .secure(true)
        .padding(spacing::XS)
        .size(typography::BODY);
    if !state.verifying {
        input = input
            .on_input(Message::TokenChanged)
            .on_submit(Message::Submit);
    }
    form = form.push(input);

    if let Some(error) = &state.error {
        form = form.push(
            Container::new(Text::new(error.as_str()).size(typography::BODY_SM))
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::container::error_block),
        );
    }

    let mut submit = button(
        text(if state.verifying {
            "Verificando..."
        } else {
            "Ingresar"
        })
        .size(typography::BODY),
    )
    .width(Length::Fill)
    .style(styles::button::primary);
    if !state.verifying && !state.token.trim().is_empty() {
        submit = submit.on_press(Message::Submit);
    }
    form = form.push(submit);

    center(
        Container::new(form)
            .width(Length::Fixed(sizing::LOGIN_WIDTH))
            .padding(spacing::XL)
            .style(styles::container::card),
    )
    .style(styles::container::page)
    .into()
}
