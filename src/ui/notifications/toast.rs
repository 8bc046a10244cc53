// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications in the bottom-right corner.

use super::manager::Manager;
use super::notification::Notification;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Shadow, Theme};
use std::time::Instant;

/// Toast rendering entry points.
pub struct Toast;

impl Toast {
    /// Renders one notification with its accent colour, faded by `now`.
    pub fn view<'a, M: 'a>(notification: &'a Notification, now: Instant) -> Element<'a, M> {
        let accent = notification.severity().color();
        let alpha = notification.alpha(now);

        let accent_bar = Container::new(text(""))
            .width(Length::Fixed(sizing::TOAST_ACCENT))
            .height(Length::Fixed(typography::BODY * 1.6))
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(Color { a: alpha, ..accent })),
                border: Border {
                    radius: radius::SM.into(),
                    ..Border::default()
                },
                ..Default::default()
            });

        let message = Text::new(notification.message())
            .size(typography::BODY)
            .color(Color {
                a: alpha,
                ..palette::GRAY_900
            });

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(accent_bar)
            .push(Container::new(message).width(Length::Fill));

        Container::new(content)
            .max_width(sizing::TOAST_WIDTH)
            .padding([spacing::SM, spacing::MD])
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
            .into()
    }

    /// Renders every visible toast, newest on top, anchored bottom-right.
    pub fn view_overlay<'a, M: 'a>(manager: &'a Manager, now: Instant) -> Element<'a, M> {
        let toasts: Vec<Element<'a, M>> = manager
            .visible()
            .map(|notification| Self::view(notification, now))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::LG)
            .into()
    }
}

/// White card with a severity-coloured border; every colour follows `alpha`.
fn toast_container_style(_theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let fade = |color: Color| Color {
        a: color.a * alpha,
        ..color
    };

    container::Style {
        background: Some(Background::Color(fade(palette::WHITE))),
        border: Border {
            color: fade(accent),
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: fade(shadow::MD.color),
            ..shadow::MD
        },
        text_color: Some(fade(palette::GRAY_900)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&Theme::Light, accent, 1.0);
        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn faded_toast_is_transparent() {
        let style = toast_container_style(&Theme::Light, palette::ERROR_500, 0.0);
        assert_eq!(style.border.color.a, 0.0);
        assert_eq!(style.text_color.map(|c| c.a), Some(0.0));
    }
}
