// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::domain::format::Tone;
use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Solid colour of each badge/button tone.
#[must_use]
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Primary => palette::PRIMARY_500,
        Tone::Success => palette::SUCCESS_500,
        Tone::Info => palette::INFO_500,
        Tone::Warning => palette::WARNING_500,
        Tone::Danger => palette::ERROR_500,
        Tone::Secondary => palette::SECONDARY_500,
    }
}

/// Text colour readable on top of [`tone_color`].
#[must_use]
pub fn tone_text(tone: Tone) -> Color {
    match tone {
        Tone::Warning => palette::GRAY_900,
        _ => WHITE,
    }
}

fn darken(color: Color) -> Color {
    Color {
        r: color.r * 0.85,
        g: color.g * 0.85,
        b: color.b * 0.85,
        a: color.a,
    }
}

fn disabled_style() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Filled button in the given tone. A button without `on_press` renders greyed out.
pub fn solid(tone: Tone) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let base = tone_color(tone);
        let background = match status {
            button::Status::Active => base,
            button::Status::Hovered | button::Status::Pressed => darken(base),
            button::Status::Disabled => return disabled_style(),
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: tone_text(tone),
            border: Border {
                color: darken(base),
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    solid(Tone::Primary)(theme, status)
}

pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    solid(Tone::Secondary)(theme, status)
}

pub fn success(theme: &Theme, status: button::Status) -> button::Style {
    solid(Tone::Success)(theme, status)
}

pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    solid(Tone::Danger)(theme, status)
}

/// Borderless text button, used for row actions and list item icons.
pub fn link(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => darken(color),
            button::Status::Disabled => palette::GRAY_400,
            button::Status::Active => color,
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Navbar tab; the current page is highlighted.
pub fn nav_tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match (selected, status) {
            (true, _) => Some(Background::Color(palette::PRIMARY_700)),
            (false, button::Status::Hovered) => Some(Background::Color(darken(palette::PRIMARY_500))),
            _ => None,
        };
        button::Style {
            background,
            text_color: WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
