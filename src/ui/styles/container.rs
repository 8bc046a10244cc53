// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::button::{tone_color, tone_text};
use crate::domain::format::Tone;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// White page card (tables, login form, statistic cards).
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Dimmed layer behind the active modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// The dialog box itself.
pub fn modal(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::GRAY_900),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Grey box grouping one section of the detail modal.
pub fn section(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Comment bubble with the brand-coloured left accent.
pub fn list_item(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        border: Border {
            color: palette::PRIMARY_100,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Inline error block of the edit form.
pub fn error_block(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ERROR_100)),
        text_color: Some(palette::ERROR_900),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Profit strip, green or red depending on the sign.
pub fn profit(positive: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(if positive {
            palette::PROFIT_BG
        } else {
            palette::LOSS_BG
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Status pill.
pub fn badge(tone: Tone) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tone_color(tone))),
        text_color: Some(tone_text(tone)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Visual state of one table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Normal,
    /// Missing shipping address.
    Alert,
    /// Recently updated.
    Highlighted,
}

pub fn table_row(state: RowState) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let background = match state {
            RowState::Normal => palette::WHITE,
            RowState::Alert => palette::WARNING_100,
            RowState::Highlighted => palette::SUCCESS_100,
        };
        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: palette::GRAY_200,
                width: border::WIDTH_SM,
                radius: radius::NONE.into(),
            },
            ..Default::default()
        }
    }
}

pub fn table_header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: Some(palette::WHITE),
        shadow: shadow::MD,
        ..Default::default()
    }
}

pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_50)),
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlighted_row_is_green_tinted() {
        let style = table_row(RowState::Highlighted)(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::SUCCESS_100))
        );
    }

    #[test]
    fn backdrop_is_translucent_black() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => {
                assert_eq!(color.a, opacity::BACKDROP);
                assert_eq!(color.r, 0.0);
            }
            other => panic!("unexpected backdrop background: {other:?}"),
        }
    }
}
