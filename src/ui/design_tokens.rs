// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every colour, spacing and size the backoffice draws with.

## Organization

- **Palette**: brand blue, greys, semantic colours, table row tints
- **Opacity**: backdrop and fade levels
- **Spacing**: 4px-based spacing scale
- **Sizing**: modal and toast widths, control heights
- **Typography**: font size scale
- **Border / Radius / Shadow**: surface decoration

## Examples

```
use pedidos_backoffice::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};
let padding = spacing::MD;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    const fn hex(rgb: u32) -> Color {
        Color::from_rgb(
            ((rgb >> 16) & 0xff) as f32 / 255.0,
            ((rgb >> 8) & 0xff) as f32 / 255.0,
            (rgb & 0xff) as f32 / 255.0,
        )
    }

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = hex(0x333333);
    pub const GRAY_600: Color = hex(0x666666);
    pub const GRAY_400: Color = hex(0x999999);
    pub const GRAY_200: Color = hex(0xe0e0e0);
    pub const GRAY_100: Color = hex(0xf8f9fa);
    pub const GRAY_50: Color = hex(0xf4f6f9);

    // Brand
    pub const PRIMARY_500: Color = hex(0x2f5496);
    pub const PRIMARY_700: Color = hex(0x1f3a6b);
    pub const PRIMARY_100: Color = hex(0xe3eaf6);
    pub const ACCENT_500: Color = hex(0x6f42c1);

    // Semantic colors
    pub const SUCCESS_500: Color = hex(0x28a745);
    pub const ERROR_500: Color = hex(0xdc3545);
    pub const WARNING_500: Color = hex(0xffc107);
    pub const INFO_500: Color = hex(0x17a2b8);
    pub const SECONDARY_500: Color = hex(0x6c757d);

    // Tinted surfaces
    pub const SUCCESS_100: Color = hex(0xd4edda);
    pub const ERROR_100: Color = hex(0xf8d7da);
    pub const ERROR_900: Color = hex(0x721c24);
    pub const WARNING_100: Color = hex(0xfff3cd);
    pub const PROFIT_BG: Color = hex(0xf0fff4);
    pub const LOSS_BG: Color = hex(0xfff5f5);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SHADOW: f32 = 0.15;
    pub const BACKDROP: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 40.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 56.0;
    pub const LOGIN_WIDTH: f32 = 420.0;

    /// Widths of the three modal kinds.
    pub const MODAL_DETAIL_WIDTH: f32 = 720.0;
    pub const MODAL_EDIT_WIDTH: f32 = 660.0;
    pub const MODAL_DELETE_WIDTH: f32 = 480.0;
    pub const MODAL_MAX_HEIGHT: f32 = 640.0;

    pub const TOAST_WIDTH: f32 = 400.0;
    pub const TOAST_ACCENT: f32 = 4.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page headings
    pub const TITLE_LG: f32 = 26.0;

    /// Modal titles, big totals
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers inside modals
    pub const TITLE_SM: f32 = 16.0;

    /// Most UI text
    pub const BODY: f32 = 14.0;

    /// Secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Badges, timestamps, field labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 3.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    const SOFT_BLACK: Color = Color {
        a: opacity::SHADOW,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 16.0,
    };

    pub const LG: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 32.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(sizing::MODAL_DETAIL_WIDTH > sizing::MODAL_EDIT_WIDTH);
    assert!(sizing::MODAL_EDIT_WIDTH > sizing::MODAL_DELETE_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
