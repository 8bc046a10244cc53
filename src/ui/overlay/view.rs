// SPDX-License-Identifier: MPL-2.0
//! Rendering of the backdrop and the active modal on top of the page.

use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::Element;

/// Stacks `modal` over `base` behind a dimmed, clickable backdrop.
///
/// The backdrop layer is opaque to input, so the page underneath neither
/// scrolls nor reacts while a modal is shown. Clicking outside the dialog
/// publishes `on_dismiss`.
pub fn modal_layer<'a, Message>(
    base: Element<'a, Message>,
    modal: Option<Element<'a, Message>>,
    on_dismiss: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let Some(content) = modal else {
        return base;
    };

    let dialog = container(content)
        .padding(spacing::LG)
        .style(styles::container::modal);

    stack![
        base,
        opaque(
            mouse_area(
                center(opaque(dialog))
                    .padding(spacing::XL)
                    .style(styles::container::backdrop)
            )
            .on_press(on_dismiss)
        )
    ]
    .into()
}
