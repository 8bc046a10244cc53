// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the navbar and current page, the active modal over
//! its backdrop, then the toasts.

use super::{Message, Screen};
use crate::session::User;
use crate::ui::design_tokens::spacing;
use crate::ui::login;
use crate::ui::modals::{Delete, Detail, Edit};
use crate::ui::navbar::{self, Page, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::orders::{self, ViewContext as OrdersViewContext};
use crate::ui::overlay::{view::modal_layer, OverlayController};
use crate::ui::products::{self, ViewContext as ProductsViewContext};
use crate::ui::statistics;
use crate::ui::styles;
use iced::widget::{stack, Column, Container};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub user: Option<&'a User>,
    pub is_admin: bool,
    pub logging_out: bool,
    pub overlay: &'a OverlayController,
    pub detail: &'a Detail,
    pub edit: &'a Edit,
    pub delete: &'a Delete,
    pub notifications: &'a Manager,
    pub login: &'a login::State,
    pub orders: &'a orders::State,
    pub products: &'a products::State,
    pub statistics: &'a statistics::State,
}

/// Renders the current screen with its modal and toast layers.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = match ctx.screen.page() {
        None => login::view(ctx.login).map(Message::Login),
        Some(page) => view_page(&ctx, page),
    };

    let modal = active_modal(&ctx);
    let layered = modal_layer(base, modal, Message::BackdropDismiss);

    stack![layered, Toast::view_overlay(ctx.notifications, Instant::now())]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_page<'a>(ctx: &ViewContext<'a>, page: Page) -> Element<'a, Message> {
    let content: Element<'a, Message> = match page {
        Page::Orders => orders::view(OrdersViewContext {
            state: ctx.orders,
            is_admin: ctx.is_admin,
        })
        .map(Message::Orders),
        Page::Products => products::view(ProductsViewContext {
            state: ctx.products,
            is_admin: ctx.is_admin,
        })
        .map(Message::Products),
        Page::Statistics => statistics::view(ctx.statistics).map(Message::Statistics),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        current: page,
        user: ctx.user,
        logging_out: ctx.logging_out,
    })
    .map(Message::Navbar);

    Column::new()
        .push(navbar_view)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::page),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn active_modal<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let active = ctx.overlay.active()?;
    if active == ctx.detail.modal() {
        Some(ctx.detail.view().map(Message::Detail))
    } else if active == ctx.edit.modal() {
        Some(ctx.edit.view().map(Message::Edit))
    } else if active == ctx.delete.modal() {
        Some(ctx.delete.view().map(Message::Delete))
    } else {
        None
    }
}
