// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar::Page;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Orders,
    Products,
    Statistics,
}

impl Screen {
    /// Every screen except the login requires a session.
    #[must_use]
    pub fn is_protected(self) -> bool {
        self != Screen::Login
    }

    /// The navbar tab of this screen, if it has one.
    #[must_use]
    pub fn page(self) -> Option<Page> {
        match self {
            Screen::Login => None,
            Screen::Orders => Some(Page::Orders),
            Screen::Products => Some(Page::Products),
            Screen::Statistics => Some(Page::Statistics),
        }
    }
}

impl From<Page> for Screen {
    fn from(page: Page) -> Self {
        match page {
            Page::Orders => Screen::Orders,
            Page::Products => Screen::Products,
            Page::Statistics => Screen::Statistics,
        }
    }
}
