// SPDX-License-Identifier: MPL-2.0
//! Overlay controller: at most one modal open at a time, over a shared backdrop.
//!
//! The controller owns the only shared mutable overlay state (which modal is
//! active, whether the backdrop is shown, whether the page behind is scroll
//! locked). Modal content controllers never touch that state directly; they
//! call [`OverlayController::open`] and [`OverlayController::close`].
//!
//! Visual effects go through the [`Surface`] trait so the state machine can be
//! checked without a window. The application uses [`Layers`], which simply
//! records the flags for `view()` to read.
//!
//! # State machine
//!
//! ```text
//! NoModalOpen --open(m)--> ModalOpen(m)
//! ModalOpen(p) --open(m), m != p--> close(p), then ModalOpen(m)
//! ModalOpen(m) --close(m) | Escape | backdrop click--> NoModalOpen
//! ModalOpen(p) --close(m), m != p--> ModalOpen(p)   (m hidden only)
//! ```

pub mod view;

use iced::keyboard;
use std::collections::HashSet;

/// Identity of one modal surface, issued by [`OverlayController::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalId(usize);

/// Where overlay visibility changes are applied.
pub trait Surface {
    fn set_modal_visible(&mut self, id: ModalId, visible: bool);
    fn set_backdrop_visible(&mut self, visible: bool);
    fn set_scroll_locked(&mut self, locked: bool);
}

/// Default surface: plain flags read back by the view layer.
#[derive(Debug, Clone, Default)]
pub struct Layers {
    visible: HashSet<ModalId>,
    backdrop: bool,
    scroll_locked: bool,
}

impl Layers {
    #[must_use]
    pub fn is_modal_visible(&self, id: ModalId) -> bool {
        self.visible.contains(&id)
    }

    #[must_use]
    pub fn backdrop(&self) -> bool {
        self.backdrop
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

impl Surface for Layers {
    fn set_modal_visible(&mut self, id: ModalId, visible: bool) {
        if visible {
            self.visible.insert(id);
        } else {
            self.visible.remove(&id);
        }
    }

    fn set_backdrop_visible(&mut self, visible: bool) {
        self.backdrop = visible;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

#[derive(Debug, Clone)]
struct Handle {
    label: &'static str,
    visible: bool,
}

/// Owns modal mutual exclusion. Constructed once by the application root.
#[derive(Debug, Clone, Default)]
pub struct OverlayController<S: Surface = Layers> {
    handles: Vec<Handle>,
    active: Option<ModalId>,
    backdrop: bool,
    scroll_locked: bool,
    surface: S,
}

impl<S: Surface> OverlayController<S> {
    pub fn with_surface(surface: S) -> Self {
        Self {
            handles: Vec::new(),
            active: None,
            backdrop: false,
            scroll_locked: false,
            surface,
        }
    }

    /// Registers a modal surface. Handles live for the whole session.
    pub fn register(&mut self, label: &'static str) -> ModalId {
        self.handles.push(Handle {
            label,
            visible: false,
        });
        ModalId(self.handles.len() - 1)
    }

    #[must_use]
    pub fn label(&self, id: ModalId) -> Option<&'static str> {
        self.handles.get(id.0).map(|h| h.label)
    }

    /// Shows `id` as the single active modal, closing any other one first.
    pub fn open(&mut self, id: ModalId) {
        if id.0 >= self.handles.len() {
            return;
        }

        if let Some(previous) = self.active.filter(|prev| *prev != id) {
            self.close(previous);
        }

        self.active = Some(id);
        self.set_backdrop(true);
        self.set_visible(id, true);
        self.set_scroll_lock(true);
        tracing::debug!(modal = self.handles[id.0].label, "modal opened");
    }

    /// Hides `id`. Backdrop and scroll lock are released only when `id` is the
    /// active modal; closing any other modal leaves the active one untouched.
    pub fn close(&mut self, id: ModalId) {
        if id.0 >= self.handles.len() {
            return;
        }

        self.set_visible(id, false);

        if self.active == Some(id) {
            self.set_backdrop(false);
            self.set_scroll_lock(false);
            self.active = None;
            tracing::debug!(modal = self.handles[id.0].label, "modal closed");
        }
    }

    /// Closes whatever modal is active; no-op when none is.
    pub fn close_active(&mut self) {
        if let Some(id) = self.active {
            self.close(id);
        }
    }

    /// Backdrop click.
    pub fn dismiss(&mut self) {
        self.close_active();
    }

    /// Closes the active modal on Escape. Returns whether the event was used.
    pub fn handle_event(&mut self, event: &iced::Event) -> bool {
        let is_escape = matches!(
            event,
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            })
        );
        if is_escape && self.active.is_some() {
            self.close_active();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<ModalId> {
        self.active
    }

    #[must_use]
    pub fn is_open(&self, id: ModalId) -> bool {
        self.handles.get(id.0).is_some_and(|h| h.visible)
    }

    #[must_use]
    pub fn is_backdrop_visible(&self) -> bool {
        self.backdrop
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn set_visible(&mut self, id: ModalId, visible: bool) {
        let handle = &mut self.handles[id.0];
        if handle.visible != visible {
            handle.visible = visible;
            self.surface.set_modal_visible(id, visible);
        }
    }

    fn set_backdrop(&mut self, visible: bool) {
        if self.backdrop != visible {
            self.backdrop = visible;
            self.surface.set_backdrop_visible(visible);
        }
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        if self.scroll_locked != locked {
            self.scroll_locked = locked;
            self.surface.set_scroll_locked(locked);
        }
    }
}

impl OverlayController<Layers> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
