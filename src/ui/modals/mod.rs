// SPDX-License-Identifier: MPL-2.0
//! Order modals: detail, edit and delete dialogs plus the comments and
//! attachments panel they share.
//!
//! Each controller owns one [`ModalId`] registered with the
//! [`OverlayController`](crate::ui::overlay::OverlayController). Opening a
//! modal shows a loading placeholder straight away and asks the application to
//! fetch the order. Controllers never perform I/O themselves: `update`
//! returns [`Event`]s, the application turns [`Event::Api`] requests into
//! tasks and feeds the [`Reply`] back tagged with the [`Ticket`] it was issued
//! under.
//!
//! A reply is rendered only when its ticket belongs to the latest open of the
//! modal and the modal is still open. Stale loads are dropped. Writes the
//! backend has already applied are still reported, and a finished save or
//! delete still refreshes the orders list.

pub mod delete;
pub mod detail;
pub mod edit;
pub mod extras;
mod layout;

pub use delete::Delete;
pub use detail::Detail;
pub use edit::Edit;
pub use extras::Extras;

use crate::api::{ApiClient, ApiResult};
use crate::domain::{Order, OrderUpdate, Outcome};
use crate::ui::notifications::Notification;
use crate::ui::overlay::{ModalId, OverlayController, Surface};

/// Identifies one open of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Generation counter of one modal.
#[derive(Debug, Default)]
pub struct Tickets {
    generation: u64,
}

impl Tickets {
    /// Starts a new generation, invalidating every earlier ticket.
    pub fn issue(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    /// Ticket of the latest open.
    #[must_use]
    pub fn current(&self) -> Ticket {
        Ticket(self.generation)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Whether a reply carrying `ticket` may still be rendered into `modal`.
    #[must_use]
    pub fn accepts<S: Surface>(
        &self,
        ticket: Ticket,
        modal: ModalId,
        overlay: &OverlayController<S>,
    ) -> bool {
        self.is_current(ticket) && overlay.is_open(modal)
    }
}

/// Asynchronously loaded content of a modal or of one of its lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content<T> {
    #[default]
    Loading,
    Ready(T),
    NotFound,
    Failed(String),
}

impl<T> Content<T> {
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Content::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Content::Loading)
    }
}

/// Which controller a request came from and its reply goes back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Detail,
    Edit,
    Delete,
}

/// Work a modal needs from the outside world.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchOrder(String),
    UpdateOrder(String, OrderUpdate),
    DeleteOrder(String),
    Extras(extras::Call),
}

impl Call {
    /// Runs the call against the backend.
    pub async fn execute(self, client: ApiClient) -> Reply {
        match self {
            Call::FetchOrder(id) => Reply::Order(client.fetch_order(&id).await),
            Call::UpdateOrder(id, update) => Reply::Saved(client.update_order(&id, &update).await),
            Call::DeleteOrder(id) => Reply::Deleted(client.delete_order(&id).await),
            Call::Extras(call) => Reply::Extras(call.execute(client).await),
        }
    }
}

/// Result of a [`Call`].
#[derive(Debug, Clone)]
pub enum Reply {
    Order(ApiResult<Option<Order>>),
    Saved(ApiResult<Outcome>),
    Deleted(ApiResult<Outcome>),
    Extras(extras::Reply),
}

/// A call tagged with where its reply must be delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub origin: Origin,
    pub ticket: Ticket,
    pub call: Call,
}

/// Effects a modal asks the application to carry out.
#[derive(Debug, Clone)]
pub enum Event {
    Api(Request),
    Notify(Notification),
    /// The orders list must be reloaded; `highlight` marks a changed row.
    OrdersChanged { highlight: Option<String> },
    /// Open the edit modal for this order.
    OpenEdit(String),
}

impl Event {
    fn request(origin: Origin, ticket: Ticket, call: Call) -> Self {
        Event::Api(Request {
            origin,
            ticket,
            call,
        })
    }
}

/// Converts the extras panel's actions into modal events.
fn lift(origin: Origin, ticket: Ticket, actions: Vec<extras::Action>) -> Vec<Event> {
    actions
        .into_iter()
        .map(|action| match action {
            extras::Action::Call(call) => Event::request(origin, ticket, Call::Extras(call)),
            extras::Action::Notify(notification) => Event::Notify(notification),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issuing_invalidates_earlier_tickets() {
        let mut tickets = Tickets::default();
        let first = tickets.issue();
        let second = tickets.issue();
        assert!(!tickets.is_current(first));
        assert!(tickets.is_current(second));
        assert_eq!(tickets.current(), second);
    }

    #[test]
    fn closed_modal_rejects_current_ticket() {
        let mut overlay = OverlayController::new();
        let modal = overlay.register("detalle");
        let mut tickets = Tickets::default();

        let ticket = tickets.issue();
        overlay.open(modal);
        assert!(tickets.accepts(ticket, modal, &overlay));

        overlay.close(modal);
        assert!(!tickets.accepts(ticket, modal, &overlay));
    }

    #[test]
    fn content_ready_accessor() {
        let loading: Content<u8> = Content::default();
        assert!(loading.is_loading());
        assert_eq!(loading.ready(), None);
        assert_eq!(Content::Ready(3).ready(), Some(&3));
    }
}
