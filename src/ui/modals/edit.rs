// SPDX-License-Identifier: MPL-2.0
//! Order edit modal.
//!
//! Saving always sends every editable field, trimmed, blanks included, so the
//! backend can clear values the user emptied. The delivery date is edited as
//! `YYYY-MM-DD` and sent as `DD/MM/YYYY`.

use super::extras::{self, Extras};
use super::layout;
use super::{lift, Call, Content, Event, Origin, Reply, Ticket, Tickets};
use crate::api::ApiResult;
use crate::domain::format::{ddmm_to_iso, iso_to_ddmm};
use crate::domain::order::{BANKS, CHANNELS, PAYMENT_STATUSES, PRODUCTION_STATUSES};
use crate::domain::{Order, OrderUpdate, Outcome};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::overlay::{ModalId, OverlayController, Surface};
use crate::ui::styles;
use iced::widget::{button, pick_list, text, text_input, Column, Row};
use iced::Element;

const SAVE_FAILED: &str = "Error al guardar";

/// Free-text form fields, in payload order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Cliente,
    Telefono,
    Email,
    Color,
    Direccion,
    Personalizacion,
    PrecioProducto,
    CostosAdicionales,
    PrecioEnvio,
    FechaEntregaReal,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Cliente,
        Field::Telefono,
        Field::Email,
        Field::Color,
        Field::Direccion,
        Field::Personalizacion,
        Field::PrecioProducto,
        Field::CostosAdicionales,
        Field::PrecioEnvio,
        Field::FechaEntregaReal,
    ];

    /// Key in the update payload.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Field::Cliente => "cliente",
            Field::Telefono => "telefono",
            Field::Email => "email",
            Field::Color => "color",
            Field::Direccion => "direccion",
            Field::Personalizacion => "personalizacion",
            Field::PrecioProducto => "precio_producto",
            Field::CostosAdicionales => "costos_adicionales",
            Field::PrecioEnvio => "precio_envio",
            Field::FechaEntregaReal => "fecha_entrega_real",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Cliente => "Cliente",
            Field::Telefono => "Teléfono",
            Field::Email => "Email (opcional)",
            Field::Color => "Color",
            Field::Direccion => "Dirección",
            Field::Personalizacion => "Detalles Personalización",
            Field::PrecioProducto => "Precio Venta (RD$)",
            Field::CostosAdicionales => "Costos Adicionales",
            Field::PrecioEnvio => "Envío",
            Field::FechaEntregaReal => "Fecha Entrega Real",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Field::Email => "No requerido",
            Field::Color => "Ej: Negro, Blanco, Rojo",
            Field::Personalizacion => "Detalles del bordado/diseño...",
            Field::FechaEntregaReal => "AAAA-MM-DD",
            _ => "",
        }
    }
}

/// Fixed-option form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    EstatusProduccion,
    EstatusPago,
    Banco,
    Canal,
}

impl Choice {
    pub const ALL: [Choice; 4] = [
        Choice::EstatusProduccion,
        Choice::EstatusPago,
        Choice::Banco,
        Choice::Canal,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Choice::EstatusProduccion => "estatus_produccion",
            Choice::EstatusPago => "estatus_pago",
            Choice::Banco => "banco",
            Choice::Canal => "canal",
        }
    }

    #[must_use]
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Choice::EstatusProduccion => &PRODUCTION_STATUSES,
            Choice::EstatusPago => &PAYMENT_STATUSES,
            Choice::Banco => &BANKS,
            Choice::Canal => &CHANNELS,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Choice::EstatusProduccion => "Estado Producción",
            Choice::EstatusPago => "Estado Pago",
            Choice::Banco => "Método Pago",
            Choice::Canal => "Canal",
        }
    }
}

/// Editable copy of an order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    texts: [String; 10],
    choices: [Option<String>; 4],
}

impl Form {
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let number = |value: Option<f64>| value.unwrap_or(0.0).to_string();

        let mut form = Self::default();
        for field in Field::ALL {
            let value = match field {
                Field::Cliente => text(&order.cliente),
                Field::Telefono => text(&order.telefono),
                Field::Email => text(&order.email),
                Field::Color => text(&order.color),
                Field::Direccion => text(&order.direccion),
                Field::Personalizacion => text(&order.personalizacion),
                Field::PrecioProducto => number(order.precio_producto),
                Field::CostosAdicionales => number(order.costos_adicionales),
                Field::PrecioEnvio => number(order.precio_envio),
                Field::FechaEntregaReal => {
                    ddmm_to_iso(order.fecha_entrega_real.as_deref().unwrap_or_default())
                }
            };
            form.set(field, value);
        }
        for choice in Choice::ALL {
            let value = match choice {
                Choice::EstatusProduccion => order.estatus_produccion.clone(),
                Choice::EstatusPago => order.estatus_pago.clone(),
                Choice::Banco => order.banco.clone(),
                Choice::Canal => order.canal.clone(),
            };
            form.choose(choice, value.filter(|v| !v.trim().is_empty()));
        }
        form
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        &self.texts[field as usize]
    }

    pub fn set(&mut self, field: Field, value: String) {
        self.texts[field as usize] = value;
    }

    #[must_use]
    pub fn choice(&self, choice: Choice) -> Option<&str> {
        self.choices[choice as usize].as_deref()
    }

    pub fn choose(&mut self, choice: Choice, value: Option<String>) {
        self.choices[choice as usize] = value;
    }

    /// Every field, trimmed, blanks included.
    #[must_use]
    pub fn payload(&self) -> OrderUpdate {
        let mut update = OrderUpdate::new();
        for choice in Choice::ALL {
            update.set(choice.key(), self.choice(choice).unwrap_or_default());
        }
        for field in Field::ALL {
            let value = self.value(field).trim();
            if field == Field::FechaEntregaReal && !value.is_empty() {
                let converted = iso_to_ddmm(value);
                let date = if converted.is_empty() {
                    value.to_string()
                } else {
                    converted
                };
                update.set(field.key(), &date);
            } else {
                update.set(field.key(), value);
            }
        }
        update
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Input(Field, String),
    Pick(Choice, String),
    Save,
    Extras(extras::Message),
    Reply(Ticket, Reply),
}

#[derive(Debug)]
pub struct Edit {
    modal: ModalId,
    tickets: Tickets,
    order_id: String,
    content: Content<Form>,
    extras: Option<Extras>,
    saving: bool,
    error: Option<String>,
}

impl Edit {
    pub fn new<S: Surface>(overlay: &mut OverlayController<S>) -> Self {
        Self {
            modal: overlay.register("editar"),
            tickets: Tickets::default(),
            order_id: String::new(),
            content: Content::Loading,
            extras: None,
            saving: false,
            error: None,
        }
    }

    #[must_use]
    pub fn modal(&self) -> ModalId {
        self.modal
    }

    #[must_use]
    pub fn content(&self) -> &Content<Form> {
        &self.content
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Inline error of the last failed save.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open<S: Surface>(
        &mut self,
        order_id: &str,
        overlay: &mut OverlayController<S>,
    ) -> Vec<Event> {
        let ticket = self.tickets.issue();
        self.order_id = order_id.to_string();
        self.content = Content::Loading;
        self.extras = None;
        self.saving = false;
        self.error = None;
        overlay.open(self.modal);
        vec![Event::request(
            Origin::Edit,
            ticket,
            Call::FetchOrder(order_id.to_string()),
        )]
    }

    pub fn update<S: Surface>(
        &mut self,
        message: Message,
        overlay: &mut OverlayController<S>,
    ) -> Vec<Event> {
        match message {
            Message::Close => {
                overlay.close(self.modal);
                Vec::new()
            }
            Message::Input(field, value) => {
                if let Content::Ready(form) = &mut self.content {
                    form.set(field, value);
                }
                Vec::new()
            }
            Message::Pick(choice, value) => {
                if let Content::Ready(form) = &mut self.content {
                    form.choose(choice, Some(value));
                }
                Vec::new()
            }
            Message::Save => {
                if self.saving {
                    return Vec::new();
                }
                let Some(form) = self.content.ready() else {
                    return Vec::new();
                };
                let call = Call::UpdateOrder(self.order_id.clone(), form.payload());
                self.saving = true;
                self.error = None;
                vec![Event::request(Origin::Edit, self.tickets.current(), call)]
            }
            Message::Extras(message) => match self.extras.as_mut() {
                Some(extras) => {
                    let actions = extras.update(message);
                    lift(Origin::Edit, self.tickets.current(), actions)
                }
                None => Vec::new(),
            },
            Message::Reply(ticket, reply) => {
                if self.tickets.accepts(ticket, self.modal, overlay) {
                    return self.receive(ticket, reply, overlay);
                }
                self.receive_detached(ticket, reply)
            }
        }
    }

    fn receive<S: Surface>(
        &mut self,
        ticket: Ticket,
        reply: Reply,
        overlay: &mut OverlayController<S>,
    ) -> Vec<Event> {
        match reply {
            Reply::Order(Ok(Some(order))) => {
                let extras = Extras::new(order.id.clone());
                let actions = extras.load();
                self.extras = Some(extras);
                self.content = Content::Ready(Form::from_order(&order));
                lift(Origin::Edit, ticket, actions)
            }
            Reply::Order(Ok(None)) => {
                self.content = Content::NotFound;
                Vec::new()
            }
            Reply::Order(Err(err)) => {
                tracing::warn!(order = %self.order_id, %err, "loading order for edit failed");
                self.content = Content::Failed(format!("Error: {err}"));
                Vec::new()
            }
            Reply::Saved(result) => {
                self.saving = false;
                match outcome(result) {
                    Ok(()) => {
                        tracing::info!(order = %self.order_id, "order updated");
                        overlay.close(self.modal);
                        saved(Some(self.order_id.clone()))
                    }
                    Err(message) => {
                        self.error = Some(message);
                        Vec::new()
                    }
                }
            }
            Reply::Extras(reply) => match self.extras.as_mut() {
                Some(extras) => {
                    let actions = extras.receive(reply);
                    lift(Origin::Edit, ticket, actions)
                }
                None => Vec::new(),
            },
            Reply::Deleted(_) => Vec::new(),
        }
    }

    /// Handles a reply for a closed or reopened modal. Nothing is rendered,
    /// but a finished save is still reported and refreshes the list.
    fn receive_detached(&mut self, ticket: Ticket, reply: Reply) -> Vec<Event> {
        let current = self.tickets.is_current(ticket);
        match reply {
            Reply::Saved(result) => {
                let highlight = current.then(|| self.order_id.clone());
                if current {
                    self.saving = false;
                }
                tracing::debug!("save finished after its modal closed");
                match outcome(result) {
                    Ok(()) => saved(highlight),
                    Err(message) => vec![Event::Notify(Notification::error(message))],
                }
            }
            Reply::Extras(reply) if current => match self.extras.as_mut() {
                Some(extras) => {
                    let actions = extras.receive_detached(reply);
                    lift(Origin::Edit, ticket, actions)
                }
                None => Vec::new(),
            },
            _ => {
                tracing::debug!(order = %self.order_id, "dropping stale edit reply");
                Vec::new()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let width = sizing::MODAL_EDIT_WIDTH;
        match &self.content {
            Content::Loading => layout::loading(width),
            Content::NotFound => {
                layout::failure(super::detail::NOT_FOUND.to_string(), Message::Close, width)
            }
            Content::Failed(message) => layout::failure(message.clone(), Message::Close, width),
            Content::Ready(form) => self.view_form(form),
        }
    }

    fn view_form<'a>(&'a self, form: &'a Form) -> Element<'a, Message> {
        let mut body = Column::new().spacing(spacing::SM);

        if let Some(error) = &self.error {
            body = body.push(layout::error_block(error));
        }

        body = body
            .push(pair(
                choice_control(form, Choice::EstatusProduccion),
                choice_control(form, Choice::EstatusPago),
            ))
            .push(pair(
                text_control(form, Field::Cliente),
                text_control(form, Field::Telefono),
            ))
            .push(pair(
                text_control(form, Field::Email),
                text_control(form, Field::Color),
            ))
            .push(text_control(form, Field::Direccion))
            .push(text_control(form, Field::Personalizacion))
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(text_control(form, Field::PrecioProducto))
                    .push(text_control(form, Field::CostosAdicionales))
                    .push(text_control(form, Field::PrecioEnvio)),
            )
            .push(pair(
                choice_control(form, Choice::Banco),
                choice_control(form, Choice::Canal),
            ))
            .push(text_control(form, Field::FechaEntregaReal));

        if let Some(extras) = &self.extras {
            body = body
                .push(extras.view_attachments().map(Message::Extras))
                .push(extras.view_comments().map(Message::Extras));
        }

        let mut save = button(
            text(if self.saving { "Guardando..." } else { "Guardar" }).size(typography::BODY),
        )
        .style(styles::button::success);
        if !self.saving {
            save = save.on_press(Message::Save);
        }

        let footer = Row::new()
            .spacing(spacing::XS)
            .push(
                button(text("Cancelar").size(typography::BODY))
                    .on_press(Message::Close)
                    .style(styles::button::secondary),
            )
            .push(save);

        layout::dialog(
            format!("Editar {}", self.order_id),
            Message::Close,
            body.into(),
            Some(footer.into()),
            sizing::MODAL_EDIT_WIDTH,
        )
    }
}

fn outcome(result: ApiResult<Outcome>) -> Result<(), String> {
    result
        .map_err(|err| err.to_string())
        .and_then(|outcome| outcome.into_result(SAVE_FAILED))
}

fn saved(highlight: Option<String>) -> Vec<Event> {
    vec![
        Event::Notify(Notification::success("Pedido actualizado")),
        Event::OrdersChanged { highlight },
    ]
}

fn pair<'a>(left: Element<'a, Message>, right: Element<'a, Message>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(left)
        .push(right)
        .into()
}

fn text_control(form: &Form, field: Field) -> Element<'_, Message> {
    let input = text_input(field.placeholder(), form.value(field))
        .on_input(move |value| Message::Input(field, value))
        .size(typography::BODY)
        .padding(spacing::XS);
    layout::labeled(field.label(), input.into())
}

fn choice_control(form: &Form, choice: Choice) -> Element<'_, Message> {
    let options: Vec<String> = choice.options().iter().map(|o| (*o).to_string()).collect();
    let list = pick_list(
        options,
        form.choice(choice).map(str::to_string),
        move |value| Message::Pick(choice, value),
    )
    .text_size(typography::BODY)
    .padding(spacing::XS);
    layout::labeled(choice.label(), list.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::ui::notifications::Severity;

    fn order() -> Order {
        Order {
            id: "P-1001".into(),
            cliente: Some("Ana".into()),
            telefono: Some("809-555-0101".into()),
            precio_producto: Some(1200.0),
            estatus_pago: Some("Recibido".into()),
            fecha_entrega_real: Some("15/03/2024".into()),
            ..Order::default()
        }
    }

    fn loaded(overlay: &mut OverlayController) -> (Edit, Ticket) {
        let mut edit = Edit::new(overlay);
        edit.open("P-1001", overlay);
        let ticket = edit.tickets.current();
        edit.update(Message::Reply(ticket, Reply::Order(Ok(Some(order())))), overlay);
        (edit, ticket)
    }

    fn requests(events: &[Event]) -> Vec<&Call> {
        events
            .iter()
            .filter_map(|event| match event {
                Event::Api(request) => Some(&request.call),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn form_converts_order_values() {
        let form = Form::from_order(&order());
        assert_eq!(form.value(Field::Cliente), "Ana");
        assert_eq!(form.value(Field::PrecioProducto), "1200");
        assert_eq!(form.value(Field::PrecioEnvio), "0");
        assert_eq!(form.value(Field::FechaEntregaReal), "2024-03-15");
        assert_eq!(form.choice(Choice::EstatusPago), Some("Recibido"));
        assert_eq!(form.choice(Choice::Banco), None);
    }

    #[test]
    fn payload_includes_every_field() {
        let mut form = Form::from_order(&order());
        form.set(Field::Cliente, "   ".into());
        form.set(Field::Color, " Negro ".into());

        let payload = form.payload();

        assert_eq!(payload.len(), Field::ALL.len() + Choice::ALL.len());
        assert_eq!(payload.get("cliente"), Some(""));
        assert_eq!(payload.get("color"), Some("Negro"));
        assert_eq!(payload.get("banco"), Some(""));
        assert_eq!(payload.get("fecha_entrega_real"), Some("15/03/2024"));
    }

    #[test]
    fn empty_delivery_date_is_sent_blank() {
        let mut form = Form::from_order(&order());
        form.set(Field::FechaEntregaReal, String::new());
        assert_eq!(form.payload().get("fecha_entrega_real"), Some(""));
    }

    #[test]
    fn double_save_sends_one_request() {
        let mut overlay = OverlayController::new();
        let (mut edit, _) = loaded(&mut overlay);

        let first = edit.update(Message::Save, &mut overlay);
        let second = edit.update(Message::Save, &mut overlay);

        assert_eq!(requests(&first).len(), 1);
        assert!(second.is_empty());
        assert!(edit.is_saving());
    }

    #[test]
    fn save_before_load_does_nothing() {
        let mut overlay = OverlayController::new();
        let mut edit = Edit::new(&mut overlay);
        edit.open("P-1", &mut overlay);
        assert!(edit.update(Message::Save, &mut overlay).is_empty());
        assert!(!edit.is_saving());
    }

    #[test]
    fn successful_save_closes_notifies_and_refreshes_once() {
        let mut overlay = OverlayController::new();
        let (mut edit, ticket) = loaded(&mut overlay);
        edit.update(Message::Pick(Choice::EstatusPago, "Pendiente".into()), &mut overlay);
        edit.update(Message::Input(Field::Cliente, String::new()), &mut overlay);

        let events = edit.update(Message::Save, &mut overlay);
        match requests(&events).as_slice() {
            [Call::UpdateOrder(id, payload)] => {
                assert_eq!(id, "P-1001");
                assert_eq!(payload.get("estatus_pago"), Some("Pendiente"));
                assert_eq!(payload.get("cliente"), Some(""));
            }
            other => panic!("unexpected calls: {other:?}"),
        }

        let events = edit.update(
            Message::Reply(
                ticket,
                Reply::Saved(Ok(Outcome {
                    success: true,
                    error: None,
                })),
            ),
            &mut overlay,
        );

        assert!(!overlay.is_open(edit.modal()));
        assert!(!edit.is_saving());
        let refreshes: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, Event::OrdersChanged { highlight: Some(id) } if id == "P-1001"))
            .collect();
        assert_eq!(refreshes.len(), 1);
        assert!(events.iter().any(|e| matches!(
            e,
            Event::Notify(n) if n.severity() == Severity::Success && n.message() == "Pedido actualizado"
        )));
    }

    #[test]
    fn rejected_save_shows_inline_error_and_stays_open() {
        let mut overlay = OverlayController::new();
        let (mut edit, ticket) = loaded(&mut overlay);
        edit.update(Message::Save, &mut overlay);

        let events = edit.update(
            Message::Reply(
                ticket,
                Reply::Saved(Ok(Outcome {
                    success: false,
                    error: Some("X".into()),
                })),
            ),
            &mut overlay,
        );

        assert!(events.is_empty());
        assert!(overlay.is_open(edit.modal()));
        assert_eq!(edit.error(), Some("X"));
        assert!(!edit.is_saving());

        // retry is possible right away and clears the error
        let retry = edit.update(Message::Save, &mut overlay);
        assert_eq!(requests(&retry).len(), 1);
        assert_eq!(edit.error(), None);
    }

    #[test]
    fn transport_error_uses_its_message() {
        let mut overlay = OverlayController::new();
        let (mut edit, ticket) = loaded(&mut overlay);
        edit.update(Message::Save, &mut overlay);

        edit.update(
            Message::Reply(ticket, Reply::Saved(Err(ApiError::Network("refused".into())))),
            &mut overlay,
        );

        assert_eq!(edit.error(), Some("Error de conexión: refused"));
    }

    #[test]
    fn envelope_without_message_falls_back() {
        let mut overlay = OverlayController::new();
        let (mut edit, ticket) = loaded(&mut overlay);
        edit.update(Message::Save, &mut overlay);

        edit.update(
            Message::Reply(ticket, Reply::Saved(Ok(Outcome::default()))),
            &mut overlay,
        );

        assert_eq!(edit.error(), Some(SAVE_FAILED));
    }

    #[test]
    fn save_finishing_after_cancel_still_refreshes() {
        let mut overlay = OverlayController::new();
        let (mut edit, ticket) = loaded(&mut overlay);
        edit.update(Message::Save, &mut overlay);
        edit.update(Message::Close, &mut overlay);

        let events = edit.update(
            Message::Reply(
                ticket,
                Reply::Saved(Ok(Outcome {
                    success: true,
                    error: None,
                })),
            ),
            &mut overlay,
        );

        assert!(!edit.is_saving());
        assert_eq!(overlay.active(), None);
        assert!(events.iter().any(|e| matches!(
            e,
            Event::OrdersChanged { highlight: Some(id) } if id == "P-1001"
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            Event::Notify(n) if n.severity() == Severity::Success
        )));
    }

    #[test]
    fn save_failing_after_backdrop_click_is_notified() {
        let mut overlay = OverlayController::new();
        let (mut edit, ticket) = loaded(&mut overlay);
        edit.update(Message::Save, &mut overlay);
        overlay.dismiss();

        let events = edit.update(
            Message::Reply(
                ticket,
                Reply::Saved(Ok(Outcome {
                    success: false,
                    error: Some("Fecha inválida".into()),
                })),
            ),
            &mut overlay,
        );

        assert!(!edit.is_saving());
        assert_eq!(edit.error(), None);
        assert!(matches!(
            events.as_slice(),
            [Event::Notify(n)] if n.severity() == Severity::Error && n.message() == "Fecha inválida"
        ));
    }

    #[test]
    fn save_from_earlier_open_refreshes_without_highlight() {
        let mut overlay = OverlayController::new();
        let (mut edit, first) = loaded(&mut overlay);
        edit.update(Message::Save, &mut overlay);
        edit.open("P-2002", &mut overlay);

        let events = edit.update(
            Message::Reply(
                first,
                Reply::Saved(Ok(Outcome {
                    success: true,
                    error: None,
                })),
            ),
            &mut overlay,
        );

        assert!(overlay.is_open(edit.modal()));
        assert!(edit.content().is_loading());
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::OrdersChanged { highlight: None })));
    }
}
