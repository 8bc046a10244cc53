// SPDX-License-Identifier: MPL-2.0
//! Comments and attachments panel shown inside the detail and edit modals.
//!
//! Every action disables its own control until the reply arrives, so a
//! double click never sends a request twice. Failures are reported through
//! notifications only.

use super::layout::{self, BOLD};
use super::Content;
use crate::api::{ApiClient, ApiResult};
use crate::domain::format::{format_file_size, format_timestamp, FileKind};
use crate::domain::{Attachment, Comment, Outcome};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, text, text_input, Column, Container, Row, Text};
use iced::{Element, Length};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Shown when the backend returns no usable download URL.
pub const NO_URL: &str = "No se pudo obtener la URL";

const COMMENTS_FAILED: &str = "Error cargando comentarios";
const ATTACHMENTS_FAILED: &str = "Error cargando adjuntos";

/// Item awaiting or undergoing deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Comment(String),
    Attachment(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    DraftChanged(String),
    SubmitComment,
    AskDelete(Target),
    ConfirmDelete,
    CancelDelete,
    PickFiles,
    Download(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListComments(String),
    AddComment { order_id: String, texto: String },
    DeleteComment(String),
    ListAttachments(String),
    PickFiles,
    Upload { order_id: String, path: PathBuf },
    DeleteAttachment(String),
    Download(String),
}

impl Call {
    pub async fn execute(self, client: ApiClient) -> Reply {
        match self {
            Call::ListComments(order_id) => Reply::Comments(client.list_comments(&order_id).await),
            Call::AddComment { order_id, texto } => {
                Reply::CommentAdded(client.add_comment(&order_id, &texto).await)
            }
            Call::DeleteComment(id) => {
                let result = client.delete_comment(&id).await;
                Reply::Deleted(Target::Comment(id), result)
            }
            Call::ListAttachments(order_id) => {
                Reply::Attachments(client.list_attachments(&order_id).await)
            }
            Call::PickFiles => {
                let picked = rfd::AsyncFileDialog::new()
                    .set_title("Adjuntar archivos")
                    .pick_files()
                    .await
                    .unwrap_or_default();
                Reply::FilesPicked(
                    picked
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect(),
                )
            }
            Call::Upload { order_id, path } => {
                let name = file_name(&path);
                let result = client.upload_attachment(&order_id, path).await;
                Reply::Uploaded { name, result }
            }
            Call::DeleteAttachment(id) => {
                let result = client.delete_attachment(&id).await;
                Reply::Deleted(Target::Attachment(id), result)
            }
            Call::Download(id) => {
                let opened = match client.attachment_link(&id).await {
                    Ok(link) => match link.as_ref().and_then(|link| link.usable_url()) {
                        Some(url) => webbrowser::open(url).map_err(|err| err.to_string()),
                        None => Err(NO_URL.to_string()),
                    },
                    Err(err) => Err(err.to_string()),
                };
                Reply::Opened(opened)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum Reply {
    Comments(ApiResult<Vec<Comment>>),
    Attachments(ApiResult<Vec<Attachment>>),
    CommentAdded(ApiResult<Outcome>),
    Deleted(Target, ApiResult<Outcome>),
    FilesPicked(Vec<PathBuf>),
    Uploaded { name: String, result: ApiResult<Outcome> },
    Opened(Result<(), String>),
}

/// What the panel needs from its owning modal.
#[derive(Debug, Clone)]
pub enum Action {
    Call(Call),
    Notify(Notification),
}

#[derive(Debug, Clone)]
pub struct Extras {
    order_id: String,
    comments: Content<Vec<Comment>>,
    attachments: Content<Vec<Attachment>>,
    draft: String,
    sending: bool,
    confirming: Option<Target>,
    deleting: Option<Target>,
    picking: bool,
    uploads: VecDeque<PathBuf>,
    uploading: Option<String>,
}

impl Extras {
    #[must_use]
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            comments: Content::Loading,
            attachments: Content::Loading,
            draft: String::new(),
            sending: false,
            confirming: None,
            deleting: None,
            picking: false,
            uploads: VecDeque::new(),
            uploading: None,
        }
    }

    /// Calls that fill both lists.
    #[must_use]
    pub fn load(&self) -> Vec<Action> {
        vec![self.reload_comments(), self.reload_attachments()]
    }

    fn reload_comments(&self) -> Action {
        Action::Call(Call::ListComments(self.order_id.clone()))
    }

    fn reload_attachments(&self) -> Action {
        Action::Call(Call::ListAttachments(self.order_id.clone()))
    }

    #[must_use]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    #[must_use]
    pub fn comments(&self) -> &Content<Vec<Comment>> {
        &self.comments
    }

    #[must_use]
    pub fn attachments(&self) -> &Content<Vec<Attachment>> {
        &self.attachments
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    #[must_use]
    pub fn confirming(&self) -> Option<&Target> {
        self.confirming.as_ref()
    }

    /// Status line while uploading, e.g. `Subiendo foto.png...`.
    #[must_use]
    pub fn upload_status(&self) -> Option<String> {
        self.uploading
            .as_ref()
            .map(|name| format!("Subiendo {name}..."))
    }

    fn upload_busy(&self) -> bool {
        self.picking || self.uploading.is_some()
    }

    pub fn update(&mut self, message: Message) -> Vec<Action> {
        match message {
            Message::DraftChanged(draft) => {
                if !self.sending {
                    self.draft = draft;
                }
                Vec::new()
            }
            Message::SubmitComment => {
                let texto = self.draft.trim();
                if self.sending || texto.is_empty() {
                    return Vec::new();
                }
                self.sending = true;
                vec![Action::Call(Call::AddComment {
                    order_id: self.order_id.clone(),
                    texto: texto.to_string(),
                })]
            }
            Message::AskDelete(target) => {
                if self.deleting.is_none() {
                    self.confirming = Some(target);
                }
                Vec::new()
            }
            Message::CancelDelete => {
                self.confirming = None;
                Vec::new()
            }
            Message::ConfirmDelete => {
                if self.deleting.is_some() {
                    return Vec::new();
                }
                let Some(target) = self.confirming.take() else {
                    return Vec::new();
                };
                let call = match &target {
                    Target::Comment(id) => Call::DeleteComment(id.clone()),
                    Target::Attachment(id) => Call::DeleteAttachment(id.clone()),
                };
                self.deleting = Some(target);
                vec![Action::Call(call)]
            }
            Message::PickFiles => {
                if self.upload_busy() {
                    return Vec::new();
                }
                self.picking = true;
                vec![Action::Call(Call::PickFiles)]
            }
            Message::Download(id) => vec![Action::Call(Call::Download(id))],
        }
    }

    pub fn receive(&mut self, reply: Reply) -> Vec<Action> {
        match reply {
            Reply::Comments(result) => {
                self.comments = match result {
                    Ok(comments) => Content::Ready(comments),
                    Err(err) => {
                        tracing::warn!(order = %self.order_id, %err, "loading comments failed");
                        Content::Failed(COMMENTS_FAILED.to_string())
                    }
                };
                Vec::new()
            }
            Reply::Attachments(result) => {
                self.attachments = match result {
                    Ok(attachments) => Content::Ready(attachments),
                    Err(err) => {
                        tracing::warn!(order = %self.order_id, %err, "loading attachments failed");
                        Content::Failed(ATTACHMENTS_FAILED.to_string())
                    }
                };
                Vec::new()
            }
            Reply::CommentAdded(result) => {
                self.sending = false;
                match settle(result, "Error al comentar") {
                    Ok(()) => {
                        self.draft.clear();
                        vec![self.reload_comments()]
                    }
                    Err(message) => vec![Action::Notify(Notification::error(message))],
                }
            }
            Reply::Deleted(target, result) => {
                self.deleting = None;
                match settle(result, "Error al eliminar") {
                    Ok(()) => match target {
                        Target::Comment(_) => vec![
                            self.reload_comments(),
                            Action::Notify(Notification::success("Comentario eliminado")),
                        ],
                        Target::Attachment(_) => vec![
                            self.reload_attachments(),
                            Action::Notify(Notification::success("Archivo eliminado")),
                        ],
                    },
                    Err(message) => vec![Action::Notify(Notification::error(message))],
                }
            }
            Reply::FilesPicked(paths) => {
                self.picking = false;
                self.uploads = paths.into();
                self.next_upload().into_iter().collect()
            }
            Reply::Uploaded { name, result } => {
                let mut actions = Vec::new();
                if let Err(message) = settle(result, "Error al subir") {
                    actions.push(Action::Notify(Notification::error(format!(
                        "Error subiendo {name}: {message}"
                    ))));
                }
                match self.next_upload() {
                    Some(upload) => actions.push(upload),
                    None => actions.push(self.reload_attachments()),
                }
                actions
            }
            Reply::Opened(result) => match result {
                Ok(()) => Vec::new(),
                Err(message) => vec![Action::Notify(Notification::error(message))],
            },
        }
    }

    /// Settles a reply that arrives after the owning modal closed.
    ///
    /// Busy flags are released and outcomes are still notified. Queued
    /// uploads keep going, but the lists are neither updated nor reloaded.
    pub fn receive_detached(&mut self, reply: Reply) -> Vec<Action> {
        if matches!(reply, Reply::Comments(_) | Reply::Attachments(_)) {
            return Vec::new();
        }
        self.receive(reply)
            .into_iter()
            .filter(|action| {
                !matches!(
                    action,
                    Action::Call(Call::ListComments(_) | Call::ListAttachments(_))
                )
            })
            .collect()
    }

    /// Starts the next queued upload, or clears the status when done.
    fn next_upload(&mut self) -> Option<Action> {
        match self.uploads.pop_front() {
            Some(path) => {
                self.uploading = Some(file_name(&path));
                Some(Action::Call(Call::Upload {
                    order_id: self.order_id.clone(),
                    path,
                }))
            }
            None => {
                self.uploading = None;
                None
            }
        }
    }

    pub fn view_attachments(&self) -> Element<'_, Message> {
        let list: Element<'_, Message> = match &self.attachments {
            Content::Loading => layout::note("Cargando..."),
            Content::Failed(message) => failed_text(message),
            Content::NotFound => failed_text(ATTACHMENTS_FAILED),
            Content::Ready(items) if items.is_empty() => layout::note("Sin adjuntos"),
            Content::Ready(items) => Column::with_children(
                items.iter().map(|attachment| self.attachment_row(attachment)),
            )
            .spacing(spacing::XS)
            .into(),
        };

        let mut upload_button = button(text("Adjuntar archivo").size(typography::BODY_SM))
            .style(styles::button::primary);
        if !self.upload_busy() {
            upload_button = upload_button.on_press(Message::PickFiles);
        }

        let mut controls = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(upload_button);
        if let Some(status) = self.upload_status() {
            controls = controls.push(
                Text::new(status)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_600),
            );
        }

        layout::section(
            "Adjuntos",
            Column::new()
                .spacing(spacing::SM)
                .push(list)
                .push(controls)
                .into(),
        )
    }

    fn attachment_row<'a>(&'a self, attachment: &'a Attachment) -> Element<'a, Message> {
        let target = Target::Attachment(attachment.id.clone());
        let kind = FileKind::from_mime(attachment.tipo_mime.as_deref());
        let caption = [
            format_file_size(attachment.tamano_bytes),
            attachment.subido_por_nombre.clone().unwrap_or_default(),
            format_timestamp(attachment.created_at.as_deref()),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");

        let info = Column::new()
            .spacing(2.0)
            .push(
                Text::new(attachment.nombre_original.clone().unwrap_or_default())
                    .size(typography::BODY_SM)
                    .font(BOLD),
            )
            .push(
                Text::new(caption)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Text::new(kind.label())
                    .size(typography::CAPTION)
                    .color(palette::PRIMARY_500),
            )
            .push(Container::new(info).width(Length::Fill))
            .push(
                button(text("Descargar").size(typography::CAPTION))
                    .on_press(Message::Download(attachment.id.clone()))
                    .style(styles::button::link(palette::PRIMARY_500)),
            )
            .push(self.delete_control(target, "¿Eliminar este archivo?"));

        Container::new(row)
            .width(Length::Fill)
            .padding([spacing::XS, spacing::SM])
            .style(styles::container::list_item)
            .into()
    }

    pub fn view_comments(&self) -> Element<'_, Message> {
        let list: Element<'_, Message> = match &self.comments {
            Content::Loading => layout::note("Cargando..."),
            Content::Failed(message) => failed_text(message),
            Content::NotFound => failed_text(COMMENTS_FAILED),
            Content::Ready(items) if items.is_empty() => layout::note("Sin comentarios"),
            Content::Ready(items) => {
                Column::with_children(items.iter().map(|comment| self.comment_row(comment)))
                    .spacing(spacing::XS)
                    .into()
            }
        };

        let mut input = text_input("Escribe un comentario...", &self.draft)
            .size(typography::BODY)
            .padding(spacing::XS);
        if !self.sending {
            input = input
                .on_input(Message::DraftChanged)
                .on_submit(Message::SubmitComment);
        }

        let mut send = button(text("Enviar").size(typography::BODY_SM)).style(styles::button::primary);
        if !self.sending && !self.draft.trim().is_empty() {
            send = send.on_press(Message::SubmitComment);
        }

        layout::section(
            "Comentarios",
            Column::new()
                .spacing(spacing::SM)
                .push(list)
                .push(
                    Row::new()
                        .spacing(spacing::XS)
                        .align_y(Vertical::Center)
                        .push(input)
                        .push(send),
                )
                .into(),
        )
    }

    fn comment_row<'a>(&'a self, comment: &'a Comment) -> Element<'a, Message> {
        let target = Target::Comment(comment.id.clone());
        let header = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                Container::new(
                    Text::new(comment.autor_nombre.clone().unwrap_or_default())
                        .size(typography::BODY_SM)
                        .font(BOLD)
                        .color(palette::PRIMARY_500),
                )
                .width(Length::Fill),
            )
            .push(
                Text::new(format_timestamp(comment.created_at.as_deref()))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .push(self.delete_control(target, "¿Eliminar este comentario?"));

        Container::new(
            Column::new()
                .spacing(spacing::XXS)
                .push(header)
                .push(Text::new(comment.texto.clone().unwrap_or_default()).size(typography::BODY_SM)),
        )
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::container::list_item)
        .into()
    }

    /// "Eliminar" link, or the inline confirmation when `target` is pending.
    fn delete_control<'a>(&self, target: Target, question: &'a str) -> Element<'a, Message> {
        if self.confirming.as_ref() == Some(&target) {
            return Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(
                    Text::new(question)
                        .size(typography::CAPTION)
                        .color(palette::ERROR_500),
                )
                .push(
                    button(text("Sí").size(typography::CAPTION))
                        .on_press(Message::ConfirmDelete)
                        .style(styles::button::danger),
                )
                .push(
                    button(text("No").size(typography::CAPTION))
                        .on_press(Message::CancelDelete)
                        .style(styles::button::secondary),
                )
                .into();
        }

        let mut delete = button(text("Eliminar").size(typography::CAPTION))
            .style(styles::button::link(palette::ERROR_500));
        if self.deleting.is_none() {
            delete = delete.on_press(Message::AskDelete(target));
        }
        delete.into()
    }
}

/// Collapses a write reply into `Ok` or the message to show.
fn settle(result: ApiResult<Outcome>, fallback: &str) -> Result<(), String> {
    result
        .map_err(|err| err.to_string())
        .and_then(|outcome| outcome.into_result(fallback))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn failed_text<'a>(message: &str) -> Element<'a, Message> {
    Text::new(message.to_string())
        .size(typography::BODY_SM)
        .color(palette::ERROR_500)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::ui::notifications::Severity;

    fn ok() -> ApiResult<Outcome> {
        Ok(Outcome {
            success: true,
            error: None,
        })
    }

    fn notified(actions: &[Action]) -> Vec<(Severity, String)> {
        actions
            .iter()
            .filter_map(|action| match action {
                Action::Notify(n) => Some((n.severity(), n.message().to_string())),
                Action::Call(_) => None,
            })
            .collect()
    }

    fn calls(actions: Vec<Action>) -> Vec<Call> {
        actions
            .into_iter()
            .filter_map(|action| match action {
                Action::Call(call) => Some(call),
                Action::Notify(_) => None,
            })
            .collect()
    }

    #[test]
    fn load_requests_both_lists() {
        let extras = Extras::new("P-1");
        assert_eq!(
            calls(extras.load()),
            vec![
                Call::ListComments("P-1".into()),
                Call::ListAttachments("P-1".into())
            ]
        );
    }

    #[test]
    fn comment_is_trimmed_and_sent_once() {
        let mut extras = Extras::new("P-1");
        extras.update(Message::DraftChanged("  hola  ".into()));

        let first = calls(extras.update(Message::SubmitComment));
        let second = extras.update(Message::SubmitComment);

        assert_eq!(
            first,
            vec![Call::AddComment {
                order_id: "P-1".into(),
                texto: "hola".into()
            }]
        );
        assert!(second.is_empty());
        assert!(extras.is_sending());
    }

    #[test]
    fn blank_comment_is_ignored() {
        let mut extras = Extras::new("P-1");
        extras.update(Message::DraftChanged("   ".into()));
        assert!(extras.update(Message::SubmitComment).is_empty());
        assert!(!extras.is_sending());
    }

    #[test]
    fn added_comment_clears_draft_and_reloads() {
        let mut extras = Extras::new("P-1");
        extras.update(Message::DraftChanged("listo".into()));
        extras.update(Message::SubmitComment);

        let actions = extras.receive(Reply::CommentAdded(ok()));

        assert!(!extras.is_sending());
        assert_eq!(extras.draft(), "");
        assert_eq!(calls(actions), vec![Call::ListComments("P-1".into())]);
    }

    #[test]
    fn failed_comment_keeps_draft_and_notifies() {
        let mut extras = Extras::new("P-1");
        extras.update(Message::DraftChanged("listo".into()));
        extras.update(Message::SubmitComment);

        let actions = extras.receive(Reply::CommentAdded(Err(ApiError::Network(
            "timeout".into(),
        ))));

        assert!(!extras.is_sending());
        assert_eq!(extras.draft(), "listo");
        assert_eq!(
            notified(&actions),
            vec![(Severity::Error, "Error de conexión: timeout".to_string())]
        );
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut extras = Extras::new("P-1");
        assert!(extras.update(Message::ConfirmDelete).is_empty());

        extras.update(Message::AskDelete(Target::Comment("c9".into())));
        assert_eq!(extras.confirming(), Some(&Target::Comment("c9".into())));

        let actions = calls(extras.update(Message::ConfirmDelete));
        assert_eq!(actions, vec![Call::DeleteComment("c9".into())]);
        assert_eq!(extras.confirming(), None);
    }

    #[test]
    fn cancelled_delete_sends_nothing() {
        let mut extras = Extras::new("P-1");
        extras.update(Message::AskDelete(Target::Attachment("a1".into())));
        extras.update(Message::CancelDelete);
        assert!(extras.update(Message::ConfirmDelete).is_empty());
    }

    #[test]
    fn deleted_attachment_reloads_and_notifies() {
        let mut extras = Extras::new("P-1");
        extras.update(Message::AskDelete(Target::Attachment("a1".into())));
        extras.update(Message::ConfirmDelete);

        let actions = extras.receive(Reply::Deleted(Target::Attachment("a1".into()), ok()));

        assert_eq!(
            notified(&actions),
            vec![(Severity::Success, "Archivo eliminado".to_string())]
        );
        assert_eq!(calls(actions), vec![Call::ListAttachments("P-1".into())]);
    }

    #[test]
    fn uploads_run_one_after_another() {
        let mut extras = Extras::new("P-1");
        assert_eq!(calls(extras.update(Message::PickFiles)), vec![Call::PickFiles]);
        assert!(extras.update(Message::PickFiles).is_empty());

        let first = calls(extras.receive(Reply::FilesPicked(vec![
            PathBuf::from("/tmp/a.png"),
            PathBuf::from("/tmp/b.pdf"),
        ])));
        assert_eq!(
            first,
            vec![Call::Upload {
                order_id: "P-1".into(),
                path: PathBuf::from("/tmp/a.png")
            }]
        );
        assert_eq!(extras.upload_status().as_deref(), Some("Subiendo a.png..."));

        let second = extras.receive(Reply::Uploaded {
            name: "a.png".into(),
            result: Err(ApiError::Io("denied".into())),
        });
        assert_eq!(
            notified(&second),
            vec![(
                Severity::Error,
                "Error subiendo a.png: No se pudo leer el archivo: denied".to_string()
            )]
        );
        assert_eq!(extras.upload_status().as_deref(), Some("Subiendo b.pdf..."));

        let done = calls(extras.receive(Reply::Uploaded {
            name: "b.pdf".into(),
            result: ok(),
        }));
        assert_eq!(done, vec![Call::ListAttachments("P-1".into())]);
        assert_eq!(extras.upload_status(), None);
    }

    #[test]
    fn closed_panel_finishes_queued_uploads_without_reloading() {
        let mut extras = Extras::new("P-1");
        extras.update(Message::PickFiles);
        extras.receive(Reply::FilesPicked(vec![
            PathBuf::from("/tmp/a.png"),
            PathBuf::from("/tmp/b.pdf"),
        ]));

        let next = calls(extras.receive_detached(Reply::Uploaded {
            name: "a.png".into(),
            result: ok(),
        }));
        assert_eq!(
            next,
            vec![Call::Upload {
                order_id: "P-1".into(),
                path: PathBuf::from("/tmp/b.pdf")
            }]
        );

        let done = extras.receive_detached(Reply::Uploaded {
            name: "b.pdf".into(),
            result: Err(ApiError::Network("reset".into())),
        });
        assert_eq!(
            notified(&done),
            vec![(
                Severity::Error,
                "Error subiendo b.pdf: Error de conexión: reset".to_string()
            )]
        );
        assert!(calls(done).is_empty());
        assert_eq!(extras.upload_status(), None);
    }

    #[test]
    fn closed_panel_ignores_list_replies() {
        let mut extras = Extras::new("P-1");
        let actions = extras.receive_detached(Reply::Comments(Ok(Vec::new())));
        assert!(actions.is_empty());
        assert!(extras.comments().is_loading());
    }

    #[test]
    fn cancelled_picker_frees_upload_button() {
        let mut extras = Extras::new("P-1");
        extras.update(Message::PickFiles);
        assert!(extras.receive(Reply::FilesPicked(Vec::new())).is_empty());
        assert_eq!(calls(extras.update(Message::PickFiles)), vec![Call::PickFiles]);
    }

    #[test]
    fn missing_download_url_is_reported() {
        let mut extras = Extras::new("P-1");
        let actions = extras.receive(Reply::Opened(Err(NO_URL.to_string())));
        assert_eq!(notified(&actions), vec![(Severity::Error, NO_URL.to_string())]);
    }

    #[test]
    fn list_failures_are_rendered_inline() {
        let mut extras = Extras::new("P-1");
        extras.receive(Reply::Comments(Err(ApiError::Network("down".into()))));
        extras.receive(Reply::Attachments(Ok(Vec::new())));

        assert_eq!(
            extras.comments(),
            &Content::Failed("Error cargando comentarios".to_string())
        );
        assert_eq!(extras.attachments(), &Content::Ready(Vec::new()));
    }
}
