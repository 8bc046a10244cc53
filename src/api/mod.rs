// SPDX-License-Identifier: MPL-2.0
//! Authenticated REST client for the orders backend.
//!
//! Every request carries `Authorization: Bearer <token>` from the shared
//! [`SessionStore`]. Status handling is uniform:
//!
//! | Status | Result |
//! |--------|--------|
//! | 401 | session cleared, "no data" returned (empty list, `None`, unsuccessful [`Outcome`]) |
//! | 403 | [`ApiError::Forbidden`] with the server message or "Sin permisos" |
//! | other non-2xx on reads | [`ApiError::Server`] |
//! | any status on writes | the `{success, error}` envelope as sent by the server |
//!
//! No timeout is configured; a hung request stays pending.

pub mod error;

pub use error::{ApiError, ApiResult, FORBIDDEN_FALLBACK};

use crate::domain::{
    Attachment, Comment, DateRange, DownloadLink, Order, OrderUpdate, Outcome, Product,
    Statistics,
};
use crate::domain::{ChannelSales, StatusCount, Summary};
use crate::session::{SessionStore, User};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::PathBuf;

const USER_AGENT: &str = concat!("PedidosBackoffice/", env!("CARGO_PKG_VERSION"));

/// Decoded response of a request that was not a 401.
#[derive(Debug)]
struct Reply {
    status: StatusCode,
    body: Value,
}

impl Reply {
    fn server_message(&self) -> Option<String> {
        self.body
            .get("error")
            .and_then(Value::as_str)
            .filter(|msg| !msg.trim().is_empty())
            .map(str::to_string)
    }

    /// Decodes a read response, turning non-success statuses into errors.
    fn into_data<T: DeserializeOwned>(self) -> ApiResult<T> {
        if !self.status.is_success() {
            let message = self
                .server_message()
                .unwrap_or_else(|| format!("HTTP {}", self.status));
            return Err(ApiError::Server {
                status: self.status.as_u16(),
                message,
            });
        }
        Ok(serde_json::from_value(self.body)?)
    }

    /// Decodes the `{success, error}` envelope of a write response.
    fn into_outcome(self) -> Outcome {
        serde_json::from_value(self.body).unwrap_or(Outcome {
            success: self.status.is_success(),
            error: None,
        })
    }
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    user: Option<User>,
}

/// Cloneable handle; clones share the HTTP connection pool and the session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Creates a client for `base_url` (including the `/api` prefix).
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, endpoint));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a request and applies the shared status policy.
    ///
    /// Returns `Ok(None)` after a 401, once the session has been cleared.
    async fn send(&self, builder: RequestBuilder) -> ApiResult<Option<Reply>> {
        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            tracing::info!(url = %response.url(), "session expired, clearing credentials");
            self.session.clear();
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(err) if status.is_success() => return Err(err.into()),
                Err(_) => Value::Null,
            }
        };
        let reply = Reply { status, body };

        if status == StatusCode::FORBIDDEN {
            let message = reply
                .server_message()
                .unwrap_or_else(|| FORBIDDEN_FALLBACK.to_string());
            tracing::warn!(%message, "request forbidden");
            return Err(ApiError::Forbidden(message));
        }

        Ok(Some(reply))
    }

    async fn get_list<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<Vec<T>> {
        match self.send(self.request(Method::GET, endpoint)).await? {
            Some(reply) => Ok(reply.into_data::<Option<Vec<T>>>()?.unwrap_or_default()),
            None => Ok(Vec::new()),
        }
    }

    async fn write(&self, builder: RequestBuilder) -> ApiResult<Outcome> {
        Ok(self
            .send(builder)
            .await?
            .map(Reply::into_outcome)
            .unwrap_or_default())
    }

    // --- Pedidos ---

    pub async fn list_orders(&self) -> ApiResult<Vec<Order>> {
        self.get_list("/pedidos").await
    }

    /// Fetches one order; `None` when it does not exist (or after a 401).
    pub async fn fetch_order(&self, id: &str) -> ApiResult<Option<Order>> {
        let endpoint = format!("/pedidos/{id}");
        match self.send(self.request(Method::GET, &endpoint)).await? {
            Some(reply) if reply.status == StatusCode::NOT_FOUND => Ok(None),
            Some(reply) => reply.into_data(),
            None => Ok(None),
        }
    }

    pub async fn update_order(&self, id: &str, update: &OrderUpdate) -> ApiResult<Outcome> {
        let endpoint = format!("/pedidos/{id}");
        self.write(self.request(Method::PUT, &endpoint).json(update))
            .await
    }

    pub async fn delete_order(&self, id: &str) -> ApiResult<Outcome> {
        let endpoint = format!("/pedidos/{id}");
        self.write(self.request(Method::DELETE, &endpoint)).await
    }

    // --- Comentarios ---

    pub async fn list_comments(&self, order_id: &str) -> ApiResult<Vec<Comment>> {
        self.get_list(&format!("/pedidos/{order_id}/comentarios"))
            .await
    }

    pub async fn add_comment(&self, order_id: &str, texto: &str) -> ApiResult<Outcome> {
        let endpoint = format!("/pedidos/{order_id}/comentarios");
        self.write(
            self.request(Method::POST, &endpoint)
                .json(&json!({ "texto": texto })),
        )
        .await
    }

    pub async fn delete_comment(&self, comment_id: &str) -> ApiResult<Outcome> {
        let endpoint = format!("/comentarios/{comment_id}");
        self.write(self.request(Method::DELETE, &endpoint)).await
    }

    // --- Adjuntos ---

    pub async fn list_attachments(&self, order_id: &str) -> ApiResult<Vec<Attachment>> {
        self.get_list(&format!("/pedidos/{order_id}/adjuntos")).await
    }

    /// Uploads a local file as multipart field `archivo`.
    pub async fn upload_attachment(&self, order_id: &str, path: PathBuf) -> ApiResult<Outcome> {
        let data = tokio::fs::read(&path)
            .await
            .map_err(|err| ApiError::Io(err.to_string()))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "archivo".to_string());
        let part = reqwest::multipart::Part::bytes(data)
            .file_name(file_name)
            .mime_str(crate::domain::format::guess_mime(&path))?;
        let form = reqwest::multipart::Form::new().part("archivo", part);

        let endpoint = format!("/pedidos/{order_id}/adjuntos");
        self.write(self.request(Method::POST, &endpoint).multipart(form))
            .await
    }

    /// Asks for a time-limited download URL.
    pub async fn attachment_link(&self, attachment_id: &str) -> ApiResult<Option<DownloadLink>> {
        let endpoint = format!("/adjuntos/{attachment_id}/download");
        match self.send(self.request(Method::GET, &endpoint)).await? {
            Some(reply) => reply.into_data().map(Some),
            None => Ok(None),
        }
    }

    pub async fn delete_attachment(&self, attachment_id: &str) -> ApiResult<Outcome> {
        let endpoint = format!("/adjuntos/{attachment_id}");
        self.write(self.request(Method::DELETE, &endpoint)).await
    }

    // --- Productos ---

    /// Lists every product, including inactive ones.
    pub async fn list_products(&self) -> ApiResult<Vec<Product>> {
        self.get_list("/productos?all=true").await
    }

    pub async fn toggle_product(&self, id: &str, activo: bool) -> ApiResult<Outcome> {
        let endpoint = format!("/productos/{id}/toggle");
        self.write(
            self.request(Method::PATCH, &endpoint)
                .json(&json!({ "activo": activo })),
        )
        .await
    }

    // --- Estadísticas ---

    async fn get_stat<T: DeserializeOwned + Default>(
        &self,
        endpoint: &str,
        range: &DateRange,
    ) -> ApiResult<T> {
        let builder = self.request(Method::GET, endpoint).query(&range.query());
        match self.send(builder).await? {
            Some(reply) => Ok(reply.into_data::<Option<T>>()?.unwrap_or_default()),
            None => Ok(T::default()),
        }
    }

    /// Fetches the summary and both breakdowns concurrently.
    ///
    /// The per-status breakdown ignores the date range, as the backend does.
    pub async fn statistics(&self, range: &DateRange) -> ApiResult<Statistics> {
        let all_time = DateRange::default();
        let (summary, channels, statuses) = futures_util::future::try_join3(
            self.get_stat::<Summary>("/estadisticas", range),
            self.get_stat::<Vec<ChannelSales>>("/estadisticas/canales", range),
            self.get_stat::<Vec<StatusCount>>("/estadisticas/estados", &all_time),
        )
        .await?;
        Ok(Statistics {
            summary,
            channels,
            statuses,
        })
    }

    // --- Sesión ---

    /// Checks a token with `GET /verify`, independently of the stored session.
    ///
    /// Returns the user on success and `None` when the token is rejected.
    pub async fn verify(&self, token: &str) -> ApiResult<Option<User>> {
        let builder = self
            .http
            .get(format!("{}/verify", self.base_url))
            .bearer_auth(token);
        match self.send(builder).await? {
            Some(reply) if reply.status.is_success() => {
                let verified: VerifyResponse = serde_json::from_value(reply.body)?;
                Ok(verified.user.filter(|_| verified.success))
            }
            Some(reply) => reply.into_data::<Value>().map(|_| None),
            None => Ok(None),
        }
    }

    /// Tells the backend the session ended. Failures are only logged.
    pub async fn logout(&self) {
        if let Err(err) = self.write(self.request(Method::POST, "/logout")).await {
            tracing::warn!(error = %err, "logout request failed");
        }
    }
}
