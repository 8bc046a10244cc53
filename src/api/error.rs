// SPDX-License-Identifier: MPL-2.0
//! Errors raised by the REST client.
//!
//! A 401 is deliberately absent: an expired session is resolved by clearing
//! the session store, not by an error value.

use std::fmt;

/// Message shown for a 403 without a server-supplied explanation.
pub const FORBIDDEN_FALLBACK: &str = "Sin permisos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP 403, carrying the server message.
    Forbidden(String),
    /// Any other non-success status on a read endpoint.
    Server { status: u16, message: String },
    /// The request never produced a response.
    Network(String),
    /// The response body was not the expected JSON.
    Decode(String),
    /// A local file could not be read for upload.
    Io(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Forbidden(message) | ApiError::Server { message, .. } => {
                write!(f, "{message}")
            }
            ApiError::Network(msg) => write!(f, "Error de conexión: {msg}"),
            ApiError::Decode(msg) => write!(f, "Respuesta inválida del servidor: {msg}"),
            ApiError::Io(msg) => write!(f, "No se pudo leer el archivo: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
