// SPDX-License-Identifier: MPL-2.0
//! Session store: the bearer token and the signed-in user.
//!
//! The session is shared between the UI and the API client (a 401 response
//! clears it from inside a request future), so it lives behind an
//! `Arc<RwLock<_>>`. It is persisted in CBOR next to the other app data, the
//! same way transient state is kept out of the user-editable `settings.toml`.

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

const SESSION_FILE: &str = "session.cbor";

/// Role string the backend uses for administrators.
pub const ADMIN_ROLE: &str = "admin";

/// Signed-in user as returned by `GET /verify`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub rol: String,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.rol == ADMIN_ROLE
    }
}

/// Persisted session contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Shared handle to the current session.
///
/// Cloning is cheap; all clones observe the same session.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// A session that is never written to disk.
    #[must_use]
    pub fn in_memory(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
            path: None,
        }
    }

    /// Loads the persisted session from the default data directory.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the persisted session from `base_dir` (or the default data dir).
    ///
    /// A missing file yields an empty session. An unreadable one yields an
    /// empty session plus a warning for the user.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(SESSION_FILE);
            path
        });

        let Some(file_path) = path.clone() else {
            return (Self::in_memory(Session::default()), None);
        };

        let (session, warning) = if file_path.exists() {
            match read_session(&file_path) {
                Ok(session) => (session, None),
                Err(err) => {
                    tracing::warn!(error = %err, "discarding unreadable session file");
                    (
                        Session::default(),
                        Some("No se pudo leer la sesión guardada".to_string()),
                    )
                }
            }
        } else {
            (Session::default(), None)
        };

        (
            Self {
                inner: Arc::new(RwLock::new(session)),
                path,
            },
            warning,
        )
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Session> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Session> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Whether the current user may use admin-only affordances.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.read().user.as_ref().is_some_and(User::is_admin)
    }

    /// Stores a freshly verified session and persists it.
    pub fn save_session(&self, token: String, user: User) -> Result<()> {
        {
            let mut session = self.write();
            session.token = Some(token);
            session.user = Some(user);
        }
        self.persist()
    }

    /// Drops the token and the user, in memory and on disk.
    pub fn clear(&self) {
        *self.write() = Session::default();
        if let Some(path) = &self.path {
            if path.exists() {
                if let Err(err) = fs::remove_file(path) {
                    tracing::warn!(error = %err, "failed to remove session file");
                }
            }
        }
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        let session = self.read().clone();
        ciborium::into_writer(&session, BufWriter::new(file))
            .map_err(|err| Error::Session(err.to_string()))
    }
}

fn read_session(path: &std::path::Path) -> Result<Session> {
    let file = fs::File::open(path)?;
    ciborium::from_reader(BufReader::new(file)).map_err(|err| Error::Session(err.to_string()))
}
