// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the backoffice directories.
//!
//! Two directories matter:
//! - the **config** directory, holding `settings.toml`;
//! - the **data** directory, holding the persisted session and the log files.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** passed to a `_with_override()` function (tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`), see [`init_cli_overrides`]
//! 3. **Environment variables** ([`ENV_DATA_DIR`], [`ENV_CONFIG_DIR`])
//! 4. **Platform default** via the `dirs` crate, with [`APP_NAME`] appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name used under the platform config/data roots.
pub const APP_NAME: &str = "PedidosBackoffice";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "PEDIDOS_BACKOFFICE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PEDIDOS_BACKOFFICE_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` CLI values.
///
/// Only the first call has an effect; later calls are ignored so that tests
/// constructing several apps in one process do not panic.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let _ = CLI_DATA_DIR.set(data_dir.map(PathBuf::from));
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_key: &str,
    platform_root: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_key) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_root.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the data directory (session file, logs).
///
/// Returns `None` only when the platform has no data directory at all.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Same as [`get_app_data_dir`] but an explicit path wins over everything.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir())
}

/// Returns the config directory (`settings.toml`).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Same as [`get_app_config_dir`] but an explicit path wins over everything.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        &CLI_CONFIG_DIR,
        ENV_CONFIG_DIR,
        dirs::config_dir(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn default_data_dir_ends_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_app_data_dir() {
            assert!(path.ends_with(APP_NAME) || CLI_DATA_DIR.get().is_some());
        }
    }

    #[test]
    fn override_path_takes_precedence_for_both_dirs() {
        let data = PathBuf::from("/custom/data/path");
        let config = PathBuf::from("/custom/config/path");
        assert_eq!(
            get_app_data_dir_with_override(Some(data.clone())),
            Some(data)
        );
        assert_eq!(
            get_app_config_dir_with_override(Some(config.clone())),
            Some(config)
        );
    }

    #[test]
    fn env_var_overrides_platform_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        let result = get_app_config_dir();
        if CLI_CONFIG_DIR.get().and_then(Clone::clone).is_none() {
            assert_eq!(result, Some(PathBuf::from("/test/config/dir")));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(path) = get_app_data_dir() {
            assert_ne!(path, PathBuf::from(""));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }
}
