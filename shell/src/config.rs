use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming an optional JSON config file.
pub(crate) const CONFIG_PATH_ENV: &str = "ADMIN_SHELL_CONFIG";

/// Errors emitted while reading the shell configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
    #[error("config JSON failed")]
    Json(#[from] serde_json::Error),
}

/// Startup configuration of the shell. Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct ShellConfig {
    /// Brand text shown in the expanded menu header.
    pub(crate) brand_title: String,
    /// Brand text shown on the collapsed rail.
    pub(crate) brand_short: String,
    /// Route shown on startup.
    pub(crate) initial_path: String,
    pub(crate) toast_timeout_ms: u64,
    pub(crate) max_visible_toasts: usize,
    pub(crate) window_width: f32,
    pub(crate) window_height: f32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand_title: String::from("ERP System"),
            brand_short: String::from("ERP"),
            initial_path: String::from("/"),
            toast_timeout_ms: 4000,
            max_visible_toasts: 3,
            window_width: 1024.0,
            window_height: 720.0,
        }
    }
}

impl ShellConfig {
    /// Load the config named by [`CONFIG_PATH_ENV`], falling back to
    /// defaults when it is unset or unreadable.
    pub(crate) fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_PATH_ENV) else {
            return Self::default();
        };

        match Self::from_file(Path::new(&path)) {
            Ok(config) => {
                log::info!("config loaded from {}", Path::new(&path).display());
                config
            },
            Err(err) => {
                log::warn!(
                    "config read from {} failed, using defaults: {err}",
                    Path::new(&path).display()
                );
                Self::default()
            },
        }
    }

    pub(crate) fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub(crate) fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub(crate) fn toast_timeout(&self) -> Duration {
        Duration::from_millis(self.toast_timeout_ms)
    }
}
