// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application configuration
//!
//! Optional JSON file named by `BOARDGAMES_CONFIG`. Every field has a default,
//! so an empty object is a valid file.

use std::path::Path;

use anyhow::{Context, Result};
use boardgames_core::BoardKind;
use serde::{Deserialize, Serialize};

/// Environment variable holding the config file path
pub const CONFIG_ENV: &str = "BOARDGAMES_CONFIG";

/// Screen shown when the window first opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartScreen {
    #[default]
    Menu,
    Board(BoardKind),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
    pub start: StartScreen,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            start: StartScreen::Menu,
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("writing config file {}", path.display()))
    }

    /// Load from `BOARDGAMES_CONFIG` if set, defaults otherwise
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}
