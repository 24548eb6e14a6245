//! Configuration management for the tudu application.
//!
//! Settings live in a JSON file in the platform data directory and are
//! grouped into optional modules: the remote server connection, the
//! local store identity and the delete-undo grace window. Environment
//! variables override file values so scripted use never needs the
//! interactive wizard.
//!
//! ## Environment Overrides
//!
//! - `TUDU_API_URL` / `TUDU_AUTH_TOKEN` — remote gateway connection
//! - `TUDU_OWNER` — owner name for the local store
//! - `TUDU_UNDO_GRACE` — grace window in seconds
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::libs::config::Config;
//!
//! # fn demo() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! if let Some(server) = &config.server {
//!     println!("gateway: {}", server.api_url);
//! }
//! # Ok(())
//! # }
//! ```

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Grace window applied when no undo configuration exists.
pub const DEFAULT_UNDO_GRACE_SECONDS: u64 = 5;

/// Remote gateway connection parameters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the task backend, e.g. `https://todo.example.com`.
    pub api_url: String,
    /// Bearer credential sent with every gateway request.
    pub auth_token: String,
}

/// Identity used to scope the embedded store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StoreConfig {
    pub owner: String,
}

/// Delete-undo behavior.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UndoConfig {
    /// Seconds a staged deletion stays reversible.
    pub grace_seconds: u64,
}

impl Default for UndoConfig {
    fn default() -> Self {
        UndoConfig {
            grace_seconds: DEFAULT_UNDO_GRACE_SECONDS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub server: Option<ServerConfig>,
    pub store: Option<StoreConfig>,
    pub undo: Option<UndoConfig>,
}

impl Config {
    /// Loads the config file (or defaults) and applies environment
    /// overrides.
    pub fn read() -> Result<Config> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let mut config: Config = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(_) => Config::default(),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Owner name for the local store; falls back to the OS user.
    pub fn owner(&self) -> String {
        self.store
            .as_ref()
            .map(|s| s.owner.clone())
            .or_else(|| env::var("USER").ok())
            .unwrap_or_else(|| "me".to_string())
    }

    pub fn undo_grace_seconds(&self) -> u64 {
        self.undo.as_ref().map(|u| u.grace_seconds).unwrap_or(DEFAULT_UNDO_GRACE_SECONDS)
    }

    fn apply_env(&mut self) {
        if let Ok(api_url) = env::var("TUDU_API_URL") {
            let auth_token = env::var("TUDU_AUTH_TOKEN").unwrap_or_default();
            self.server = Some(ServerConfig { api_url, auth_token });
        }
        if let Ok(owner) = env::var("TUDU_OWNER") {
            self.store = Some(StoreConfig { owner });
        }
        if let Some(grace) = env::var("TUDU_UNDO_GRACE").ok().and_then(|v| v.parse().ok()) {
            self.undo = Some(UndoConfig { grace_seconds: grace });
        }
    }

    /// Interactive setup wizard. Walks through each module and writes
    /// the result back to disk.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        let theme = ColorfulTheme::default();

        let owner: String = Input::with_theme(&theme)
            .with_prompt("Owner name for the local store")
            .default(config.owner())
            .interact_text()?;
        config.store = Some(StoreConfig { owner });

        let use_server = Confirm::with_theme(&theme)
            .with_prompt("Connect to a remote task server?")
            .default(config.server.is_some())
            .interact()?;
        if use_server {
            let current = config.server.clone().unwrap_or(ServerConfig {
                api_url: String::new(),
                auth_token: String::new(),
            });
            let api_url: String = Input::with_theme(&theme)
                .with_prompt("Server API URL")
                .default(current.api_url)
                .interact_text()?;
            let auth_token: String = Input::with_theme(&theme)
                .with_prompt("Auth token")
                .default(current.auth_token)
                .interact_text()?;
            config.server = Some(ServerConfig { api_url, auth_token });
        } else {
            config.server = None;
        }

        let grace_seconds: u64 = Input::with_theme(&theme)
            .with_prompt("Delete undo window (seconds)")
            .default(config.undo_grace_seconds())
            .interact_text()?;
        config.undo = Some(UndoConfig { grace_seconds });

        config.save()?;
        Ok(config)
    }
}
