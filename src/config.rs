//! Runtime configuration.
//!
//! Layered, later wins: `<config_dir>/menu-board/config.json`, then
//! environment variables, then command-line flags (applied by the caller).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_URL;
use crate::models::Category;

const APP_NAME: &str = "menu-board";
const CONFIG_FILE: &str = "config.json";

/// Where the menu lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// In-process menu written to a local SQLite file.
    Local,
    /// The HTTP menu API.
    Remote,
}

impl std::str::FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            other => anyhow::bail!("unknown backend: {}", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendKind,
    /// Base URL of the menu API
    pub api_url: String,
    pub api_key: Option<String>,
    /// SQLite file for the local backend. `None` uses the platform data dir.
    pub database: Option<PathBuf>,
    /// Category shown on start
    pub category: Category,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::Remote,
            api_url: DEFAULT_URL.to_string(),
            api_key: None,
            database: None,
            category: Category::default(),
        }
    }
}

impl Config {
    /// Load the config file and apply environment overrides.
    pub fn load() -> Self {
        let config = match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    fn try_load() -> Result<Self> {
        let config_path = get_config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse config file")
    }

    /// Apply `MENU_BOARD_*` overrides looked up through `var`.
    pub fn with_env(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(backend) = var("MENU_BOARD_BACKEND") {
            match backend.parse() {
                Ok(kind) => self.backend = kind,
                Err(e) => tracing::warn!("Ignoring MENU_BOARD_BACKEND: {}", e),
            }
        }
        if let Some(url) = var("MENU_BOARD_URL") {
            self.api_url = url;
        }
        if let Some(key) = var("MENU_BOARD_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(path) = var("MENU_BOARD_DB") {
            self.database = Some(PathBuf::from(path));
        }
        self
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
