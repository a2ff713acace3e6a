//! # Configuration
//!
//! Startup settings with a small override hierarchy:
//! config file → `WEBHOOK_URL` env var → CLI flags.
//!
//! The config file lives at `~/.config/tempo/config.json`:
//!
//! ```json
//! { "webhookUrl": "https://example.com/hook", "muted": false }
//! ```
//!
//! A missing or malformed file is a fatal startup condition — the session
//! never starts without a notification endpoint.

use log::{debug, info};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk config shape. Keys are camelCase on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    pub webhook_url: String,
    #[serde(default)]
    pub muted: bool,
}

/// Final settings after collapsing file, env, and CLI.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub webhook_url: String,
    pub muted: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    /// No config file at the expected path (or no home directory at all).
    Missing(PathBuf),
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(path) => {
                write!(f, "no config file found at {}", path.display())
            }
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Returns the path to `~/.config/tempo/config.json`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("tempo").join("config.json"))
}

/// Loads the config file from its default location.
pub fn load_config() -> Result<FileConfig, ConfigError> {
    let path = config_path().ok_or_else(|| ConfigError::Missing(PathBuf::from("~")))?;
    if !path.exists() {
        return Err(ConfigError::Missing(path));
    }
    let config = read_config_file(&path)?;
    info!("loaded config from {}", path.display());
    debug!("config: {:?}", config);
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    serde_json::from_str(&contents).map_err(ConfigError::Parse)
}

/// Collapses file, env, and CLI into concrete settings.
///
/// `WEBHOOK_URL` (also picked up from a `.env` file at startup) overrides the
/// file's endpoint; `--muted` on the CLI forces muting on top of the file.
pub fn resolve(file: &FileConfig, cli_muted: bool) -> ResolvedConfig {
    let webhook_url = std::env::var("WEBHOOK_URL")
        .ok()
        .unwrap_or_else(|| file.webhook_url.clone());

    ResolvedConfig {
        webhook_url,
        muted: cli_muted || file.muted,
    }
}
