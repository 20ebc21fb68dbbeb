//! Runtime settings
//!
//! Defaults, then an optional `gomoku.toml` in the working directory, then
//! environment variables.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::agent::SearchConfig;
use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "gomoku.toml";

pub const ENV_AGENT_URL: &str = "GOMOKU_AGENT_URL";
pub const ENV_AGENT_DEPTH: &str = "GOMOKU_AGENT_DEPTH";
pub const ENV_AGENT_TIME_LIMIT_MS: &str = "GOMOKU_AGENT_TIME_LIMIT_MS";
pub const ENV_AGENT_DELAY_MS: &str = "GOMOKU_AGENT_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of a remote agent; `None` selects the local minimax agent
    pub agent_url: Option<String>,
    pub agent_depth: u8,
    pub agent_time_limit_ms: u64,
    /// Pause before an agent move is shown on the board
    pub agent_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            agent_url: None,
            agent_depth: 3,
            agent_time_limit_ms: 5_000,
            agent_delay_ms: 500,
        }
    }
}

impl Settings {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth: self.agent_depth,
            time_limit: Duration::from_millis(self.agent_time_limit_ms),
        }
    }

    pub fn agent_delay(&self) -> Duration {
        Duration::from_millis(self.agent_delay_ms)
    }

    pub fn from_toml_str(raw: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Overlay values from `lookup`, normally the process environment
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(v) = lookup(ENV_AGENT_URL) {
            let v = v.trim();
            self.agent_url = (!v.is_empty()).then(|| v.to_string());
        }
        if let Some(v) = lookup(ENV_AGENT_DEPTH) {
            self.agent_depth = parse_var(ENV_AGENT_DEPTH, &v)?;
        }
        if let Some(v) = lookup(ENV_AGENT_TIME_LIMIT_MS) {
            self.agent_time_limit_ms = parse_var(ENV_AGENT_TIME_LIMIT_MS, &v)?;
        }
        if let Some(v) = lookup(ENV_AGENT_DELAY_MS) {
            self.agent_delay_ms = parse_var(ENV_AGENT_DELAY_MS, &v)?;
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

/// Load settings from `path` (if present) and the environment
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let mut settings = match fs::read_to_string(path) {
        Ok(raw) => Settings::from_toml_str(&raw, &path.display().to_string())?,
        Err(e) if e.kind() == ErrorKind::NotFound => Settings::default(),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            })
        }
    };
    settings.apply_env(|key| std::env::var(key).ok())?;
    Ok(settings)
}

pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(Path::new(CONFIG_FILE))
}
