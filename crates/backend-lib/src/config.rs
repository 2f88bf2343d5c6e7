// ============================
// games-backend-lib/src/config.rs
// ============================
//! Configuration management.
use std::net::SocketAddr;
use std::path::Path;

use anyhow::{bail, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `GAMES_BIND_ADDR`
pub const ENV_PREFIX: &str = "GAMES_";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Log level
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
}

/// How log lines are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Settings {
    /// Load from `config.toml` in the working directory, then the environment.
    ///
    /// The file is optional; defaults fill whatever the file and
    /// environment leave unset.
    pub fn load() -> Result<Self> {
        Self::extract(Path::new("config.toml"))
    }

    /// Load from an explicit TOML file, then the environment.
    ///
    /// Unlike [`Settings::load`], the file must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            bail!("config file {} not found", path.display());
        }
        Self::extract(path)
    }

    fn extract(path: &Path) -> Result<Self> {
        let settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            bail!(
                "invalid log level {:?}, expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            );
        }
        Ok(())
    }
}
