//! Configuration for the arena service.
//!
//! Maps directly to `arena.toml`. Every field has a default, so an empty
//! document is a valid configuration.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};

/// Top-level arena configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Game rule limits.
    #[serde(default)]
    pub rules: RulesConfig,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ArenaConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `ArenaError::Config` if the TOML is invalid or fails validation.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ArenaError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check limits and addresses for values the service cannot run with.
    ///
    /// # Errors
    /// Returns `ArenaError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        self.server.socket_addr()?;
        self.rules.validate()
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl ServerConfig {
    /// Parse [`ServerConfig::bind`].
    ///
    /// # Errors
    /// Returns `ArenaError::Config` if the address does not parse.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e| ArenaError::Config(format!("invalid server.bind '{}': {e}", self.bind)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// Game rule limits. Lower bounds are fixed at 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Highest starting life a player may request.
    #[serde(default = "default_100")]
    pub max_player_life: i32,
    /// Highest attack a player may request.
    #[serde(default = "default_10")]
    pub max_player_attack: i32,
    /// Upper bound for rolled enemy life and attack.
    #[serde(default = "default_10")]
    pub max_enemy_stat: i32,
    /// Seed for a reproducible random source. Unset means thread-local entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RulesConfig {
    /// Check that every upper bound admits at least one value.
    ///
    /// # Errors
    /// Returns `ArenaError::Config` naming the first limit below 1.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("rules.max_player_life", self.max_player_life),
            ("rules.max_player_attack", self.max_player_attack),
            ("rules.max_enemy_stat", self.max_enemy_stat),
        ];
        for (name, value) in limits {
            if value < 1 {
                return Err(ArenaError::Config(format!("{name} must be at least 1, got {value}")));
            }
        }
        Ok(())
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_player_life: 100,
            max_player_attack: 10,
            max_enemy_stat: 10,
            seed: None,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value helpers (for serde)
// ---------------------------------------------------------------------------

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_100() -> i32 {
    100
}
fn default_10() -> i32 {
    10
}
