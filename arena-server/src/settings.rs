//! Layered configuration loading.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `ARENA__`-prefixed environment variables with `__` between
//! sections (`ARENA__SERVER__BIND=127.0.0.1:3000`).

use std::path::Path;

use arena_core::{ArenaConfig, ArenaError};
use config::{Config, Environment, File, FileFormat};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "ARENA";

/// Load configuration from `path` (if any) and the process environment.
///
/// # Errors
/// Returns `ArenaError::Config` if a source cannot be read or parsed, or the
/// merged result fails validation.
pub fn load(path: Option<&Path>) -> Result<ArenaConfig, ArenaError> {
    load_with_env(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn load_with_env(path: Option<&Path>, env: Environment) -> Result<ArenaConfig, ArenaError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }
    let config: ArenaConfig = builder
        .add_source(env)
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| ArenaError::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
