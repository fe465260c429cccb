//! `arena-server` — serve the arena over HTTP.

use std::path::PathBuf;

use anyhow::Context;
use arena_core::ArenaConfig;
use arena_server::{AppState, router, settings, telemetry};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// In-memory arena service: players, enemies and die-rolled battles.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, env = "ARENA_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, overriding `server.bind`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Log filter, overriding `logging.level`.
    #[arg(long)]
    log_level: Option<String>,

    /// Emit JSON log lines.
    #[arg(long)]
    json_logs: bool,

    /// Seed the random source for reproducible rolls.
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn resolve(self) -> anyhow::Result<ArenaConfig> {
        let mut config = settings::load(self.config.as_deref()).context("loading configuration")?;
        if let Some(bind) = self.bind {
            config.server.bind = bind;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if self.json_logs {
            config.logging.json = true;
        }
        if self.seed.is_some() {
            config.rules.seed = self.seed;
        }
        config.validate().context("validating configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().resolve()?;
    telemetry::init(&config.logging)?;

    let addr = config.server.socket_addr()?;
    let app = router(AppState::new(&config)?);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(
        %addr,
        max_player_life = config.rules.max_player_life,
        max_player_attack = config.rules.max_player_attack,
        max_enemy_stat = config.rules.max_enemy_stat,
        seeded = config.rules.seed.is_some(),
        "arena server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("arena server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
