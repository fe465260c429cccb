//! # arena-server — HTTP front end for the arena
//!
//! Thin axum layer over [`arena_core::ArenaStore`]: every handler decodes its
//! payload, calls one store operation and encodes the result as JSON.
//!
//! ## Modules
//!
//! - `handlers` — request handlers for players, enemies and battles
//! - `routes` — the axum [`Router`](axum::Router)
//! - `error` — mapping from [`arena_core::ArenaError`] to HTTP responses
//! - `settings` — layered configuration (defaults, TOML file, environment)
//! - `telemetry` — `tracing` subscriber setup

pub mod error;
pub mod handlers;
pub mod routes;
pub mod settings;
pub mod state;
pub mod telemetry;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
