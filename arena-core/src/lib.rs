//! # Arena Core Library
//!
//! Rules and state for a small turn-resolution game: rosters of players and
//! enemies, and single-round battles between them decided by a die roll.
//!
//! - **Players** — client-created, life 1–100, attack 1–10
//! - **Enemies** — client-named, life and attack rolled in 1–10
//! - **Battles** — append-only log of resolved exchanges
//!
//! All state lives in an [`ArenaStore`]; every operation validates and mutates
//! under a single lock, so concurrent callers observe sequential behaviour.
//! Randomness is injected through [`RandomSource`] so tests can script rolls.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod battle;
pub mod config;
pub mod dice;
pub mod error;
pub mod store;
pub mod types;
pub mod validation;

pub use config::ArenaConfig;
pub use dice::RandomSource;
pub use error::ArenaError;
pub use store::ArenaStore;
pub use types::*;
