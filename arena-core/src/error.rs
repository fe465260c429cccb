//! Error types for the arena core library.

use thiserror::Error;

use crate::types::EntityKind;

/// Top-level error type for all arena operations.
#[derive(Error, Debug)]
pub enum ArenaError {
    /// The request payload could not be decoded.
    #[error("Malformed request body: {0}")]
    Decode(String),

    /// A required field is missing (empty string or zero).
    #[error("{kind} {fields} is required")]
    Validation {
        /// Which collection the request targeted.
        kind: EntityKind,
        /// Human-readable list of the required fields.
        fields: &'static str,
    },

    /// A numeric field is outside its allowed bounds.
    #[error("{kind} {field} must be between {min} and {max}")]
    Range {
        /// Which collection the request targeted.
        kind: EntityKind,
        /// Offending field name.
        field: &'static str,
        /// Inclusive lower bound.
        min: i32,
        /// Inclusive upper bound.
        max: i32,
    },

    /// The nickname is already taken within its collection.
    #[error("{kind} nickname already exists: {nickname}")]
    Conflict {
        /// Which collection holds the duplicate.
        kind: EntityKind,
        /// The duplicate nickname.
        nickname: String,
    },

    /// No entity with the given nickname exists.
    #[error("{kind} nickname not found: {nickname}")]
    NotFound {
        /// Which collection was searched.
        kind: EntityKind,
        /// The nickname that was looked up.
        nickname: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArenaError {
    /// Build a [`ArenaError::NotFound`] for `nickname` in `kind`.
    #[must_use]
    pub fn not_found(kind: EntityKind, nickname: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            nickname: nickname.into(),
        }
    }

    /// Build a [`ArenaError::Conflict`] for `nickname` in `kind`.
    #[must_use]
    pub fn conflict(kind: EntityKind, nickname: impl Into<String>) -> Self {
        Self::Conflict {
            kind,
            nickname: nickname.into(),
        }
    }
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, ArenaError>;
