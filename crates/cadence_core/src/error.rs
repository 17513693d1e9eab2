//! Error types for cadence_core.
//!
//! A failed cast is not an error: it is a modeled outcome reported through
//! [`cadence_data::CastOutcome`]. Errors here abort an evaluation or reject
//! input before one starts.

use cadence_data::ActionId;
use std::fmt;
use thiserror::Error;

/// Which stance track an invariant violation was observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Fire,
    Ice,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Track::Fire => f.write_str("fire"),
            Track::Ice => f.write_str("ice"),
        }
    }
}

/// Main error type for cadence_core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A stance level left its configured bounds. Always a simulation bug.
    #[error("invalid stance level: {track} stance at {level}, expected 0..={max}")]
    InvalidStanceLevel { track: Track, level: u8, max: u8 },

    /// Rotation length differs from the configured length.
    #[error("malformed rotation: expected {expected} slots, found {found}")]
    MalformedRotation { expected: usize, found: usize },

    /// A rotation slot references an action outside the catalog.
    #[error("unknown action {id} in slot {slot} (catalog has {catalog_len} actions)")]
    UnknownAction {
        slot: usize,
        id: ActionId,
        catalog_len: usize,
    },

    /// Configuration or catalog construction errors.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for cadence_core operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors that abort an evaluation midway rather than reject input.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvalidStanceLevel { .. })
    }
}
