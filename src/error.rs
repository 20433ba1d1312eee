// File: src/error.rs
use thiserror::Error;

/// Reasons a raw token is refused before it reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    /// Anything outside `a-z` / `A-Z`: digits, spaces, punctuation, non-ASCII.
    #[error("invalid character {ch:?} at position {position}; only letters a-z are allowed")]
    InvalidChar { ch: char, position: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {name} has invalid value {value:?}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}
