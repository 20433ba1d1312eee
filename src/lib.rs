// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod learning;
pub mod logging;

pub use crate::config::EngineConfig;
pub use crate::core::engine::AffinityEngine;
pub use crate::core::types::{Analysis, CorpusStats, Score, Word};
pub use crate::error::{ConfigError, WordError};
