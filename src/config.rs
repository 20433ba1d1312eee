// File: src/config.rs
use crate::error::ConfigError;
use crate::fuzzy::lexical::DEFAULT_CUTOFF;
use std::env;
use std::str::FromStr;

pub const LEXICAL_CUTOFF_VAR: &str = "AFFINITY_LEXICAL_CUTOFF";
pub const RNG_SEED_VAR: &str = "AFFINITY_RNG_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Lexical scan stops at the first word this close.
    pub lexical_cutoff: usize,
    /// Fixed seed for bucket picks; `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { lexical_cutoff: DEFAULT_CUTOFF, rng_seed: None }
    }
}

impl EngineConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { rng_seed: Some(seed), ..Self::default() }
    }

    /// Reads overrides from the process environment. Unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(cutoff) = parse_var(&lookup, LEXICAL_CUTOFF_VAR)? {
            config.lexical_cutoff = cutoff;
        }
        config.rng_seed = parse_var(&lookup, RNG_SEED_VAR)?;
        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
