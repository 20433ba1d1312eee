// src/core/types.rs
use crate::error::WordError;
use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Sum of the 1-based alphabet positions of a word's letters.
pub type Score = u32;

/// A validated, non-empty, letters-only token.
///
/// The text is kept as supplied; the buffer is shared, so the same word can
/// sit in the corpus and in its score bucket without a second allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(Arc<str>);

impl Word {
    pub fn parse(raw: &str) -> Result<Self, WordError> {
        if raw.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some((position, ch)) = raw.chars().enumerate().find(|(_, c)| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidChar { ch, position });
        }
        Ok(Self(Arc::from(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// The two related words found for one request. `None` means nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub value: Option<Word>,
    pub lexical: Option<Word>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub words: usize,
    pub buckets: usize,
    pub max_score: Option<Score>,
}
