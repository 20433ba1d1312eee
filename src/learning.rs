// File: src/learning.rs
use crate::core::{corpus::Corpus, index::ValueIndex, types::Word, value};
use log::debug;

/// What a single ingest changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOutcome {
    /// The word was not in the corpus before.
    pub new_word: bool,
    /// The word's score had no bucket before.
    pub new_bucket: bool,
}

/// The only code path that mutates the corpus and the value index.
/// Both stores are updated together so every corpus word sits in exactly
/// one bucket, keyed by its score.
pub struct LearningEngine;

impl LearningEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn learn(&self, index: &mut ValueIndex, corpus: &mut Corpus, word: &Word) -> IngestOutcome {
        if !corpus.insert(word.clone()) {
            return IngestOutcome { new_word: false, new_bucket: false };
        }

        let score = value::score(word);
        let new_bucket = index.bucket(score).is_none();
        index.insert(score, word.clone());

        debug!("ingested '{}' (score {}, new bucket: {})", word, score, new_bucket);
        IngestOutcome { new_word: true, new_bucket }
    }
}

impl Default for LearningEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learning_is_idempotent() {
        let mut index = ValueIndex::new();
        let mut corpus = Corpus::new();
        let learner = LearningEngine::new();
        let cat = Word::parse("cat").unwrap();

        let first = learner.learn(&mut index, &mut corpus, &cat);
        assert_eq!(first, IngestOutcome { new_word: true, new_bucket: true });

        let second = learner.learn(&mut index, &mut corpus, &cat);
        assert_eq!(second, IngestOutcome { new_word: false, new_bucket: false });
        assert_eq!(corpus.len(), 1);
        assert_eq!(index.bucket(24).map(|b| b.len()), Some(1));
    }

    #[test]
    fn same_score_shares_a_bucket() {
        let mut index = ValueIndex::new();
        let mut corpus = Corpus::new();
        let learner = LearningEngine::new();

        learner.learn(&mut index, &mut corpus, &Word::parse("cat").unwrap());
        let outcome = learner.learn(&mut index, &mut corpus, &Word::parse("act").unwrap());

        assert_eq!(outcome, IngestOutcome { new_word: true, new_bucket: false });
        assert_eq!(index.len(), 1);
        assert_eq!(index.bucket(24).map(|b| b.len()), Some(2));
    }
}
