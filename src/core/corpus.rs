// File: src/core/corpus.rs
use crate::core::set::InsertionSet;
use crate::core::types::Word;

/// Every distinct word ingested so far, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    words: InsertionSet<Word>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
