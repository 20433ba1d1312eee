// File: src/fuzzy/lexical.rs
use crate::core::corpus::Corpus;
use crate::core::types::Word;
use log::trace;

/// Distance at or below which a candidate is taken without scanning further.
pub const DEFAULT_CUTOFF: usize = 1;

/// Linear nearest-neighbour scan over the corpus by Levenshtein distance.
///
/// The corpus is scanned in insertion order, so among equally distant
/// candidates the earliest ingested wins. The scan stops at the first
/// candidate within `cutoff` even if a closer one comes later.
#[derive(Debug, Clone, Copy)]
pub struct LexicalSearch {
    cutoff: usize,
}

impl Default for LexicalSearch {
    fn default() -> Self {
        Self::new(DEFAULT_CUTOFF)
    }
}

impl LexicalSearch {
    pub fn new(cutoff: usize) -> Self {
        Self { cutoff }
    }

    /// O(n * k^2) for n stored words of length ~k.
    pub fn nearest<'c>(&self, word: &Word, corpus: &'c Corpus) -> Option<&'c Word> {
        let mut best: Option<(usize, &Word)> = None;

        for candidate in corpus.iter() {
            let distance = strsim::levenshtein(candidate.as_str(), word.as_str());
            if best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, candidate));
                if distance <= self.cutoff {
                    trace!("lexical scan for '{}' stopped early at '{}' (d={})", word, candidate, distance);
                    break;
                }
            }
        }

        best.map(|(_, w)| w)
    }
}
