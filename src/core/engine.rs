use crate::config::EngineConfig;
use crate::core::{
    corpus::Corpus,
    index::ValueIndex,
    types::{Analysis, CorpusStats, Score, Word},
    value,
};
use crate::fuzzy::lexical::LexicalSearch;
use crate::learning::{IngestOutcome, LearningEngine};
use log::{debug, info};
use parking_lot::{Mutex, RwLock};
use rand::{rngs::StdRng, SeedableRng};

// Everything ingest touches lives behind one lock, so a reader always sees
// the corpus and the index at the same point in time.
#[derive(Default)]
struct Stores {
    index: ValueIndex,
    corpus: Corpus,
}

/// Shared word-affinity engine.
///
/// Created once and handed to request handlers behind an `Arc`. Lookups take
/// the read lock; `ingest` takes the write lock, so ingests are serialized
/// and never tear a lookup in progress.
pub struct AffinityEngine {
    stores: RwLock<Stores>,
    rng: Mutex<StdRng>,
    lexical: LexicalSearch,
    learning_engine: LearningEngine,
}

impl AffinityEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        info!(
            "affinity engine ready (lexical cutoff {}, seeded: {})",
            config.lexical_cutoff,
            config.rng_seed.is_some()
        );
        Self {
            stores: RwLock::new(Stores::default()),
            rng: Mutex::new(rng),
            lexical: LexicalSearch::new(config.lexical_cutoff),
            learning_engine: LearningEngine::new(),
        }
    }

    pub fn score(&self, word: &Word) -> Score {
        value::score(word)
    }

    pub fn nearest_bucket_key(&self, score: Score) -> Option<Score> {
        self.stores.read().index.nearest_key(score)
    }

    pub fn random_word_from_bucket(&self, key: Score) -> Option<Word> {
        let stores = self.stores.read();
        self.pick_from(&stores, key)
    }

    pub fn nearest_lexical_word(&self, word: &Word) -> Option<Word> {
        let stores = self.stores.read();
        self.lexical.nearest(word, &stores.corpus).cloned()
    }

    pub fn ingest(&self, word: &Word) -> IngestOutcome {
        let mut stores = self.stores.write();
        let Stores { index, corpus } = &mut *stores;
        self.learning_engine.learn(index, corpus, word)
    }

    /// Full request flow: both lookups against one snapshot that does not
    /// yet hold `word`, then the ingest.
    pub fn analyze(&self, word: &Word) -> Analysis {
        let score = self.score(word);
        let analysis = {
            let stores = self.stores.read();
            let key = stores.index.nearest_key(score);
            let value = key.and_then(|k| self.pick_from(&stores, k));
            let lexical = self.lexical.nearest(word, &stores.corpus).cloned();
            debug!(
                "analyze '{}': score {} -> bucket {:?}, value {:?}, lexical {:?}",
                word, score, key, value, lexical
            );
            Analysis { value, lexical }
        };
        self.ingest(word);
        analysis
    }

    pub fn stats(&self) -> CorpusStats {
        let stores = self.stores.read();
        CorpusStats {
            words: stores.corpus.len(),
            buckets: stores.index.len(),
            max_score: stores.index.max_key(),
        }
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.stores.read().corpus.contains(word)
    }

    fn pick_from(&self, stores: &Stores, key: Score) -> Option<Word> {
        let bucket = stores.index.bucket(key)?;
        let mut rng = self.rng.lock();
        bucket.pick(&mut *rng).cloned()
    }
}

impl Default for AffinityEngine {
    fn default() -> Self {
        Self::new()
    }
}
