// --- File: src/core/index.rs
use crate::core::set::InsertionSet;
use crate::core::types::{Score, Word};
use rand::Rng;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// All ingested words sharing one score.
pub type Bucket = InsertionSet<Word>;

impl Bucket {
    /// Uniform pick: every member has probability `1 / len`.
    /// O(1), since members are held in an indexable sequence.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        if self.is_empty() {
            return None;
        }
        self.get(rng.gen_range(0..self.len()))
    }
}

/// Score -> bucket. A key exists only once its bucket has a word; nothing is
/// ever removed.
#[derive(Debug, Clone, Default)]
pub struct ValueIndex {
    buckets: BTreeMap<Score, Bucket>,
}

impl ValueIndex {
    pub fn new() -> Self {
        Self { buckets: BTreeMap::new() }
    }

    /// Adds `word` under `score`. Returns `false` if it was already there.
    pub fn insert(&mut self, score: Score, word: Word) -> bool {
        self.buckets.entry(score).or_default().insert(word)
    }

    pub fn bucket(&self, score: Score) -> Option<&Bucket> {
        self.buckets.get(&score)
    }

    pub fn max_key(&self) -> Option<Score> {
        self.buckets.keys().next_back().copied()
    }

    /// Number of populated scores.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Closest populated score to `target`, never `target` itself.
    ///
    /// Equivalent to probing `target - m` then `target + m` for m = 1, 2, ..
    /// and stopping at the first hit: the lower side wins a tie, keys must be
    /// positive, and an exact-score bucket is skipped. The ordered map lets
    /// us look up both neighbours directly instead of walking the margins.
    pub fn nearest_key(&self, target: Score) -> Option<Score> {
        let lower = self
            .buckets
            .range(..target)
            .next_back()
            .map(|(&k, _)| k)
            .filter(|&k| k > 0);
        let upper = self
            .buckets
            .range((Excluded(target), Unbounded))
            .next()
            .map(|(&k, _)| k);

        match (lower, upper) {
            (Some(lo), Some(hi)) => {
                if target - lo <= hi - target {
                    Some(lo)
                } else {
                    Some(hi)
                }
            }
            (lo, hi) => lo.or(hi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::BTreeSet;

    fn index_with(keys: &[Score]) -> ValueIndex {
        let mut index = ValueIndex::new();
        for (i, &k) in keys.iter().enumerate() {
            // Placeholder words; only the keys matter here.
            let word = Word::parse(&"a".repeat(i + 1)).unwrap();
            index.insert(k, word);
        }
        index
    }

    #[test]
    fn empty_index_finds_nothing() {
        let index = ValueIndex::new();
        for target in [0, 1, 24, 500] {
            assert_eq!(index.nearest_key(target), None);
        }
    }

    #[test]
    fn lower_side_reached_first() {
        let index = index_with(&[5, 10]);
        assert_eq!(index.nearest_key(7), Some(5));
        assert_eq!(index.nearest_key(8), Some(10));
    }

    #[test]
    fn tie_prefers_lower() {
        let index = index_with(&[4, 8]);
        assert_eq!(index.nearest_key(6), Some(4));
    }

    #[test]
    fn exact_key_is_skipped() {
        let index = index_with(&[24]);
        assert_eq!(index.nearest_key(24), None);

        let index = index_with(&[20, 24, 30]);
        assert_eq!(index.nearest_key(24), Some(20));
    }

    #[test]
    fn one_sided_indexes() {
        let index = index_with(&[3]);
        assert_eq!(index.nearest_key(100), Some(3));
        assert_eq!(index.nearest_key(1), Some(3));
        assert_eq!(index.nearest_key(0), Some(3));
    }

    // Outward walk: target - m, then target + m, for growing m.
    fn margin_walk(keys: &BTreeSet<Score>, target: Score) -> Option<Score> {
        let max_key = i64::from(*keys.iter().next_back()?);
        let target = i64::from(target);
        let mut margin = 1;
        while target - margin > 0 || target + margin <= max_key {
            let lower = target - margin;
            let upper = target + margin;
            if lower > 0 && keys.contains(&(lower as Score)) {
                return Some(lower as Score);
            }
            if upper <= max_key && keys.contains(&(upper as Score)) {
                return Some(upper as Score);
            }
            margin += 1;
        }
        None
    }

    #[test]
    fn matches_margin_walk_on_random_indexes() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..3000 {
            let keys: BTreeSet<Score> =
                (1..=60).filter(|_| rng.gen_bool(0.15)).collect();
            let index = index_with(&keys.iter().copied().collect::<Vec<_>>());
            for target in 0..70 {
                assert_eq!(
                    index.nearest_key(target),
                    margin_walk(&keys, target),
                    "keys {:?}, target {}",
                    keys,
                    target
                );
            }
        }
    }

    #[test]
    fn duplicate_insert_is_noop() {
        let mut index = ValueIndex::new();
        let word = Word::parse("cat").unwrap();
        assert!(index.insert(24, word.clone()));
        assert!(!index.insert(24, word));
        assert_eq!(index.bucket(24).map(Bucket::len), Some(1));
        assert_eq!(index.max_key(), Some(24));
    }

    #[test]
    fn pick_from_empty_bucket() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Bucket::new().pick(&mut rng), None);
    }

    #[test]
    fn pick_covers_every_member() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut bucket = Bucket::new();
        for s in ["abc", "cab", "bca"] {
            bucket.insert(Word::parse(s).unwrap());
        }
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(bucket.pick(&mut rng).unwrap().clone());
        }
        assert_eq!(seen.len(), 3);
    }
}
