// File: src/core/set.rs
use std::collections::HashSet;
use std::hash::Hash;

/// A set that remembers insertion order.
///
/// The `Vec` gives O(1) access by position (uniform random picks) and a
/// deterministic scan order; the `HashSet` keeps duplicate checks O(1).
#[derive(Debug, Clone)]
pub struct InsertionSet<T> {
    items: Vec<T>,
    members: HashSet<T>,
}

impl<T: Eq + Hash + Clone> InsertionSet<T> {
    pub fn new() -> Self {
        Self { items: Vec::new(), members: HashSet::new() }
    }

    /// Returns `false` (and changes nothing) if the value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        if self.members.contains(&value) {
            return false;
        }
        self.members.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.members.contains(value)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Eq + Hash + Clone> Default for InsertionSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_ignored_and_order_is_kept() {
        let mut set = InsertionSet::new();
        assert!(set.insert("b"));
        assert!(set.insert("a"));
        assert!(!set.insert("b"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(set.get(1), Some(&"a"));
        assert!(set.contains(&"a"));
    }
}
