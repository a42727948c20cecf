//! Insertion-ordered set with O(1) index lookup
//!
//! Backs attribute deduplication during export: every distinct value gets
//! the 0-based index of its first insertion, and iteration yields values in
//! that same order.

use std::collections::HashMap;
use std::hash::Hash;

/// An ordered set of distinct values
#[derive(Debug, Clone)]
pub struct IndexSet<T> {
    values: Vec<T>,
    indices: HashMap<T, usize>,
}

impl<T> Default for IndexSet<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            indices: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> IndexSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a value, returning its index
    ///
    /// Returns the existing index when an equal value is already present.
    pub fn add(&mut self, value: T) -> usize {
        let next = self.values.len();
        let index = *self.indices.entry(value.clone()).or_insert(next);
        if index == next {
            self.values.push(value);
        }
        index
    }

    /// Index of a value, or `None` if it was never added
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.indices.get(value).copied()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.indices.contains_key(value)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<'a, T> IntoIterator for &'a IndexSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for IndexSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.add(value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelio::{Vector2f, Vector3f};

    #[test]
    fn test_add_returns_first_seen_index() {
        let mut set = IndexSet::new();
        assert_eq!(set.add("b"), 0);
        assert_eq!(set.add("a"), 1);
        assert_eq!(set.add("b"), 0);
        assert_eq!(set.add("c"), 2);
        assert_eq!(set.add("a"), 1);
        assert_eq!(set.len(), 3);
        assert_eq!(set.as_slice(), &["b", "a", "c"]);
    }

    #[test]
    fn test_index_of() {
        let set: IndexSet<_> = [10, 20, 10, 30].into_iter().collect();
        assert_eq!(set.index_of(&10), Some(0));
        assert_eq!(set.index_of(&30), Some(2));
        assert_eq!(set.index_of(&40), None);
        assert!(set.contains(&20));
        assert_eq!(set.get(1), Some(&20));
    }

    #[test]
    fn test_empty() {
        let set: IndexSet<Vector3f> = IndexSet::with_capacity(16);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut set = IndexSet::new();
        let uvs = [
            Vector2f::new(0.5, 0.0),
            Vector2f::new(0.0, 0.0),
            Vector2f::new(0.5, 0.0),
            Vector2f::new(0.0, 0.5),
        ];
        for uv in uvs {
            set.add(uv);
        }
        let ordered: Vec<Vector2f> = (&set).into_iter().copied().collect();
        assert_eq!(ordered, vec![uvs[0], uvs[1], uvs[3]]);
    }

    #[test]
    fn test_vectors_dedup_exactly() {
        let mut set = IndexSet::new();
        set.add(Vector3f::new(0.0, 1.0, 0.0));
        set.add(Vector3f::new(-0.0, 1.0, 0.0));
        set.add(Vector3f::new(0.0, 1.0, 0.0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_many_values() {
        let mut set = IndexSet::new();
        for round in 0..3 {
            for i in 0..10_000u32 {
                assert_eq!(set.add(i % 5_000), (i % 5_000) as usize, "round {}", round);
            }
        }
        assert_eq!(set.len(), 5_000);
    }
}
