use std::borrow::Borrow;
use std::collections::{HashSet, hash_set};
use std::fmt;
use std::hash::Hash;

/// Deduplicated unordered collection. An empty set allocates nothing; storage
/// materializes on the first insert.
pub struct Set<T>(HashSet<T>);

impl<T: Eq + Hash> Set<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashSet::with_capacity(capacity))
    }

    /// Adds a value to the set. Returns false if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.0.insert(value)
    }

    /// Removes a value from the set. Removing an absent value is a no-op
    /// returning false.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.0.remove(value)
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.0.contains(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns a copy of the set's content in unspecified order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.0.iter().cloned().collect()
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<T: Clone> Clone for Set<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Eq + Hash> From<Vec<T>> for Set<T> {
    fn from(items: Vec<T>) -> Self {
        Self(HashSet::from_iter(items))
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(HashSet::from_iter(iter))
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Deduplicates `items` preserving first-seen order: each distinct value appears
/// exactly once, at the position of its first occurrence.
pub fn stable_set<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_operations() {
        let mut s = Set::<usize>::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert!(!s.contains(&42));
        assert!(!s.remove(&42));
        assert!(s.to_vec().is_empty());
    }

    #[test]
    fn test_default_set_does_not_allocate() {
        let s = Set::<usize>::default();
        assert_eq!(s.0.capacity(), 0);
    }

    #[test]
    fn test_stable_set_preserves_first_seen_order() {
        let input = [1, 2, 3, 4, 5, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5];
        assert_eq!(stable_set(input), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_stable_set_of_empty_input() {
        assert_eq!(stable_set(std::iter::empty::<usize>()), Vec::<usize>::new());
    }
}
