use dashmap::DashMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// Thread-safe deduplicated collection backed by a sharded concurrent map, so
/// `insert`/`remove`/`contains` from different threads only contend per shard.
/// An empty set holds no elements; there is no separate uninitialized state.
pub struct SafeSet<T>(DashMap<T, ()>);

impl<T: Eq + Hash> SafeSet<T> {
    pub fn new() -> Self {
        Self(DashMap::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(DashMap::with_capacity(capacity))
    }

    /// Adds a value to the set. Returns false if it was already present.
    pub fn insert(&self, value: T) -> bool {
        self.0.insert(value, ()).is_none()
    }

    /// Removes a value from the set. Removing an absent value is a no-op
    /// returning false.
    pub fn remove<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.0.remove(value).is_some()
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.0.contains_key(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&self) {
        self.0.clear();
    }

    /// Visits each element once in unspecified order, stopping early when the
    /// visitor returns false. Elements inserted concurrently from other threads
    /// may or may not be visited; no element is visited twice within one call.
    /// The visitor must not call back into this set, as a shard lock is held
    /// while it runs.
    pub fn range<F>(&self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        for entry in self.0.iter() {
            if !f(entry.key()) {
                break;
            }
        }
    }

    /// Returns a snapshot of the set's content in unspecified order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.0.iter().map(|entry| entry.key().clone()).collect()
    }
}

impl<T: Eq + Hash> Default for SafeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Clone for SafeSet<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Eq + Hash + fmt::Debug> fmt::Debug for SafeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for entry in self.0.iter() {
            set.entry(entry.key());
        }
        set.finish()
    }
}

impl<T: Eq + Hash> From<Vec<T>> for SafeSet<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_iter(items)
    }
}

impl<T: Eq + Hash> FromIterator<T> for SafeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(|value| (value, ())).collect())
    }
}

impl<T: Eq + Hash> Extend<T> for SafeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.0.insert(value, ());
        }
    }
}

impl<T: Eq + Hash> IntoIterator for SafeSet<T> {
    type Item = T;
    type IntoIter = std::iter::Map<dashmap::iter::OwningIter<T, ()>, fn((T, ())) -> T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter().map(|(value, ())| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};
    use std::rc::Rc;

    #[test]
    fn test_safe_set_is_send_and_sync() {
        assert_impl_all!(SafeSet<usize>: Send, Sync);
        assert_not_impl_any!(SafeSet<Rc<usize>>: Send, Sync);
    }

    #[test]
    fn test_empty_set_operations() {
        let s = SafeSet::<usize>::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert!(!s.contains(&42));
        assert!(!s.remove(&42));
        assert!(s.to_vec().is_empty());

        let mut visited = 0;
        s.range(|_| {
            visited += 1;
            true
        });
        assert_eq!(visited, 0);
    }

    #[test]
    fn test_insert_deduplicates() {
        let s = SafeSet::new();
        assert!(s.insert(1));
        assert!(!s.insert(1));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_range_stops_early() {
        let s: SafeSet<_> = (0..100).collect();
        let mut visited = 0;
        s.range(|_| {
            visited += 1;
            visited < 10
        });
        assert_eq!(visited, 10);
    }
}
