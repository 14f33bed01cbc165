use parking_lot::RwLock;
use std::fmt;

/// Thread-safe LIFO stack guarded by a reader/writer lock. Readers (`peek`,
/// `len`, `is_empty`, `contains`, `to_vec`) share the lock; every mutation takes
/// it exclusively. An empty stack allocates nothing until the first push.
pub struct SafeStack<T> {
    inner: RwLock<Vec<T>>,
}

impl<T> SafeStack<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Vec::with_capacity(capacity)),
        }
    }

    /// Adds an element on top of the stack.
    pub fn push(&self, item: T) {
        self.inner.write().push(item);
    }

    /// Pushes all elements in iteration order under a single lock acquisition,
    /// so the batch stays contiguous and its last element ends up on top.
    pub fn push_all<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.write().extend(items);
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    pub fn pop(&self) -> Option<T> {
        self.inner.write().pop()
    }

    /// Returns a copy of the top element, or `None` if the stack is empty.
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read().last().cloned()
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.inner.read().contains(item)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Returns a snapshot of the stack in pop order (top first). The snapshot
    /// is an independent copy, unaffected by later mutation of the stack.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.read().iter().rev().cloned().collect()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.inner.into_inner()
    }
}

impl<T> Default for SafeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SafeStack<T> {
    fn clone(&self) -> Self {
        Self {
            inner: RwLock::new(self.inner.read().clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SafeStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.read().fmt(f)
    }
}

impl<T> From<Vec<T>> for SafeStack<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            inner: RwLock::new(items),
        }
    }
}

impl<T> FromIterator<T> for SafeStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: RwLock::new(Vec::from_iter(iter)),
        }
    }
}

impl<T> Extend<T> for SafeStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // exclusive access, no lock needed
        self.inner.get_mut().extend(iter);
    }
}

/// Yields elements in pop order (top first).
impl<T> IntoIterator for SafeStack<T> {
    type Item = T;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_inner().into_iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};
    use std::rc::Rc;

    #[test]
    fn test_safe_stack_is_send_and_sync() {
        assert_impl_all!(SafeStack<usize>: Send, Sync);
        assert_not_impl_any!(SafeStack<Rc<usize>>: Send, Sync);
    }

    #[test]
    fn test_empty_stack_operations() {
        let s = SafeStack::<usize>::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.pop(), None);
        assert_eq!(s.peek(), None);
        assert!(!s.contains(&42));
        assert!(s.to_vec().is_empty());
    }

    #[test]
    fn test_peek_returns_top() {
        let s = SafeStack::from(vec![1, 2, 3]);
        assert_eq!(s.peek(), Some(3));
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.peek(), Some(2));
    }
}
