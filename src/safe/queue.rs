use parking_lot::RwLock;
use std::collections::{VecDeque, vec_deque};
use std::fmt;

/// Thread-safe FIFO queue guarded by a reader/writer lock. Readers (`peek`,
/// `len`, `is_empty`, `contains`, `to_vec`) share the lock; every mutation takes
/// it exclusively. An empty queue allocates nothing until the first enqueue.
pub struct SafeQueue<T> {
    inner: RwLock<VecDeque<T>>,
}

impl<T> SafeQueue<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(VecDeque::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Adds an element to the back of the queue.
    pub fn enqueue(&self, item: T) {
        self.inner.write().push_back(item);
    }

    /// Adds all elements to the back of the queue under a single lock
    /// acquisition, so no other writer can interleave within the batch.
    pub fn enqueue_all<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.write().extend(items);
    }

    /// Removes and returns the front element, or `None` if the queue is empty.
    pub fn dequeue(&self) -> Option<T> {
        self.inner.write().pop_front()
    }

    /// Returns a copy of the front element, or `None` if the queue is empty.
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read().front().cloned()
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

    /// Returns a snapshot of the queue in dequeue order. The snapshot is an
    /// independent copy: later mutation of the queue does not affect it, nor
    /// does mutating it affect the queue.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.read().iter().cloned().collect()
    }

    pub fn into_inner(self) -> VecDeque<T> {
        self.inner.into_inner()
    }
}

impl<T> Default for SafeQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SafeQueue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: RwLock::new(self.inner.read().clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SafeQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.read().fmt(f)
    }
}

impl<T> From<Vec<T>> for SafeQueue<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            inner: RwLock::new(VecDeque::from(items)),
        }
    }
}

impl<T> FromIterator<T> for SafeQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: RwLock::new(VecDeque::from_iter(iter)),
        }
    }
}

impl<T> Extend<T> for SafeQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // exclusive access, no lock needed
        self.inner.get_mut().extend(iter);
    }
}

impl<T> IntoIterator for SafeQueue<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_inner().into_iter()
    }
}
