use std::collections::{VecDeque, vec_deque};
use std::fmt;

/// FIFO queue. An empty queue allocates nothing; storage materializes on the first enqueue.
pub struct Queue<T>(VecDeque<T>);

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self(VecDeque::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(VecDeque::with_capacity(capacity))
    }

    /// Adds an element to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.0.push_back(item);
    }

    /// Adds all elements to the back of the queue, preserving their order.
    /// An empty iterator is a no-op.
    pub fn enqueue_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.0.extend(items);
    }

    /// Removes and returns the front element, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    /// Returns the front element without removing it, or `None` if the queue is empty.
    pub fn peek(&self) -> Option<&T> {
        self.0.front()
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.0.contains(item)
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

    /// Returns a copy of the queue's content in dequeue order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.0.iter().cloned().collect()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(items: Vec<T>) -> Self {
        Self(VecDeque::from(items))
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(VecDeque::from_iter(iter))
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_queue_operations() {
        let mut q = Queue::<usize>::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.peek(), None);
        assert!(!q.contains(&42));
        assert!(q.to_vec().is_empty());
    }

    #[test]
    fn test_default_queue_does_not_allocate() {
        let q = Queue::<usize>::default();
        assert_eq!(q.0.capacity(), 0);
    }

    #[test]
    fn test_enqueue_all_with_empty_iterator_is_noop() {
        let mut q = Queue::from(vec![1, 2]);
        q.enqueue_all(std::iter::empty());
        assert_eq!(q.to_vec(), vec![1, 2]);
    }
}
