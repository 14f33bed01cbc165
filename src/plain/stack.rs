use std::fmt;

/// LIFO stack. An empty stack allocates nothing; storage materializes on the first push.
pub struct Stack<T>(Vec<T>);

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Adds an element on top of the stack.
    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    /// Pushes all elements in iteration order, so the last one ends up on top.
    /// An empty iterator is a no-op.
    pub fn push_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.0.extend(items);
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    /// Returns the top element without removing it, or `None` if the stack is empty.
    pub fn peek(&self) -> Option<&T> {
        self.0.last()
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

    /// Returns a copy of the stack's content in pop order (top first).
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.0.iter().rev().cloned().collect()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// Yields elements in pop order (top first).
impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stack_operations() {
        let mut s = Stack::<usize>::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.pop(), None);
        assert_eq!(s.peek(), None);
        assert!(!s.contains(&42));
        assert!(s.to_vec().is_empty());
    }

    #[test]
    fn test_default_stack_does_not_allocate() {
        let s = Stack::<usize>::default();
        assert_eq!(s.0.capacity(), 0);
    }

    #[test]
    fn test_peek_returns_top() {
        let mut s = Stack::new();
        s.push_all([1, 2, 3]);
        assert_eq!(s.peek(), Some(&3));
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.peek(), Some(&2));
    }
}
