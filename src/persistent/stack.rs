//! Immutable LIFO stack over a persistent list.

use super::list::{Iter, PersistentList};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Immutable LIFO stack.
///
/// Thin wrapper over [`PersistentList`]: the list head is the stack top.
/// `push` and `pop` are O(1) and return new stacks; popping the empty
/// stack is a no-op that hands back an equal stack and `None`, never a
/// failure.
///
/// # Example
///
/// ```rust
/// use ventanilla::PersistentStack;
///
/// let stack = PersistentStack::new().push(1).push(2);
/// assert_eq!(stack.peek(), Some(&2));
///
/// let (rest, top) = stack.pop();
/// assert_eq!(top, Some(2));
/// assert_eq!(rest.peek(), Some(&1));
/// // The original still sees both elements.
/// assert_eq!(stack.len(), 2);
/// ```
pub struct PersistentStack<T> {
    items: PersistentList<T>,
}

impl<T> PersistentStack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            items: PersistentList::new(),
        }
    }

    /// Check whether the stack has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements. O(n).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Return a new stack with `value` on top. O(1).
    #[must_use]
    pub fn push(&self, value: T) -> Self {
        Self {
            items: self.items.prepend(value),
        }
    }

    /// Split off the top element.
    ///
    /// Returns the remaining stack and the popped value. On the empty
    /// stack the returned stack equals the input and the value is `None`.
    #[must_use]
    pub fn pop(&self) -> (Self, Option<T>)
    where
        T: Clone,
    {
        match self.items.split_first() {
            Some((top, rest)) => (Self { items: rest }, Some(top.clone())),
            None => (self.clone(), None),
        }
    }

    /// Top element without consuming it; `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.head().ok()
    }

    /// Borrowing iterator from the top down.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for PersistentStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PersistentStack<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for PersistentStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for PersistentStack<T> {}

impl<T: fmt::Debug> fmt::Debug for PersistentStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a PersistentStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// Serialized top first, so the first element read back becomes the top.
impl<T: Serialize> Serialize for PersistentStack<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PersistentStack<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = PersistentList::<T>::deserialize(deserializer)?;
        Ok(Self { items })
    }
}
