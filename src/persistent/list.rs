//! Immutable singly linked list with structural sharing.
//!
//! The list is the building block for the persistent stack and queue.
//! Every "modifying" operation returns a new list value; the spine behind
//! a shared tail is reference-counted and never copied, so many lists may
//! own overlapping suffixes at the same time.

use super::error::StructureError;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::rc::Rc;

struct Node<T> {
    value: T,
    next: Option<Rc<Node<T>>>,
}

/// Immutable singly linked sequence.
///
/// A list value, once constructed, is never mutated. `prepend` returns a
/// new list whose tail is the original, shared node for node; the original
/// stays valid and unchanged for as long as any holder keeps it.
///
/// Cloning a list is O(1): it bumps one reference count and shares the
/// whole spine.
///
/// # Example
///
/// ```rust
/// use ventanilla::PersistentList;
///
/// let base = PersistentList::new().prepend(2).prepend(1);
/// let longer = base.prepend(0);
///
/// // The original is untouched; the new list shares its spine.
/// assert_eq!(base.to_vec(), vec![1, 2]);
/// assert_eq!(longer.to_vec(), vec![0, 1, 2]);
/// ```
pub struct PersistentList<T> {
    head: Option<Rc<Node<T>>>,
}

impl<T> PersistentList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Check whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// First element of the list.
    ///
    /// Fails with [`StructureError::EmptyHead`] on the empty list. Callers
    /// are expected to check `is_empty()` first; see [`StructureError`] for
    /// why this is a contract error and not a runtime condition.
    pub fn head(&self) -> Result<&T, StructureError> {
        self.head
            .as_deref()
            .map(|node| &node.value)
            .ok_or(StructureError::EmptyHead)
    }

    /// Everything after the first element, sharing the suffix.
    ///
    /// Fails with [`StructureError::EmptyTail`] on the empty list. The
    /// returned list is a new value pointing at the same nodes; nothing
    /// is copied.
    pub fn tail(&self) -> Result<Self, StructureError> {
        self.head
            .as_deref()
            .map(|node| Self {
                head: node.next.clone(),
            })
            .ok_or(StructureError::EmptyTail)
    }

    /// Non-failing decomposition into head and tail.
    ///
    /// Returns `None` on the empty list. This is what the stack and queue
    /// use internally instead of checking `is_empty()` before `head()`.
    pub fn split_first(&self) -> Option<(&T, Self)> {
        self.head.as_deref().map(|node| {
            (
                &node.value,
                Self {
                    head: node.next.clone(),
                },
            )
        })
    }

    /// Return a new list with `value` in front of this one. O(1).
    ///
    /// The new node's tail is this list's spine, shared as-is.
    #[must_use]
    pub fn prepend(&self, value: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                value,
                next: self.head.clone(),
            })),
        }
    }

    /// Number of elements. O(n), walks the spine with a loop so arbitrarily
    /// long chains never grow the call stack.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Return a new list with the elements in opposite order.
    ///
    /// Accumulator loop: each element is prepended onto a fresh list, so
    /// the cost is O(n) with no call-stack growth. The source is untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ventanilla::plist;
    ///
    /// let list = plist![1, 2, 3];
    /// assert_eq!(list.reverse().to_vec(), vec![3, 2, 1]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        let mut reversed = Self::new();
        for value in self {
            reversed = reversed.prepend(value.clone());
        }
        reversed
    }

    /// Borrowing iterator in list order (head first).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.as_deref(),
        }
    }

    /// Copy the elements into a `Vec` in list order, without mutating the
    /// source.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for PersistentList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Rc clone only; deliberately not a derive so `T: Clone` is not required.
impl<T> Clone for PersistentList<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

// Dropping a uniquely owned chain node by node would recurse through the
// spine. Walk it iteratively instead, stopping at the first node some other
// list still holds.
impl<T> Drop for PersistentList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match Rc::try_unwrap(node) {
                Ok(mut owned) => current = owned.next.take(),
                Err(_shared) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    /// Build a list holding the items in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        for value in items.into_iter().rev() {
            list = list.prepend(value);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Borrowing iterator over a [`PersistentList`], head first.
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(&node.value)
    }
}

// Length-prefixed formats (bincode) need the exact element count up front,
// which the spine iterator cannot hint; walk once for the length first.
impl<T: Serialize> Serialize for PersistentList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PersistentList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plist;

    #[test]
    fn new_list_is_empty() {
        let list: PersistentList<i32> = PersistentList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.iter().next().is_none());
    }

    #[test]
    fn head_and_tail_on_empty_are_contract_errors() {
        let list: PersistentList<i32> = PersistentList::new();
        assert_eq!(list.head(), Err(StructureError::EmptyHead));
        assert!(matches!(list.tail(), Err(StructureError::EmptyTail)));
    }

    #[test]
    fn prepend_puts_the_element_in_front() {
        let list = PersistentList::new().prepend(3).prepend(2).prepend(1);
        assert_eq!(list.len(), 3);
        assert_eq!(list.head().unwrap(), &1);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn prepend_leaves_the_original_untouched() {
        let base = plist![2, 3];
        let longer = base.prepend(1);

        assert_eq!(base.to_vec(), vec![2, 3]);
        assert_eq!(longer.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn tails_are_shared_not_copied() {
        let shared = plist![2, 3];
        let a = shared.prepend(1);
        let b = shared.prepend(9);

        // Both new lists point at the same suffix nodes.
        let shared_head = shared.head.as_ref().unwrap();
        assert!(Rc::ptr_eq(
            a.tail().unwrap().head.as_ref().unwrap(),
            shared_head
        ));
        assert!(Rc::ptr_eq(
            b.tail().unwrap().head.as_ref().unwrap(),
            shared_head
        ));
    }

    #[test]
    fn split_first_decomposes_without_failing() {
        let list = plist![1, 2];
        let (value, rest) = list.split_first().unwrap();
        assert_eq!(value, &1);
        assert_eq!(rest.to_vec(), vec![2]);

        let empty: PersistentList<i32> = PersistentList::new();
        assert!(empty.split_first().is_none());
    }

    #[test]
    fn reverse_flips_element_order() {
        let list = plist![1, 2, 3, 4];
        assert_eq!(list.reverse().to_vec(), vec![4, 3, 2, 1]);
        // Source unchanged.
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn reverse_twice_is_identity() {
        let list = plist!["a", "b", "c"];
        assert_eq!(list.reverse().reverse(), list);
    }

    #[test]
    fn reverse_of_empty_is_empty() {
        let list: PersistentList<i32> = PersistentList::new();
        assert!(list.reverse().is_empty());
    }

    #[test]
    fn equality_is_element_wise() {
        let built = PersistentList::new().prepend(2).prepend(1);
        let collected: PersistentList<i32> = [1, 2].into_iter().collect();
        assert_eq!(built, collected);
        assert_ne!(built, plist![1, 2, 3]);
        assert_ne!(built, plist![2, 1]);
    }

    #[test]
    fn from_iterator_preserves_order() {
        let list: PersistentList<i32> = (1..=5).collect();
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn iter_walks_in_list_order() {
        let list = plist![10, 20, 30];
        let seen: Vec<i32> = list.iter().copied().collect();
        assert_eq!(seen, vec![10, 20, 30]);
    }

    #[test]
    fn debug_formats_as_a_sequence() {
        let list = plist![1, 2];
        assert_eq!(format!("{list:?}"), "[1, 2]");
    }

    #[test]
    fn serde_round_trip_preserves_contents() {
        let list = plist![1, 2, 3];
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "[1,2,3]");

        let back: PersistentList<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn long_chains_stay_iterative() {
        // A recursive len, reverse, or drop would overflow the stack here.
        let mut list = PersistentList::new();
        for i in 0..100_000 {
            list = list.prepend(i);
        }
        assert_eq!(list.len(), 100_000);
        assert_eq!(list.reverse().head().unwrap(), &0);
        drop(list);
    }
}
