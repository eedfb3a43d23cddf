//! Immutable FIFO queue built from two persistent lists.

use super::list::{self, PersistentList};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

/// Immutable FIFO queue.
///
/// Two lanes back the queue: `front` holds elements ready to leave (oldest
/// first) and `back` accumulates arrivals (newest first). Logical order is
/// `front ++ reverse(back)`. Enqueuing prepends onto `back` in O(1);
/// dequeuing pops `front` in O(1), and only when `front` runs dry does it
/// reverse `back` into a fresh front lane. That single O(n) reversal is
/// paid for by the n enqueues that preceded it, so a long sequence of
/// operations costs amortized O(1) each.
///
/// The front lane is allowed to sit empty while `back` holds elements; the
/// next dequeue performs the reversal. Nothing is ever mutated in place,
/// so older queue values keep seeing their own contents.
///
/// # Example
///
/// ```rust
/// use ventanilla::PersistentQueue;
///
/// let queue = PersistentQueue::new().enqueue(1).enqueue(2).enqueue(3);
///
/// let (rest, first) = queue.dequeue();
/// assert_eq!(first, Some(1));
/// assert_eq!(rest.to_vec(), vec![2, 3]);
/// // The original queue is unchanged.
/// assert_eq!(queue.to_vec(), vec![1, 2, 3]);
/// ```
pub struct PersistentQueue<T> {
    front: PersistentList<T>,
    back: PersistentList<T>,
}

impl<T> PersistentQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            front: PersistentList::new(),
            back: PersistentList::new(),
        }
    }

    /// Check whether both lanes are empty.
    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    /// Number of queued elements: `front.len() + back.len()`. O(n); correct
    /// for queues built purely from the back lane.
    pub fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    /// Return a new queue with `value` at the rear. O(1).
    #[must_use]
    pub fn enqueue(&self, value: T) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.prepend(value),
        }
    }

    /// Split off the element at the head of the queue.
    ///
    /// Returns the remaining queue and the dequeued value. On the empty
    /// queue the returned queue equals the input and the value is `None`.
    /// When the front lane is empty, the back lane is reversed into the
    /// new front before taking its head: worst case O(n) for this call,
    /// amortized O(1) across the operations that filled the lane.
    #[must_use]
    pub fn dequeue(&self) -> (Self, Option<T>)
    where
        T: Clone,
    {
        if let Some((value, rest)) = self.front.split_first() {
            return (
                Self {
                    front: rest,
                    back: self.back.clone(),
                },
                Some(value.clone()),
            );
        }
        // Front lane dry: the reversed back lane becomes the new front.
        match self.back.reverse().split_first() {
            Some((value, rest)) => (
                Self {
                    front: rest,
                    back: PersistentList::new(),
                },
                Some(value.clone()),
            ),
            None => (self.clone(), None),
        }
    }

    /// Element at the head of the queue without consuming it.
    ///
    /// Applies the same lane fallback as `dequeue`: the front lane's head,
    /// or else the element the back-lane reversal would surface, which is
    /// its last node. The structure is immutable, so peeking can never
    /// change which queue value the caller holds.
    pub fn peek_front(&self) -> Option<&T> {
        self.front.iter().next().or_else(|| self.back.iter().last())
    }

    /// Borrowing iterator in logical order: front lane, then the back lane
    /// reversed.
    pub fn iter(&self) -> Iter<'_, T> {
        let back: Vec<&T> = self.back.iter().collect();
        Iter {
            front: self.front.iter(),
            back: back.into_iter().rev(),
        }
    }

    /// Copy the elements into a `Vec` in logical order, without mutating
    /// either lane.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for PersistentQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PersistentQueue<T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

// Two queues are equal when their logical contents match, regardless of
// how those contents are split across the lanes.
impl<T: PartialEq> PartialEq for PersistentQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentQueue<T> {}

impl<T: fmt::Debug> fmt::Debug for PersistentQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for PersistentQueue<T> {
    /// Build a queue whose dequeue order is the iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            front: iter.into_iter().collect(),
            back: PersistentList::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a PersistentQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Borrowing iterator over a [`PersistentQueue`] in logical order.
pub struct Iter<'a, T> {
    front: list::Iter<'a, T>,
    back: std::iter::Rev<std::vec::IntoIter<&'a T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.front.next().or_else(|| self.back.next())
    }
}

// Serialized in logical order with an exact length prefix; reading back
// fills the front lane, which yields an equal queue.
impl<T: Serialize> Serialize for PersistentQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PersistentQueue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
