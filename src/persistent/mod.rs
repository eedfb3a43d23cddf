//! Immutable, structurally shared containers.
//!
//! This module contains the persistent structures the rest of the crate is
//! built on:
//! - A singly linked list whose tails are shared, never copied
//! - A LIFO stack over that list (also the undo history container)
//! - A two-lane FIFO queue with amortized O(1) enqueue/dequeue
//!
//! Every operation returns a new value; old values stay valid and keep
//! seeing their own contents. No holder ever mutates a shared node, which
//! is what makes the sharing safe.

mod error;
mod list;
mod macros;
mod queue;
mod stack;

pub use error::StructureError;
pub use list::{Iter as ListIter, PersistentList};
pub use queue::{Iter as QueueIter, PersistentQueue};
pub use stack::PersistentStack;
