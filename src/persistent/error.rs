//! Contract errors for the persistent structures.

use thiserror::Error;

/// Precondition violations on the persistent structures.
///
/// `head` and `tail` require a non-empty structure, and callers are expected
/// to check `is_empty()` first; reaching one of these variants is a logic
/// error in the caller, not a recoverable runtime condition. The situations
/// that legitimately occur at runtime (dequeuing or popping an empty
/// structure) are modeled as `Option` no-ops instead and never produce an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("head() called on an empty structure")]
    EmptyHead,

    #[error("tail() called on an empty structure")]
    EmptyTail,
}
