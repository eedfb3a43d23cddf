//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while capturing or restoring a session checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Writing the snapshot to JSON or binary form failed
    #[error("Checkpoint serialization failed: {0}")]
    SerializationFailed(String),

    /// Reading a snapshot back from JSON or binary form failed
    #[error("Checkpoint deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The snapshot was written by an incompatible format version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The restored state violates a counter invariant
    #[error("Checkpoint state is corrupt: {0}")]
    CorruptState(String),
}
