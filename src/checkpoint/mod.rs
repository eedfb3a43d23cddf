//! Checkpoint and resume functionality for service-counter sessions.
//!
//! A checkpoint is a self-describing serialized snapshot of a [`State`],
//! letting a session survive process restarts: capture before shutdown,
//! persist the rendered text or bytes wherever convenient, and restore on
//! the next start. Restoring validates the format version and the state's
//! own invariants before handing the state back.
//!
//! The undo stack is deliberately not part of a checkpoint: a restored
//! session starts with an empty undo history, the same way a fresh one does.

use crate::domain::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for the checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a session's core state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When the checkpoint was created
    pub created_at: DateTime<Utc>,

    /// The captured counter state
    pub state: State,
}

impl Checkpoint {
    /// Capture the given state into a new checkpoint.
    ///
    /// Capturing is cheap: the state is persistent, so the clone taken here
    /// shares its structure with the live value.
    pub fn capture(state: &State) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            state: state.clone(),
        }
    }

    /// Render the checkpoint as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Restore a checkpoint from its JSON rendering.
    ///
    /// Validates the format version and the captured state before returning.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Render the checkpoint in the compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Restore a checkpoint from its binary rendering.
    ///
    /// Validates the format version and the captured state before returning.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check the format version and the captured state's invariants.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        // The ticket counter starts at 1 and never returns to 0.
        if self.state.next_ticket() == 0 {
            return Err(CheckpointError::CorruptState(
                "ticket counter must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Consume the checkpoint, yielding the captured state.
    pub fn into_state(self) -> State {
        self.state
    }
}
