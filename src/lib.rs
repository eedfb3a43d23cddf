//! Ventanilla: a persistent functional core for a service-counter queue
//!
//! Ventanilla follows the "pure core, imperative shell" philosophy. Every
//! piece of session state is an immutable value: transitions return new
//! states and never touch the old ones, so a snapshot of the past is a
//! reference, not a copy. Undo falls out of that for free, and the shell
//! (a GUI, a CLI, a test) stays a thin layer that calls pure functions
//! and renders what comes back.
//!
//! # Core Concepts
//!
//! - **Persistent containers**: structurally shared list, stack, and queue
//!   whose "mutating" operations return new values
//! - **State**: one immutable value holding the waiting queue, the service
//!   history, and the ticket counter
//! - **Engine**: pure transitions (`enqueue`, `serve_next`, `reset`) from
//!   state to state
//! - **Undo**: a stack of retained past states, one O(1) snapshot per command
//! - **Views**: read-only projections a shell renders without touching the
//!   core types
//!
//! # Example
//!
//! ```rust
//! use ventanilla::ServiceDesk;
//!
//! let mut desk = ServiceDesk::new();
//!
//! desk.add_customer("Ana").unwrap();
//! desk.add_customer("Luis").unwrap();
//!
//! let view = desk.serve_next();
//! assert_eq!(view.served.unwrap().customer().name(), "Ana");
//! assert_eq!(view.waiting.len(), 1);
//!
//! // Undo restores the queue exactly as it was before the serve.
//! let view = desk.undo();
//! assert_eq!(view.waiting.len(), 2);
//! assert_eq!(view.completed_count, 0);
//! ```

pub mod checkpoint;
pub mod domain;
pub mod engine;
pub mod export;
pub mod metrics;
pub mod persistent;
pub mod undo;
pub mod view;

// Re-export commonly used types
pub use checkpoint::{Checkpoint, CheckpointError, CHECKPOINT_VERSION};
pub use domain::{Customer, ServiceLog, ServiceRecord, State};
pub use engine::CommandError;
pub use persistent::{PersistentList, PersistentQueue, PersistentStack, StructureError};
pub use undo::{Applied, Command, UndoController};
pub use view::{ServiceDesk, ViewSnapshot};
