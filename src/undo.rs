//! Reversible command orchestration over the transition engine.
//!
//! The controller pairs every effective transition with a snapshot of the
//! pre-command state on a persistent stack. Because states are immutable,
//! a snapshot is a retained reference, not a copy, and undoing is simply
//! rebinding the current state to a popped snapshot.

use crate::domain::{ServiceRecord, State};
use crate::engine::{self, CommandError};
use crate::persistent::PersistentStack;
use chrono::{DateTime, Utc};

/// The commands a caller can issue against the service counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a customer with the given name to the queue.
    Enqueue { name: String },
    /// Serve the customer at the front of the queue.
    Serve,
    /// Discard everything and return to the initial state.
    Reset,
}

/// Outcome of an applied command: the resulting state, plus the completed
/// service when the command was a serve that found someone waiting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Applied {
    pub state: State,
    pub served: Option<ServiceRecord>,
}

/// Orchestrates engine transitions with snapshot-stack undo.
///
/// Commands that change nothing leave no undo entry: a serve against an
/// empty queue and an enqueue rejected for a blank name both leave the
/// current state and the undo stack exactly as they were. Undoing with an
/// empty stack is likewise a no-op, reported through the return value.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use ventanilla::{Command, UndoController};
///
/// let now = Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap();
/// let mut controller = UndoController::new();
///
/// controller
///     .apply_at(Command::Enqueue { name: "Ana".into() }, now)
///     .unwrap();
/// assert_eq!(controller.current().queue().len(), 1);
///
/// assert!(controller.undo());
/// assert!(controller.current().queue().is_empty());
/// assert!(!controller.undo()); // nothing left to undo
/// ```
#[derive(Clone, Debug)]
pub struct UndoController {
    current: State,
    undo: PersistentStack<State>,
}

impl UndoController {
    /// Start a controller at the initial state with an empty undo stack.
    pub fn new() -> Self {
        Self {
            current: State::initial(),
            undo: PersistentStack::new(),
        }
    }

    /// Start a controller at a previously captured state, with nothing to
    /// undo yet.
    pub fn resume(state: State) -> Self {
        Self {
            current: state,
            undo: PersistentStack::new(),
        }
    }

    /// Apply a command with an explicit clock reading.
    ///
    /// Dispatches to the matching transition; see [`Self::enqueue_at`],
    /// [`Self::serve_at`] and [`Self::reset`].
    pub fn apply_at(
        &mut self,
        command: Command,
        now: DateTime<Utc>,
    ) -> Result<Applied, CommandError> {
        match command {
            Command::Enqueue { name } => self.enqueue_at(&name, now),
            Command::Serve => Ok(self.serve_at(now)),
            Command::Reset => Ok(self.reset()),
        }
    }

    /// Apply a command against the wall clock.
    pub fn apply(&mut self, command: Command) -> Result<Applied, CommandError> {
        self.apply_at(command, Utc::now())
    }

    /// Enqueue a customer, snapshotting the pre-command state.
    ///
    /// A rejected name leaves no snapshot and no state change.
    pub fn enqueue_at(
        &mut self,
        name: &str,
        now: DateTime<Utc>,
    ) -> Result<Applied, CommandError> {
        let next = engine::enqueue(&self.current, name, now)?;
        self.undo = self.undo.push(self.current.clone());
        self.current = next;
        Ok(Applied {
            state: self.current.clone(),
            served: None,
        })
    }

    /// Serve the front customer, snapshotting the pre-command state.
    ///
    /// Serving an empty queue changes nothing, so no snapshot is taken:
    /// a later undo reverts the last effective command, not this no-op.
    pub fn serve_at(&mut self, now: DateTime<Utc>) -> Applied {
        let (next, served) = engine::serve_next(&self.current, now);
        if served.is_some() {
            self.undo = self.undo.push(self.current.clone());
            self.current = next;
        }
        Applied {
            state: self.current.clone(),
            served,
        }
    }

    /// Return to the initial state, snapshotting the pre-command state so
    /// the reset itself can be undone.
    pub fn reset(&mut self) -> Applied {
        self.undo = self.undo.push(self.current.clone());
        self.current = engine::reset(&self.current);
        Applied {
            state: self.current.clone(),
            served: None,
        }
    }

    /// Revert to the most recent snapshot.
    ///
    /// Returns `false` when there is nothing to undo; the current state is
    /// left untouched in that case.
    pub fn undo(&mut self) -> bool {
        let (rest, popped) = self.undo.pop();
        match popped {
            Some(previous) => {
                self.current = previous;
                self.undo = rest;
                true
            }
            None => false,
        }
    }

    /// The state commands are currently applied against.
    pub fn current(&self) -> &State {
        &self.current
    }

    /// How many commands can currently be undone.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }
}

impl Default for UndoController {
    fn default() -> Self {
        Self::new()
    }
}
