//! The interface the core exposes to its rendering collaborator.
//!
//! A [`ServiceDesk`] owns an [`UndoController`] and the wall clock; every
//! operation returns a [`ViewSnapshot`] the caller can render without
//! reaching into the core. The snapshot is plain data; copying it out
//! keeps the pure core free of any presentation concern.

use crate::domain::{Customer, ServiceRecord, State};
use crate::engine::CommandError;
use crate::metrics;
use crate::undo::UndoController;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Renderable summary of the counter at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    /// Customers waiting, front of the queue first.
    pub waiting: Vec<Customer>,

    /// How many services have completed.
    pub completed_count: usize,

    /// Mean completed wait; `None` until something has been served.
    pub average_wait: Option<Duration>,

    /// Current wait of the front customer; `None` when nobody waits.
    pub estimated_next_wait: Option<Duration>,

    /// The service completed by the command that produced this snapshot,
    /// when that command was a serve that found someone waiting.
    pub served: Option<ServiceRecord>,
}

impl ViewSnapshot {
    /// Capture a snapshot of `state` as seen at `now`.
    pub fn capture(state: &State, now: DateTime<Utc>) -> Self {
        Self {
            waiting: state.queue().to_vec(),
            completed_count: state.history().len(),
            average_wait: metrics::average_wait(state),
            estimated_next_wait: metrics::estimated_next_wait(state, now),
            served: None,
        }
    }
}

/// Facade pairing the undo controller with the wall clock.
///
/// This is the boundary where the clock is read; everything below it
/// takes `now` as a parameter.
///
/// # Example
///
/// ```rust
/// use ventanilla::ServiceDesk;
///
/// let mut desk = ServiceDesk::new();
/// desk.add_customer("Ana").unwrap();
/// desk.add_customer("Luis").unwrap();
///
/// let view = desk.serve_next();
/// assert_eq!(view.served.unwrap().customer().name(), "Ana");
/// assert_eq!(view.waiting.len(), 1);
///
/// let view = desk.undo();
/// assert_eq!(view.waiting.len(), 2);
/// assert_eq!(view.completed_count, 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ServiceDesk {
    controller: UndoController,
}

impl ServiceDesk {
    /// Open a desk at the initial state.
    pub fn new() -> Self {
        Self {
            controller: UndoController::new(),
        }
    }

    /// Open a desk at a previously captured state.
    pub fn resume(state: State) -> Self {
        Self {
            controller: UndoController::resume(state),
        }
    }

    /// Add a customer to the queue.
    ///
    /// Declined with [`CommandError::BlankName`] when the name trims to
    /// nothing; nothing changes in that case.
    pub fn add_customer(&mut self, name: &str) -> Result<ViewSnapshot, CommandError> {
        let now = Utc::now();
        let applied = self.controller.enqueue_at(name, now)?;
        Ok(ViewSnapshot::capture(&applied.state, now))
    }

    /// Serve the customer at the front of the queue.
    ///
    /// Always succeeds; the snapshot's `served` field says whether anyone
    /// was actually waiting.
    pub fn serve_next(&mut self) -> ViewSnapshot {
        let now = Utc::now();
        let applied = self.controller.serve_at(now);
        let mut view = ViewSnapshot::capture(&applied.state, now);
        view.served = applied.served;
        view
    }

    /// Revert the most recent effective command; a no-op when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> ViewSnapshot {
        self.controller.undo();
        ViewSnapshot::capture(self.controller.current(), Utc::now())
    }

    /// Discard everything and return to the initial state (undoable).
    pub fn reset(&mut self) -> ViewSnapshot {
        let applied = self.controller.reset();
        ViewSnapshot::capture(&applied.state, Utc::now())
    }

    /// Snapshot the current state without applying any command.
    pub fn current_view(&self) -> ViewSnapshot {
        ViewSnapshot::capture(self.controller.current(), Utc::now())
    }

    /// The state the desk currently holds, e.g. for export or checkpoint.
    pub fn current_state(&self) -> &State {
        self.controller.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waiting_names(view: &ViewSnapshot) -> Vec<&str> {
        view.waiting.iter().map(|c| c.name()).collect()
    }

    #[test]
    fn serve_and_undo_round_trip() {
        let mut desk = ServiceDesk::new();
        desk.add_customer("Ana").unwrap();
        desk.add_customer("Luis").unwrap();

        let view = desk.serve_next();
        assert_eq!(waiting_names(&view), vec!["Luis"]);
        assert_eq!(view.completed_count, 1);
        assert_eq!(view.served.as_ref().unwrap().customer().name(), "Ana");

        let view = desk.undo();
        assert_eq!(waiting_names(&view), vec!["Ana", "Luis"]);
        assert_eq!(view.completed_count, 0);
    }

    #[test]
    fn serving_an_empty_queue_reports_nobody_and_changes_nothing() {
        let mut desk = ServiceDesk::new();

        let view = desk.serve_next();
        assert!(view.served.is_none());
        assert_eq!(view.completed_count, 0);
        assert_eq!(desk.current_state(), &State::initial());

        // The no-op serve left nothing to revert.
        desk.undo();
        assert_eq!(desk.current_state(), &State::initial());
    }

    #[test]
    fn noop_serve_leaves_no_undo_entry_between_real_commands() {
        let mut desk = ServiceDesk::new();
        desk.add_customer("Ana").unwrap();
        desk.serve_next();
        let after_serve = desk.current_state().clone();

        // Queue is empty now; this serve finds nobody.
        let view = desk.serve_next();
        assert!(view.served.is_none());
        assert_eq!(desk.current_state(), &after_serve);

        // A single undo reverts the effective serve, not the no-op.
        let view = desk.undo();
        assert_eq!(waiting_names(&view), vec!["Ana"]);
        assert_eq!(view.completed_count, 0);
    }

    #[test]
    fn add_customer_declines_blank_names() {
        let mut desk = ServiceDesk::new();
        assert_eq!(desk.add_customer("  "), Err(CommandError::BlankName));
        assert!(desk.current_state().queue().is_empty());
    }

    #[test]
    fn current_view_does_not_advance_anything() {
        let mut desk = ServiceDesk::new();
        desk.add_customer("Ana").unwrap();

        let first = desk.current_view();
        let second = desk.current_view();
        assert_eq!(waiting_names(&first), vec!["Ana"]);
        assert_eq!(waiting_names(&second), vec!["Ana"]);
        assert_eq!(first.completed_count, second.completed_count);
    }

    #[test]
    fn snapshot_carries_the_derived_metrics() {
        let mut desk = ServiceDesk::new();

        let view = desk.current_view();
        assert!(view.average_wait.is_none());
        assert!(view.estimated_next_wait.is_none());

        desk.add_customer("Ana").unwrap();
        let view = desk.current_view();
        assert!(view.estimated_next_wait.is_some());

        let view = desk.serve_next();
        assert!(view.average_wait.is_some());
    }

    #[test]
    fn tickets_keep_counting_across_serves() {
        let mut desk = ServiceDesk::new();
        desk.add_customer("Ana").unwrap();
        desk.serve_next();
        let view = desk.add_customer("Luis").unwrap();

        assert_eq!(view.waiting[0].ticket(), "002");
    }
}
