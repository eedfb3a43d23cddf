//! The aggregate state of the service counter.

use super::customer::Customer;
use super::log::ServiceLog;
use crate::persistent::PersistentQueue;
use serde::{Deserialize, Serialize};

/// Complete state of the service counter at one point in time.
///
/// A state value is never mutated in place: every transition in
/// [`engine`](crate::engine) produces a new `State`, and older values stay
/// valid and usable for as long as anyone holds them. That is what makes
/// undo snapshots free: retaining a state is retaining a reference, and
/// `Clone` costs a few reference-count bumps plus one integer.
///
/// The ticket counter starts at 1, grows by exactly 1 on every enqueue,
/// and only returns to 1 through an explicit reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub(crate) queue: PersistentQueue<Customer>,
    pub(crate) history: ServiceLog,
    pub(crate) next_ticket: u32,
}

impl State {
    /// The canonical starting point: empty queue, empty history, ticket
    /// counter at 1.
    pub fn initial() -> Self {
        Self {
            queue: PersistentQueue::new(),
            history: ServiceLog::new(),
            next_ticket: 1,
        }
    }

    /// Customers currently waiting, front of the queue first.
    pub fn queue(&self) -> &PersistentQueue<Customer> {
        &self.queue
    }

    /// Completed services in service order.
    pub fn history(&self) -> &ServiceLog {
        &self.history
    }

    /// The ticket number the next enqueued customer will receive.
    pub fn next_ticket(&self) -> u32 {
        self.next_ticket
    }
}

impl Default for State {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_empty_with_counter_one() {
        let state = State::initial();
        assert!(state.queue().is_empty());
        assert!(state.history().is_empty());
        assert_eq!(state.next_ticket(), 1);
    }

    #[test]
    fn default_is_the_initial_state() {
        assert_eq!(State::default(), State::initial());
    }

    #[test]
    fn state_serializes_round_trip() {
        let state = State::initial();
        let json = serde_json::to_string(&state).unwrap();
        let back: State = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
