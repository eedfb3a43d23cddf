//! Pure state transitions for the service counter.
//!
//! Every function here maps an input [`State`] (plus explicit inputs such
//! as the clock reading) to a new `State`, with no I/O, no mutation, and
//! no hidden context. Callers own the clock: `now` is always a parameter,
//! never read inside.

use crate::domain::{Customer, ServiceRecord, State};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Rejections raised before any transition is applied.
///
/// A rejected command leaves the caller's state exactly as it was;
/// rejection is a declined command, not a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("customer name is blank")]
    BlankName,
}

/// Enqueue a customer, assigning the next ticket number.
///
/// The name is trimmed first; a name that trims to nothing is rejected
/// with [`CommandError::BlankName`] before any state is built. The ticket
/// is the current counter formatted as a zero-padded 3-digit decimal
/// ("001" through "999", then "1000" onward with no special-casing). The
/// returned state has the customer at the rear of the queue and the
/// counter advanced by 1; the history is untouched.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use ventanilla::{engine, State};
///
/// let now = Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap();
/// let state = engine::enqueue(&State::initial(), "Ana", now).unwrap();
///
/// assert_eq!(state.queue().len(), 1);
/// assert_eq!(state.queue().peek_front().unwrap().ticket(), "001");
/// assert_eq!(state.next_ticket(), 2);
/// ```
pub fn enqueue(state: &State, name: &str, now: DateTime<Utc>) -> Result<State, CommandError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CommandError::BlankName);
    }
    let ticket = format!("{:03}", state.next_ticket);
    let customer = Customer::new(name, ticket, now);
    Ok(State {
        queue: state.queue.enqueue(customer),
        history: state.history.clone(),
        next_ticket: state.next_ticket + 1,
    })
}

/// Serve the customer at the front of the queue.
///
/// An empty queue is the "nobody waiting" outcome, not an error: the
/// returned state equals the input and the record is `None`. Otherwise
/// the front customer is dequeued, their wait (`now - arrived_at`,
/// clamped to zero) is measured, and the completed service is appended
/// to the history. The ticket counter is untouched.
#[must_use]
pub fn serve_next(state: &State, now: DateTime<Utc>) -> (State, Option<ServiceRecord>) {
    let (queue, customer) = state.queue.dequeue();
    match customer {
        Some(customer) => {
            let record = ServiceRecord::new(customer, now);
            let history = state.history.record(record.clone());
            (
                State {
                    queue,
                    history,
                    next_ticket: state.next_ticket,
                },
                Some(record),
            )
        }
        None => (state.clone(), None),
    }
}

/// Return the canonical initial state, regardless of input.
///
/// This discards the waiting queue, the history, and the ticket
/// numbering: the counter restarts at 1.
#[must_use]
pub fn reset(_state: &State) -> State {
    State::initial()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::time::Duration;

    fn clock(secs_past_nine: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap()
            + chrono::Duration::seconds(i64::from(secs_past_nine))
    }

    #[test]
    fn enqueue_assigns_zero_padded_sequential_tickets() {
        let mut state = State::initial();
        for name in ["Ana", "Luis", "Eva"] {
            state = enqueue(&state, name, clock(0)).unwrap();
        }

        let tickets: Vec<&str> = state.queue().iter().map(|c| c.ticket()).collect();
        assert_eq!(tickets, vec!["001", "002", "003"]);
        assert_eq!(state.next_ticket(), 4);
    }

    #[test]
    fn tickets_grow_past_three_digits_without_special_casing() {
        let state = State {
            queue: crate::persistent::PersistentQueue::new(),
            history: crate::domain::ServiceLog::new(),
            next_ticket: 1000,
        };
        let state = enqueue(&state, "Ana", clock(0)).unwrap();
        assert_eq!(state.queue().peek_front().unwrap().ticket(), "1000");
    }

    #[test]
    fn enqueue_trims_the_name() {
        let state = enqueue(&State::initial(), "  Ana  ", clock(0)).unwrap();
        assert_eq!(state.queue().peek_front().unwrap().name(), "Ana");
    }

    #[test]
    fn enqueue_rejects_blank_names() {
        assert_eq!(
            enqueue(&State::initial(), "   ", clock(0)),
            Err(CommandError::BlankName)
        );
        assert_eq!(
            enqueue(&State::initial(), "", clock(0)),
            Err(CommandError::BlankName)
        );
    }

    #[test]
    fn enqueue_leaves_the_input_and_history_untouched() {
        let initial = State::initial();
        let state = enqueue(&initial, "Ana", clock(0)).unwrap();

        assert_eq!(initial, State::initial());
        assert!(state.history().is_empty());
    }

    #[test]
    fn serve_next_measures_the_wait() {
        let state = enqueue(&State::initial(), "Ana", clock(0)).unwrap();
        let (state, record) = serve_next(&state, clock(200));

        let record = record.unwrap();
        assert_eq!(record.customer().name(), "Ana");
        assert_eq!(record.wait(), Duration::from_secs(200));
        assert!(state.queue().is_empty());
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn serve_next_clamps_a_skewed_clock_to_zero_wait() {
        let state = enqueue(&State::initial(), "Ana", clock(100)).unwrap();
        let (_, record) = serve_next(&state, clock(0));
        assert_eq!(record.unwrap().wait(), Duration::ZERO);
    }

    #[test]
    fn serve_next_on_empty_queue_is_the_nobody_waiting_outcome() {
        let initial = State::initial();
        let (state, record) = serve_next(&initial, clock(0));

        assert!(record.is_none());
        assert_eq!(state, initial);
    }

    #[test]
    fn serve_next_appends_in_service_order_and_keeps_the_counter() {
        let state = enqueue(&State::initial(), "Ana", clock(0)).unwrap();
        let state = enqueue(&state, "Luis", clock(5)).unwrap();

        let (state, _) = serve_next(&state, clock(10));
        let (state, _) = serve_next(&state, clock(20));

        let served: Vec<&str> = state
            .history()
            .iter()
            .map(|r| r.customer().name())
            .collect();
        assert_eq!(served, vec!["Ana", "Luis"]);
        assert_eq!(state.next_ticket(), 3);
    }

    #[test]
    fn reset_returns_the_canonical_initial_state() {
        let state = enqueue(&State::initial(), "Ana", clock(0)).unwrap();
        let state = enqueue(&state, "Luis", clock(1)).unwrap();
        let (state, _) = serve_next(&state, clock(2));

        assert_eq!(reset(&state), State::initial());
    }

    #[test]
    fn tickets_restart_at_one_after_reset() {
        let state = enqueue(&State::initial(), "Ana", clock(0)).unwrap();
        let state = reset(&state);
        let state = enqueue(&state, "Luis", clock(1)).unwrap();

        assert_eq!(state.queue().peek_front().unwrap().ticket(), "001");
    }
}
