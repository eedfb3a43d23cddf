//! Pure derived values over the service-counter state.
//!
//! Nothing here is cached in [`State`]; every value is recomputed from the
//! state (and the caller's clock) on demand.

use crate::domain::State;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Mean wait across all completed services, in whole seconds.
///
/// `None` while the history is empty. The mean is the integer quotient of
/// the summed whole-second waits by the entry count (truncating, not
/// rounding), so waits of 3, 5 and 10 seconds average to exactly 6.
///
/// # Example
///
/// ```rust
/// use ventanilla::{metrics, State};
///
/// assert!(metrics::average_wait(&State::initial()).is_none());
/// ```
pub fn average_wait(state: &State) -> Option<Duration> {
    let history = state.history();
    if history.is_empty() {
        return None;
    }
    let total: u64 = history.iter().map(|record| record.wait().as_secs()).sum();
    Some(Duration::from_secs(total / history.len() as u64))
}

/// How long the customer at the head of the queue has been waiting.
///
/// `None` when nobody is waiting; otherwise `now - arrived_at`, clamped
/// to zero against skewed clocks.
pub fn estimated_next_wait(state: &State, now: DateTime<Utc>) -> Option<Duration> {
    state.queue().peek_front().map(|customer| {
        now.signed_duration_since(customer.arrived_at())
            .to_std()
            .unwrap_or(Duration::ZERO)
    })
}
