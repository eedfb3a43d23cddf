//! Customer value type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A customer waiting in the queue.
///
/// Immutable once created. The ticket is a zero-padded sequential decimal
/// ("001", "002", ...) assigned at enqueue time; it grows naturally to
/// four and more digits once the counter passes 999.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    ticket: String,
    arrived_at: DateTime<Utc>,
}

impl Customer {
    pub(crate) fn new(
        name: impl Into<String>,
        ticket: impl Into<String>,
        arrived_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            ticket: ticket.into(),
            arrived_at,
        }
    }

    /// The customer's name as accepted at enqueue time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The assigned ticket number, zero-padded to at least three digits.
    pub fn ticket(&self) -> &str {
        &self.ticket
    }

    /// When the customer joined the queue.
    pub fn arrived_at(&self) -> DateTime<Utc> {
        self.arrived_at
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ticket {} - {})",
            self.name,
            self.ticket,
            self.arrived_at.format("%H:%M:%S")
        )
    }
}
