//! Domain value types for the service counter.
//!
//! Customers, completed-service records, the append-only service log, and
//! the aggregate [`State`] the transition engine operates on. All of these
//! are immutable values: once constructed they are never edited, only
//! superseded by new values.

mod customer;
mod log;
mod record;
mod state;

pub use customer::Customer;
pub use log::ServiceLog;
pub use record::ServiceRecord;
pub use state::State;
