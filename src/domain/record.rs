//! Completed-service record.

use super::customer::Customer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of one completed service.
///
/// Append-only once created. The wait is derived from the two timestamps
/// at construction (`served_at - arrived_at`) and clamped to zero when a
/// skewed clock would make it negative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    customer: Customer,
    served_at: DateTime<Utc>,
    wait: Duration,
}

impl ServiceRecord {
    pub(crate) fn new(customer: Customer, served_at: DateTime<Utc>) -> Self {
        let wait = served_at
            .signed_duration_since(customer.arrived_at())
            .to_std()
            .unwrap_or(Duration::ZERO);
        Self {
            customer,
            served_at,
            wait,
        }
    }

    /// The customer who was served.
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// When the service completed.
    pub fn served_at(&self) -> DateTime<Utc> {
        self.served_at
    }

    /// How long the customer waited, never negative.
    pub fn wait(&self) -> Duration {
        self.wait
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn customer_arrived_at(ts: DateTime<Utc>) -> Customer {
        Customer::new("Ana", "001", ts)
    }

    #[test]
    fn wait_is_served_minus_arrival() {
        let arrived = Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap();
        let served = Utc.with_ymd_and_hms(2024, 5, 2, 9, 3, 20).unwrap();

        let record = ServiceRecord::new(customer_arrived_at(arrived), served);
        assert_eq!(record.wait(), Duration::from_secs(200));
        assert_eq!(record.served_at(), served);
    }

    #[test]
    fn wait_clamps_negative_to_zero() {
        let arrived = Utc.with_ymd_and_hms(2024, 5, 2, 9, 5, 0).unwrap();
        let served = Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap();

        let record = ServiceRecord::new(customer_arrived_at(arrived), served);
        assert_eq!(record.wait(), Duration::ZERO);
    }

    #[test]
    fn record_serializes_round_trip() {
        let arrived = Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap();
        let served = Utc.with_ymd_and_hms(2024, 5, 2, 9, 1, 0).unwrap();
        let record = ServiceRecord::new(customer_arrived_at(arrived), served);

        let json = serde_json::to_string(&record).unwrap();
        let back: ServiceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
