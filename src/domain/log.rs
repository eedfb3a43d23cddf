//! Append-only log of completed services.

use super::record::ServiceRecord;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::rc::Rc;

/// Ordered, append-only log of completed services.
///
/// Insertion order is service order. The log is immutable: `record`
/// returns a new log with the entry added and leaves the original
/// untouched. The entries live behind a shared reference, so cloning a
/// log (and therefore retaining one in a snapshot) is O(1) reference
/// retention, not a copy; only an append pays for a new entry vector.
///
/// # Example
///
/// ```rust
/// use ventanilla::{engine, ServiceLog, State};
/// use chrono::{TimeZone, Utc};
///
/// let t0 = Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap();
/// let state = engine::enqueue(&State::initial(), "Ana", t0).unwrap();
/// let (served, record) = engine::serve_next(&state, t0);
///
/// assert_eq!(served.history().len(), 1);
/// assert_eq!(served.history().last(), record.as_ref());
/// // The pre-service state still sees an empty log.
/// assert!(state.history().is_empty());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceLog {
    records: Rc<Vec<ServiceRecord>>,
}

impl ServiceLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            records: Rc::new(Vec::new()),
        }
    }

    /// Append a record, returning a new log.
    ///
    /// This is a pure function - it does not mutate the existing log but
    /// returns a new one with the record added.
    #[must_use]
    pub fn record(&self, record: ServiceRecord) -> Self {
        let mut records = (*self.records).clone();
        records.push(record);
        Self {
            records: Rc::new(records),
        }
    }

    /// Number of completed services.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether nothing has been served yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the records in service order.
    pub fn iter(&self) -> std::slice::Iter<'_, ServiceRecord> {
        self.records.iter()
    }

    /// The most recently appended record.
    pub fn last(&self) -> Option<&ServiceRecord> {
        self.records.last()
    }
}

impl Default for ServiceLog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServiceLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a ServiceLog {
    type Item = &'a ServiceRecord;
    type IntoIter = std::slice::Iter<'a, ServiceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ServiceLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for ServiceLog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let records = Vec::<ServiceRecord>::deserialize(deserializer)?;
        Ok(Self {
            records: Rc::new(records),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Customer;
    use chrono::{TimeZone, Utc};

    fn sample_record(name: &str, ticket: &str) -> ServiceRecord {
        let arrived = Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap();
        let served = Utc.with_ymd_and_hms(2024, 5, 2, 9, 2, 0).unwrap();
        ServiceRecord::new(Customer::new(name, ticket, arrived), served)
    }

    #[test]
    fn new_log_is_empty() {
        let log = ServiceLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.last().is_none());
    }

    #[test]
    fn record_returns_a_new_log() {
        let log = ServiceLog::new();
        let appended = log.record(sample_record("Ana", "001"));

        assert_eq!(log.len(), 0);
        assert_eq!(appended.len(), 1);
        assert_eq!(appended.last().unwrap().customer().name(), "Ana");
    }

    #[test]
    fn insertion_order_is_service_order() {
        let log = ServiceLog::new()
            .record(sample_record("Ana", "001"))
            .record(sample_record("Luis", "002"))
            .record(sample_record("Eva", "003"));

        let names: Vec<&str> = log.iter().map(|r| r.customer().name()).collect();
        assert_eq!(names, vec!["Ana", "Luis", "Eva"]);
    }

    #[test]
    fn clones_share_the_entries() {
        let log = ServiceLog::new().record(sample_record("Ana", "001"));
        let retained = log.clone();

        // Retention is a reference, not a copy of the entries.
        assert!(Rc::ptr_eq(&log.records, &retained.records));
    }

    #[test]
    fn append_does_not_disturb_retained_clones() {
        let log = ServiceLog::new().record(sample_record("Ana", "001"));
        let snapshot = log.clone();
        let appended = log.record(sample_record("Luis", "002"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(appended.len(), 2);
    }

    #[test]
    fn serde_round_trip_preserves_order() {
        let log = ServiceLog::new()
            .record(sample_record("Ana", "001"))
            .record(sample_record("Luis", "002"));

        let json = serde_json::to_string(&log).unwrap();
        let back: ServiceLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
