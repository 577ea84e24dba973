//! Timestamped trail of attempted transitions.
//!
//! The log is purely observational: it never feeds back into a guard's
//! decision. Callers record outcomes explicitly, typically right after
//! `try_update`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single attempted transition.
///
/// Both accepted and rejected attempts can be recorded; the `accepted` flag
/// tells them apart.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionRecord<V> {
    /// The value the guard held when the update was attempted
    pub from: V,
    /// The value the update proposed
    pub to: V,
    /// Whether the guard accepted the update
    pub accepted: bool,
    /// When the attempt occurred
    pub timestamp: DateTime<Utc>,
}

impl<V> TransitionRecord<V> {
    /// Create a record stamped with the current time.
    pub fn new(from: V, to: V, accepted: bool) -> Self {
        Self {
            from,
            to,
            accepted,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered trail of attempted transitions.
///
/// The log is immutable: [`record`](TransitionLog::record) returns a new log
/// with the record appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use vigil::automaton::{TransitionGuard, TransitionLog, TransitionRecord};
///
/// let mut guard = TransitionGuard::new(1u8);
/// guard.register_transition(1, 2);
///
/// let mut log = TransitionLog::new();
/// for proposed in [2u8, 9] {
///     let from = guard.value().clone();
///     let (accepted, _) = guard.try_update(proposed);
///     log = log.record(TransitionRecord::new(from, proposed, accepted));
/// }
///
/// assert_eq!(log.records().len(), 2);
/// assert_eq!(log.path(), vec![&1, &2]); // the rejected 9 never appears
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionLog<V> {
    records: Vec<TransitionRecord<V>>,
}

impl<V: Clone> TransitionLog<V> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new log.
    pub fn record(&self, record: TransitionRecord<V>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get all records in order.
    pub fn records(&self) -> &[TransitionRecord<V>] {
        &self.records
    }

    /// Get the sequence of values actually occupied.
    ///
    /// Returns the `from` of the first record (the value held when logging
    /// began) followed by the `to` of every accepted record. Rejected
    /// attempts leave no trace in the path.
    pub fn path(&self) -> Vec<&V> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            if record.accepted {
                path.push(&record.to);
            }
        }
        path
    }

    /// Calculate elapsed time from first to last record.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

impl<V: Clone> Default for TransitionLog<V> {
    fn default() -> Self {
        Self::new()
    }
}
