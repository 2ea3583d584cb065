//! Record Domain Model
//!
//! A submitted numeric series stamped with the time the server received it.

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use crate::shared::errors::DomainError;

/// Timestamps are kept at the precision the store persists (microseconds)
const TIMESTAMP_PRECISION_DIGITS: u16 = 6;

/// Newtype wrapper for Record ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Create a new random RecordId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a RecordId from an existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record domain entity. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    values: Vec<f64>,
    timestamp: DateTime<Utc>,
}

impl Record {
    /// Create a new Record stamped with the current server time
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NonFiniteValue` if any value is NaN or infinite.
    pub fn new(values: Vec<f64>) -> Result<Self, DomainError> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(DomainError::NonFiniteValue { index });
        }

        Ok(Self {
            id: RecordId::new(),
            values,
            timestamp: Utc::now().trunc_subsecs(TIMESTAMP_PRECISION_DIGITS),
        })
    }

    /// Restore a Record from persisted data
    #[must_use]
    pub fn restore(id: RecordId, values: Vec<f64>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            values,
            timestamp,
        }
    }

    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Consume the record, yielding its values
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}
