//! Record DTOs
//!
//! Wire shapes for the values endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::record::Record;

/// Plain-text body returned after a successful save
pub const RECORD_SAVED_MESSAGE: &str = "Values saved successfully with timestamp";

/// DTO for submitting a new record
///
/// `values` is required; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecordDto {
    pub values: Vec<f64>,
}

/// Response DTO for a stored record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponseDto {
    pub values: Vec<f64>,
    pub timestamp: DateTime<Utc>,
}

impl From<Record> for RecordResponseDto {
    fn from(record: Record) -> Self {
        let timestamp = record.timestamp();
        Self {
            values: record.into_values(),
            timestamp,
        }
    }
}
