//! Save Record Use Case
//!
//! Stamps submitted values with the server time and stores them as a new record.

use std::sync::Arc;

use crate::domain::gateways::RecordRepository;
use crate::domain::models::record::Record;
use crate::shared::errors::UseCaseError;

/// Use case for ingesting a new record
pub struct SaveRecordUseCase {
    record_repository: Arc<dyn RecordRepository>,
}

impl SaveRecordUseCase {
    /// Create a new SaveRecordUseCase
    #[must_use]
    pub fn new(record_repository: Arc<dyn RecordRepository>) -> Self {
        Self { record_repository }
    }

    /// Execute the use case
    ///
    /// Repeated identical submissions produce distinct records.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if a value is not finite.
    /// Returns `UseCaseError::Repository` if the insert fails.
    pub async fn execute(&self, values: Vec<f64>) -> Result<Record, UseCaseError> {
        tracing::debug!(value_count = values.len(), "Saving new record");

        let record = Record::new(values)?;
        let saved = self.record_repository.insert(&record).await?;

        tracing::info!(
            record_id = %saved.id(),
            value_count = saved.values().len(),
            "Record saved"
        );

        Ok(saved)
    }
}
