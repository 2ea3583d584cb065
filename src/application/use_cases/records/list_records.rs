//! List Records Use Case
//!
//! Retrieves every stored record. No filter, projection or pagination.

use std::sync::Arc;

use crate::domain::gateways::RecordRepository;
use crate::domain::models::record::Record;
use crate::shared::errors::UseCaseError;

/// Use case for reading back all records
pub struct ListRecordsUseCase {
    record_repository: Arc<dyn RecordRepository>,
}

impl ListRecordsUseCase {
    /// Create a new ListRecordsUseCase
    #[must_use]
    pub fn new(record_repository: Arc<dyn RecordRepository>) -> Self {
        Self { record_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the query fails or a stored
    /// document cannot be decoded.
    pub async fn execute(&self) -> Result<Vec<Record>, UseCaseError> {
        tracing::debug!("Listing all records");

        let records = self.record_repository.find_all().await?;

        tracing::debug!(count = records.len(), "Found records");
        Ok(records)
    }
}
