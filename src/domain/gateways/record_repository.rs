//! Record Repository Gateway
//!
//! The storage collaborator: insert-one and find-all over the values collection.

use async_trait::async_trait;

use crate::domain::models::record::Record;
use crate::shared::errors::RepositoryError;

/// Repository trait for Record persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Persist a single record
    async fn insert(&self, record: &Record) -> Result<Record, RepositoryError>;

    /// Return every stored record, oldest first, with no filter or limit
    async fn find_all(&self) -> Result<Vec<Record>, RepositoryError>;
}
