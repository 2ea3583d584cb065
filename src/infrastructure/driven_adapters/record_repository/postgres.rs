//! PostgreSQL Record Repository Implementation
//!
//! Stores each record as a document row in the `"values"` table. The
//! `values` column is JSONB; it is decoded into a typed `Vec<f64>` on the
//! way out and rows of any other shape are rejected.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::RecordRepository;
use crate::domain::models::record::{Record, RecordId};
use crate::shared::errors::RepositoryError;

/// Database row representation for the values table
#[derive(Debug, sqlx::FromRow)]
struct RecordRow {
    id: Uuid,
    values: serde_json::Value,
    timestamp: DateTime<Utc>,
}

impl TryFrom<RecordRow> for Record {
    type Error = RepositoryError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        let values: Vec<f64> = serde_json::from_value(row.values).map_err(|e| {
            RepositoryError::Mapping(format!("Failed to parse values of record {}: {}", row.id, e))
        })?;

        Ok(Record::restore(RecordId::from_uuid(row.id), values, row.timestamp))
    }
}

/// PostgreSQL implementation of RecordRepository
pub struct PostgresRecordRepository {
    pool: PgPool,
}

impl PostgresRecordRepository {
    /// Create a new PostgresRecordRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordRepository for PostgresRecordRepository {
    async fn insert(&self, record: &Record) -> Result<Record, RepositoryError> {
        let values_json = serde_json::to_value(record.values())
            .map_err(|e| RepositoryError::Mapping(format!("Failed to serialize values: {}", e)))?;

        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            INSERT INTO "values" (id, "values", "timestamp")
            VALUES ($1, $2, $3)
            RETURNING id, "values", "timestamp"
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(&values_json)
        .bind(record.timestamp())
        .fetch_one(&self.pool)
        .await?;

        Record::try_from(row)
    }

    async fn find_all(&self) -> Result<Vec<Record>, RepositoryError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT id, "values", "timestamp"
            FROM "values"
            ORDER BY "timestamp" ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Record::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(values: serde_json::Value) -> RecordRow {
        RecordRow {
            id: Uuid::new_v4(),
            values,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn should_decode_numeric_array() {
        let record = Record::try_from(row(json!([1, 2.5, -3]))).unwrap();

        assert_eq!(record.values(), &[1.0, 2.5, -3.0]);
    }

    #[test]
    fn should_decode_empty_array() {
        let record = Record::try_from(row(json!([]))).unwrap();

        assert!(record.values().is_empty());
    }

    #[test]
    fn should_reject_documents_with_non_numeric_values() {
        let result = Record::try_from(row(json!([1, "two"])));

        assert!(matches!(result, Err(RepositoryError::Mapping(_))));
    }

    #[test]
    fn should_reject_documents_whose_values_are_not_an_array() {
        let result = Record::try_from(row(json!({"values": [1]})));

        assert!(matches!(result, Err(RepositoryError::Mapping(_))));
    }
}
