//! Domain Layer
//!
//! Contains the record model and the storage gateway trait (port).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::record_repository::RecordRepository;
pub use models::record::{Record, RecordId};
