//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Record store repository
//! - Configuration
//! - Database connection management

pub mod config;
pub mod database;
pub mod record_repository;

pub use config::AppConfig;
pub use record_repository::PostgresRecordRepository;
