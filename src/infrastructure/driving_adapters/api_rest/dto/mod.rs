//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod record;

pub use record::{CreateRecordDto, RecordResponseDto, RECORD_SAVED_MESSAGE};
