//! Domain Models
//!
//! Pure domain entities and value objects.

pub mod record;

pub use record::{Record, RecordId};
