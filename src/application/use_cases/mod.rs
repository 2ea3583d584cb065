//! Use Cases
//!
//! Each use case is a single-purpose struct with an execute() method.

pub mod records;

pub use records::{ListRecordsUseCase, SaveRecordUseCase};
