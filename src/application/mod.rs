//! Application Layer
//!
//! Contains use cases that orchestrate record ingestion and retrieval.
//! Use cases depend on domain gateways (abstractions), not concrete implementations.

pub mod use_cases;
