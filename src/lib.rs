//! Values Store API
//!
//! A Rust-based microservice that stores submitted numeric series with a
//! server-side timestamp and returns them in bulk, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
