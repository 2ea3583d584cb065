//! HTTP Handlers

pub mod records;
