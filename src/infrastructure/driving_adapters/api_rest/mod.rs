//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::records::{ListRecordsUseCase, SaveRecordUseCase};
use crate::domain::gateways::RecordRepository;

/// Application state shared across all handlers.
///
/// Built once at startup; read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub save_record_use_case: Arc<SaveRecordUseCase>,
    pub list_records_use_case: Arc<ListRecordsUseCase>,
}

impl AppState {
    /// Wire every use case to the given record store
    #[must_use]
    pub fn new(record_repository: Arc<dyn RecordRepository>) -> Self {
        Self {
            save_record_use_case: Arc::new(SaveRecordUseCase::new(record_repository.clone())),
            list_records_use_case: Arc::new(ListRecordsUseCase::new(record_repository)),
        }
    }
}

/// Assemble the full application router with its middleware stack
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(handlers::records::router())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .with_state(state)
}
