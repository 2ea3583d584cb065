//! Record Handlers
//!
//! `GET` and `POST` on `/values`. Every other method on the path gets 405.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::record::{
    CreateRecordDto, RecordResponseDto, RECORD_SAVED_MESSAGE,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Path served by this router
pub const VALUES_PATH: &str = "/values";

/// Create the router for the values endpoint
///
/// HEAD is answered explicitly since axum would otherwise serve it from the
/// GET handler. Bodies are unbounded: `values` has no length limit.
pub fn router() -> Router<AppState> {
    Router::new().route(
        VALUES_PATH,
        post(save_record)
            .get(list_records)
            .head(method_not_allowed)
            .fallback(method_not_allowed)
            .layer(DefaultBodyLimit::disable()),
    )
}

/// POST /values - Store a new timestamped record
///
/// The body is parsed as JSON whatever its `Content-Type`.
///
/// # Responses
///
/// * 200 OK - Record saved, plain-text confirmation
/// * 400 Bad Request - Malformed body, missing `values` or non-numeric entries
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn save_record(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), ApiError> {
    let dto: CreateRecordDto = serde_json::from_slice(&body)?;

    state.save_record_use_case.execute(dto.values).await?;

    Ok((StatusCode::OK, RECORD_SAVED_MESSAGE))
}

/// GET /values - List every stored record
///
/// # Responses
///
/// * 200 OK - JSON array of records (possibly empty)
/// * 500 Internal Server Error - Storage or decode failure
#[axum::debug_handler]
async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecordResponseDto>>, ApiError> {
    let records = state.list_records_use_case.execute().await?;

    let response: Vec<RecordResponseDto> = records.into_iter().map(RecordResponseDto::from).collect();
    Ok(Json(response))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
