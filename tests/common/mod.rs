//! Common test utilities
//!
//! In-memory and failing record stores for router tests, plus a
//! PostgreSQL-backed application for the e2e tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use values_store::domain::gateways::RecordRepository;
use values_store::domain::models::record::Record;
use values_store::infrastructure::driven_adapters::database;
use values_store::infrastructure::driven_adapters::record_repository::PostgresRecordRepository;
use values_store::infrastructure::driving_adapters::api_rest::{build_app, AppState};
use values_store::shared::errors::RepositoryError;

/// Record store kept in process memory
#[derive(Default)]
pub struct InMemoryRecordRepository {
    records: Mutex<Vec<Record>>,
}

impl InMemoryRecordRepository {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn insert(&self, record: &Record) -> Result<Record, RepositoryError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(record.clone())
    }

    async fn find_all(&self) -> Result<Vec<Record>, RepositoryError> {
        Ok(self.records.lock().unwrap().clone())
    }
}

/// Which failure a `FailingRecordRepository` produces
#[derive(Clone, Copy)]
pub enum Failure {
    Unavailable,
    CorruptDocument,
}

/// Record store whose every operation fails
pub struct FailingRecordRepository(pub Failure);

impl FailingRecordRepository {
    fn error(&self) -> RepositoryError {
        match self.0 {
            Failure::Unavailable => RepositoryError::Database(sqlx::Error::PoolTimedOut),
            Failure::CorruptDocument => RepositoryError::Mapping("values is not an array".to_string()),
        }
    }
}

#[async_trait]
impl RecordRepository for FailingRecordRepository {
    async fn insert(&self, _record: &Record) -> Result<Record, RepositoryError> {
        Err(self.error())
    }

    async fn find_all(&self) -> Result<Vec<Record>, RepositoryError> {
        Err(self.error())
    }
}

/// Router wired to an in-memory store
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<InMemoryRecordRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryRecordRepository::default());
        let router = build_app(AppState::new(repository.clone()));
        Self { router, repository }
    }
}

/// Router wired to a store that always fails
pub fn failing_router(failure: Failure) -> Router {
    build_app(AppState::new(Arc::new(FailingRecordRepository(failure))))
}

/// Router wired to a fresh PostgreSQL container
pub struct PostgresTestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl PostgresTestApp {
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_db_name("testdb")
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{}:{}/testdb", host, port);

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        database::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let repository = Arc::new(PostgresRecordRepository::new(pool.clone()));
        let router = build_app(AppState::new(repository));

        Self {
            router,
            pool,
            _container: container,
        }
    }
}

/// Send a request with an optional raw body
pub async fn send(router: &Router, method: Method, body: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri("/values");
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

/// POST a JSON body to /values
pub async fn post_values(router: &Router, body: &str) -> Response<Body> {
    send(router, Method::POST, Some(body)).await
}

/// GET /values and decode the records
pub async fn get_records(router: &Router) -> Vec<RecordResponse> {
    let response = send(router, Method::GET, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Record response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct RecordResponse {
    pub values: Vec<f64>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
