use crate::{app::app, state::AppState};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use database::services::seed::seed_if_empty;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use serde_json::Value;
use tower::ServiceExt;

/// Router backed by a fresh in-memory SQLite catalog holding the sample data
pub async fn seeded_app() -> Router {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    seed_if_empty(&db).await.unwrap();

    app(AppState::new(db))
}

/// Sends `request` and returns the status with the body parsed as JSON (`Null` when empty)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };

    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}
