use crate::state::AppState;
use axum::http::StatusCode;
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(root))
}

/// Simple endpoint that returns "OK" when the service is running properly
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn root() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
