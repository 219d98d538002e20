use crate::{
    doc::ApiDoc,
    routes::{health, room, root, seat},
    state::AppState,
};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the HTTP router with every route, the Swagger UI and shared layers
pub fn app(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(root::router())
        .merge(health::router())
        .merge(room::router())
        .merge(seat::router())
        .with_state(state)
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
}
