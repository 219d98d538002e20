use utoipa::OpenApi;

/// API Documentation
///
/// Paths are collected from the routers in [`crate::app`].
#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Health", description = "Liveness and readiness endpoints"),
        (name = "Rooms", description = "Room catalog endpoints"),
        (name = "Seats", description = "Read-only seat lookups within a room"),
    ),
    info(
        title = "Room Catalog API",
        version = "1.0.0",
        description = "Campus room reservation catalog: rooms, facilities and seats",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
