use crate::{
    dtos::room::{RoomQueryParams, RoomRequest, RoomResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::{filter::RoomFilter, room::RoomService};
use log::error;
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_rooms, create_room))
        .routes(routes!(get_room_by_id, delete_room))
}

/// List rooms, optionally narrowed by a single filter
#[utoipa::path(
    get,
    path = "/rooms",
    params(RoomQueryParams),
    responses(
        (status = 200, description = "Rooms matching the applied filter", body = Vec<RoomResponse>),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    Query(params): Query<RoomQueryParams>,
) -> Result<Json<Vec<RoomResponse>>, StatusCode> {
    let filter = RoomFilter::from(params);

    let rooms = RoomService::find_with_filters(&state.db, &filter)
        .await
        .map_err(|e| {
            error!("Failed to list rooms with {filter:?}: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(rooms.into_iter().map(RoomResponse::from).collect()))
}

/// Get a specific room by ID
#[utoipa::path(
    get,
    path = "/rooms/{room_id}",
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room found", body = RoomResponse),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn get_room_by_id(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
) -> Result<Json<RoomResponse>, StatusCode> {
    let room = RoomService::find_by_id(&state.db, room_id)
        .await
        .map_err(|e| {
            error!("Failed to load room {room_id}: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    match room {
        Some(room) => Ok(Json(room.into())),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Create a room, or replace an existing one when the body carries its ID
#[utoipa::path(
    post,
    path = "/rooms",
    request_body = RoomRequest,
    responses(
        (status = 200, description = "Room saved", body = RoomResponse),
        (status = 422, description = "Malformed room body"),
        (status = 500, description = "Storage rejected the room, e.g. duplicate room number")
    ),
    tag = "Rooms"
)]
pub async fn create_room(
    State(state): State<AppState>,
    Json(request): Json<RoomRequest>,
) -> Result<Json<RoomResponse>, StatusCode> {
    let (id, new_room) = request.into_parts();
    let room_number = new_room.room_number.clone();

    let saved = RoomService::save(&state.db, id, new_room)
        .await
        .map_err(|e| {
            error!("Failed to save room {room_number}: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(saved.into()))
}

/// Delete a room and its seats; succeeds whether or not the room exists
#[utoipa::path(
    delete,
    path = "/rooms/{room_id}",
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room deleted or already absent"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn delete_room(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
) -> Result<StatusCode, StatusCode> {
    RoomService::delete_by_id(&state.db, room_id)
        .await
        .map_err(|e| {
            error!("Failed to delete room {room_id}: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(StatusCode::OK)
}
