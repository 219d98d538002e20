use crate::{
    dtos::seat::{SeatQueryParams, SeatResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::seat::SeatService;
use log::error;
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_room_seats))
        .routes(routes!(get_room_seat))
}

/// List the seats of a room
#[utoipa::path(
    get,
    path = "/rooms/{room_id}/seats",
    params(
        ("room_id" = i32, Path, description = "Room ID"),
        SeatQueryParams
    ),
    responses(
        (status = 200, description = "Seats of the room, empty for unknown rooms", body = Vec<SeatResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Seats"
)]
pub async fn get_room_seats(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
    Query(params): Query<SeatQueryParams>,
) -> Result<Json<Vec<SeatResponse>>, StatusCode> {
    let seats = match params.available {
        Some(available) => {
            SeatService::find_by_room_id_and_availability(&state.db, room_id, available).await
        }
        None => SeatService::find_by_room_id(&state.db, room_id).await,
    }
    .map_err(|e| {
        error!("Failed to list seats of room {room_id}: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(seats.into_iter().map(SeatResponse::from).collect()))
}

/// Get a seat of a room by its seat number
#[utoipa::path(
    get,
    path = "/rooms/{room_id}/seats/{seat_number}",
    params(
        ("room_id" = i32, Path, description = "Room ID"),
        ("seat_number" = String, Path, description = "Seat number within the room, e.g. A1")
    ),
    responses(
        (status = 200, description = "Seat found", body = SeatResponse),
        (status = 404, description = "Seat not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Seats"
)]
pub async fn get_room_seat(
    State(state): State<AppState>,
    Path((room_id, seat_number)): Path<(i32, String)>,
) -> Result<Json<SeatResponse>, StatusCode> {
    let seat = SeatService::find_by_room_id_and_seat_number(&state.db, room_id, &seat_number)
        .await
        .map_err(|e| {
            error!("Failed to load seat {seat_number} of room {room_id}: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    seat.map(|seat| Json(seat.into()))
        .ok_or(StatusCode::NOT_FOUND)
}
