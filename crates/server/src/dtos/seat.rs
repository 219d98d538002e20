use database::entities::seat;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeatResponse {
    pub id: i32,
    pub seat_number: String,
    pub position_description: Option<String>,
    pub room_id: i32,
    pub available: bool,
}

impl From<seat::Model> for SeatResponse {
    fn from(seat: seat::Model) -> Self {
        Self {
            id: seat.id,
            seat_number: seat.seat_number,
            position_description: seat.position_description,
            room_id: seat.room_id,
            available: seat.available,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SeatQueryParams {
    /// `true` lists only bookable seats, `false` only unavailable ones; omit for all seats
    pub available: Option<bool>,
}
