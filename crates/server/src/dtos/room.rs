use database::{entities::room, services::filter::RoomFilter};
use models::{room::NewRoom, room_type::RoomType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: i32,
    pub building: String,
    pub floor: i32,
    pub room_number: String,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "QUIET_ROOM")]
    pub room_type: RoomType,
    pub facilities: Vec<String>,
    pub total_seats: Option<i32>,
}

impl From<(room::Model, Vec<String>)> for RoomResponse {
    fn from((room, facilities): (room::Model, Vec<String>)) -> Self {
        Self {
            id: room.id,
            building: room.building,
            floor: room.floor,
            room_number: room.room_number,
            room_type: room.room_type,
            facilities,
            total_seats: room.total_seats,
        }
    }
}

/// A full room record; an `id` naming an existing room replaces that room
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomRequest {
    pub id: Option<i32>,
    pub building: String,
    pub floor: i32,
    pub room_number: String,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "DISCUSSION_ROOM")]
    pub room_type: RoomType,
    #[serde(default)]
    pub facilities: Vec<String>,
    pub total_seats: Option<i32>,
}

impl RoomRequest {
    pub fn into_parts(self) -> (Option<i32>, NewRoom) {
        let new_room = NewRoom {
            building: self.building,
            floor: self.floor,
            room_number: self.room_number,
            room_type: self.room_type,
            facilities: self.facilities,
            total_seats: self.total_seats,
        };
        (self.id, new_room)
    }
}

/// Only one filter applies: `building`, then `type`, then `facility`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoomQueryParams {
    /// Exact building name
    pub building: Option<String>,
    /// Room type name such as `QUIET_ROOM`; unknown names match nothing
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    /// A facility the room must have
    pub facility: Option<String>,
}

impl From<RoomQueryParams> for RoomFilter {
    fn from(params: RoomQueryParams) -> Self {
        Self {
            building: params.building,
            room_type: params.room_type,
            facility: params.facility,
        }
    }
}
