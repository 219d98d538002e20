use crate::services::room::{RoomService, RoomWithFacilities};
use log::debug;
use sea_orm::{ConnectionTrait, DbErr};

/// Optional filters accepted when listing rooms
///
/// At most one filter is applied. `building` wins over `room_type`, which wins
/// over `facility`; the others are ignored. A filter is present when it is
/// `Some`, even if the string is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    pub building: Option<String>,
    pub room_type: Option<String>,
    pub facility: Option<String>,
}

/// The single lookup a [`RoomFilter`] resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomLookup<'a> {
    Building(&'a str),
    Type(&'a str),
    Facility(&'a str),
    All,
}

impl RoomFilter {
    pub fn strategy(&self) -> RoomLookup<'_> {
        if let Some(building) = self.building.as_deref() {
            RoomLookup::Building(building)
        } else if let Some(room_type) = self.room_type.as_deref() {
            RoomLookup::Type(room_type)
        } else if let Some(facility) = self.facility.as_deref() {
            RoomLookup::Facility(facility)
        } else {
            RoomLookup::All
        }
    }
}

impl RoomService {
    /// Lists rooms matching the one filter selected by [`RoomFilter::strategy`]
    pub async fn find_with_filters<C: ConnectionTrait>(
        db: &C,
        filter: &RoomFilter,
    ) -> Result<Vec<RoomWithFacilities>, DbErr> {
        let lookup = filter.strategy();
        debug!("Listing rooms with {lookup:?}");

        match lookup {
            RoomLookup::Building(building) => Self::find_by_building(db, building).await,
            RoomLookup::Type(room_type) => Self::find_by_type(db, room_type).await,
            RoomLookup::Facility(facility) => Self::find_by_facility(db, facility).await,
            RoomLookup::All => Self::find_all(db).await,
        }
    }
}
