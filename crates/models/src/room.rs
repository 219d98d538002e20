use crate::room_type::RoomType;

/// Field values for a room that has not been persisted yet (or is being replaced)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub building: String,
    pub floor: i32,
    /// Unique across all buildings, e.g. `LIB-201`
    pub room_number: String,
    pub room_type: RoomType,
    /// Amenity tags such as `WiFi` or `Projector`
    pub facilities: Vec<String>,
    /// Capacity hint, not checked against the actual seats
    pub total_seats: Option<i32>,
}

impl NewRoom {
    pub fn new(
        building: impl Into<String>,
        floor: i32,
        room_number: impl Into<String>,
        room_type: RoomType,
        total_seats: i32,
    ) -> Self {
        Self {
            building: building.into(),
            floor,
            room_number: room_number.into(),
            room_type,
            facilities: Vec::new(),
            total_seats: Some(total_seats),
        }
    }

    pub fn with_facilities<I, S>(mut self, facilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facilities = facilities.into_iter().map(Into::into).collect();
        self
    }

    /// Facilities with duplicates removed, keeping the first occurrence
    pub fn distinct_facilities(&self) -> Vec<String> {
        let mut seen = Vec::with_capacity(self.facilities.len());
        for facility in &self.facilities {
            if !seen.contains(facility) {
                seen.push(facility.clone());
            }
        }
        seen
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_room_defaults() {
        let room = NewRoom::new("Main Library", 2, "LIB-201", RoomType::QuietRoom, 20);
        assert_eq!(room.building, "Main Library");
        assert_eq!(room.floor, 2);
        assert_eq!(room.room_number, "LIB-201");
        assert!(room.facilities.is_empty());
        assert_eq!(room.total_seats, Some(20));
    }

    #[test]
    fn test_distinct_facilities() {
        let room = NewRoom::new("Student Center", 1, "SC-101", RoomType::DiscussionRoom, 8)
            .with_facilities(["WiFi", "Projector", "WiFi", "AC"]);

        assert_eq!(room.distinct_facilities(), vec!["WiFi", "Projector", "AC"]);
    }
}
