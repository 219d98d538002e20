/// Field values for a seat inside an existing room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSeat {
    /// Unique within the owning room, e.g. `A1`
    pub seat_number: String,
    pub room_id: i32,
    pub position_description: Option<String>,
    pub available: bool,
}

impl NewSeat {
    pub fn new(
        seat_number: impl Into<String>,
        room_id: i32,
        position_description: impl Into<String>,
    ) -> Self {
        Self {
            seat_number: seat_number.into(),
            room_id,
            position_description: Some(position_description.into()),
            available: true,
        }
    }

    /// Marks the seat as not bookable
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}
