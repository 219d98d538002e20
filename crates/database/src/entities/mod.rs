pub mod room;
pub mod room_facility;
pub mod seat;
