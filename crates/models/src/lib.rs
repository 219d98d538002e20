pub mod room;
pub mod room_type;
pub mod seat;
