pub mod room;
pub mod seat;
