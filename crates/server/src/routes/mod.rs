pub mod health;
pub mod room;
pub mod root;
pub mod seat;
