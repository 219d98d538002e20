pub mod filter;
pub mod room;
pub mod seat;
pub mod seed;
