pub mod map;
pub mod markers;
