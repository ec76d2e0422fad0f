pub mod bounds;
pub mod coord;
pub mod nurse;

pub use bounds::Bounds;
pub use coord::Coord;
pub use nurse::{Address, Nurse};
