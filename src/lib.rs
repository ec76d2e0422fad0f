//! Locates nurses on a map.
//!
//! The core is [`domain::model::filter::Filter`], a pure decision function
//! over a list of nurses and a [`domain::model::query::QueryState`].
//! [`adapters::primary::map::MapState`] keeps that query state, re-runs the
//! filter on every event and publishes the result to its subscribers.

pub mod adapters;
pub mod domain;
pub mod settings;
pub mod utils;

pub use places::{Address, Bounds, Coord, Nurse};
