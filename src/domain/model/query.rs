use places::{Bounds, Coord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::error::{Error, InvalidBoundsSnafu};

/// What the user is currently looking at.
///
/// When `selected_point` is set it takes priority and `viewport_bounds` is
/// ignored. An empty `specialty_filter` means no restriction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryState {
    pub selected_point: Option<Coord>,
    pub viewport_bounds: Bounds,
    pub specialty_filter: BTreeSet<String>,
}

impl QueryState {
    pub fn with_selected_point(mut self, point: Option<Coord>) -> Self {
        self.selected_point = point;
        self
    }

    pub fn with_viewport_bounds(mut self, bounds: Bounds) -> Self {
        self.viewport_bounds = bounds;
        self
    }

    pub fn with_specialty_filter<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialty_filter = specialties.into_iter().map(Into::into).collect();
        self
    }
}

/// Parses `ne_lat,ne_lng,sw_lat,sw_lng`.
pub fn parse_bounds(input: &str) -> Result<Bounds, Error> {
    let values = input
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            InvalidBoundsSnafu {
                input,
                details: err.to_string(),
            }
            .build()
        })?;

    match values.as_slice() {
        [ne_lat, ne_lng, sw_lat, sw_lng] => Ok(Bounds::new(
            Coord::new(*ne_lat, *ne_lng),
            Coord::new(*sw_lat, *sw_lng),
        )),
        _ => InvalidBoundsSnafu {
            input,
            details: format!("expected 4 values, got {}", values.len()),
        }
        .fail(),
    }
}
