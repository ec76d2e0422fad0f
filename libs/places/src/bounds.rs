use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Rectangle currently visible on the map.
///
/// Unlike `geo_types::Rect`, the corners are kept as reported: an inverted
/// rectangle is not normalised, it simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    #[serde(alias = "north_east")]
    pub north_east: Coord,
    #[serde(alias = "south_west")]
    pub south_west: Coord,
}

impl Bounds {
    pub fn new(north_east: Coord, south_west: Coord) -> Bounds {
        Bounds {
            north_east,
            south_west,
        }
    }

    /// Strict containment on both axes: a point lying on an edge is outside.
    pub fn contains(&self, coord: &Coord) -> bool {
        let in_lat = self.south_west.lat() < coord.lat() && coord.lat() < self.north_east.lat();
        let in_lng = self.south_west.lng() < coord.lng() && coord.lng() < self.north_east.lng();
        in_lat && in_lng
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.south_west.lat() < self.north_east.lat()
            && self.south_west.lng() < self.north_east.lng())
    }
}
