use places::{Coord, Nurse};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::precision::Precision;
use super::query::QueryState;

/// Decides which nurses are visible for a given query state.
///
/// Matching runs in two stages. The geographic stage keeps nurses sitting on
/// the selected point (when there is one) or strictly inside the viewport
/// bounds (otherwise). The specialty stage then keeps nurses sharing at least
/// one specialty with the filter, unless the filter is empty. Nurses without
/// coordinates never pass the geographic stage. The output preserves the
/// input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    pub precision: Precision,
}

impl Filter {
    pub fn new(precision: Precision) -> Self {
        Filter { precision }
    }

    pub fn apply(&self, nurses: &[Nurse], state: &QueryState) -> Vec<Nurse> {
        if state.selected_point.is_none() && state.viewport_bounds.is_degenerate() {
            return Vec::new();
        }
        nurses
            .iter()
            .filter(|nurse| self.is_visible(nurse, state))
            .cloned()
            .collect()
    }

    pub fn is_visible(&self, nurse: &Nurse, state: &QueryState) -> bool {
        let located = match nurse.coord() {
            Some(coord) => self.is_located(coord, state),
            None => false,
        };
        located && has_specialty(nurse, &state.specialty_filter)
    }

    fn is_located(&self, coord: &Coord, state: &QueryState) -> bool {
        match state.selected_point {
            Some(ref point) => {
                self.precision.matches(point.lat(), coord.lat())
                    && self.precision.matches(point.lng(), coord.lng())
            }
            None => state.viewport_bounds.contains(coord),
        }
    }
}

fn has_specialty(nurse: &Nurse, filter: &BTreeSet<String>) -> bool {
    filter.is_empty() || nurse.specialties().iter().any(|s| filter.contains(s))
}

/// Filters with the default precision.
pub fn filter(nurses: &[Nurse], state: &QueryState) -> Vec<Nurse> {
    Filter::default().apply(nurses, state)
}
