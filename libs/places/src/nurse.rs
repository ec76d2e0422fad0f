use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::coord::Coord;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub zip_code: String,
    /// Absent when the address could not be geocoded.
    #[serde(default)]
    pub coordinates: Option<Coord>,
}

/// A nurse registered on the map.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Nurse {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Registration number at the regional nursing council.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coren: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub specialties: BTreeSet<String>,
}

impl Nurse {
    pub fn new<S: Into<String>>(id: S) -> Nurse {
        Nurse {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_coord(mut self, coord: Coord) -> Nurse {
        self.address.coordinates = Some(coord);
        self
    }

    pub fn with_specialties<I, S>(mut self, specialties: I) -> Nurse
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    pub fn coord(&self) -> Option<&Coord> {
        self.address.coordinates.as_ref()
    }

    pub fn is_locatable(&self) -> bool {
        self.address.coordinates.is_some()
    }

    pub fn specialties(&self) -> &BTreeSet<String> {
        &self.specialties
    }
}
