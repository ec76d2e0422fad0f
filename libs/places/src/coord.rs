use serde::{
    de::{self, Deserializer, MapAccess, SeqAccess, Visitor},
    ser::SerializeStruct,
    Deserialize,
};
use std::fmt;

// Leaflet speaks (lat, lng), geo_types speaks (x, y) = (lng, lat). The wrapper
// pins the order: everything built from a Coord goes through `new(lat, lng)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord(pub geo_types::Coord<f64>);

impl Coord {
    pub fn new(lat: f64, lng: f64) -> Coord {
        Coord(geo_types::Coord { x: lng, y: lat })
    }
    pub fn lat(&self) -> f64 {
        self.y
    }
    pub fn lng(&self) -> f64 {
        self.x
    }
    /// (0, 0) is what a failed geocoding lookup tends to return.
    pub fn is_default(&self) -> bool {
        self.lat() == 0. && self.lng() == 0.
    }
    pub fn is_valid(&self) -> bool {
        !self.is_default()
            && -90. <= self.lat()
            && self.lat() <= 90.
            && -180. <= self.lng()
            && self.lng() <= 180.
    }
}

impl Default for Coord {
    fn default() -> Coord {
        Coord(geo_types::Coord { x: 0., y: 0. })
    }
}

impl ::std::ops::Deref for Coord {
    type Target = geo_types::Coord<f64>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat(), self.lng())
    }
}

impl serde::Serialize for Coord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut ser = serializer.serialize_struct("Coord", 2)?;
        ser.serialize_field("lat", &self.0.y)?;
        ser.serialize_field("lng", &self.0.x)?;
        ser.end()
    }
}

impl From<Coord> for geo_types::Point<f64> {
    fn from(coord: Coord) -> geo_types::Point<f64> {
        geo_types::Point::new(coord.lng(), coord.lat())
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Lat,
            #[serde(alias = "lon")]
            Lng,
        }

        struct CoordVisitor;

        impl<'de> Visitor<'de> for CoordVisitor {
            type Value = Coord;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a [lat, lng] pair or a {lat, lng} map")
            }

            // The record store keeps coordinates as [lat, lng].
            fn visit_seq<V>(self, mut seq: V) -> Result<Coord, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let lat = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let lng = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(Coord::new(lat, lng))
            }

            fn visit_map<V>(self, mut map: V) -> Result<Coord, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut lat = None;
                let mut lng = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Lat => {
                            if lat.is_some() {
                                return Err(de::Error::duplicate_field("lat"));
                            }
                            lat = Some(map.next_value()?);
                        }
                        Field::Lng => {
                            if lng.is_some() {
                                return Err(de::Error::duplicate_field("lng"));
                            }
                            lng = Some(map.next_value()?);
                        }
                    }
                }
                let lat = lat.ok_or_else(|| de::Error::missing_field("lat"))?;
                let lng = lng.ok_or_else(|| de::Error::missing_field("lng"))?;
                Ok(Coord::new(lat, lng))
            }
        }

        const FIELDS: &[&str] = &["lat", "lng"];
        deserializer.deserialize_struct("Coord", FIELDS, CoordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn should_keep_latitude_first() {
        let coord = Coord::new(-23.5505, -46.6333);
        assert_relative_eq!(coord.lat(), -23.5505);
        assert_relative_eq!(coord.lng(), -46.6333);
        assert_relative_eq!(coord.y, -23.5505);
        assert_relative_eq!(coord.x, -46.6333);
    }

    #[test]
    fn should_read_stored_pair_as_lat_lng() {
        let coord: Coord = serde_json::from_str("[-23.5505, -46.6333]").unwrap();
        assert_eq!(coord, Coord::new(-23.5505, -46.6333));
    }

    #[test]
    fn should_read_map_with_lon_alias() {
        let coord: Coord = serde_json::from_str(r#"{"lon": 2.35, "lat": 48.85}"#).unwrap();
        assert_eq!(coord, Coord::new(48.85, 2.35));
    }

    #[test]
    fn should_reject_duplicate_and_missing_fields() {
        assert!(serde_json::from_str::<Coord>(r#"{"lat": 1, "lat": 2, "lng": 3}"#).is_err());
        assert!(serde_json::from_str::<Coord>(r#"{"lat": 1}"#).is_err());
        assert!(serde_json::from_str::<Coord>("[1.0]").is_err());
    }

    #[test]
    fn should_serialize_as_named_fields() {
        let json = serde_json::to_value(Coord::new(1.5, -2.5)).unwrap();
        assert_eq!(json, serde_json::json!({"lat": 1.5, "lng": -2.5}));
    }

    #[test]
    fn should_flag_null_island_as_invalid() {
        assert!(Coord::default().is_default());
        assert!(!Coord::default().is_valid());
        assert!(!Coord::new(91., 0.5).is_valid());
        assert!(Coord::new(-10., -10.).is_valid());
    }
}
