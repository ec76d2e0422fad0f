use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use places::{Coord, Nurse};

// GeoJSON positions are [lng, lat].
fn point(coord: &Coord) -> Geometry {
    Geometry::new(Value::Point(vec![coord.lng(), coord.lat()]))
}

fn properties(nurse: &Nurse) -> JsonObject {
    let mut properties = JsonObject::new();
    properties.insert("id".to_string(), JsonValue::from(nurse.id.clone()));
    properties.insert("name".to_string(), JsonValue::from(nurse.name.clone()));
    properties.insert(
        "specialties".to_string(),
        JsonValue::from(nurse.specialties().iter().cloned().collect::<Vec<_>>()),
    );
    properties
}

/// One point feature per nurse that can be placed on the map.
pub fn feature_collection(nurses: &[Nurse]) -> FeatureCollection {
    let features = nurses
        .iter()
        .filter_map(|nurse| {
            nurse.coord().map(|coord| Feature {
                bbox: None,
                geometry: Some(point(coord)),
                id: None,
                properties: Some(properties(nurse)),
                foreign_members: None,
            })
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_write_lng_before_lat() {
        let nurses = vec![
            Nurse::new("a")
                .with_coord(Coord::new(-23.5, -46.6))
                .with_specialties(vec!["cardio"]),
            Nurse::new("b"),
        ];
        let collection = feature_collection(&nurses);
        assert_eq!(collection.features.len(), 1);

        let feature = &collection.features[0];
        let geometry = feature.geometry.as_ref().unwrap();
        assert_eq!(geometry.value, Value::Point(vec![-46.6, -23.5]));
        assert_eq!(feature.property("id"), Some(&JsonValue::from("a")));
        assert_eq!(
            feature.property("specialties"),
            Some(&serde_json::json!(["cardio"]))
        );
    }
}
