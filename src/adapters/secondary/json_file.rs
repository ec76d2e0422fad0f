use async_trait::async_trait;
use places::Nurse;
use snafu::ResultExt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::domain::ports::secondary::source::{Error, NurseDeserializationSnafu, Source};

/// Nurses stored as a JSON array in a file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// (0, 0) is the geocoder's way of saying it found nothing, and out of range
/// values are no better: such nurses are kept but cannot be placed on the map.
fn drop_invalid_coordinates(mut nurse: Nurse) -> Nurse {
    if let Some(coord) = nurse.coord().filter(|coord| !coord.is_valid()) {
        warn!(id = %nurse.id, "invalid coordinates {}, nurse cannot be located", coord);
        nurse.address.coordinates = None;
    }
    nurse
}

pub fn parse_nurses(content: &str) -> Result<Vec<Nurse>, Error> {
    let nurses: Vec<Nurse> = serde_json::from_str(content).context(NurseDeserializationSnafu)?;
    Ok(nurses.into_iter().map(drop_invalid_coordinates).collect())
}

#[async_trait]
impl Source for JsonFileSource {
    async fn list(&self) -> Result<Vec<Nurse>, Error> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| Error::NurseRetrieval {
                source: Box::new(err),
            })?;
        let nurses = parse_nurses(&content)?;
        info!(
            "read {} nurses ({} locatable) from {}",
            nurses.len(),
            nurses.iter().filter(|nurse| nurse.is_locatable()).count(),
            self.path.display()
        );
        Ok(nurses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use places::Coord;
    use std::io::Write;

    #[test]
    fn should_unlocate_invalid_coordinates() {
        let nurses = parse_nurses(
            r#"[
                {"id": "a", "address": {"zipCode": "", "coordinates": [0, 0]}},
                {"id": "b", "address": {"zipCode": "", "coordinates": [-10, -10]}},
                {"id": "c", "address": {"zipCode": "", "coordinates": [-123.5, -46.6]}}
            ]"#,
        )
        .unwrap();
        assert!(!nurses[0].is_locatable());
        assert_eq!(nurses[1].coord(), Some(&Coord::new(-10., -10.)));
        assert!(!nurses[2].is_locatable());
    }

    #[test]
    fn should_reject_malformed_content() {
        assert!(matches!(
            parse_nurses("{\"id\": \"a\"}"),
            Err(Error::NurseDeserialization { .. })
        ));
    }

    #[tokio::test]
    async fn should_read_nurses_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "a", "specialties": ["x"]}}]"#).unwrap();
        let nurses = JsonFileSource::new(file.path()).list().await.unwrap();
        assert_eq!(nurses.len(), 1);
        assert!(nurses[0].specialties().contains("x"));
    }

    #[tokio::test]
    async fn should_fail_on_missing_file() {
        let source = JsonFileSource::new("/nonexistent/nurses.json");
        assert!(matches!(
            source.list().await,
            Err(Error::NurseRetrieval { .. })
        ));
    }
}
