use async_trait::async_trait;
use places::Nurse;
use snafu::Snafu;

/// This port defines how the full list of nurses is retrieved.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Nurse Retrieval Error: {}", source))]
    NurseRetrieval {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[snafu(display("Nurse Deserialization Error: {}", source))]
    NurseDeserialization { source: serde_json::Error },
}

#[async_trait]
pub trait Source {
    async fn list(&self) -> Result<Vec<Nurse>, Error>;
}
