use async_trait::async_trait;
use places::Nurse;

use crate::domain::ports::secondary::source::{Error, Source};

/// Nurses held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    nurses: Vec<Nurse>,
}

impl MemorySource {
    pub fn new(nurses: Vec<Nurse>) -> Self {
        MemorySource { nurses }
    }
}

#[async_trait]
impl Source for MemorySource {
    async fn list(&self) -> Result<Vec<Nurse>, Error> {
        Ok(self.nurses.clone())
    }
}
