use async_trait::async_trait;
use places::Nurse;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::secondary::source::{Error, Source};

/// Keeps the first successful listing of the inner source around until it
/// is invalidated. Failures are not cached.
#[derive(Debug)]
pub struct CachedSource<S> {
    inner: S,
    cache: RwLock<Option<Vec<Nurse>>>,
}

impl<S> CachedSource<S> {
    pub fn new(inner: S) -> Self {
        CachedSource {
            inner,
            cache: RwLock::new(None),
        }
    }

    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[async_trait]
impl<S> Source for CachedSource<S>
where
    S: Source + Send + Sync,
{
    async fn list(&self) -> Result<Vec<Nurse>, Error> {
        if let Some(nurses) = self.cache.read().await.as_ref() {
            debug!("serving {} nurses from cache", nurses.len());
            return Ok(nurses.clone());
        }
        let nurses = self.inner.list().await?;
        *self.cache.write().await = Some(nurses.clone());
        Ok(nurses)
    }
}
