use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use cinema_domain::error::StoreError;
use cinema_domain::repository::CollectionStore;

/// A whole-document JSON file store. Every save rewrites the entire file;
/// there is no partial update and no cross-process protection. The in-process
/// lost-update race is closed one level up, by the service's write mutex.
pub struct JsonFileStore<T> {
    path: PathBuf,
    missing_as_empty: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    /// A store whose document must exist (after seeding) and parse.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            missing_as_empty: false,
            _marker: PhantomData,
        }
    }

    /// A store that reads a missing document as an empty collection, the way
    /// the bookings document behaves before the first write.
    pub fn missing_as_empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            missing_as_empty: true,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    /// Writes the given items only when the document does not exist yet.
    /// Used to seed the catalog and initialize the bookings document on
    /// first run.
    pub async fn seed_if_absent(&self, items: &[T]) -> Result<(), StoreError> {
        match fs::metadata(&self.path).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), count = items.len(), "seeding document");
                self.save_all(items).await
            }
            Err(e) => Err(StoreError::Read {
                path: self.path_string(),
                source: e,
            }),
        }
    }
}

#[async_trait]
impl<T> CollectionStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn load_all(&self) -> Result<Vec<T>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound && self.missing_as_empty => {
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path_string(),
                    source: e,
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode {
            path: self.path_string(),
            source: e,
        })
    }

    async fn save_all(&self, items: &[T]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(items)?;
        fs::write(&self.path, bytes)
            .await
            .map_err(|e| StoreError::Write {
                path: self.path_string(),
                source: e,
            })?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "document rewritten");
        Ok(())
    }
}
