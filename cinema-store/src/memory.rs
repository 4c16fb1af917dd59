use async_trait::async_trait;
use tokio::sync::RwLock;

use cinema_domain::error::StoreError;
use cinema_domain::repository::CollectionStore;

/// In-memory `CollectionStore` with the same whole-collection semantics as
/// the file store. Lets tests exercise the service without touching disk.
#[derive(Debug, Default)]
pub struct MemoryStore<T> {
    items: RwLock<Vec<T>>,
}

impl<T> MemoryStore<T> {
    pub fn new(initial: Vec<T>) -> Self {
        Self {
            items: RwLock::new(initial),
        }
    }
}

#[async_trait]
impl<T> CollectionStore<T> for MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    async fn load_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.items.read().await.clone())
    }

    async fn save_all(&self, items: &[T]) -> Result<(), StoreError> {
        *self.items.write().await = items.to_vec();
        Ok(())
    }
}

/// A store whose every operation fails with a read error, for exercising
/// the persistence-failure paths without touching disk.
#[derive(Debug, Default)]
pub struct FailingStore;

impl FailingStore {
    fn error() -> StoreError {
        StoreError::Read {
            path: "unreachable.json".to_string(),
            source: std::io::Error::other("backing store offline"),
        }
    }
}

#[async_trait]
impl<T> CollectionStore<T> for FailingStore
where
    T: Send + Sync,
{
    async fn load_all(&self) -> Result<Vec<T>, StoreError> {
        Err(Self::error())
    }

    async fn save_all(&self, _items: &[T]) -> Result<(), StoreError> {
        Err(Self::error())
    }
}
