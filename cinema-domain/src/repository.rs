use async_trait::async_trait;

use crate::error::StoreError;

/// Whole-collection storage capability: the substrate only knows how to load
/// and overwrite an entire document, so callers own the read-modify-write
/// cycle (and its serialization — see `BookingService`).
#[async_trait]
pub trait CollectionStore<T>: Send + Sync {
    async fn load_all(&self) -> Result<Vec<T>, StoreError>;
    async fn save_all(&self, items: &[T]) -> Result<(), StoreError>;
}
