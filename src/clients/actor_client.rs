use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for store-specific clients to inherit the operations every store shares.
///
/// Implementors only say how to reach the generic client and how to translate
/// framework failures into their own error type; `get`, `delete`, `count` and
/// `clear` come for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The store-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the store-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete every record with this ID. Returns how many were removed.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Number of stored records.
    async fn count(&self) -> Result<usize, Self::Error> {
        self.inner().count().await.map_err(Self::map_error)
    }

    /// Drop every record and restart ids at 1.
    #[tracing::instrument(skip(self))]
    async fn clear(&self) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().clear().await.map_err(Self::map_error)
    }
}
