//! # StoreAccess Trait
//!
//! Common surface for kind-specific clients: default `find`, `find_all` and `delete`
//! built on top of a generic `StoreClient`.
use crate::{Criteria, StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for kind-specific clients to inherit the standard read and delete operations.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use entity_store::{StoreAccess, StoreClient, StoreEntity, StoreError};
///
/// #[derive(Clone, Debug)] struct Bag { id: String }
/// #[derive(Debug)] struct BagCreate;
/// #[derive(Debug)] struct BagPatch;
/// #[derive(Debug, thiserror::Error)] #[error("bag error")] struct BagError;
///
/// #[async_trait]
/// impl StoreEntity for Bag {
///     type Id = String; type Create = BagCreate; type Patch = BagPatch;
///     type Context = (); type Error = BagError;
///     fn id(&self) -> &String { &self.id }
///     fn from_create_params(id: String, _: BagCreate) -> Result<Self, BagError> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: BagPatch, _: &()) -> Result<(), BagError> { Ok(()) }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error(transparent)]
/// struct WarehouseError(#[from] StoreError);
///
/// struct BagClient { inner: StoreClient<Bag> }
///
/// #[async_trait]
/// impl StoreAccess<Bag> for BagClient {
///     type Error = WarehouseError;
///     fn inner(&self) -> &StoreClient<Bag> { &self.inner }
/// }
///
/// async fn usage(client: BagClient) {
///     // find(), find_all() and delete() come for free
///     let _ = client.find("bag_1".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait StoreAccess<T: StoreEntity>: Send + Sync {
    /// The client-level error type.
    type Error: From<StoreError> + Send + Sync;

    /// Access the inner generic `StoreClient`.
    fn inner(&self) -> &StoreClient<T>;

    /// Fetch a record by id; absent is `Ok(None)`.
    #[tracing::instrument(skip(self))]
    async fn find(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        Ok(self.inner().find(id).await?)
    }

    /// Fetch every record matching `criteria`.
    #[tracing::instrument(skip(self))]
    async fn find_all(&self, criteria: Criteria<T::Id>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        Ok(self.inner().find_all(criteria).await?)
    }

    /// Delete a record by id; returns whether something was removed.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        Ok(self.inner().delete(id).await? > 0)
    }
}
