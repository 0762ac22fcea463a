//! # Generic Client
//!
//! The handle used to talk to an [`EntityStore`](crate::EntityStore).

use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::{Criteria, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle to an `EntityStore<T>`.
///
/// It holds only the sending half of the store's channel, so cloning is cheap and
/// clones can be shared across tasks. The store shuts down once every clone is dropped.
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

// Manual impl: `T` itself does not need to be `Clone` for the handle to be.
impl<T: StoreEntity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    /// Insert a record and return it as stored.
    pub async fn create(&self, params: T::Create) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Create { params, respond_to })
            .await
    }

    /// Lookup by primary key.
    pub async fn find(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Find { id, respond_to })
            .await
    }

    pub async fn find_all(&self, criteria: Criteria<T::Id>) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::FindAll {
            criteria,
            respond_to,
        })
        .await
    }

    /// Merge a patch; returns the number of records touched (0 or 1).
    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<u64, StoreError> {
        self.request(|respond_to| StoreRequest::Update {
            id,
            patch,
            respond_to,
        })
        .await
    }

    /// Remove by primary key; returns the number of records removed (0 or 1).
    pub async fn delete(&self, id: T::Id) -> Result<u64, StoreError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }
}
