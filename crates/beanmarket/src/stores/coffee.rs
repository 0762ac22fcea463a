//! Store implementation for [`Coffee`].
//!
//! Coffees belong to a producer: the store is started with the producer store as
//! context and refuses coffees whose producer is unknown. There is no patch type;
//! coffee records are immutable once listed.

use super::{require_owner, RecordError};
use crate::model::{Coffee, CoffeeCreate, Producer};
use async_trait::async_trait;
use entity_store::{EntityStore, StoreClient, StoreEntity};
use std::convert::Infallible;

pub const ID_PREFIX: &str = "coffee";

pub fn new(capacity: usize) -> (EntityStore<Coffee>, StoreClient<Coffee>) {
    EntityStore::new(ID_PREFIX, capacity)
}

#[async_trait]
impl StoreEntity for Coffee {
    type Id = String;
    type Create = CoffeeCreate;
    type Patch = Infallible;
    type Context = StoreClient<Producer>;
    type Error = RecordError;

    fn id(&self) -> &String {
        &self.id
    }

    fn owner_id(&self) -> Option<&str> {
        Some(&self.producer_id)
    }

    fn from_create_params(id: String, params: CoffeeCreate) -> Result<Self, RecordError> {
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            producer_id: params.producer_id,
        })
    }

    async fn on_create(&mut self, producers: &StoreClient<Producer>) -> Result<(), RecordError> {
        require_owner(producers, "Producer", &self.producer_id).await
    }

    async fn on_update(
        &mut self,
        patch: Infallible,
        _ctx: &StoreClient<Producer>,
    ) -> Result<(), RecordError> {
        match patch {}
    }
}
