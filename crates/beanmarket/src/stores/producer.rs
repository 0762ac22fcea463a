//! Store implementation for [`Producer`].

use super::RecordError;
use crate::model::{Producer, ProducerCreate, ProducerPatch};
use async_trait::async_trait;
use entity_store::{EntityStore, StoreClient, StoreEntity};

pub const ID_PREFIX: &str = "producer";

/// Creates the producer store and its client.
pub fn new(capacity: usize) -> (EntityStore<Producer>, StoreClient<Producer>) {
    EntityStore::new(ID_PREFIX, capacity)
}

#[async_trait]
impl StoreEntity for Producer {
    type Id = String;
    type Create = ProducerCreate;
    type Patch = ProducerPatch;
    type Context = ();
    type Error = RecordError;

    fn id(&self) -> &String {
        &self.id
    }

    fn requested_id(params: &ProducerCreate) -> Option<String> {
        params.id.clone()
    }

    fn from_create_params(id: String, params: ProducerCreate) -> Result<Self, RecordError> {
        Ok(Self::new(id, params.email))
    }

    async fn on_update(&mut self, patch: ProducerPatch, _ctx: &()) -> Result<(), RecordError> {
        if let Some(name) = patch.producer_name {
            self.producer_name = Some(name);
        }
        if let Some(country) = patch.country {
            self.country = Some(country);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        Ok(())
    }
}
