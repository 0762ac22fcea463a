//! Store implementation for [`Shipper`].

use super::RecordError;
use crate::model::{Shipper, ShipperCreate, ShipperPatch};
use async_trait::async_trait;
use entity_store::{EntityStore, StoreClient, StoreEntity};

pub const ID_PREFIX: &str = "shipper";

pub fn new(capacity: usize) -> (EntityStore<Shipper>, StoreClient<Shipper>) {
    EntityStore::new(ID_PREFIX, capacity)
}

#[async_trait]
impl StoreEntity for Shipper {
    type Id = String;
    type Create = ShipperCreate;
    type Patch = ShipperPatch;
    type Context = ();
    type Error = RecordError;

    fn id(&self) -> &String {
        &self.id
    }

    fn requested_id(params: &ShipperCreate) -> Option<String> {
        params.id.clone()
    }

    fn from_create_params(id: String, params: ShipperCreate) -> Result<Self, RecordError> {
        Ok(Self::new(id, params.shipper_name))
    }

    async fn on_update(&mut self, patch: ShipperPatch, _ctx: &()) -> Result<(), RecordError> {
        if let Some(name) = patch.shipper_name {
            self.shipper_name = name;
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
