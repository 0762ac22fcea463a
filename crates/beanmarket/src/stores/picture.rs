use super::{require_owner, RecordError};
use crate::model::{Customer, Picture, PictureCreate};
use async_trait::async_trait;
use entity_store::{EntityStore, StoreClient, StoreEntity};
use std::convert::Infallible;

pub const ID_PREFIX: &str = "picture";

pub fn new(capacity: usize) -> (EntityStore<Picture>, StoreClient<Picture>) {
    EntityStore::new(ID_PREFIX, capacity)
}

#[async_trait]
impl StoreEntity for Picture {
    type Id = String;
    type Create = PictureCreate;
    type Patch = Infallible;
    type Context = StoreClient<Customer>;
    type Error = RecordError;

    fn id(&self) -> &String {
        &self.id
    }

    fn owner_id(&self) -> Option<&str> {
        Some(&self.customer_id)
    }

    fn from_create_params(id: String, params: PictureCreate) -> Result<Self, RecordError> {
        Ok(Self {
            id,
            url: params.url,
            customer_id: params.customer_id,
        })
    }

    async fn on_create(&mut self, customers: &StoreClient<Customer>) -> Result<(), RecordError> {
        require_owner(customers, "Customer", &self.customer_id).await
    }

    async fn on_update(
        &mut self,
        patch: Infallible,
        _ctx: &StoreClient<Customer>,
    ) -> Result<(), RecordError> {
        match patch {}
    }
}
