//! Store implementation for [`Route`]. Routes are standalone records.

use super::RecordError;
use crate::model::{Route, RouteCreate};
use async_trait::async_trait;
use entity_store::{EntityStore, StoreClient, StoreEntity};
use std::convert::Infallible;

pub const ID_PREFIX: &str = "route";

pub fn new(capacity: usize) -> (EntityStore<Route>, StoreClient<Route>) {
    EntityStore::new(ID_PREFIX, capacity)
}

#[async_trait]
impl StoreEntity for Route {
    type Id = String;
    type Create = RouteCreate;
    type Patch = Infallible;
    type Context = ();
    type Error = RecordError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: RouteCreate) -> Result<Self, RecordError> {
        Ok(Self {
            id,
            origin: params.origin,
            destination: params.destination,
            price: params.price,
        })
    }

    async fn on_update(&mut self, patch: Infallible, _ctx: &()) -> Result<(), RecordError> {
        match patch {}
    }
}
