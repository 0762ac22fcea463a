//! Store implementation for [`Transaction`]. Transactions are owned by a customer.

use super::{require_owner, RecordError};
use crate::model::{Customer, Transaction, TransactionCreate};
use async_trait::async_trait;
use entity_store::{EntityStore, StoreClient, StoreEntity};
use std::convert::Infallible;

pub const ID_PREFIX: &str = "transaction";

pub fn new(capacity: usize) -> (EntityStore<Transaction>, StoreClient<Transaction>) {
    EntityStore::new(ID_PREFIX, capacity)
}

#[async_trait]
impl StoreEntity for Transaction {
    type Id = String;
    type Create = TransactionCreate;
    type Patch = Infallible;
    type Context = StoreClient<Customer>;
    type Error = RecordError;

    fn id(&self) -> &String {
        &self.id
    }

    fn owner_id(&self) -> Option<&str> {
        Some(&self.customer_id)
    }

    fn from_create_params(id: String, params: TransactionCreate) -> Result<Self, RecordError> {
        Ok(Self {
            id,
            quantity: params.quantity,
            price: params.price,
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
