use crate::error::MarketError;
use crate::model::{Transaction, TransactionCreate};
use async_trait::async_trait;
use entity_store::{StoreAccess, StoreClient};
use tracing::{debug, instrument};

/// Client for the transaction store.
#[derive(Clone)]
pub struct TransactionClient {
    inner: StoreClient<Transaction>,
}

impl TransactionClient {
    pub fn new(inner: StoreClient<Transaction>) -> Self {
        Self { inner }
    }

    /// Records a purchase. The customer must exist.
    #[instrument(skip(self))]
    pub async fn create_transaction(
        &self,
        params: TransactionCreate,
    ) -> Result<Transaction, MarketError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_transaction(&self, id: &str) -> Result<Option<Transaction>, MarketError> {
        self.find(id.to_string()).await
    }
}

#[async_trait]
impl StoreAccess<Transaction> for TransactionClient {
    type Error = MarketError;

    fn inner(&self) -> &StoreClient<Transaction> {
        &self.inner
    }
}
