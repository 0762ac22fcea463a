use crate::error::MarketError;
use crate::model::{Coffee, CoffeeCreate, CoffeePatch};
use async_trait::async_trait;
use entity_store::{StoreAccess, StoreClient};
use tracing::{debug, instrument, warn};

/// Client for the coffee store.
#[derive(Clone)]
pub struct CoffeeClient {
    inner: StoreClient<Coffee>,
}

impl CoffeeClient {
    pub fn new(inner: StoreClient<Coffee>) -> Self {
        Self { inner }
    }

    /// Lists a coffee. Fails with a persistence error if the producer does not exist.
    #[instrument(skip(self))]
    pub async fn create_coffee(&self, params: CoffeeCreate) -> Result<Coffee, MarketError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_coffee(&self, id: &str) -> Result<Option<Coffee>, MarketError> {
        self.find(id.to_string()).await
    }

    /// Always fails with [`MarketError::NotImplemented`]; the store is not contacted.
    #[instrument(skip(self))]
    pub async fn update_coffee(
        &self,
        id: &str,
        patch: CoffeePatch,
    ) -> Result<Option<Coffee>, MarketError> {
        warn!("Coffee updates are not supported");
        Err(MarketError::NotImplemented("update_coffee"))
    }
}

#[async_trait]
impl StoreAccess<Coffee> for CoffeeClient {
    type Error = MarketError;

    fn inner(&self) -> &StoreClient<Coffee> {
        &self.inner
    }
}
