use crate::error::MarketError;
use crate::model::{Coffee, Producer, ProducerCatalog, ProducerCreate, ProducerPatch};
use async_trait::async_trait;
use entity_store::{Criteria, StoreAccess, StoreClient};
use tracing::{debug, instrument};

/// Client for the producer store. Reads the coffee store for catalogs.
#[derive(Clone)]
pub struct ProducerClient {
    inner: StoreClient<Producer>,
    coffees: StoreClient<Coffee>,
}

impl ProducerClient {
    pub fn new(inner: StoreClient<Producer>, coffees: StoreClient<Coffee>) -> Self {
        Self { inner, coffees }
    }

    #[instrument(skip(self))]
    pub async fn create_producer(&self, params: ProducerCreate) -> Result<Producer, MarketError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_producer(&self, id: &str) -> Result<Option<Producer>, MarketError> {
        self.find(id.to_string()).await
    }

    /// Applies `patch` and re-reads the producer; `None` when the id is unknown.
    #[instrument(skip(self))]
    pub async fn update_producer(
        &self,
        id: &str,
        patch: ProducerPatch,
    ) -> Result<Option<Producer>, MarketError> {
        debug!("Sending request");
        let affected = self.inner.update(id.to_string(), patch).await?;
        debug!(affected, "Update applied");
        Ok(self.inner.find(id.to_string()).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_producers(&self) -> Result<Vec<Producer>, MarketError> {
        debug!("Sending request");
        self.find_all(Criteria::All).await
    }

    /// The producer with every coffee it lists, or `None` for an unknown producer.
    #[instrument(skip(self))]
    pub async fn get_producer_catalog(
        &self,
        id: &str,
    ) -> Result<Option<ProducerCatalog>, MarketError> {
        let Some(producer) = self.inner.find(id.to_string()).await? else {
            return Ok(None);
        };
        let coffees = self
            .coffees
            .find_all(Criteria::Owner(id.to_string()))
            .await?;
        debug!(size = coffees.len(), "Catalog loaded");
        Ok(Some(ProducerCatalog { producer, coffees }))
    }
}

#[async_trait]
impl StoreAccess<Producer> for ProducerClient {
    type Error = MarketError;

    fn inner(&self) -> &StoreClient<Producer> {
        &self.inner
    }
}
