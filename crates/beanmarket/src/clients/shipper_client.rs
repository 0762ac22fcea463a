use crate::error::MarketError;
use crate::model::{Shipper, ShipperCreate, ShipperPatch};
use async_trait::async_trait;
use entity_store::{StoreAccess, StoreClient};
use tracing::{debug, instrument};

/// Client for the shipper store.
#[derive(Clone)]
pub struct ShipperClient {
    inner: StoreClient<Shipper>,
}

impl ShipperClient {
    pub fn new(inner: StoreClient<Shipper>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_shipper(&self, params: ShipperCreate) -> Result<Shipper, MarketError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_shipper(&self, id: &str) -> Result<Option<Shipper>, MarketError> {
        self.find(id.to_string()).await
    }

    #[instrument(skip(self))]
    pub async fn update_shipper(
        &self,
        id: &str,
        patch: ShipperPatch,
    ) -> Result<Option<Shipper>, MarketError> {
        debug!("Sending request");
        let affected = self.inner.update(id.to_string(), patch).await?;
        debug!(affected, "Update applied");
        Ok(self.inner.find(id.to_string()).await?)
    }
}

#[async_trait]
impl StoreAccess<Shipper> for ShipperClient {
    type Error = MarketError;

    fn inner(&self) -> &StoreClient<Shipper> {
        &self.inner
    }
}
