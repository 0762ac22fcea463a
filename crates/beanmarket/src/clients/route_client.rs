use crate::error::MarketError;
use crate::model::{Route, RouteCreate};
use async_trait::async_trait;
use entity_store::{StoreAccess, StoreClient};
use tracing::{debug, instrument};

/// Client for the route store.
#[derive(Clone)]
pub struct RouteClient {
    inner: StoreClient<Route>,
}

impl RouteClient {
    pub fn new(inner: StoreClient<Route>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_route(&self, params: RouteCreate) -> Result<Route, MarketError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_route(&self, id: &str) -> Result<Option<Route>, MarketError> {
        self.find(id.to_string()).await
    }
}

#[async_trait]
impl StoreAccess<Route> for RouteClient {
    type Error = MarketError;

    fn inner(&self) -> &StoreClient<Route> {
        &self.inner
    }
}
