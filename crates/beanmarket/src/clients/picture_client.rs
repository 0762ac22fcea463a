use crate::error::MarketError;
use crate::model::{Picture, PictureCreate};
use async_trait::async_trait;
use entity_store::{StoreAccess, StoreClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct PictureClient {
    inner: StoreClient<Picture>,
}

impl PictureClient {
    pub fn new(inner: StoreClient<Picture>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_picture(&self, params: PictureCreate) -> Result<Picture, MarketError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_picture(&self, id: &str) -> Result<Option<Picture>, MarketError> {
        self.find(id.to_string()).await
    }
}

#[async_trait]
impl StoreAccess<Picture> for PictureClient {
    type Error = MarketError;

    fn inner(&self) -> &StoreClient<Picture> {
        &self.inner
    }
}
