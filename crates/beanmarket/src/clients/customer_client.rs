use crate::error::MarketError;
use crate::model::{Customer, CustomerCreate, CustomerLedger, CustomerPatch, Picture, Transaction};
use async_trait::async_trait;
use entity_store::{Criteria, StoreAccess, StoreClient};
use tracing::{debug, info, instrument};

/// Client for the customer store.
///
/// Also holds the transaction and picture stores: a customer's ledger and the
/// cascade on delete span all three.
#[derive(Clone)]
pub struct CustomerClient {
    inner: StoreClient<Customer>,
    transactions: StoreClient<Transaction>,
    pictures: StoreClient<Picture>,
}

impl CustomerClient {
    pub fn new(
        inner: StoreClient<Customer>,
        transactions: StoreClient<Transaction>,
        pictures: StoreClient<Picture>,
    ) -> Self {
        Self {
            inner,
            transactions,
            pictures,
        }
    }

    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<Customer, MarketError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_customer(&self, id: &str) -> Result<Option<Customer>, MarketError> {
        self.find(id.to_string()).await
    }

    /// Applies `patch` and re-reads the customer.
    ///
    /// Returns `None` when no customer has this id. The re-read is a separate
    /// request, so a concurrent writer may be observed.
    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: &str,
        patch: CustomerPatch,
    ) -> Result<Option<Customer>, MarketError> {
        debug!("Sending request");
        let affected = self.inner.update(id.to_string(), patch).await?;
        debug!(affected, "Update applied");
        Ok(self.inner.find(id.to_string()).await?)
    }

    /// The customer together with all of their transactions.
    #[instrument(skip(self))]
    pub async fn get_customer_ledger(
        &self,
        id: &str,
    ) -> Result<Option<CustomerLedger>, MarketError> {
        let Some(customer) = self.inner.find(id.to_string()).await? else {
            return Ok(None);
        };
        let transactions = self
            .transactions
            .find_all(Criteria::Owner(id.to_string()))
            .await?;
        debug!(size = transactions.len(), "Ledger loaded");
        Ok(Some(CustomerLedger {
            customer,
            transactions,
        }))
    }

    /// Removes the customer along with their transactions and pictures.
    ///
    /// Owned records go first. Returns whether the customer existed. This is also
    /// what [`StoreAccess::delete`] does for customers.
    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: &str) -> Result<bool, MarketError> {
        let owner = Criteria::Owner(id.to_string());

        let transactions = self.transactions.find_all(owner.clone()).await?;
        for transaction in &transactions {
            self.transactions.delete(transaction.id.clone()).await?;
        }

        let pictures = self.pictures.find_all(owner).await?;
        for picture in &pictures {
            self.pictures.delete(picture.id.clone()).await?;
        }

        let removed = self.inner.delete(id.to_string()).await? > 0;
        info!(
            removed,
            transactions = transactions.len(),
            pictures = pictures.len(),
            "Customer deleted"
        );
        Ok(removed)
    }
}

#[async_trait]
impl StoreAccess<Customer> for CustomerClient {
    type Error = MarketError;

    fn inner(&self) -> &StoreClient<Customer> {
        &self.inner
    }

    /// Cascades to the customer's transactions and pictures.
    async fn delete(&self, id: String) -> Result<bool, MarketError> {
        self.delete_customer(&id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GeoPoint;
    use entity_store::mock::MockStore;
    use entity_store::StoreError;

    fn alice() -> Customer {
        Customer {
            customer_name: Some("Alice".into()),
            ..Customer::new("c1", "alice@example.com")
        }
    }

    #[tokio::test]
    async fn update_rereads_after_write() {
        let mut customers = MockStore::<Customer>::new();
        let transactions = MockStore::<Transaction>::new();
        let pictures = MockStore::<Picture>::new();

        let located = Customer {
            geo_location: Some(GeoPoint::new(48.85, 2.35)),
            ..alice()
        };
        customers.expect_update("c1".into()).return_ok(1);
        customers
            .expect_find("c1".into())
            .return_ok(Some(located.clone()));

        let client = CustomerClient::new(
            customers.client(),
            transactions.client(),
            pictures.client(),
        );
        let patch = CustomerPatch {
            geo_location: Some(Some(GeoPoint::new(48.85, 2.35))),
            ..Default::default()
        };

        let updated = client.update_customer("c1", patch).await.unwrap();
        assert_eq!(updated, Some(located));
        customers.verify();
    }

    #[tokio::test]
    async fn update_of_unknown_customer_is_none() {
        let mut customers = MockStore::<Customer>::new();
        let transactions = MockStore::<Transaction>::new();
        let pictures = MockStore::<Picture>::new();
        customers.expect_update("ghost".into()).return_ok(0);
        customers.expect_find("ghost".into()).return_ok(None);

        let client = CustomerClient::new(
            customers.client(),
            transactions.client(),
            pictures.client(),
        );
        let updated = client
            .update_customer("ghost", CustomerPatch::default())
            .await
            .unwrap();

        assert_eq!(updated, None);
        customers.verify();
    }

    #[tokio::test]
    async fn store_failure_is_passed_through() {
        let mut customers = MockStore::<Customer>::new();
        let transactions = MockStore::<Transaction>::new();
        let pictures = MockStore::<Picture>::new();
        customers
            .expect_find("c1".into())
            .return_err(StoreError::Closed);

        let client = CustomerClient::new(
            customers.client(),
            transactions.client(),
            pictures.client(),
        );
        let result = client.get_customer("c1").await;

        assert!(matches!(
            result,
            Err(MarketError::Persistence(StoreError::Closed))
        ));
        customers.verify();
    }

    #[tokio::test]
    async fn ledger_of_unknown_customer_skips_transactions() {
        let mut customers = MockStore::<Customer>::new();
        let transactions = MockStore::<Transaction>::new();
        let pictures = MockStore::<Picture>::new();
        customers.expect_find("ghost".into()).return_ok(None);

        let client = CustomerClient::new(
            customers.client(),
            transactions.client(),
            pictures.client(),
        );
        assert_eq!(client.get_customer_ledger("ghost").await.unwrap(), None);

        customers.verify();
        transactions.verify();
    }
}
