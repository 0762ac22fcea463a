//! Store implementation for [`Customer`].

use super::RecordError;
use crate::model::{Customer, CustomerCreate, CustomerPatch};
use async_trait::async_trait;
use entity_store::{EntityStore, StoreClient, StoreEntity};

pub const ID_PREFIX: &str = "customer";

/// Creates the customer store and its client.
pub fn new(capacity: usize) -> (EntityStore<Customer>, StoreClient<Customer>) {
    EntityStore::new(ID_PREFIX, capacity)
}

#[async_trait]
impl StoreEntity for Customer {
    type Id = String;
    type Create = CustomerCreate;
    type Patch = CustomerPatch;
    type Context = ();
    type Error = RecordError;

    fn id(&self) -> &String {
        &self.id
    }

    fn requested_id(params: &CustomerCreate) -> Option<String> {
        params.id.clone()
    }

    /// Only the email is taken at creation; the profile is filled in by updates.
    fn from_create_params(id: String, params: CustomerCreate) -> Result<Self, RecordError> {
        Ok(Self::new(id, params.email))
    }

    /// # Fields Updated
    /// - `customer_name`
    /// - `country`
    /// - `description`
    /// - `geo_location` (`Some(None)` clears it)
    async fn on_update(&mut self, patch: CustomerPatch, _ctx: &()) -> Result<(), RecordError> {
        if let Some(name) = patch.customer_name {
            self.customer_name = Some(name);
        }
        if let Some(country) = patch.country {
            self.country = Some(country);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(location) = patch.geo_location {
            self.geo_location = location;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GeoPoint;

    fn located() -> Customer {
        Customer {
            customer_name: Some("Alice".into()),
            description: Some("Espresso only".into()),
            geo_location: Some(GeoPoint::new(45.76, 4.83)),
            ..Customer::new("c1", "alice@example.com")
        }
    }

    #[tokio::test]
    async fn empty_patch_changes_nothing() {
        let mut customer = located();
        customer
            .on_update(CustomerPatch::default(), &())
            .await
            .unwrap();
        assert_eq!(customer, located());
    }

    #[tokio::test]
    async fn present_empty_string_overwrites() {
        let mut customer = located();
        let patch = CustomerPatch {
            description: Some(String::new()),
            ..Default::default()
        };
        customer.on_update(patch, &()).await.unwrap();

        assert_eq!(customer.description.as_deref(), Some(""));
        assert_eq!(customer.customer_name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn explicit_null_clears_location() {
        let mut customer = located();
        let patch = CustomerPatch {
            geo_location: Some(None),
            ..Default::default()
        };
        customer.on_update(patch, &()).await.unwrap();

        assert_eq!(customer.geo_location, None);
        assert_eq!(customer.email, "alice@example.com");
    }
}
