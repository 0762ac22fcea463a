//! [`StoreEntity`](entity_store::StoreEntity) implementations, one store per record kind.
//!
//! Each submodule has a `new(capacity)` factory returning the store and its raw client.
//! Wiring the stores together and wrapping the clients is the job of
//! [`MarketSystem`](crate::lifecycle::MarketSystem).
//!
//! Owned kinds (coffees, transactions, pictures) receive their owner's store as
//! `Context` and refuse records whose owner does not exist.

pub mod coffee;
pub mod customer;
pub mod error;
pub mod picture;
pub mod producer;
pub mod route;
pub mod shipper;
pub mod transaction;

pub use error::*;

use entity_store::{StoreClient, StoreEntity};
use tracing::debug;

/// Foreign-key check used by the `on_create` hooks of owned records.
pub(crate) async fn require_owner<O>(
    owners: &StoreClient<O>,
    kind: &'static str,
    id: &str,
) -> Result<(), RecordError>
where
    O: StoreEntity<Id = String>,
{
    let found = owners.find(id.to_string()).await?.is_some();
    debug!(kind, id, found, "Owner check");
    if found {
        Ok(())
    } else {
        Err(RecordError::MissingOwner {
            kind,
            id: id.to_string(),
        })
    }
}
