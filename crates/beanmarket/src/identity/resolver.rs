use super::{Identity, IdentityKind, ProfilePatch};
use crate::clients::{CustomerClient, ProducerClient, ShipperClient};
use crate::error::MarketError;
use tracing::{debug, info, instrument};

/// Finds which kind an id belongs to and routes profile updates to it.
///
/// Holds no state of its own; every call goes to the stores.
#[derive(Clone)]
pub struct IdentityResolver {
    producers: ProducerClient,
    customers: CustomerClient,
    shippers: ShipperClient,
}

impl IdentityResolver {
    pub fn new(
        producers: ProducerClient,
        customers: CustomerClient,
        shippers: ShipperClient,
    ) -> Self {
        Self {
            producers,
            customers,
            shippers,
        }
    }

    /// Asks the stores in [`IdentityKind::PRIORITY`] order and returns the first hit.
    ///
    /// `Ok(None)` when no store knows the id. A failing store aborts the lookup.
    #[instrument(skip(self))]
    pub async fn resolve(&self, id: &str) -> Result<Option<Identity>, MarketError> {
        for kind in IdentityKind::PRIORITY {
            if let Some(identity) = self.resolve_as(kind, id).await? {
                info!(%kind, "Identity resolved");
                return Ok(Some(identity));
            }
        }
        debug!("No identity found");
        Ok(None)
    }

    /// Looks the id up in the store of `kind` only.
    pub async fn resolve_as(
        &self,
        kind: IdentityKind,
        id: &str,
    ) -> Result<Option<Identity>, MarketError> {
        debug!(%kind, id, "Lookup");
        let identity = match kind {
            IdentityKind::Producer => self.producers.get_producer(id).await?.map(Identity::from),
            IdentityKind::Customer => self.customers.get_customer(id).await?.map(Identity::from),
            IdentityKind::Shipper => self.shippers.get_shipper(id).await?.map(Identity::from),
        };
        Ok(identity)
    }

    /// Applies `patch` to whichever record owns `id`.
    ///
    /// The patch is narrowed to the resolved kind's editable fields. Returns the
    /// record as read back after the update, or `None` (with no update issued)
    /// when the id is unknown.
    #[instrument(skip(self))]
    pub async fn apply_update(
        &self,
        id: &str,
        patch: ProfilePatch,
    ) -> Result<Option<Identity>, MarketError> {
        let Some(identity) = self.resolve(id).await? else {
            return Ok(None);
        };

        let updated = match identity.kind() {
            IdentityKind::Producer => self
                .producers
                .update_producer(id, patch.for_producer())
                .await?
                .map(Identity::Producer),
            IdentityKind::Customer => self
                .customers
                .update_customer(id, patch.for_customer())
                .await?
                .map(Identity::Customer),
            IdentityKind::Shipper => self
                .shippers
                .update_shipper(id, patch.for_shipper())
                .await?
                .map(Identity::Shipper),
        };
        Ok(updated)
    }
}
