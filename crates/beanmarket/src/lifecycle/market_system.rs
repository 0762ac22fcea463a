use crate::clients::{
    CoffeeClient, CustomerClient, PictureClient, ProducerClient, RouteClient, ShipperClient,
    TransactionClient,
};
use crate::identity::IdentityResolver;
use crate::stores;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Store task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// Owns every store task of the marketplace and the clients that reach them.
///
/// # Wiring
///
/// Stores that own nothing start with `()` as context. Owned kinds start with their
/// owner's raw store client so `on_create` can check the reference:
///
/// | Store | Context |
/// |-------|---------|
/// | Coffee | producer store |
/// | Transaction | customer store |
/// | Picture | customer store |
///
/// The graph has no cycles, which is what lets [`MarketSystem::shutdown`] finish:
/// once the clients are gone the owned stores stop, drop their context, and the owner
/// stores stop in turn.
///
/// # Example
///
/// ```ignore
/// let system = MarketSystem::new(32);
/// let params = CustomerCreate { id: Some("c1".into()), email };
/// let alice = system.customers.create_customer(params).await?;
/// let me = system.identity.resolve("c1").await?;
/// system.shutdown().await?;
/// ```
pub struct MarketSystem {
    pub producers: ProducerClient,
    pub customers: CustomerClient,
    pub shippers: ShipperClient,
    pub coffees: CoffeeClient,
    pub transactions: TransactionClient,
    pub pictures: PictureClient,
    pub routes: RouteClient,
    pub identity: IdentityResolver,

    handles: Vec<JoinHandle<()>>,
}

impl MarketSystem {
    /// Spawns one task per store. Must be called inside a Tokio runtime.
    ///
    /// `store_capacity` is the request buffer of each store and must be non-zero.
    pub fn new(store_capacity: usize) -> Self {
        let (producer_store, producer_client) = stores::producer::new(store_capacity);
        let (customer_store, customer_client) = stores::customer::new(store_capacity);
        let (shipper_store, shipper_client) = stores::shipper::new(store_capacity);
        let (coffee_store, coffee_client) = stores::coffee::new(store_capacity);
        let (transaction_store, transaction_client) = stores::transaction::new(store_capacity);
        let (picture_store, picture_client) = stores::picture::new(store_capacity);
        let (route_store, route_client) = stores::route::new(store_capacity);

        let handles = vec![
            tokio::spawn(producer_store.run(())),
            tokio::spawn(customer_store.run(())),
            tokio::spawn(shipper_store.run(())),
            tokio::spawn(route_store.run(())),
            tokio::spawn(coffee_store.run(producer_client.clone())),
            tokio::spawn(transaction_store.run(customer_client.clone())),
            tokio::spawn(picture_store.run(customer_client.clone())),
        ];

        let producers = ProducerClient::new(producer_client, coffee_client.clone());
        let customers = CustomerClient::new(
            customer_client,
            transaction_client.clone(),
            picture_client.clone(),
        );
        let shippers = ShipperClient::new(shipper_client);
        let identity =
            IdentityResolver::new(producers.clone(), customers.clone(), shippers.clone());

        info!(store_capacity, stores = handles.len(), "Stores started");

        Self {
            producers,
            customers,
            shippers,
            coffees: CoffeeClient::new(coffee_client),
            transactions: TransactionClient::new(transaction_client),
            pictures: PictureClient::new(picture_client),
            routes: RouteClient::new(route_client),
            identity,
            handles,
        }
    }

    /// Drops every client and waits for the store tasks to finish.
    ///
    /// Clones of the clients held elsewhere keep their stores alive, so they must be
    /// dropped before calling this.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down stores...");

        drop(self.identity);
        drop(self.producers);
        drop(self.customers);
        drop(self.shippers);
        drop(self.coffees);
        drop(self.transactions);
        drop(self.pictures);
        drop(self.routes);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                return Err(e.into());
            }
        }

        info!("Shutdown complete.");
        Ok(())
    }
}
