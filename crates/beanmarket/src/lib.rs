//! # Beanmarket
//!
//! Data access for a coffee marketplace: producers list coffees, customers buy them,
//! shippers move them. Every record kind lives in its own
//! [`EntityStore`](entity_store::EntityStore) task.
//!
//! ## Layers
//!
//! 1. **Model** ([`model`]) - records and their create / patch payloads
//! 2. **Stores** ([`stores`]) - per-kind hooks: id assignment, owner checks, patch merging
//! 3. **Access** ([`clients`]) - typed operations per kind (create, get, update, ledgers)
//! 4. **Identity** ([`identity`]) - which kind an authenticated id belongs to, and
//!    profile updates routed to it
//! 5. **Lifecycle** ([`lifecycle`]) - starting, wiring and stopping the stores
//!
//! The `beanmarket` binary fills a fresh set of stores from the JSON fixtures (see [`seed`]).
//!
//! ## Example
//!
//! ```no_run
//! use beanmarket::identity::{Identity, ProfilePatch};
//! use beanmarket::lifecycle::MarketSystem;
//! use beanmarket::model::CustomerCreate;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = MarketSystem::new(32);
//! system
//!     .customers
//!     .create_customer(CustomerCreate {
//!         id: Some("c1".into()),
//!         email: "alice@example.com".into(),
//!     })
//!     .await?;
//!
//! let patch: ProfilePatch =
//!     serde_json::from_str(r#"{"customer_name":"Alicia","country":"FR"}"#)?;
//! let updated = system.identity.apply_update("c1", patch).await?;
//! if let Some(Identity::Customer(me)) = updated {
//!     assert_eq!(me.country.as_deref(), Some("FR"));
//! }
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod model;
pub mod seed;
pub mod stores;

pub use error::MarketError;
