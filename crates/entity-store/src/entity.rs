//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every record kind (Customer, Producer, Coffee, …)
//! implements to be kept by the generic [`EntityStore`](crate::EntityStore). It names the
//! id type, the create and patch payloads, the runtime context and the error type, and
//! provides the lifecycle hooks (`on_create`, `on_update`, `on_delete`).
//!
//! # Architecture Note
//! One contract for every record kind means the store loop is written *once*. The
//! associated types keep payloads apart: a `CoffeeCreate` can never reach the
//! customer store.
//!
//! # Provided Methods (Hooks)
//! - [`StoreEntity::requested_id`]: ids chosen by the caller instead of the store's sequence.
//! - [`StoreEntity::owner_id`]: the owning reference matched by [`Criteria::Owner`](crate::Criteria::Owner).
//! - [`StoreEntity::on_create`] and [`StoreEntity::on_delete`]: default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record kind must implement to be kept by an `EntityStore`.
///
/// # Async & Context
/// The hooks are `#[async_trait]` so they can query other stores. `Context` is
/// injected into every hook when the store is started with `run(context)`
/// ("late binding"), which is how foreign-key checks reach the owning store.
#[async_trait]
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// Primary key, unique within a store.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<String>;

    /// Fields accepted by `create`.
    type Create: Send + Sync + Debug;

    /// Partial update; every field is optional.
    type Patch: Send + Sync + Debug;

    /// Dependencies injected at `run()` time. Use `()` when none are needed.
    type Context: Send + Sync;

    /// Per-kind error raised by the hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The record's primary key.
    fn id(&self) -> &Self::Id;

    /// Id explicitly requested by a create payload. `None` lets the store
    /// draw the next id from its sequence.
    fn requested_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Id of the record that owns this one (e.g. the customer of a transaction).
    fn owner_id(&self) -> Option<&str> {
        None
    }

    /// Build the full record from its id and create payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is built and before it is inserted.
    /// A failure here aborts the insert.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Merge a patch into the stored record.
    async fn on_update(&mut self, patch: Self::Patch, _ctx: &Self::Context)
        -> Result<(), Self::Error>;

    /// Called before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
