//! # Entity Store
//!
//! In-process persistence for typed records. Each record kind gets its own store task
//! holding a table keyed by id, and callers talk to it through a cloneable, typed client.
//! The store is constructed explicitly and torn down by dropping its clients, so every
//! test can run against a fresh set of stores or against [`mock::MockStore`].
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`StoreEntity`]) - the record, its payloads and hooks
//! 2. **Runtime Layer** ([`EntityStore`]) - the table and the sequential request loop
//! 3. **Interface Layer** ([`StoreClient`], [`StoreAccess`]) - type-safe requests
//!
//! ## Operations
//!
//! The persistence contract mirrors what a relational table offers:
//!
//! | Operation | Answer |
//! |-----------|--------|
//! | `create(fields)` | the stored record |
//! | `find(id)` | the record or `None` |
//! | `find_all(criteria)` | matching records, in creation order |
//! | `update(id, patch)` | affected count (the record is *not* returned) |
//! | `delete(id)` | affected count |
//!
//! ## Context Injection
//!
//! Dependencies are handed to a store when it starts (`run(context)`), not when it is
//! constructed. A coffee store can therefore check its producer against the producer store
//! in `on_create` without the two being built in any particular order.
//!
//! ## Concurrency Model
//!
//! - Each store runs in its own Tokio task
//! - Requests are processed **sequentially** within a store
//! - Different stores run in **parallel**
//! - No multi-request transactions: a read after an update is a separate request

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::EntityStore;
pub use client::StoreClient;
pub use client_trait::StoreAccess;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Criteria, Response, StoreRequest};
