//! Type-safe wrappers around [`StoreClient`](entity_store::StoreClient), one per record kind.
//!
//! Every client implements [`StoreAccess`](entity_store::StoreAccess) for the standard
//! `find`, `find_all` and `delete`, and adds the kind-specific operations on top.
//! Updates only touch the fields the kind allows and answer with the record as it
//! reads back after the write.

pub mod coffee_client;
pub mod customer_client;
pub mod picture_client;
pub mod producer_client;
pub mod route_client;
pub mod shipper_client;
pub mod transaction_client;

pub use coffee_client::*;
pub use customer_client::*;
pub use picture_client::*;
pub use producer_client::*;
pub use route_client::*;
pub use shipper_client::*;
pub use transaction_client::*;
