//! Plain records and their payloads. Store behavior lives in [`crate::stores`].

pub mod coffee;
pub mod customer;
pub mod geo;
pub mod picture;
pub mod producer;
pub mod route;
pub mod shipper;
pub mod transaction;

pub use coffee::*;
pub use customer::*;
pub use geo::*;
pub use picture::*;
pub use producer::*;
pub use route::*;
pub use shipper::*;
pub use transaction::*;

use serde::{Deserialize, Deserializer};

/// Deserializes a present field (even `null`) as `Some`, so that together with
/// `#[serde(default)]` a missing field stays `None` and `null` becomes `Some(None)`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
