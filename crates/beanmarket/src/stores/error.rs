//! Errors raised by record hooks inside the stores.

use entity_store::StoreError;
use thiserror::Error;

/// A record was refused by its store.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record references an owner that does not exist.
    #[error("{kind} not found: {id}")]
    MissingOwner { kind: &'static str, id: String },

    /// The owner could not be looked up.
    #[error("Owner lookup failed: {0}")]
    OwnerLookup(#[from] StoreError),
}
