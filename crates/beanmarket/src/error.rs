//! Errors returned by the access clients and identity resolution.

use entity_store::StoreError;
use thiserror::Error;

/// Access-layer failure. A missing record is `Ok(None)`, never an error.
#[derive(Debug, Error)]
pub enum MarketError {
    /// Raised by the store and passed through untouched.
    #[error("Persistence error: {0}")]
    Persistence(#[from] StoreError),

    /// The named operation exists in the API but has no behavior yet.
    #[error("Operation not implemented: {0}")]
    NotImplemented(&'static str),
}
