//! # Store Errors
//!
//! Every failure that can come back from a store, whether the store task is gone,
//! a constraint was violated, or an entity hook refused the request.

/// Errors raised by the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    Closed,
    #[error("Store dropped response channel")]
    Dropped,
    #[error("Duplicate id: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// True when the store task can no longer serve requests.
    pub fn is_transport(&self) -> bool {
        matches!(self, StoreError::Closed | StoreError::Dropped)
    }
}
