//! Starting, wiring and stopping the stores.

pub mod market_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use market_system::*;
