//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); every store tags its
//! lines with `entity_type` instead.
//!
//! ```bash
//! # Progress only
//! RUST_LOG=info cargo run -p beanmarket
//!
//! # Every store request, with payloads
//! RUST_LOG=debug cargo run -p beanmarket
//! ```
//!
//! With `RUST_LOG=info` a seed run reads:
//!
//! ```text
//! INFO Configuration loaded fixtures_dir=fixtures settle_ms=2000 store_capacity=32
//! INFO Stores started store_capacity=32 stores=7
//! INFO Created entity_type="Customer" id=c1 size=1
//! INFO Inserted users mock data!
//! INFO Database populated with mock data!
//! ```
//!
//! Client methods are `#[instrument]`ed, so at `debug` level each store line is shown
//! inside the span of the call that caused it (`resolve:update_customer: ...`).

/// Initializes the global subscriber. Call once, from the binary.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
