//! Fills a fresh set of marketplace stores with the fixture datasets.

use anyhow::Context;
use beanmarket::config::SeedConfig;
use beanmarket::lifecycle::{setup_tracing, MarketSystem};
use beanmarket::seed::{populate, Fixtures};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Seeding failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = SeedConfig::from_env().context("invalid configuration")?;
    let fixtures = Fixtures::load(&config.fixtures_dir).await?;

    let system = MarketSystem::new(config.store_capacity);
    info!(
        settle_ms = config.settle_delay.as_millis() as u64,
        "Waiting before populating"
    );
    tokio::time::sleep(config.settle_delay).await;

    let outcome = populate(&system, &fixtures).await;
    system.shutdown().await?;

    let report = outcome.context("population aborted")?;
    info!(?report, "Seed complete");
    Ok(())
}
