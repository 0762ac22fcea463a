//! # Mock Data Population
//!
//! Loads the fixture datasets and inserts them through the access clients.
//!
//! Kinds are inserted one after another, owners before the records that reference
//! them: customers, producers, pictures, coffees, transactions. Records of one kind
//! are sent concurrently. The first failure stops the run; whatever was inserted
//! before it stays in the stores.

use crate::error::MarketError;
use crate::lifecycle::MarketSystem;
use crate::model::{
    CoffeeCreate, CustomerCreate, PictureCreate, ProducerCreate, TransactionCreate,
};
use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::future::Future;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Role of a signed-up user. Only consumers and producers are seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Consumer,
    Producer,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserFixture {
    pub id: String,
    pub role: UserRole,
    pub email: String,
}

/// The four datasets read from the fixtures directory.
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub users: Vec<UserFixture>,
    pub coffees: Vec<CoffeeCreate>,
    pub pictures: Vec<PictureCreate>,
    pub transactions: Vec<TransactionCreate>,
}

impl Fixtures {
    pub const USERS: &'static str = "users.json";
    pub const COFFEES: &'static str = "coffees.json";
    pub const PICTURES: &'static str = "pictures.json";
    pub const TRANSACTIONS: &'static str = "transactions.json";

    /// Reads every dataset from `dir`.
    pub async fn load(dir: &Path) -> Result<Self, FixtureError> {
        let fixtures = Self {
            users: read_dataset(&dir.join(Self::USERS)).await?,
            coffees: read_dataset(&dir.join(Self::COFFEES)).await?,
            pictures: read_dataset(&dir.join(Self::PICTURES)).await?,
            transactions: read_dataset(&dir.join(Self::TRANSACTIONS)).await?,
        };
        info!(
            users = fixtures.users.len(),
            coffees = fixtures.coffees.len(),
            pictures = fixtures.pictures.len(),
            transactions = fixtures.transactions.len(),
            "Fixtures loaded"
        );
        Ok(fixtures)
    }

    fn users_with(&self, role: UserRole) -> impl Iterator<Item = &UserFixture> {
        self.users.iter().filter(move |user| user.role == role)
    }

    /// Consumer users as customer payloads.
    pub fn customers(&self) -> impl Iterator<Item = CustomerCreate> + '_ {
        self.users_with(UserRole::Consumer).map(Into::into)
    }

    /// Producer users as producer payloads.
    pub fn producers(&self) -> impl Iterator<Item = ProducerCreate> + '_ {
        self.users_with(UserRole::Producer).map(Into::into)
    }
}

impl From<&UserFixture> for CustomerCreate {
    fn from(user: &UserFixture) -> Self {
        CustomerCreate {
            id: Some(user.id.clone()),
            email: user.email.clone(),
        }
    }
}

impl From<&UserFixture> for ProducerCreate {
    fn from(user: &UserFixture) -> Self {
        ProducerCreate {
            id: Some(user.id.clone()),
            email: user.email.clone(),
        }
    }
}

async fn read_dataset<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, FixtureError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    match serde_json::from_str(&raw) {
        Ok(records) => Ok(records),
        Err(source) => Err(FixtureError::Parse {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Number of records inserted per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub customers: usize,
    pub producers: usize,
    pub pictures: usize,
    pub coffees: usize,
    pub transactions: usize,
}

/// Inserts all fixtures into `system`.
pub async fn populate(
    system: &MarketSystem,
    fixtures: &Fixtures,
) -> Result<SeedReport, MarketError> {
    let customers = insert_all("users", fixtures.customers(), |params| {
        system.customers.create_customer(params)
    })
    .await?;

    let producers = insert_all("producers", fixtures.producers(), |params| {
        system.producers.create_producer(params)
    })
    .await?;

    let payloads = fixtures.pictures.iter().cloned();
    let pictures = insert_all("picture", payloads, |params| {
        system.pictures.create_picture(params)
    })
    .await?;

    let payloads = fixtures.coffees.iter().cloned();
    let coffees = insert_all("coffees", payloads, |params| {
        system.coffees.create_coffee(params)
    })
    .await?;

    let payloads = fixtures.transactions.iter().cloned();
    let transactions = insert_all("transaction", payloads, |params| {
        system.transactions.create_transaction(params)
    })
    .await?;

    info!("Database populated with mock data!");
    Ok(SeedReport {
        customers,
        producers,
        pictures,
        coffees,
        transactions,
    })
}

async fn insert_all<P, R, F, Fut>(
    label: &str,
    payloads: impl Iterator<Item = P>,
    insert: F,
) -> Result<usize, MarketError>
where
    F: FnMut(P) -> Fut,
    Fut: Future<Output = Result<R, MarketError>>,
{
    let inserted = try_join_all(payloads.map(insert)).await?;
    debug!(label, size = inserted.len(), "Batch complete");
    info!("Inserted {label} mock data!");
    Ok(inserted.len())
}
