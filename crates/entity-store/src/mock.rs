//! # Mock Store & Testing Guide
//!
//! `MockStore<T>` hands out a real [`StoreClient<T>`](crate::StoreClient) whose requests are
//! answered from a queue of expectations instead of a table. Code that sits *above* a store
//! (access clients, identity resolution) can be tested deterministically, including
//! failures that are awkward to provoke with a real store.
//!
//! ## When to use the mock vs a real store
//!
//! | Feature | MockStore | EntityStore |
//! |---------|-----------|-------------|
//! | **State** | None (scripted answers) | Real table |
//! | **Call checking** | Order and kind of every request | None |
//! | **Error Injection** | `return_err` | Needs a specific setup |
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use entity_store::mock::MockStore;
//! use entity_store::{StoreEntity, StoreError};
//!
//! #[derive(Clone, Debug, PartialEq)] struct Bag { id: String }
//! #[derive(Debug)] struct BagCreate;
//! #[derive(Debug)] struct BagPatch;
//! #[derive(Debug, thiserror::Error)] #[error("bag error")] struct BagError;
//!
//! #[async_trait]
//! impl StoreEntity for Bag {
//!     type Id = String; type Create = BagCreate; type Patch = BagPatch;
//!     type Context = (); type Error = BagError;
//!     fn id(&self) -> &String { &self.id }
//!     fn from_create_params(id: String, _: BagCreate) -> Result<Self, BagError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: BagPatch, _: &()) -> Result<(), BagError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Bag>::new();
//!     mock.expect_find("bag_1".to_string()).return_ok(None);
//!     mock.expect_update("bag_1".to_string()).return_err(StoreError::Closed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.find("bag_1".to_string()).await.unwrap(), None);
//!     assert!(matches!(
//!         client.update("bag_1".to_string(), BagPatch).await,
//!         Err(StoreError::Closed)
//!     ));
//!
//!     mock.verify();
//! }
//! ```
//!
//! A request that does not match the next expectation (wrong kind, wrong id, or no
//! expectation left) is not answered: the caller sees [`StoreError::Dropped`] and
//! [`MockStore::verify`] panics with a description of the stray request.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation<T: StoreEntity> {
    Create {
        response: Result<T, StoreError>,
    },
    Find {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    FindAll {
        response: Result<Vec<T>, StoreError>,
    },
    Update {
        id: T::Id,
        response: Result<u64, StoreError>,
    },
    Delete {
        id: T::Id,
        response: Result<u64, StoreError>,
    },
}

impl<T: StoreEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Expectation::Create { .. } => "create".to_string(),
            Expectation::Find { id, .. } => format!("find({id})"),
            Expectation::FindAll { .. } => "find_all".to_string(),
            Expectation::Update { id, .. } => format!("update({id})"),
            Expectation::Delete { id, .. } => format!("delete({id})"),
        }
    }
}

fn describe_request<T: StoreEntity>(request: &StoreRequest<T>) -> String {
    match request {
        StoreRequest::Create { .. } => "create".to_string(),
        StoreRequest::Find { id, .. } => format!("find({id})"),
        StoreRequest::FindAll { criteria, .. } => format!("find_all({criteria:?})"),
        StoreRequest::Update { id, .. } => format!("update({id})"),
        StoreRequest::Delete { id, .. } => format!("delete({id})"),
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// Answers store requests from a queue of expectations.
///
/// ```ignore
/// let mut mock = MockStore::<Customer>::new();
/// mock.expect_find("c1".into()).return_ok(Some(customer));
/// let client = CustomerClient::new(mock.client(), ...);
/// // exercise the client...
/// mock.verify();
/// ```
pub struct MockStore<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Queue<T>,
    stray: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> MockStore<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let stray = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let stray_log = stray.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().map(|mut q| q.pop_front()).unwrap_or(None);

                match (request, expectation) {
                    (StoreRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Find { id, respond_to }, Some(Expectation::Find { id: want, response }))
                        if id == want =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::FindAll { respond_to, .. }, Some(Expectation::FindAll { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Update { id, respond_to, .. }, Some(Expectation::Update { id: want, response }))
                        if id == want =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: want, response }))
                        if id == want =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let wanted = expectation
                            .as_ref()
                            .map(Expectation::describe)
                            .unwrap_or_else(|| "nothing".to_string());
                        let message =
                            format!("unexpected {} (expected {wanted})", describe_request(&request));
                        tracing::warn!(%message, "Mock mismatch");
                        if let Ok(mut log) = stray_log.lock() {
                            log.push(message);
                        }
                        // respond_to is dropped with `request`; the caller sees StoreError::Dropped
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            stray,
            _handle: handle,
        }
    }

    /// A client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> CreateExpectation<T> {
        CreateExpectation {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_find(&mut self, id: T::Id) -> FindExpectation<T> {
        FindExpectation {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_find_all(&mut self) -> FindAllExpectation<T> {
        FindAllExpectation {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_update(&mut self, id: T::Id) -> CountExpectation<T> {
        CountExpectation {
            id,
            delete: false,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_delete(&mut self, id: T::Id) -> CountExpectation<T> {
        CountExpectation {
            id,
            delete: true,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every expectation was consumed and no stray request arrived.
    pub fn verify(&self) {
        let stray = self.stray.lock().map(|s| s.clone()).unwrap_or_default();
        if !stray.is_empty() {
            panic!("Unexpected store requests: {}", stray.join("; "));
        }
        let remaining: Vec<String> = self
            .expectations
            .lock()
            .map(|q| q.iter().map(Expectation::describe).collect())
            .unwrap_or_default();
        if !remaining.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining: {}",
                remaining.len(),
                remaining.join(", ")
            );
        }
    }
}

impl<T: StoreEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn push<T: StoreEntity>(queue: &Queue<T>, expectation: Expectation<T>) {
    if let Ok(mut q) = queue.lock() {
        q.push_back(expectation);
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectation<T: StoreEntity> {
    expectations: Queue<T>,
}

impl<T: StoreEntity> CreateExpectation<T> {
    pub fn return_ok(self, record: T) {
        push(&self.expectations, Expectation::Create { response: Ok(record) });
    }

    pub fn return_err(self, error: StoreError) {
        push(&self.expectations, Expectation::Create { response: Err(error) });
    }
}

/// Builder for `find` expectations.
pub struct FindExpectation<T: StoreEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: StoreEntity> FindExpectation<T> {
    pub fn return_ok(self, record: Option<T>) {
        push(
            &self.expectations,
            Expectation::Find {
                id: self.id,
                response: Ok(record),
            },
        );
    }

    pub fn return_err(self, error: StoreError) {
        push(
            &self.expectations,
            Expectation::Find {
                id: self.id,
                response: Err(error),
            },
        );
    }
}

/// Builder for `find_all` expectations.
pub struct FindAllExpectation<T: StoreEntity> {
    expectations: Queue<T>,
}

impl<T: StoreEntity> FindAllExpectation<T> {
    pub fn return_ok(self, records: Vec<T>) {
        push(&self.expectations, Expectation::FindAll { response: Ok(records) });
    }

    pub fn return_err(self, error: StoreError) {
        push(&self.expectations, Expectation::FindAll { response: Err(error) });
    }
}

/// Builder for `update` and `delete` expectations; both answer with an affected count.
pub struct CountExpectation<T: StoreEntity> {
    id: T::Id,
    delete: bool,
    expectations: Queue<T>,
}

impl<T: StoreEntity> CountExpectation<T> {
    pub fn return_ok(self, affected: u64) {
        self.respond(Ok(affected));
    }

    pub fn return_err(self, error: StoreError) {
        self.respond(Err(error));
    }

    fn respond(self, response: Result<u64, StoreError>) {
        let expectation = if self.delete {
            Expectation::Delete { id: self.id, response }
        } else {
            Expectation::Update { id: self.id, response }
        };
        push(&self.expectations, expectation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Sack {
        id: String,
        origin: String,
    }

    #[derive(Debug)]
    struct SackCreate {
        origin: String,
    }

    #[derive(Debug)]
    struct SackPatch;

    #[derive(Debug, thiserror::Error)]
    #[error("sack error")]
    struct SackError;

    #[async_trait]
    impl StoreEntity for Sack {
        type Id = String;
        type Create = SackCreate;
        type Patch = SackPatch;
        type Context = ();
        type Error = SackError;

        fn id(&self) -> &String {
            &self.id
        }

        fn from_create_params(id: String, params: SackCreate) -> Result<Self, SackError> {
            Ok(Self {
                id,
                origin: params.origin,
            })
        }

        async fn on_update(&mut self, _: SackPatch, _: &()) -> Result<(), SackError> {
            Ok(())
        }
    }

    fn sack(id: &str) -> Sack {
        Sack {
            id: id.to_string(),
            origin: "Huila".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_answers_in_order() {
        let mut mock = MockStore::<Sack>::new();
        mock.expect_create().return_ok(sack("sack_1"));
        mock.expect_find("sack_1".to_string())
            .return_ok(Some(sack("sack_1")));
        mock.expect_update("sack_1".to_string()).return_ok(1);

        let client = mock.client();
        let created = client
            .create(SackCreate {
                origin: "Huila".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, "sack_1");
        let found = client.find("sack_1".into()).await.unwrap();
        assert_eq!(found, Some(sack("sack_1")));
        assert_eq!(client.update("sack_1".into(), SackPatch).await.unwrap(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_drops_unexpected_request() {
        let mut mock = MockStore::<Sack>::new();
        mock.expect_find("sack_1".to_string()).return_ok(None);

        let client = mock.client();
        let result = client.delete("sack_1".into()).await;
        assert!(matches!(result, Err(StoreError::Dropped)));

        let verdict = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verdict.is_err());
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unused_expectations() {
        let mut mock = MockStore::<Sack>::new();
        mock.expect_find_all().return_ok(vec![]);
        mock.verify();
    }
}
