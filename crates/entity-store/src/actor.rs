//! # Generic Entity Store
//!
//! This module defines the `EntityStore`, the task that owns every record of one kind.
//! It is the "server" side: requests arrive over a channel and are processed one at a
//! time, so the table needs no locking.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic store that keeps a table of records.
///
/// **Concurrency Model**:
/// Each store runs in its own Tokio task and handles its requests *sequentially*.
/// The table is owned by the task, which is why no `Mutex` is needed. Several stores
/// run in parallel with one another.
///
/// # Usage Pattern
///
/// 1.  **Create**: `EntityStore::new()` returns the store (server) and a client.
/// 2.  **Wire**: pass dependencies (other clients) into `store.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use async_trait::async_trait;
/// use entity_store::{EntityStore, StoreEntity};
///
/// #[derive(Clone, Debug)] struct Bag { id: String, label: String }
/// #[derive(Debug)] struct BagCreate { label: String }
/// #[derive(Debug)] struct BagPatch { label: Option<String> }
/// #[derive(Debug, thiserror::Error)] #[error("bag error")] struct BagError;
///
/// #[async_trait]
/// impl StoreEntity for Bag {
///     type Id = String; type Create = BagCreate; type Patch = BagPatch;
///     type Context = (); type Error = BagError;
///     fn id(&self) -> &String { &self.id }
///     fn from_create_params(id: String, p: BagCreate) -> Result<Self, BagError> {
///         Ok(Self { id, label: p.label })
///     }
///     async fn on_update(&mut self, p: BagPatch, _: &()) -> Result<(), BagError> {
///         if let Some(label) = p.label { self.label = label; }
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (store, client) = EntityStore::<Bag>::new("bag", 10);
///     tokio::spawn(store.run(()));
///     let bag = client.create(BagCreate { label: "washed".into() }).await.unwrap();
///     assert_eq!(bag.id, "bag_1");
/// }
/// ```
///
/// # Operations
///
/// * **Create**: takes the requested id or the next `<prefix>_<n>` id, rejects duplicates,
///   builds the record, runs `on_create`, inserts it and answers with a clone.
/// * **Find**: clone of the record, or `None`.
/// * **FindAll**: clones of every matching record, in creation order.
/// * **Update**: runs `on_update` on the stored record; answers `1`, or `0` when the id is unknown.
/// * **Delete**: runs `on_delete` and removes the record; answers `1`, or `0` when the id is unknown.
pub struct EntityStore<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    /// Records keyed by insertion sequence, so iteration is creation order.
    rows: BTreeMap<u64, T>,
    index: BTreeMap<T::Id, u64>,
    inserted: u64,
    prefix: String,
    next_seq: u64,
}

impl<T: StoreEntity> EntityStore<T> {
    /// Creates a new store and its client.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prefix of generated ids (`coffee` yields `coffee_1`, `coffee_2`, …).
    /// * `buffer_size` - Capacity of the request channel. Callers wait when it is full.
    pub fn new(prefix: impl Into<String>, buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            rows: BTreeMap::new(),
            index: BTreeMap::new(),
            inserted: 0,
            prefix: prefix.into(),
            next_seq: 1,
        };
        (store, StoreClient::new(sender))
    }

    fn next_id(&mut self) -> T::Id {
        loop {
            let candidate = T::Id::from(format!("{}_{}", self.prefix, self.next_seq));
            self.next_seq += 1;
            if !self.index.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    fn insert(&mut self, id: T::Id, item: T) {
        self.inserted += 1;
        self.index.insert(id, self.inserted);
        self.rows.insert(self.inserted, item);
    }

    fn get(&self, id: &T::Id) -> Option<&T> {
        self.rows.get(self.index.get(id)?)
    }

    fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        let seq = self.index.get(id)?;
        self.rows.get_mut(seq)
    }

    /// Runs the store's event loop until every client is dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every hook, letting records consult stores that were
    /// created *after* this one but before the loop started.
    pub async fn run(mut self, context: T::Context) {
        // "Coffee" rather than "beanmarket::model::coffee::Coffee"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = match T::requested_id(&params) {
                        Some(id) if self.index.contains_key(&id) => {
                            warn!(entity_type, %id, "Duplicate id");
                            let _ = respond_to.send(Err(StoreError::Conflict(id.to_string())));
                            continue;
                        }
                        Some(id) => id,
                        None => self.next_id(),
                    };

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                                continue;
                            }
                            self.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.rows.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Find { id, respond_to } => {
                    let item = self.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Find");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::FindAll {
                    criteria,
                    respond_to,
                } => {
                    let items: Vec<T> = self
                        .rows
                        .values()
                        .filter(|item| criteria.matches(item.id(), item.owner_id()))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?criteria, count = items.len(), "FindAll");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Update {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?patch, "Update");
                    if let Some(item) = self.get_mut(&id) {
                        if let Err(e) = item.on_update(patch, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(1));
                    } else {
                        debug!(entity_type, %id, "Update matched nothing");
                        let _ = respond_to.send(Ok(0));
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                            continue;
                        }
                        if let Some(seq) = self.index.remove(&id) {
                            self.rows.remove(&seq);
                        }
                        info!(entity_type, %id, size = self.rows.len(), "Deleted");
                        let _ = respond_to.send(Ok(1));
                    } else {
                        debug!(entity_type, %id, "Delete matched nothing");
                        let _ = respond_to.send(Ok(0));
                    }
                }
            }
        }

        info!(entity_type, size = self.rows.len(), "Shutdown");
    }
}
