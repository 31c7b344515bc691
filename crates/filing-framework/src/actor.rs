//! # Collection Actor
//!
//! The in-process document store. Each resource type gets its own
//! `CollectionActor`, running in its own Tokio task and owning its documents.
//!
//! Requests are processed one at a time, so every operation on a document is
//! atomic without any locking. There is no coordination across collections.
//!
//! # Usage Pattern
//!
//! 1. **Create**: `CollectionActor::new::<F>(name, buffer)` returns the actor and a typed [`Repository`].
//! 2. **Run**: spawn `actor.run()`.
//! 3. **Use**: clone the repository into whichever services need the collection.
//!
//! ```rust
//! use filing_framework::{CollectionActor, EntityData, Links, ResourceEntity};
//! use serde::{Deserialize, Serialize};
//! use std::collections::BTreeMap;
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct StocksFields { stocks: Option<i64> }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, repository) = CollectionActor::new::<StocksFields>("stocks", 8);
//!     tokio::spawn(actor.run());
//!
//!     let entity = ResourceEntity::new("key-1", EntityData {
//!         fields: StocksFields { stocks: Some(5) },
//!         kind: "small-full-accounts-note#stocks".into(),
//!         etag: "etag".into(),
//!         links: Links::new(),
//!         children: BTreeMap::new(),
//!     });
//!     repository.insert(&entity).await.unwrap();
//!     assert!(repository.exists_by_id("key-1").await.unwrap());
//! }
//! ```
//!
//! The collection stops when every repository handle has been dropped.

use crate::client::Repository;
use crate::error::StoreError;
use crate::message::StoreRequest;
use serde_json::Value;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// One collection of JSON documents keyed by id.
pub struct CollectionActor {
    name: String,
    receiver: mpsc::Receiver<StoreRequest>,
    documents: HashMap<String, Value>,
}

impl CollectionActor {
    /// Creates a collection and a typed repository for it.
    ///
    /// `buffer_size` is the request channel capacity; callers wait when it is full.
    pub fn new<F>(name: impl Into<String>, buffer_size: usize) -> (Self, Repository<F>) {
        let name = name.into();
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            name: name.clone(),
            receiver,
            documents: HashMap::new(),
        };
        (actor, Repository::new(name, sender))
    }

    /// Processes requests until every sender has been dropped.
    pub async fn run(mut self) {
        let collection = self.name.as_str();
        info!(collection, "Collection started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                StoreRequest::Insert {
                    id,
                    document,
                    respond_to,
                } => match self.documents.entry(id) {
                    Entry::Occupied(entry) => {
                        warn!(collection, id = %entry.key(), "Duplicate key");
                        let _ = respond_to.send(Err(StoreError::DuplicateKey {
                            collection: collection.to_string(),
                            id: entry.key().clone(),
                        }));
                    }
                    Entry::Vacant(entry) => {
                        info!(collection, id = %entry.key(), "Inserted");
                        entry.insert(document);
                        let _ = respond_to.send(Ok(()));
                    }
                },
                StoreRequest::Save {
                    id,
                    document,
                    respond_to,
                } => {
                    let replaced = self.documents.insert(id.clone(), document).is_some();
                    info!(collection, %id, replaced, "Saved");
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::FindById { id, respond_to } => {
                    let document = self.documents.get(&id).cloned();
                    debug!(collection, %id, found = document.is_some(), "FindById");
                    let _ = respond_to.send(Ok(document));
                }
                StoreRequest::ExistsById { id, respond_to } => {
                    let exists = self.documents.contains_key(&id);
                    debug!(collection, %id, exists, "ExistsById");
                    let _ = respond_to.send(Ok(exists));
                }
                StoreRequest::DeleteById { id, respond_to } => {
                    let removed = self.documents.remove(&id).is_some();
                    info!(collection, %id, removed, size = self.documents.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(collection, size = self.documents.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityData, ResourceEntity};
    use crate::links::Links;
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct NoteFields {
        total: Option<i64>,
    }

    fn entity(id: &str, total: i64) -> ResourceEntity<NoteFields> {
        ResourceEntity::new(
            id,
            EntityData {
                fields: NoteFields { total: Some(total) },
                kind: "note".to_string(),
                etag: "etag".to_string(),
                links: Links::with_self("/note"),
                children: BTreeMap::new(),
            },
        )
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id() {
        let (actor, repository) = CollectionActor::new::<NoteFields>("notes", 4);
        tokio::spawn(actor.run());

        repository.insert(&entity("a", 1)).await.unwrap();
        let err = repository.insert(&entity("a", 2)).await.unwrap_err();
        assert!(err.is_duplicate_key());

        let stored = repository.find_by_id("a").await.unwrap().unwrap();
        assert_eq!(stored.fields().total, Some(1));
    }

    #[tokio::test]
    async fn test_save_replaces_and_delete_removes() {
        let (actor, repository) = CollectionActor::new::<NoteFields>("notes", 4);
        tokio::spawn(actor.run());

        repository.save(&entity("a", 1)).await.unwrap();
        repository.save(&entity("a", 7)).await.unwrap();
        let stored = repository.find_by_id("a").await.unwrap().unwrap();
        assert_eq!(stored.fields().total, Some(7));

        repository.delete_by_id("a").await.unwrap();
        assert!(!repository.exists_by_id("a").await.unwrap());
        assert!(repository.find_by_id("a").await.unwrap().is_none());

        // deleting an absent id is not an error
        repository.delete_by_id("a").await.unwrap();
    }

    #[tokio::test]
    async fn test_collection_stops_when_repositories_dropped() {
        let (actor, repository) = CollectionActor::new::<NoteFields>("notes", 4);
        let handle = tokio::spawn(actor.run());

        let clone = repository.clone();
        drop(repository);
        clone.insert(&entity("a", 1)).await.unwrap();
        drop(clone);

        handle.await.unwrap();
    }
}
