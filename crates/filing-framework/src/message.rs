//! # Store Messages
//!
//! The requests a [`Repository`](crate::Repository) sends to a
//! [`CollectionActor`](crate::CollectionActor).
//!
//! Documents travel as JSON values: the collection is untyped, the repository in
//! front of it is typed. This mirrors a document database, where the driver
//! maps documents to structs and the server only sees documents.
//!
//! - **Insert**: create a document; fails with a duplicate-key error if the id is taken.
//! - **Save**: insert or replace a document.
//! - **FindById**: fetch a document.
//! - **ExistsById**: check for a document without fetching it.
//! - **DeleteById**: remove a document; removing an absent id is not an error.

use crate::error::StoreError;
use serde_json::Value;
use tokio::sync::oneshot;

/// One-shot response channel used by collections.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

#[derive(Debug)]
pub enum StoreRequest {
    Insert {
        id: String,
        document: Value,
        respond_to: Response<()>,
    },
    Save {
        id: String,
        document: Value,
        respond_to: Response<()>,
    },
    FindById {
        id: String,
        respond_to: Response<Option<Value>>,
    },
    ExistsById {
        id: String,
        respond_to: Response<bool>,
    },
    DeleteById {
        id: String,
        respond_to: Response<()>,
    },
}

impl StoreRequest {
    pub fn operation(&self) -> &'static str {
        match self {
            StoreRequest::Insert { .. } => "insert",
            StoreRequest::Save { .. } => "save",
            StoreRequest::FindById { .. } => "find_by_id",
            StoreRequest::ExistsById { .. } => "exists_by_id",
            StoreRequest::DeleteById { .. } => "delete_by_id",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            StoreRequest::Insert { id, .. }
            | StoreRequest::Save { id, .. }
            | StoreRequest::FindById { id, .. }
            | StoreRequest::ExistsById { id, .. }
            | StoreRequest::DeleteById { id, .. } => id,
        }
    }
}
