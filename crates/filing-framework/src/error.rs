//! # Framework Errors
//!
//! Two layers of errors exist:
//!
//! - [`StoreError`] is what a collection (or the repository in front of it) reports.
//! - [`DataException`] is the single typed failure services hand back to callers.
//!
//! The one store error that never becomes a `DataException` is
//! [`StoreError::DuplicateKey`]: services turn it into
//! [`ResponseStatus::DuplicateKeyError`](crate::ResponseStatus::DuplicateKeyError).

/// Errors raised by the document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A document with the same id already exists in the collection.
    #[error("duplicate key {id} in collection {collection}")]
    DuplicateKey { collection: String, id: String },

    /// The collection task has stopped accepting requests.
    #[error("collection {0} closed")]
    Closed(String),

    /// The collection dropped the response channel before answering.
    #[error("collection {0} dropped response channel")]
    Dropped(String),

    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, StoreError::DuplicateKey { .. })
    }
}

/// Typed data-access failure returned by services.
#[derive(Debug, thiserror::Error)]
pub enum DataException {
    #[error("failed to {operation} {resource}: {source}")]
    Store {
        operation: &'static str,
        resource: String,
        #[source]
        source: StoreError,
    },

    #[error("parent resource {resource} not found for key {key}")]
    ParentNotFound { resource: String, key: String },
}

impl DataException {
    pub fn store(operation: &'static str, resource: impl Into<String>, source: StoreError) -> Self {
        DataException::Store {
            operation,
            resource: resource.into(),
            source,
        }
    }
}
