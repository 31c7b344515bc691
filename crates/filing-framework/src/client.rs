//! # Repository
//!
//! The typed client of one collection.

use crate::entity::ResourceEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use tokio::sync::{mpsc, oneshot};

/// Thin typed interface over a collection's document operations.
///
/// Entities are serialized to JSON on the way in and deserialized on the way
/// out. The handle only holds a channel sender, so cloning is cheap and clones
/// can be shared freely between services.
pub struct Repository<F> {
    collection: String,
    sender: mpsc::Sender<StoreRequest>,
    _fields: PhantomData<fn() -> F>,
}

impl<F> Clone for Repository<F> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            sender: self.sender.clone(),
            _fields: PhantomData,
        }
    }
}

impl<F> fmt::Debug for Repository<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("collection", &self.collection)
            .finish()
    }
}

impl<F> Repository<F> {
    pub fn new(collection: impl Into<String>, sender: mpsc::Sender<StoreRequest>) -> Self {
        Self {
            collection: collection.into(),
            sender,
            _fields: PhantomData,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, StoreError>>) -> StoreRequest,
    ) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::Closed(self.collection.clone()))?;
        response
            .await
            .map_err(|_| StoreError::Dropped(self.collection.clone()))?
    }
}

impl<F> Repository<F>
where
    F: Serialize + DeserializeOwned,
{
    pub async fn insert(&self, entity: &ResourceEntity<F>) -> Result<(), StoreError> {
        let document = serde_json::to_value(entity)?;
        let id = entity.id.clone();
        self.request(|respond_to| StoreRequest::Insert {
            id,
            document,
            respond_to,
        })
        .await
    }

    pub async fn save(&self, entity: &ResourceEntity<F>) -> Result<(), StoreError> {
        let document = serde_json::to_value(entity)?;
        let id = entity.id.clone();
        self.request(|respond_to| StoreRequest::Save {
            id,
            document,
            respond_to,
        })
        .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<ResourceEntity<F>>, StoreError> {
        let id = id.to_string();
        let document = self
            .request(|respond_to| StoreRequest::FindById { id, respond_to })
            .await?;
        match document {
            Some(document) => Ok(Some(serde_json::from_value(document)?)),
            None => Ok(None),
        }
    }

    pub async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let id = id.to_string();
        self.request(|respond_to| StoreRequest::ExistsById { id, respond_to })
            .await
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let id = id.to_string();
        self.request(|respond_to| StoreRequest::DeleteById { id, respond_to })
            .await
    }
}
