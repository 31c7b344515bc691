//! # Resource Entities
//!
//! The persistence-side shape shared by every resource type.
//!
//! A stored document looks like this, whatever the resource:
//!
//! ```json
//! {
//!   "_id": "<generated key>",
//!   "data": {
//!     "...domain fields...": "...",
//!     "kind": "small-full-accounts-note#debtors",
//!     "etag": "<hex>",
//!     "links": { "self": "/transactions/.../small-full/notes/debtors" }
//!   }
//! }
//! ```
//!
//! The domain fields are the type parameter `F`; they are flattened into `data`
//! so each resource only declares what is specific to it.

use crate::links::Links;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A resource as held by the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntity<F> {
    #[serde(rename = "_id")]
    pub id: String,
    pub data: EntityData<F>,
}

/// The `data` block of a [`ResourceEntity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityData<F> {
    #[serde(flatten)]
    pub fields: F,
    pub kind: String,
    pub etag: String,
    #[serde(default)]
    pub links: Links,
    /// Child id → URL, only populated on parents of list resources.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, String>,
}

impl<F> ResourceEntity<F> {
    pub fn new(id: impl Into<String>, data: EntityData<F>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    pub fn fields(&self) -> &F {
        &self.data.fields
    }

    pub fn links(&self) -> &Links {
        &self.data.links
    }
}
