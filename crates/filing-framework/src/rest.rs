//! # REST Objects and Transformers
//!
//! The API-facing side of a resource. Every REST model embeds a [`RestMeta`]
//! (kind, etag, links) and implements [`RestObject`]; a [`Transformer`] copies
//! the domain fields between the REST model and the entity.
//!
//! Services own the metadata: they stamp kind, etag and self link onto the
//! REST object before persisting, and copy the stored metadata back after
//! reading. Transformers never touch it.

use crate::entity::ResourceEntity;
use crate::links::Links;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Metadata carried by every REST object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub etag: String,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

/// A REST model managed by the generic services.
pub trait RestObject: Clone + Debug + Send + Sync + 'static {
    fn meta(&self) -> &RestMeta;

    fn meta_mut(&mut self) -> &mut RestMeta;

    fn kind(&self) -> &str {
        &self.meta().kind
    }

    fn etag(&self) -> &str {
        &self.meta().etag
    }

    fn links(&self) -> &Links {
        &self.meta().links
    }
}

/// Field copy between a REST model and its persisted fields.
///
/// `to_rest` receives the whole entity so list parents can expose their
/// `children` map.
pub trait Transformer: Send + Sync + 'static {
    type Rest: RestObject;

    type Fields: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static;

    fn to_entity(&self, rest: &Self::Rest) -> Self::Fields;

    fn to_rest(&self, entity: &ResourceEntity<Self::Fields>) -> Self::Rest;
}
