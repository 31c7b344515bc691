//! # Filing Framework
//!
//! Generic persistence and validation layer for filing resources. Each filing
//! is a tree of small REST resources (company accounts, small full accounts,
//! approval, notes, ...) and every one of them is stored and linked the same
//! way; this crate implements that way once.
//!
//! ## Architecture Overview
//!
//! 1. **Store Layer** ([`CollectionActor`]) - one Tokio task per resource type
//!    owning JSON documents, processing requests sequentially
//! 2. **Client Layer** ([`Repository`]) - typed, cloneable handle that
//!    serializes [`ResourceEntity`] values to and from the collection
//! 3. **Service Layer** ([`ResourceService`], [`MultipleResourceService`]) -
//!    validate, transform, key, persist and keep parent links current
//!
//! ```text
//! caller -> ResourceService -> Validator -> Transformer -> Repository -> CollectionActor
//!                            \-> ParentResource (add_link / remove_link)
//! ```
//!
//! ## Keys
//!
//! A singleton resource's key is derived from the company-accounts id and the
//! resource name (see [`keys`]), so the same resource always lands on the same
//! document and a second `create` is a [`ResponseStatus::DuplicateKeyError`].
//!
//! ## Outcomes and Errors
//!
//! Services return `Result<ResponseObject<R>, DataException>`. Expected
//! outcomes (created, not found, duplicate key, validation errors) are a
//! [`ResponseStatus`] inside `Ok`; only data-access failures are `Err`.
//!
//! ## Example
//!
//! ```rust
//! use filing_framework::{
//!     CollectionActor, RequestContext, ResourceDescriptor, ResourceEntity, ResourceService,
//!     ResponseStatus, RestMeta, RestObject, Transaction, Transformer,
//! };
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default)]
//! struct Stocks { stocks: Option<i64>, meta: RestMeta }
//!
//! impl RestObject for Stocks {
//!     fn meta(&self) -> &RestMeta { &self.meta }
//!     fn meta_mut(&mut self) -> &mut RestMeta { &mut self.meta }
//! }
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct StocksFields { stocks: Option<i64> }
//!
//! struct StocksTransformer;
//!
//! impl Transformer for StocksTransformer {
//!     type Rest = Stocks;
//!     type Fields = StocksFields;
//!     fn to_entity(&self, rest: &Stocks) -> StocksFields { StocksFields { stocks: rest.stocks } }
//!     fn to_rest(&self, entity: &ResourceEntity<StocksFields>) -> Stocks {
//!         Stocks { stocks: entity.fields().stocks, meta: RestMeta::default() }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, repository) = CollectionActor::new("stocks", 8);
//!     tokio::spawn(actor.run());
//!
//!     let descriptor = ResourceDescriptor {
//!         name: "stocks",
//!         kind: "small-full-accounts-note#stocks",
//!         path: "small-full/notes/stocks",
//!         parent_link: None,
//!     };
//!     let service = ResourceService::new(descriptor, StocksTransformer, repository);
//!     let transaction = Transaction::new("tx-1");
//!     let request = RequestContext::new("req-1");
//!
//!     let rest = Stocks { stocks: Some(4), ..Default::default() };
//!     let created = service.create(rest, &transaction, "ca-1", &request).await.unwrap();
//!     assert_eq!(created.status(), ResponseStatus::Created);
//!
//!     let found = service.find("ca-1", &request).await.unwrap();
//!     assert_eq!(found.data().unwrap().stocks, Some(4));
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockCollection`] answers repository requests from scripted
//! expectations, so service logic can be tested without a running collection
//! and tests can assert that the store was never called.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod keys;
pub mod links;
pub mod message;
pub mod mock;
pub mod multiple;
pub mod parent;
pub mod request;
pub mod response;
pub mod rest;
pub mod service;
pub mod validation;

// Re-export core types for convenience
pub use actor::CollectionActor;
pub use client::Repository;
pub use entity::{EntityData, ResourceEntity};
pub use error::{DataException, StoreError};
pub use links::{BasicLinkType, LinkType, Links};
pub use message::{Response, StoreRequest};
pub use multiple::MultipleResourceService;
pub use parent::{ParentKey, ParentLinkManager, ParentResource};
pub use request::{RequestContext, Transaction};
pub use response::{ResponseObject, ResponseStatus};
pub use rest::{RestMeta, RestObject, Transformer};
pub use service::{ResourceDescriptor, ResourceService};
pub use validation::{Errors, ValidationError, Validator};
