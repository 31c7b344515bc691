//! # Parent Link Bookkeeping
//!
//! When a child resource is created its parent gains a link to it; when the
//! child is deleted the link goes away. [`ParentResource`] is the seam services
//! call, [`ParentLinkManager`] the implementation over a parent collection.

use crate::client::Repository;
use crate::entity::ResourceEntity;
use crate::error::DataException;
use crate::keys;
use crate::request::RequestContext;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, instrument, warn};

/// A resource that records links to its children.
#[async_trait]
pub trait ParentResource: Send + Sync {
    async fn add_link(
        &self,
        company_accounts_id: &str,
        link: &str,
        url: &str,
        request: &RequestContext,
    ) -> Result<(), DataException>;

    async fn remove_link(
        &self,
        company_accounts_id: &str,
        link: &str,
        request: &RequestContext,
    ) -> Result<(), DataException>;

    /// Record an item of a list child (e.g. one director).
    async fn add_child(
        &self,
        company_accounts_id: &str,
        child_id: &str,
        url: &str,
        request: &RequestContext,
    ) -> Result<(), DataException>;

    async fn remove_child(
        &self,
        company_accounts_id: &str,
        child_id: &str,
        request: &RequestContext,
    ) -> Result<(), DataException>;
}

/// How a parent's own key is derived from the company-accounts id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentKey {
    /// The company-accounts id is the key (the company-accounts root).
    Direct,
    /// `keys::resource_key(company_accounts_id, name)`.
    Derived,
}

/// [`ParentResource`] over the parent's collection: load, mutate, save.
pub struct ParentLinkManager<F> {
    resource: &'static str,
    key: ParentKey,
    repository: Repository<F>,
}

impl<F> ParentLinkManager<F> {
    pub fn new(resource: &'static str, key: ParentKey, repository: Repository<F>) -> Self {
        Self {
            resource,
            key,
            repository,
        }
    }

    pub fn key(&self, company_accounts_id: &str) -> String {
        match self.key {
            ParentKey::Direct => company_accounts_id.to_string(),
            ParentKey::Derived => keys::resource_key(company_accounts_id, self.resource),
        }
    }
}

impl<F> ParentLinkManager<F>
where
    F: Serialize + DeserializeOwned + Debug + Send + Sync + 'static,
{
    async fn modify(
        &self,
        company_accounts_id: &str,
        change: impl FnOnce(&mut ResourceEntity<F>) + Send,
    ) -> Result<(), DataException> {
        let key = self.key(company_accounts_id);
        let mut parent = self
            .repository
            .find_by_id(&key)
            .await
            .map_err(|e| DataException::store("find", self.resource, e))?
            .ok_or_else(|| {
                warn!(resource = self.resource, %key, "Parent not found");
                DataException::ParentNotFound {
                    resource: self.resource.to_string(),
                    key: key.clone(),
                }
            })?;

        change(&mut parent);

        self.repository
            .save(&parent)
            .await
            .map_err(|e| DataException::store("save", self.resource, e))
    }
}

#[async_trait]
impl<F> ParentResource for ParentLinkManager<F>
where
    F: Serialize + DeserializeOwned + Debug + Send + Sync + 'static,
{
    #[instrument(skip(self, url, request), fields(request_id = %request.request_id))]
    async fn add_link(
        &self,
        company_accounts_id: &str,
        link: &str,
        url: &str,
        request: &RequestContext,
    ) -> Result<(), DataException> {
        debug!(parent = self.resource, "Adding link");
        self.modify(company_accounts_id, |parent| {
            parent.data.links.insert(link, url);
        })
        .await
    }

    #[instrument(skip(self, request), fields(request_id = %request.request_id))]
    async fn remove_link(
        &self,
        company_accounts_id: &str,
        link: &str,
        request: &RequestContext,
    ) -> Result<(), DataException> {
        debug!(parent = self.resource, "Removing link");
        self.modify(company_accounts_id, |parent| {
            parent.data.links.remove(link);
        })
        .await
    }

    #[instrument(skip(self, url, request), fields(request_id = %request.request_id))]
    async fn add_child(
        &self,
        company_accounts_id: &str,
        child_id: &str,
        url: &str,
        request: &RequestContext,
    ) -> Result<(), DataException> {
        debug!(parent = self.resource, "Adding child");
        self.modify(company_accounts_id, |parent| {
            parent
                .data
                .children
                .insert(child_id.to_string(), url.to_string());
        })
        .await
    }

    #[instrument(skip(self, request), fields(request_id = %request.request_id))]
    async fn remove_child(
        &self,
        company_accounts_id: &str,
        child_id: &str,
        request: &RequestContext,
    ) -> Result<(), DataException> {
        debug!(parent = self.resource, "Removing child");
        self.modify(company_accounts_id, |parent| {
            parent.data.children.remove(child_id);
        })
        .await
    }
}
