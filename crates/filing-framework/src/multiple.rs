//! # List Resources
//!
//! Some resources exist many times under one parent (directors under a
//! directors report). Each item gets a random key, its self link ends with that
//! key, and the parent tracks items in its `children` map instead of a single
//! named link.
//!
//! An item id alone does not identify a filing, so every operation also takes
//! the company-accounts id and an item filed under another one is `NotFound`.

use crate::error::DataException;
use crate::keys;
use crate::links::Links;
use crate::parent::ParentResource;
use crate::request::{RequestContext, Transaction};
use crate::response::{ResponseObject, ResponseStatus};
use crate::rest::{RestObject, Transformer};
use crate::service::{ResourceDescriptor, ResourceService};
use crate::validation::Validator;
use std::sync::Arc;
use tracing::instrument;

/// CRUD service for list items addressed by their own id.
pub struct MultipleResourceService<T: Transformer> {
    inner: ResourceService<T>,
    parent: Option<Arc<dyn ParentResource>>,
}

impl<T: Transformer> MultipleResourceService<T> {
    pub fn new(
        descriptor: ResourceDescriptor,
        transformer: T,
        repository: crate::Repository<T::Fields>,
    ) -> Self {
        Self {
            inner: ResourceService::new(descriptor, transformer, repository),
            parent: None,
        }
    }

    pub fn with_validator(mut self, validator: Arc<dyn Validator<T::Rest>>) -> Self {
        self.inner = self.inner.with_validator(validator);
        self
    }

    pub fn with_parent(mut self, parent: Arc<dyn ParentResource>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn descriptor(&self) -> &ResourceDescriptor {
        self.inner.descriptor()
    }

    /// The item id is the last segment of the item's self link.
    pub fn item_id(rest: &T::Rest) -> Option<&str> {
        rest.links()
            .self_link()
            .and_then(|link| link.rsplit('/').next())
    }

    fn item_link(&self, transaction: &Transaction, company_accounts_id: &str, id: &str) -> String {
        format!(
            "{}/{}",
            self.descriptor().self_link(transaction, company_accounts_id),
            id
        )
    }

    #[instrument(
        skip(self, rest, transaction, request),
        fields(resource = self.descriptor().name, request_id = %request.request_id)
    )]
    pub async fn create(
        &self,
        rest: T::Rest,
        transaction: &Transaction,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<ResponseObject<T::Rest>, DataException> {
        let id = keys::random_key(company_accounts_id, self.descriptor().name);
        let self_link = self.item_link(transaction, company_accounts_id, &id);

        let response = self
            .inner
            .create_at(
                rest,
                &id,
                Links::with_self(self_link.as_str()),
                transaction,
                company_accounts_id,
                request,
            )
            .await?;

        if response.status() == ResponseStatus::Created {
            if let Some(parent) = &self.parent {
                parent
                    .add_child(company_accounts_id, &id, &self_link, request)
                    .await?;
            }
        }
        Ok(response)
    }

    #[instrument(
        skip(self, rest, transaction, request),
        fields(resource = self.descriptor().name, request_id = %request.request_id)
    )]
    pub async fn update(
        &self,
        rest: T::Rest,
        transaction: &Transaction,
        company_accounts_id: &str,
        id: &str,
        request: &RequestContext,
    ) -> Result<ResponseObject<T::Rest>, DataException> {
        let self_link = self.item_link(transaction, company_accounts_id, id);
        self.inner
            .update_at(rest, id, &self_link, transaction, company_accounts_id, request)
            .await
    }

    #[instrument(
        skip(self, request),
        fields(resource = self.descriptor().name, request_id = %request.request_id)
    )]
    pub async fn find(
        &self,
        company_accounts_id: &str,
        id: &str,
        request: &RequestContext,
    ) -> Result<ResponseObject<T::Rest>, DataException> {
        self.inner.find_at(id, company_accounts_id).await
    }

    #[instrument(
        skip(self, request),
        fields(resource = self.descriptor().name, request_id = %request.request_id)
    )]
    pub async fn delete(
        &self,
        company_accounts_id: &str,
        id: &str,
        request: &RequestContext,
    ) -> Result<ResponseObject<T::Rest>, DataException> {
        let response = self.inner.delete_at(id, company_accounts_id).await?;

        if response.status() == ResponseStatus::Updated {
            if let Some(parent) = &self.parent {
                parent
                    .remove_child(company_accounts_id, id, request)
                    .await?;
            }
        }
        Ok(response)
    }
}
