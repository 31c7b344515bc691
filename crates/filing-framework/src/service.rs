//! # Generic Resource Service
//!
//! Every singleton resource of a filing runs through the same pipeline:
//!
//! ```text
//! create:  validate -> stamp kind/etag/self -> transform -> insert -> parent.add_link
//! update:  validate -> load existing -> stamp -> transform -> carry links -> save
//! find:    find_by_id -> transform back
//! delete:  find_by_id -> refuse while children exist -> delete_by_id -> parent.remove_link
//! ```
//!
//! A stored document whose self link sits under another company accounts is
//! treated as absent by update, find and delete.
//!
//! A [`ResourceService`] is configured with a [`ResourceDescriptor`] (name, kind,
//! path, parent relation), a [`Transformer`], the repository of its collection
//! and optionally a [`Validator`] and a [`ParentResource`].

use crate::client::Repository;
use crate::entity::{EntityData, ResourceEntity};
use crate::error::{DataException, StoreError};
use crate::keys;
use crate::links::Links;
use crate::parent::ParentResource;
use crate::request::{RequestContext, Transaction};
use crate::response::{ResponseObject, ResponseStatus};
use crate::rest::{RestMeta, RestObject, Transformer};
use crate::validation::{Errors, Validator};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Static description of one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Key suffix, e.g. `debtors`.
    pub name: &'static str,
    pub kind: &'static str,
    /// Path below the company-accounts URI, e.g. `small-full/notes/debtors`.
    pub path: &'static str,
    /// Relation the parent records for this resource, if it has a parent.
    pub parent_link: Option<&'static str>,
}

impl ResourceDescriptor {
    /// `/transactions/{tid}/company-accounts/{caid}`
    pub fn company_accounts_uri(transaction: &Transaction, company_accounts_id: &str) -> String {
        format!(
            "{}/company-accounts/{}",
            transaction.uri(),
            company_accounts_id
        )
    }

    pub fn self_link(&self, transaction: &Transaction, company_accounts_id: &str) -> String {
        format!(
            "{}/{}",
            Self::company_accounts_uri(transaction, company_accounts_id),
            self.path
        )
    }

    pub fn key(&self, company_accounts_id: &str) -> String {
        keys::resource_key(company_accounts_id, self.name)
    }

    /// Whether `link` is the company-accounts URI of `company_accounts_id` or
    /// lies below it.
    pub fn is_under_company_accounts(link: &str, company_accounts_id: &str) -> bool {
        link.split('/')
            .skip_while(|segment| *segment != "company-accounts")
            .nth(1)
            == Some(company_accounts_id)
    }
}

/// CRUD service for a resource with one instance per company accounts.
pub struct ResourceService<T: Transformer> {
    descriptor: ResourceDescriptor,
    transformer: T,
    repository: Repository<T::Fields>,
    validator: Option<Arc<dyn Validator<T::Rest>>>,
    parent: Option<Arc<dyn ParentResource>>,
}

impl<T: Transformer> ResourceService<T> {
    pub fn new(
        descriptor: ResourceDescriptor,
        transformer: T,
        repository: Repository<T::Fields>,
    ) -> Self {
        Self {
            descriptor,
            transformer,
            repository,
            validator: None,
            parent: None,
        }
    }

    pub fn with_validator(mut self, validator: Arc<dyn Validator<T::Rest>>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn with_parent(mut self, parent: Arc<dyn ParentResource>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    pub fn repository(&self) -> &Repository<T::Fields> {
        &self.repository
    }

    #[instrument(
        skip(self, rest, transaction, request),
        fields(resource = self.descriptor.name, request_id = %request.request_id)
    )]
    pub async fn create(
        &self,
        rest: T::Rest,
        transaction: &Transaction,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<ResponseObject<T::Rest>, DataException> {
        let key = self.descriptor.key(company_accounts_id);
        let self_link = self.descriptor.self_link(transaction, company_accounts_id);

        let response = self
            .create_at(
                rest,
                &key,
                Links::with_self(self_link.as_str()),
                transaction,
                company_accounts_id,
                request,
            )
            .await?;

        if response.status() == ResponseStatus::Created {
            if let (Some(parent), Some(link)) = (&self.parent, self.descriptor.parent_link) {
                parent
                    .add_link(company_accounts_id, link, &self_link, request)
                    .await?;
            }
        }
        Ok(response)
    }

    #[instrument(
        skip(self, rest, transaction, request),
        fields(resource = self.descriptor.name, request_id = %request.request_id)
    )]
    pub async fn update(
        &self,
        rest: T::Rest,
        transaction: &Transaction,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<ResponseObject<T::Rest>, DataException> {
        let key = self.descriptor.key(company_accounts_id);
        let self_link = self.descriptor.self_link(transaction, company_accounts_id);
        self.update_at(rest, &key, &self_link, transaction, company_accounts_id, request)
            .await
    }

    #[instrument(
        skip(self, request),
        fields(resource = self.descriptor.name, request_id = %request.request_id)
    )]
    pub async fn find(
        &self,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<ResponseObject<T::Rest>, DataException> {
        self.find_at(&self.descriptor.key(company_accounts_id), company_accounts_id)
            .await
    }

    #[instrument(
        skip(self, request),
        fields(resource = self.descriptor.name, request_id = %request.request_id)
    )]
    pub async fn delete(
        &self,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<ResponseObject<T::Rest>, DataException> {
        let key = self.descriptor.key(company_accounts_id);
        let response = self.delete_at(&key, company_accounts_id).await?;

        if response.status() == ResponseStatus::Updated {
            if let (Some(parent), Some(link)) = (&self.parent, self.descriptor.parent_link) {
                parent
                    .remove_link(company_accounts_id, link, request)
                    .await?;
            }
        }
        Ok(response)
    }

    // -------------------------------------------------------------------------
    // Key-addressed steps, for resources whose key or links are not derived
    // from the descriptor (list items, the company-accounts root)
    // -------------------------------------------------------------------------

    /// Validates, stamps `links` and inserts the resource under `key`.
    pub async fn create_at(
        &self,
        mut rest: T::Rest,
        key: &str,
        links: Links,
        transaction: &Transaction,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<ResponseObject<T::Rest>, DataException> {
        if let Some(errors) = self
            .validate(&rest, transaction, company_accounts_id, request)
            .await?
        {
            return Ok(ResponseObject::validation_error(errors));
        }

        self.stamp(&mut rest, links);
        let entity = self.to_entity(&rest, key, BTreeMap::new());

        match self.repository.insert(&entity).await {
            Ok(()) => {
                info!(%key, "Created");
                Ok(ResponseObject::with_data(ResponseStatus::Created, rest))
            }
            Err(e) if e.is_duplicate_key() => {
                warn!(%key, "Duplicate key");
                Ok(ResponseObject::new(ResponseStatus::DuplicateKeyError))
            }
            Err(e) => Err(self.store_error("insert", e)),
        }
    }

    pub(crate) async fn update_at(
        &self,
        mut rest: T::Rest,
        key: &str,
        self_link: &str,
        transaction: &Transaction,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<ResponseObject<T::Rest>, DataException> {
        if let Some(errors) = self
            .validate(&rest, transaction, company_accounts_id, request)
            .await?
        {
            return Ok(ResponseObject::validation_error(errors));
        }

        let Some(existing) = self.load_owned(key, company_accounts_id).await? else {
            debug!(%key, "Nothing to update");
            return Ok(ResponseObject::new(ResponseStatus::NotFound));
        };

        let mut links = Links::with_self(self_link);
        links.merge_related(existing.links());
        self.stamp(&mut rest, links);
        let entity = self.to_entity(&rest, key, existing.data.children);

        self.repository
            .save(&entity)
            .await
            .map_err(|e| self.store_error("save", e))?;

        info!(%key, "Updated");
        Ok(ResponseObject::with_data(ResponseStatus::Updated, rest))
    }

    /// `Found` only when `key` holds a resource of `company_accounts_id`.
    pub async fn find_at(
        &self,
        key: &str,
        company_accounts_id: &str,
    ) -> Result<ResponseObject<T::Rest>, DataException> {
        match self.load_owned(key, company_accounts_id).await? {
            Some(entity) => {
                debug!(%key, "Found");
                Ok(ResponseObject::with_data(
                    ResponseStatus::Found,
                    self.to_rest(&entity),
                ))
            }
            None => {
                debug!(%key, "Not found");
                Ok(ResponseObject::new(ResponseStatus::NotFound))
            }
        }
    }

    /// `Updated` when a document was removed, `NotFound` when none existed and
    /// `ChildrenExist` while the document still lists child items.
    pub(crate) async fn delete_at(
        &self,
        key: &str,
        company_accounts_id: &str,
    ) -> Result<ResponseObject<T::Rest>, DataException> {
        let Some(existing) = self.load_owned(key, company_accounts_id).await? else {
            debug!(%key, "Nothing to delete");
            return Ok(ResponseObject::new(ResponseStatus::NotFound));
        };

        if !existing.data.children.is_empty() {
            warn!(%key, children = existing.data.children.len(), "Delete refused, children exist");
            return Ok(ResponseObject::new(ResponseStatus::ChildrenExist));
        }

        self.repository
            .delete_by_id(key)
            .await
            .map_err(|e| self.store_error("delete", e))?;

        info!(%key, "Deleted");
        Ok(ResponseObject::new(ResponseStatus::Updated))
    }

    /// Loads the stored entity for `key`.
    pub async fn load(&self, key: &str) -> Result<Option<ResourceEntity<T::Fields>>, DataException> {
        self.repository
            .find_by_id(key)
            .await
            .map_err(|e| self.store_error("find", e))
    }

    async fn load_owned(
        &self,
        key: &str,
        company_accounts_id: &str,
    ) -> Result<Option<ResourceEntity<T::Fields>>, DataException> {
        let entity = self.load(key).await?;
        Ok(entity.filter(|entity| {
            let owned = entity.links().self_link().is_some_and(|link| {
                ResourceDescriptor::is_under_company_accounts(link, company_accounts_id)
            });
            if !owned {
                warn!(%key, %company_accounts_id, "Stored resource belongs to another filing");
            }
            owned
        }))
    }

    async fn validate(
        &self,
        rest: &T::Rest,
        transaction: &Transaction,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<Option<Errors>, DataException> {
        let Some(validator) = &self.validator else {
            return Ok(None);
        };
        let errors = validator
            .validate(rest, transaction, company_accounts_id, request)
            .await?;
        if errors.has_errors() {
            info!(count = errors.count(), "Validation failed");
            Ok(Some(errors))
        } else {
            Ok(None)
        }
    }

    fn stamp(&self, rest: &mut T::Rest, links: Links) {
        let meta = rest.meta_mut();
        meta.kind = self.descriptor.kind.to_string();
        meta.etag = keys::generate_etag();
        meta.links = links;
    }

    fn to_entity(
        &self,
        rest: &T::Rest,
        key: &str,
        children: BTreeMap<String, String>,
    ) -> ResourceEntity<T::Fields> {
        ResourceEntity::new(
            key,
            EntityData {
                fields: self.transformer.to_entity(rest),
                kind: rest.kind().to_string(),
                etag: rest.etag().to_string(),
                links: rest.links().clone(),
                children,
            },
        )
    }

    fn to_rest(&self, entity: &ResourceEntity<T::Fields>) -> T::Rest {
        let mut rest = self.transformer.to_rest(entity);
        *rest.meta_mut() = RestMeta {
            kind: entity.data.kind.clone(),
            etag: entity.data.etag.clone(),
            links: entity.data.links.clone(),
        };
        rest
    }

    fn store_error(&self, operation: &'static str, error: StoreError) -> DataException {
        warn!(resource = self.descriptor.name, operation, error = %error, "Store failure");
        DataException::store(operation, self.descriptor.name, error)
    }
}
