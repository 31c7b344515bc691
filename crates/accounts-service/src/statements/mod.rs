//! # Statements
//!
//! The legal statements shown on the accounts. Their text comes from the
//! configured templates with the small-full period end filled in, so a
//! statements resource can only be written once small full exists.

use crate::config::PERIOD_END_PLACEHOLDER;
use crate::model::{SmallFullLinkType, Statements, StatementsFields};
use crate::small_full::{self, SmallFullService};
use chrono::NaiveDate;
use filing_framework::{
    keys, DataException, LinkType, ParentResource, Repository, RequestContext,
    ResourceDescriptor, ResourceEntity, ResourceService, ResponseObject, RestMeta, Transaction,
    Transformer,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{instrument, warn};

pub fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor {
        name: "statements",
        kind: "small-full-accounts-statement",
        path: "small-full/statements",
        parent_link: Some(SmallFullLinkType::Statements.link()),
    }
}

pub struct StatementsTransformer;

impl Transformer for StatementsTransformer {
    type Rest = Statements;
    type Fields = StatementsFields;

    fn to_entity(&self, rest: &Statements) -> StatementsFields {
        StatementsFields {
            has_agreed_to_all_statements: rest.has_agreed_to_all_statements,
            legal_statements: rest.legal_statements.clone(),
        }
    }

    fn to_rest(&self, entity: &ResourceEntity<StatementsFields>) -> Statements {
        Statements {
            has_agreed_to_all_statements: entity.fields().has_agreed_to_all_statements,
            legal_statements: entity.fields().legal_statements.clone(),
            meta: RestMeta::default(),
        }
    }
}

/// Formats a period end the way statements print it, e.g. `31 March 2024`.
pub fn format_period_end(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Fills every template with the formatted period end.
pub fn render_legal_statements(
    templates: &BTreeMap<String, String>,
    period_end: NaiveDate,
) -> BTreeMap<String, String> {
    let period_end = format_period_end(period_end);
    templates
        .iter()
        .map(|(name, template)| (name.clone(), template.replace(PERIOD_END_PLACEHOLDER, &period_end)))
        .collect()
}

pub struct StatementsService {
    inner: ResourceService<StatementsTransformer>,
    small_full: Arc<SmallFullService>,
    templates: BTreeMap<String, String>,
}

impl StatementsService {
    pub fn new(
        repository: Repository<StatementsFields>,
        small_full: Arc<SmallFullService>,
        parent: Arc<dyn ParentResource>,
        templates: BTreeMap<String, String>,
    ) -> Self {
        Self {
            inner: ResourceService::new(descriptor(), StatementsTransformer, repository)
                .with_parent(parent),
            small_full,
            templates,
        }
    }

    async fn with_legal_statements(
        &self,
        mut rest: Statements,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<Statements, DataException> {
        let period_end = small_full::period_end(&self.small_full, company_accounts_id, request)
            .await?
            .ok_or_else(|| {
                warn!("Statements written without small full");
                DataException::ParentNotFound {
                    resource: small_full::NAME.to_string(),
                    key: keys::resource_key(company_accounts_id, small_full::NAME),
                }
            })?;

        rest.legal_statements = render_legal_statements(&self.templates, period_end);
        Ok(rest)
    }

    #[instrument(skip(self, rest, transaction, request), fields(request_id = %request.request_id))]
    pub async fn create(
        &self,
        rest: Statements,
        transaction: &Transaction,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<ResponseObject<Statements>, DataException> {
        let rest = self
            .with_legal_statements(rest, company_accounts_id, request)
            .await?;
        self.inner
            .create(rest, transaction, company_accounts_id, request)
            .await
    }

    #[instrument(skip(self, rest, transaction, request), fields(request_id = %request.request_id))]
    pub async fn update(
        &self,
        rest: Statements,
        transaction: &Transaction,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<ResponseObject<Statements>, DataException> {
        let rest = self
            .with_legal_statements(rest, company_accounts_id, request)
            .await?;
        self.inner
            .update(rest, transaction, company_accounts_id, request)
            .await
    }

    pub async fn find(
        &self,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<ResponseObject<Statements>, DataException> {
        self.inner.find(company_accounts_id, request).await
    }

    pub async fn delete(
        &self,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<ResponseObject<Statements>, DataException> {
        self.inner.delete(company_accounts_id, request).await
    }
}
