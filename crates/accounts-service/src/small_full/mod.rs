//! # Small Full Accounts
//!
//! The accounting period being filed. Parent of approval, statements, the
//! directors report and every note.

use crate::model::{CompanyAccountsLinkType, SmallFull, SmallFullFields};
use async_trait::async_trait;
use chrono::NaiveDate;
use filing_framework::{
    DataException, Errors, LinkType, ParentKey, ParentLinkManager, ParentResource, Repository,
    RequestContext, ResourceDescriptor, ResourceEntity, ResourceService, Transaction,
    Transformer, Validator,
};
use std::sync::Arc;

pub const NAME: &str = "small-full";

pub type SmallFullService = ResourceService<SmallFullTransformer>;

pub fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor {
        name: NAME,
        kind: "small-full-accounts",
        path: "small-full",
        parent_link: Some(CompanyAccountsLinkType::SmallFullAccounts.link()),
    }
}

pub struct SmallFullTransformer;

impl Transformer for SmallFullTransformer {
    type Rest = SmallFull;
    type Fields = SmallFullFields;

    fn to_entity(&self, rest: &SmallFull) -> SmallFullFields {
        SmallFullFields {
            next_accounts: rest.next_accounts.clone(),
            last_accounts: rest.last_accounts.clone(),
        }
    }

    fn to_rest(&self, entity: &ResourceEntity<SmallFullFields>) -> SmallFull {
        let fields = entity.fields();
        SmallFull {
            last_accounts: fields.last_accounts.clone(),
            ..SmallFull::new(fields.next_accounts.clone())
        }
    }
}

pub struct SmallFullValidator;

#[async_trait]
impl Validator<SmallFull> for SmallFullValidator {
    async fn validate(
        &self,
        rest: &SmallFull,
        _transaction: &Transaction,
        _company_accounts_id: &str,
        _request: &RequestContext,
    ) -> Result<Errors, DataException> {
        let mut errors = Errors::new();
        let period = &rest.next_accounts;
        if period.period_end_on <= period.period_start_on {
            errors.add_error("date.invalid", "$.small_full.next_accounts.period_end_on");
        }
        Ok(errors)
    }
}

pub fn service(
    repository: Repository<SmallFullFields>,
    company_accounts: Arc<dyn ParentResource>,
) -> SmallFullService {
    ResourceService::new(descriptor(), SmallFullTransformer, repository)
        .with_validator(Arc::new(SmallFullValidator))
        .with_parent(company_accounts)
}

/// Parent bookkeeping for resources linked from small full.
pub fn parent(repository: Repository<SmallFullFields>) -> ParentLinkManager<SmallFullFields> {
    ParentLinkManager::new(NAME, ParentKey::Derived, repository)
}

/// End of the period being filed, if small full exists.
pub async fn period_end(
    service: &SmallFullService,
    company_accounts_id: &str,
    request: &RequestContext,
) -> Result<Option<NaiveDate>, DataException> {
    let response = service.find(company_accounts_id, request).await?;
    Ok(response
        .data()
        .map(|small_full| small_full.next_accounts.period_end_on))
}
