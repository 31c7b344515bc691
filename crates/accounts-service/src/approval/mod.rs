//! # Approval
//!
//! Who approved the accounts. The approval date is checked against the
//! small-full period end, so the validator reads small full.

use crate::model::{Approval, ApprovalFields, SmallFullLinkType};
use crate::small_full::{self, SmallFullService};
use async_trait::async_trait;
use filing_framework::{
    DataException, Errors, LinkType, ParentResource, Repository, RequestContext,
    ResourceDescriptor, ResourceEntity, ResourceService, RestMeta, Transaction, Transformer,
    Validator,
};
use std::sync::Arc;
use tracing::debug;

pub type ApprovalService = ResourceService<ApprovalTransformer>;

pub fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor {
        name: "approval",
        kind: "small-full-accounts-approval",
        path: "small-full/approval",
        parent_link: Some(SmallFullLinkType::Approval.link()),
    }
}

pub struct ApprovalTransformer;

impl Transformer for ApprovalTransformer {
    type Rest = Approval;
    type Fields = ApprovalFields;

    fn to_entity(&self, rest: &Approval) -> ApprovalFields {
        ApprovalFields {
            name: rest.name.clone(),
            date: rest.date,
        }
    }

    fn to_rest(&self, entity: &ResourceEntity<ApprovalFields>) -> Approval {
        Approval {
            name: entity.fields().name.clone(),
            date: entity.fields().date,
            meta: RestMeta::default(),
        }
    }
}

pub struct ApprovalValidator {
    small_full: Arc<SmallFullService>,
}

impl ApprovalValidator {
    pub fn new(small_full: Arc<SmallFullService>) -> Self {
        Self { small_full }
    }
}

#[async_trait]
impl Validator<Approval> for ApprovalValidator {
    async fn validate(
        &self,
        rest: &Approval,
        _transaction: &Transaction,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<Errors, DataException> {
        let mut errors = Errors::new();

        if rest.name.as_deref().map_or(true, |name| name.trim().is_empty()) {
            errors.add_error("mandatory.element.missing", "$.approval.name");
        }

        if let Some(date) = rest.date {
            match small_full::period_end(&self.small_full, company_accounts_id, request).await? {
                Some(period_end) if date < period_end => {
                    errors.add_error("date.invalid", "$.approval.date");
                }
                Some(_) => {}
                None => debug!("No small full to check approval date against"),
            }
        }

        Ok(errors)
    }
}

pub fn service(
    repository: Repository<ApprovalFields>,
    small_full: Arc<SmallFullService>,
    parent: Arc<dyn ParentResource>,
) -> ApprovalService {
    ResourceService::new(descriptor(), ApprovalTransformer, repository)
        .with_validator(Arc::new(ApprovalValidator::new(small_full)))
        .with_parent(parent)
}
