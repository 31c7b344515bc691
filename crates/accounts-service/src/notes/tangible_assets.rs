//! Tangible assets note.
//!
//! For every asset class present:
//!
//! - cost at period end = start + additions - disposals + revaluations + transfers
//! - depreciation at period end = start + charge for year - on disposals + other adjustments
//! - net book value at end of current period = cost at period end - depreciation at period end

use super::sum;
use crate::model::{
    Cost, Depreciation, SmallFullLinkType, TangibleAssets, TangibleAssetsFields,
    TangibleAssetsResource,
};
use async_trait::async_trait;
use filing_framework::{
    DataException, Errors, LinkType, ParentResource, Repository, RequestContext,
    ResourceDescriptor, ResourceEntity, ResourceService, RestMeta, Transaction, Transformer,
    Validator,
};
use std::sync::Arc;

pub type TangibleAssetsService = ResourceService<TangibleAssetsTransformer>;

pub fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor {
        name: "tangible-assets",
        kind: "small-full-accounts-note#tangible-assets",
        path: "small-full/notes/tangible-assets",
        parent_link: Some(SmallFullLinkType::TangibleAssetsNote.link()),
    }
}

pub struct TangibleAssetsTransformer;

impl Transformer for TangibleAssetsTransformer {
    type Rest = TangibleAssets;
    type Fields = TangibleAssetsFields;

    fn to_entity(&self, rest: &TangibleAssets) -> TangibleAssetsFields {
        TangibleAssetsFields {
            additional_information: rest.additional_information.clone(),
            classes: rest.classes.clone(),
        }
    }

    fn to_rest(&self, entity: &ResourceEntity<TangibleAssetsFields>) -> TangibleAssets {
        TangibleAssets {
            additional_information: entity.fields().additional_information.clone(),
            classes: entity.fields().classes.clone(),
            meta: RestMeta::default(),
        }
    }
}

/// `None` when the figures overflow.
fn cost_at_period_end(cost: &Cost) -> Option<i64> {
    sum([cost.at_period_start, cost.additions, cost.revaluations, cost.transfers])?
        .checked_sub(cost.disposals.unwrap_or(0))
}

fn depreciation_at_period_end(depreciation: &Depreciation) -> Option<i64> {
    sum([
        depreciation.at_period_start,
        depreciation.charge_for_year,
        depreciation.other_adjustments,
    ])?
    .checked_sub(depreciation.on_disposals.unwrap_or(0))
}

fn check_class(errors: &mut Errors, class_name: &str, class: &TangibleAssetsResource) {
    let location = |field: &str| format!("$.tangible_assets.{class_name}.{field}");

    if let Some(cost) = &class.cost {
        if cost_at_period_end(cost) != Some(cost.at_period_end.unwrap_or(0)) {
            errors.add_error("incorrect_total", location("cost.at_period_end"));
        }
    }

    if let Some(depreciation) = &class.depreciation {
        if depreciation_at_period_end(depreciation) != Some(depreciation.at_period_end.unwrap_or(0)) {
            errors.add_error("incorrect_total", location("depreciation.at_period_end"));
        }
    }

    if let Some(net_book_value) = class.net_book_value_at_end_of_current_period {
        let cost = class.cost.as_ref().and_then(|c| c.at_period_end).unwrap_or(0);
        let depreciation = class
            .depreciation
            .as_ref()
            .and_then(|d| d.at_period_end)
            .unwrap_or(0);
        if cost.checked_sub(depreciation) != Some(net_book_value) {
            errors.add_error(
                "incorrect_total",
                location("net_book_value_at_end_of_current_period"),
            );
        }
    }
}

pub struct TangibleAssetsValidator;

#[async_trait]
impl Validator<TangibleAssets> for TangibleAssetsValidator {
    async fn validate(
        &self,
        rest: &TangibleAssets,
        _transaction: &Transaction,
        _company_accounts_id: &str,
        _request: &RequestContext,
    ) -> Result<Errors, DataException> {
        let mut errors = Errors::new();
        for (class_name, class) in rest.classes.present() {
            check_class(&mut errors, class_name, class);
        }
        Ok(errors)
    }
}

pub fn service(
    repository: Repository<TangibleAssetsFields>,
    small_full: Arc<dyn ParentResource>,
) -> TangibleAssetsService {
    ResourceService::new(descriptor(), TangibleAssetsTransformer, repository)
        .with_validator(Arc::new(TangibleAssetsValidator))
        .with_parent(small_full)
}
