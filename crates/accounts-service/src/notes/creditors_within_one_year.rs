use super::{NoteTotalsValidator, PeriodNote, PeriodTotals};
use crate::model::{
    CreditorsWithinOneYear, CreditorsWithinOneYearFields, CreditorsWithinOneYearPeriod,
    SmallFullLinkType,
};
use filing_framework::{
    LinkType, ParentResource, Repository, ResourceDescriptor, ResourceEntity, ResourceService,
    RestMeta, Transformer,
};
use std::sync::Arc;

pub type CreditorsWithinOneYearService = ResourceService<CreditorsWithinOneYearTransformer>;

pub fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor {
        name: "creditors-within-one-year",
        kind: "small-full-accounts-note#creditors-within-one-year",
        path: "small-full/notes/creditors-within-one-year",
        parent_link: Some(SmallFullLinkType::CreditorsWithinOneYearNote.link()),
    }
}

impl PeriodTotals for CreditorsWithinOneYearPeriod {
    fn components(&self) -> Vec<Option<i64>> {
        vec![
            self.bank_loans_and_overdrafts,
            self.finance_leases_and_hire_purchase_contracts,
            self.trade_creditors,
            self.taxation_and_social_security,
            self.accruals_and_deferred_income,
            self.other_creditors,
        ]
    }

    fn total(&self) -> Option<i64> {
        self.total
    }
}

impl PeriodNote for CreditorsWithinOneYear {
    type Period = CreditorsWithinOneYearPeriod;

    const NOTE: &'static str = "creditors_within_one_year";

    fn current_period(&self) -> &CreditorsWithinOneYearPeriod {
        &self.current_period
    }

    fn previous_period(&self) -> Option<&CreditorsWithinOneYearPeriod> {
        self.previous_period.as_ref()
    }
}

pub struct CreditorsWithinOneYearTransformer;

impl Transformer for CreditorsWithinOneYearTransformer {
    type Rest = CreditorsWithinOneYear;
    type Fields = CreditorsWithinOneYearFields;

    fn to_entity(&self, rest: &CreditorsWithinOneYear) -> CreditorsWithinOneYearFields {
        CreditorsWithinOneYearFields {
            current_period: rest.current_period.clone(),
            previous_period: rest.previous_period.clone(),
        }
    }

    fn to_rest(&self, entity: &ResourceEntity<CreditorsWithinOneYearFields>) -> CreditorsWithinOneYear {
        CreditorsWithinOneYear {
            current_period: entity.fields().current_period.clone(),
            previous_period: entity.fields().previous_period.clone(),
            meta: RestMeta::default(),
        }
    }
}

pub fn service(
    repository: Repository<CreditorsWithinOneYearFields>,
    small_full: Arc<dyn ParentResource>,
) -> CreditorsWithinOneYearService {
    ResourceService::new(descriptor(), CreditorsWithinOneYearTransformer, repository)
        .with_validator(Arc::new(NoteTotalsValidator))
        .with_parent(small_full)
}
