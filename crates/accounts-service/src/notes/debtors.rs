use super::{NoteTotalsValidator, PeriodNote, PeriodTotals};
use crate::model::{Debtors, DebtorsFields, DebtorsPeriod, SmallFullLinkType};
use filing_framework::{
    LinkType, ParentResource, Repository, ResourceDescriptor, ResourceEntity, ResourceService,
    RestMeta, Transformer,
};
use std::sync::Arc;

pub type DebtorsService = ResourceService<DebtorsTransformer>;

pub fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor {
        name: "debtors",
        kind: "small-full-accounts-note#debtors",
        path: "small-full/notes/debtors",
        parent_link: Some(SmallFullLinkType::DebtorsNote.link()),
    }
}

impl PeriodTotals for DebtorsPeriod {
    fn components(&self) -> Vec<Option<i64>> {
        vec![
            self.trade_debtors,
            self.prepayments_and_accrued_income,
            self.other_debtors,
        ]
    }

    fn total(&self) -> Option<i64> {
        self.total
    }
}

impl PeriodNote for Debtors {
    type Period = DebtorsPeriod;

    const NOTE: &'static str = "debtors";

    fn current_period(&self) -> &DebtorsPeriod {
        &self.current_period
    }

    fn previous_period(&self) -> Option<&DebtorsPeriod> {
        self.previous_period.as_ref()
    }
}

pub struct DebtorsTransformer;

impl Transformer for DebtorsTransformer {
    type Rest = Debtors;
    type Fields = DebtorsFields;

    fn to_entity(&self, rest: &Debtors) -> DebtorsFields {
        DebtorsFields {
            current_period: rest.current_period.clone(),
            previous_period: rest.previous_period.clone(),
        }
    }

    fn to_rest(&self, entity: &ResourceEntity<DebtorsFields>) -> Debtors {
        Debtors {
            current_period: entity.fields().current_period.clone(),
            previous_period: entity.fields().previous_period.clone(),
            meta: RestMeta::default(),
        }
    }
}

pub fn service(
    repository: Repository<DebtorsFields>,
    small_full: Arc<dyn ParentResource>,
) -> DebtorsService {
    ResourceService::new(descriptor(), DebtorsTransformer, repository)
        .with_validator(Arc::new(NoteTotalsValidator))
        .with_parent(small_full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::check_totals;

    fn period(trade: i64, prepayments: i64, other: i64, total: i64) -> DebtorsPeriod {
        DebtorsPeriod {
            trade_debtors: Some(trade),
            prepayments_and_accrued_income: Some(prepayments),
            other_debtors: Some(other),
            total: Some(total),
            greater_than_one_year: Some(1_000),
            details: None,
        }
    }

    #[test]
    fn test_greater_than_one_year_is_outside_total() {
        let debtors = Debtors {
            current_period: period(1, 2, 3, 6),
            previous_period: Some(period(1, 1, 1, 3)),
            meta: RestMeta::default(),
        };
        assert!(!check_totals(&debtors).has_errors());
    }

    #[test]
    fn test_each_wrong_period_total_is_reported() {
        let debtors = Debtors {
            current_period: period(1, 2, 3, 7),
            previous_period: Some(period(1, 1, 1, 4)),
            meta: RestMeta::default(),
        };

        let errors = check_totals(&debtors);
        assert_eq!(errors.count(), 2);
        assert!(errors.contains("incorrect_total", "$.debtors.current_period.total"));
        assert!(errors.contains("incorrect_total", "$.debtors.previous_period.total"));
    }
}
