use super::{NoteTotalsValidator, PeriodNote, PeriodTotals};
use crate::model::{SmallFullLinkType, Stocks, StocksFields, StocksPeriod};
use filing_framework::{
    LinkType, ParentResource, Repository, ResourceDescriptor, ResourceEntity, ResourceService,
    RestMeta, Transformer,
};
use std::sync::Arc;

pub type StocksService = ResourceService<StocksTransformer>;

pub fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor {
        name: "stocks",
        kind: "small-full-accounts-note#stocks",
        path: "small-full/notes/stocks",
        parent_link: Some(SmallFullLinkType::StocksNote.link()),
    }
}

impl PeriodTotals for StocksPeriod {
    fn components(&self) -> Vec<Option<i64>> {
        vec![self.stocks, self.payments_on_account]
    }

    fn total(&self) -> Option<i64> {
        self.total
    }
}

impl PeriodNote for Stocks {
    type Period = StocksPeriod;

    const NOTE: &'static str = "stocks";

    fn current_period(&self) -> &StocksPeriod {
        &self.current_period
    }

    fn previous_period(&self) -> Option<&StocksPeriod> {
        self.previous_period.as_ref()
    }
}

pub struct StocksTransformer;

impl Transformer for StocksTransformer {
    type Rest = Stocks;
    type Fields = StocksFields;

    fn to_entity(&self, rest: &Stocks) -> StocksFields {
        StocksFields {
            current_period: rest.current_period.clone(),
            previous_period: rest.previous_period.clone(),
        }
    }

    fn to_rest(&self, entity: &ResourceEntity<StocksFields>) -> Stocks {
        Stocks {
            current_period: entity.fields().current_period.clone(),
            previous_period: entity.fields().previous_period.clone(),
            meta: RestMeta::default(),
        }
    }
}

pub fn service(
    repository: Repository<StocksFields>,
    small_full: Arc<dyn ParentResource>,
) -> StocksService {
    ResourceService::new(descriptor(), StocksTransformer, repository)
        .with_validator(Arc::new(NoteTotalsValidator))
        .with_parent(small_full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::small_full;
    use filing_framework::mock::MockCollection;
    use filing_framework::{RequestContext, ResponseStatus, Transaction};

    #[tokio::test]
    async fn test_overflowing_components_are_an_incorrect_total() {
        let stocks_mock = MockCollection::new();
        let small_full_mock = MockCollection::new();
        let service = service(
            stocks_mock.repository(),
            Arc::new(small_full::parent(small_full_mock.repository())),
        );
        let stocks = Stocks {
            current_period: StocksPeriod {
                stocks: Some(i64::MAX),
                payments_on_account: Some(1),
                total: Some(i64::MIN),
            },
            ..Default::default()
        };

        let response = service
            .create(stocks, &Transaction::new("tx-1"), "ca-1", &RequestContext::new("req-1"))
            .await
            .unwrap();

        assert_eq!(response.status(), ResponseStatus::ValidationError);
        assert!(response
            .errors()
            .unwrap()
            .contains("incorrect_total", "$.stocks.current_period.total"));
        assert_eq!(stocks_mock.request_count(), 0);
        assert_eq!(small_full_mock.request_count(), 0);
    }
}
