//! # Directors Report and Directors
//!
//! The report is a singleton under small full. Directors are list items under
//! the report: each has a random id and the report's `children` map records
//! id → URL, which the report exposes as `directors`.

use crate::model::{
    Director, DirectorFields, DirectorsReport, DirectorsReportFields, SmallFullLinkType,
};
use async_trait::async_trait;
use filing_framework::{
    DataException, Errors, LinkType, MultipleResourceService, ParentKey, ParentLinkManager,
    ParentResource, Repository, RequestContext, ResourceDescriptor, ResourceEntity,
    ResourceService, RestMeta, Transaction, Transformer, Validator,
};
use std::sync::Arc;

pub const REPORT_NAME: &str = "directors-report";

pub type DirectorsReportService = ResourceService<DirectorsReportTransformer>;
pub type DirectorService = MultipleResourceService<DirectorTransformer>;

pub fn report_descriptor() -> ResourceDescriptor {
    ResourceDescriptor {
        name: REPORT_NAME,
        kind: "small-full-accounts-directors-report",
        path: "small-full/directors-report",
        parent_link: Some(SmallFullLinkType::DirectorsReport.link()),
    }
}

pub fn director_descriptor() -> ResourceDescriptor {
    ResourceDescriptor {
        name: "directors",
        kind: "small-full-accounts-directors-report#director",
        path: "small-full/directors-report/directors",
        parent_link: None,
    }
}

pub struct DirectorsReportTransformer;

impl Transformer for DirectorsReportTransformer {
    type Rest = DirectorsReport;
    type Fields = DirectorsReportFields;

    fn to_entity(&self, _rest: &DirectorsReport) -> DirectorsReportFields {
        DirectorsReportFields {}
    }

    fn to_rest(&self, entity: &ResourceEntity<DirectorsReportFields>) -> DirectorsReport {
        DirectorsReport {
            directors: entity.data.children.clone(),
            meta: RestMeta::default(),
        }
    }
}

pub struct DirectorTransformer;

impl Transformer for DirectorTransformer {
    type Rest = Director;
    type Fields = DirectorFields;

    fn to_entity(&self, rest: &Director) -> DirectorFields {
        DirectorFields {
            name: rest.name.clone(),
            appointment_date: rest.appointment_date,
            resignation_date: rest.resignation_date,
        }
    }

    fn to_rest(&self, entity: &ResourceEntity<DirectorFields>) -> Director {
        let fields = entity.fields();
        Director {
            name: fields.name.clone(),
            appointment_date: fields.appointment_date,
            resignation_date: fields.resignation_date,
            meta: RestMeta::default(),
        }
    }
}

pub struct DirectorValidator;

#[async_trait]
impl Validator<Director> for DirectorValidator {
    async fn validate(
        &self,
        rest: &Director,
        _transaction: &Transaction,
        _company_accounts_id: &str,
        _request: &RequestContext,
    ) -> Result<Errors, DataException> {
        let mut errors = Errors::new();

        if rest.name.as_deref().map_or(true, |name| name.trim().is_empty()) {
            errors.add_error("mandatory.element.missing", "$.director.name");
        }

        if let (Some(appointed), Some(resigned)) = (rest.appointment_date, rest.resignation_date) {
            if resigned < appointed {
                errors.add_error("date.invalid", "$.director.resignation_date");
            }
        }

        Ok(errors)
    }
}

pub fn report_service(
    repository: Repository<DirectorsReportFields>,
    small_full: Arc<dyn ParentResource>,
) -> DirectorsReportService {
    ResourceService::new(report_descriptor(), DirectorsReportTransformer, repository)
        .with_parent(small_full)
}

/// Directors service whose items are recorded on the report in `report_repository`.
pub fn director_service(
    repository: Repository<DirectorFields>,
    report_repository: Repository<DirectorsReportFields>,
) -> DirectorService {
    let report = ParentLinkManager::new(REPORT_NAME, ParentKey::Derived, report_repository);
    MultipleResourceService::new(director_descriptor(), DirectorTransformer, repository)
        .with_validator(Arc::new(DirectorValidator))
        .with_parent(Arc::new(report))
}
