//! # Company Accounts
//!
//! The root of a filing. Unlike every other resource its key is random (one
//! filing per transaction, any number of transactions per company) and its
//! self link is the company-accounts URI itself.

use crate::model::{CompanyAccounts, CompanyAccountsFields, CompanyAccountsLinkType};
use filing_framework::{
    keys, DataException, LinkType, Links, ParentKey, ParentLinkManager, Repository,
    RequestContext, ResourceDescriptor, ResourceEntity, ResourceService, ResponseObject,
    RestObject, Transaction, Transformer,
};
use tracing::instrument;

pub const NAME: &str = "company-accounts";
pub const KIND: &str = "company-accounts";

/// The root has no path below its own URI and no parent.
pub fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor {
        name: NAME,
        kind: KIND,
        path: "",
        parent_link: None,
    }
}

pub struct CompanyAccountsTransformer;

impl Transformer for CompanyAccountsTransformer {
    type Rest = CompanyAccounts;
    type Fields = CompanyAccountsFields;

    fn to_entity(&self, rest: &CompanyAccounts) -> CompanyAccountsFields {
        CompanyAccountsFields {
            next_accounts: rest.next_accounts.clone(),
        }
    }

    fn to_rest(&self, entity: &ResourceEntity<CompanyAccountsFields>) -> CompanyAccounts {
        CompanyAccounts::new(entity.fields().next_accounts.clone())
    }
}

pub struct CompanyAccountsService {
    inner: ResourceService<CompanyAccountsTransformer>,
}

impl CompanyAccountsService {
    pub fn new(repository: Repository<CompanyAccountsFields>) -> Self {
        Self {
            inner: ResourceService::new(descriptor(), CompanyAccountsTransformer, repository),
        }
    }

    /// Parent bookkeeping for resources linked directly from company accounts.
    pub fn parent(&self) -> ParentLinkManager<CompanyAccountsFields> {
        ParentLinkManager::new(NAME, ParentKey::Direct, self.inner.repository().clone())
    }

    #[instrument(skip(self, rest, request), fields(request_id = %request.request_id))]
    pub async fn create(
        &self,
        rest: CompanyAccounts,
        transaction: &Transaction,
        request: &RequestContext,
    ) -> Result<ResponseObject<CompanyAccounts>, DataException> {
        let id = keys::random_key(&transaction.id, NAME);

        let mut links = Links::with_self(ResourceDescriptor::company_accounts_uri(transaction, &id));
        links.insert(CompanyAccountsLinkType::Transaction.link(), transaction.uri());

        self.inner
            .create_at(rest, &id, links, transaction, &id, request)
            .await
    }

    #[instrument(skip(self, request), fields(request_id = %request.request_id))]
    pub async fn find(
        &self,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<ResponseObject<CompanyAccounts>, DataException> {
        self.inner
            .find_at(company_accounts_id, company_accounts_id)
            .await
    }
}

/// Company-accounts id of a created resource: the last segment of its self link.
pub fn company_accounts_id(rest: &CompanyAccounts) -> Option<&str> {
    rest.links()
        .self_link()
        .and_then(|link| link.rsplit('/').next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AccountingPeriod;
    use chrono::NaiveDate;
    use filing_framework::mock::MockCollection;
    use filing_framework::{EntityData, ParentResource, ResponseStatus, StoreError};
    use std::collections::BTreeMap;

    fn accounts() -> CompanyAccounts {
        CompanyAccounts::new(AccountingPeriod {
            period_start_on: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
            period_end_on: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        })
    }

    #[tokio::test]
    async fn test_create_links_self_and_transaction() {
        let mut mock = MockCollection::new();
        mock.expect_insert().return_ok();
        let service = CompanyAccountsService::new(mock.repository());

        let response = service
            .create(accounts(), &Transaction::new("tx-1"), &RequestContext::new("req-1"))
            .await
            .unwrap();

        assert_eq!(response.status(), ResponseStatus::Created);
        let created = response.data().unwrap();
        let id = company_accounts_id(created).unwrap();
        assert_eq!(
            created.links().self_link(),
            Some(format!("/transactions/tx-1/company-accounts/{id}").as_str())
        );
        assert_eq!(created.links().get("transaction"), Some("/transactions/tx-1"));
        assert_eq!(created.kind(), KIND);
        assert_eq!(mock.written::<CompanyAccountsFields>()[0].id, id);
        mock.verify();
    }

    #[tokio::test]
    async fn test_each_create_gets_a_new_key() {
        let mut mock = MockCollection::new();
        mock.expect_insert().return_ok();
        mock.expect_insert().return_ok();
        let service = CompanyAccountsService::new(mock.repository());
        let transaction = Transaction::new("tx-1");
        let request = RequestContext::new("req-1");

        service.create(accounts(), &transaction, &request).await.unwrap();
        service.create(accounts(), &transaction, &request).await.unwrap();

        let written = mock.written::<CompanyAccountsFields>();
        assert_ne!(written[0].id, written[1].id);
    }

    #[tokio::test]
    async fn test_find_store_failure_is_data_exception() {
        let mut mock = MockCollection::new();
        mock.expect_find_by_id("ca-1")
            .return_err(StoreError::Closed(NAME.to_string()));
        let service = CompanyAccountsService::new(mock.repository());

        let err = service
            .find("ca-1", &RequestContext::new("req-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, DataException::Store { operation: "find", .. }));
    }

    #[tokio::test]
    async fn test_parent_uses_company_accounts_id_as_key() {
        let mut mock = MockCollection::new();
        mock.expect_find_by_id("ca-1").return_none();
        let service = CompanyAccountsService::new(mock.repository());

        let err = service
            .parent()
            .add_link("ca-1", "small_full_accounts", "/sf", &RequestContext::new("req-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, DataException::ParentNotFound { ref key, .. } if key == "ca-1"));
        mock.verify();
    }

    #[tokio::test]
    async fn test_find_copies_stored_metadata() {
        let mut mock = MockCollection::new();
        let mut links = Links::with_self("/transactions/tx-1/company-accounts/ca-1");
        links.insert("small_full_accounts", "/transactions/tx-1/company-accounts/ca-1/small-full");
        let stored = ResourceEntity::new(
            "ca-1",
            EntityData {
                fields: CompanyAccountsFields {
                    next_accounts: accounts().next_accounts,
                },
                kind: KIND.to_string(),
                etag: "etag".to_string(),
                links,
                children: BTreeMap::new(),
            },
        );
        mock.expect_find_by_id("ca-1").return_document(&stored);
        let service = CompanyAccountsService::new(mock.repository());

        let found = service
            .find("ca-1", &RequestContext::new("req-1"))
            .await
            .unwrap();

        assert_eq!(found.status(), ResponseStatus::Found);
        let rest = found.into_data().unwrap();
        assert_eq!(rest.etag(), "etag");
        assert_eq!(rest.kind(), KIND);
        assert!(rest.links().contains("small_full_accounts"));
        mock.verify();
    }
}
