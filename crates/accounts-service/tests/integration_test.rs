use accounts_service::company_accounts;
use accounts_service::config::AccountsConfig;
use accounts_service::lifecycle::AccountsSystem;
use accounts_service::model::{
    AccountingPeriod, Approval, CompanyAccounts, Director, SmallFull, Statements, Stocks,
    StocksPeriod,
};
use accounts_service::small_full;
use chrono::NaiveDate;
use filing_framework::{keys, RequestContext, ResponseStatus, RestObject, Transaction};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn period() -> AccountingPeriod {
    AccountingPeriod {
        period_start_on: date(2023, 4, 1),
        period_end_on: date(2024, 3, 31),
    }
}

fn system() -> AccountsSystem {
    AccountsSystem::new(&AccountsConfig::embedded().expect("embedded config should parse"))
}

/// Creates company accounts and small full, returning the company-accounts id.
async fn file_small_full(system: &AccountsSystem, transaction: &Transaction, request: &RequestContext) -> String {
    let created = system
        .company_accounts
        .create(CompanyAccounts::new(period()), transaction, request)
        .await
        .expect("Failed to create company accounts");
    assert_eq!(created.status(), ResponseStatus::Created);
    let company_accounts_id = company_accounts::company_accounts_id(created.data().unwrap())
        .unwrap()
        .to_string();

    let small_full = system
        .small_full
        .create(SmallFull::new(period()), transaction, &company_accounts_id, request)
        .await
        .expect("Failed to create small full");
    assert_eq!(small_full.status(), ResponseStatus::Created);

    company_accounts_id
}

/// Full end-to-end test with every collection running.
#[tokio::test]
async fn test_full_filing_integration() {
    let system = system();
    let transaction = Transaction::new("tx-1");
    let request = RequestContext::new("req-1");
    let company_accounts_id = file_small_full(&system, &transaction, &request).await;
    let base = format!("/transactions/tx-1/company-accounts/{company_accounts_id}");

    // Company accounts links small full
    let accounts = system
        .company_accounts
        .find(&company_accounts_id, &request)
        .await
        .unwrap();
    assert_eq!(accounts.status(), ResponseStatus::Found);
    let accounts = accounts.into_data().unwrap();
    assert_eq!(accounts.links().get("transaction"), Some("/transactions/tx-1"));
    assert_eq!(
        accounts.links().get("small_full_accounts"),
        Some(format!("{base}/small-full").as_str())
    );

    // Stocks note
    let stocks = Stocks {
        current_period: StocksPeriod {
            stocks: Some(400),
            payments_on_account: Some(100),
            total: Some(500),
        },
        ..Default::default()
    };
    let created = system
        .stocks
        .create(stocks.clone(), &transaction, &company_accounts_id, &request)
        .await
        .unwrap();
    assert_eq!(created.status(), ResponseStatus::Created);
    let created = created.into_data().unwrap();
    assert_eq!(created.kind(), "small-full-accounts-note#stocks");
    assert_eq!(created.etag().len(), 64);
    assert_eq!(
        created.links().self_link(),
        Some(format!("{base}/small-full/notes/stocks").as_str())
    );

    // Approval and statements both read small full
    let approval = Approval {
        name: Some("Jo Bloggs".to_string()),
        date: Some(date(2024, 5, 1)),
        ..Default::default()
    };
    let approved = system
        .approval
        .create(approval, &transaction, &company_accounts_id, &request)
        .await
        .unwrap();
    assert_eq!(approved.status(), ResponseStatus::Created);

    let statements = system
        .statements
        .create(
            Statements {
                has_agreed_to_all_statements: true,
                ..Default::default()
            },
            &transaction,
            &company_accounts_id,
            &request,
        )
        .await
        .unwrap();
    assert_eq!(statements.status(), ResponseStatus::Created);
    let statements = statements.into_data().unwrap();
    assert!(statements.legal_statements["section_477"].contains("31 March 2024"));
    assert!(statements
        .legal_statements
        .values()
        .all(|text| !text.contains("{period_end_on}")));

    // Small full now links every child
    let small_full = system
        .small_full
        .find(&company_accounts_id, &request)
        .await
        .unwrap()
        .into_data()
        .unwrap();
    for link in ["stocks_note", "approval", "statements"] {
        assert!(small_full.links().contains(link), "missing link {link}");
    }

    // Delete unlinks
    let deleted = system
        .stocks
        .delete(&company_accounts_id, &request)
        .await
        .unwrap();
    assert_eq!(deleted.status(), ResponseStatus::Updated);
    let small_full = system
        .small_full
        .find(&company_accounts_id, &request)
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert!(!small_full.links().contains("stocks_note"));
    assert!(small_full.links().contains("approval"));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_update_keeps_child_links() {
    let system = system();
    let transaction = Transaction::new("tx-2");
    let request = RequestContext::new("req-2");
    let company_accounts_id = file_small_full(&system, &transaction, &request).await;

    system
        .stocks
        .create(
            Stocks {
                current_period: StocksPeriod {
                    stocks: Some(1),
                    payments_on_account: None,
                    total: Some(1),
                },
                ..Default::default()
            },
            &transaction,
            &company_accounts_id,
            &request,
        )
        .await
        .unwrap();

    let mut changed = SmallFull::new(period());
    changed.next_accounts.period_end_on = date(2024, 4, 30);
    let updated = system
        .small_full
        .update(changed, &transaction, &company_accounts_id, &request)
        .await
        .unwrap();
    assert_eq!(updated.status(), ResponseStatus::Updated);
    assert!(updated.data().unwrap().links().contains("stocks_note"));

    let end = small_full::period_end(&system.small_full, &company_accounts_id, &request)
        .await
        .unwrap();
    assert_eq!(end, Some(date(2024, 4, 30)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_directors_are_children_of_the_report() {
    let system = system();
    let transaction = Transaction::new("tx-3");
    let request = RequestContext::new("req-3");
    let company_accounts_id = file_small_full(&system, &transaction, &request).await;

    let report = system
        .directors_report
        .create(Default::default(), &transaction, &company_accounts_id, &request)
        .await
        .unwrap();
    assert_eq!(report.status(), ResponseStatus::Created);

    let mut ids = Vec::new();
    for name in ["Jo Bloggs", "Sam Smith"] {
        let director = Director {
            name: Some(name.to_string()),
            appointment_date: Some(date(2020, 1, 1)),
            ..Default::default()
        };
        let created = system
            .directors
            .create(director, &transaction, &company_accounts_id, &request)
            .await
            .unwrap()
            .into_data()
            .unwrap();
        let self_link = created.links().self_link().unwrap().to_string();
        ids.push((self_link.rsplit('/').next().unwrap().to_string(), self_link));
    }
    assert_ne!(ids[0].0, ids[1].0);

    let report = system
        .directors_report
        .find(&company_accounts_id, &request)
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(report.directors.len(), 2);
    assert_eq!(report.directors.get(&ids[0].0), Some(&ids[0].1));

    // Update one director, keeping its id
    let renamed = Director {
        name: Some("Jo Bloggs-Smith".to_string()),
        ..Default::default()
    };
    let updated = system
        .directors
        .update(renamed, &transaction, &company_accounts_id, &ids[0].0, &request)
        .await
        .unwrap();
    assert_eq!(updated.status(), ResponseStatus::Updated);
    let found = system
        .directors
        .find(&company_accounts_id, &ids[0].0, &request)
        .await
        .unwrap();
    assert_eq!(found.data().unwrap().name.as_deref(), Some("Jo Bloggs-Smith"));

    // Delete the other
    let deleted = system
        .directors
        .delete(&company_accounts_id, &ids[1].0, &request)
        .await
        .unwrap();
    assert_eq!(deleted.status(), ResponseStatus::Updated);

    let report = system
        .directors_report
        .find(&company_accounts_id, &request)
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(report.directors.len(), 1);
    assert!(report.directors.contains_key(&ids[0].0));

    // The report cannot go while it still lists a director
    let refused = system
        .directors_report
        .delete(&company_accounts_id, &request)
        .await
        .unwrap();
    assert_eq!(refused.status(), ResponseStatus::ChildrenExist);

    system
        .directors
        .delete(&company_accounts_id, &ids[0].0, &request)
        .await
        .unwrap();
    let deleted = system
        .directors_report
        .delete(&company_accounts_id, &request)
        .await
        .unwrap();
    assert_eq!(deleted.status(), ResponseStatus::Updated);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_directors_are_scoped_to_their_filing() {
    let system = system();
    let transaction = Transaction::new("tx-5");
    let request = RequestContext::new("req-5");
    let filing_a = file_small_full(&system, &transaction, &request).await;
    let filing_b = file_small_full(&system, &transaction, &request).await;
    for filing in [&filing_a, &filing_b] {
        system
            .directors_report
            .create(Default::default(), &transaction, filing, &request)
            .await
            .unwrap();
    }

    let director = Director {
        name: Some("Jo Bloggs".to_string()),
        ..Default::default()
    };
    let created = system
        .directors
        .create(director, &transaction, &filing_a, &request)
        .await
        .unwrap()
        .into_data()
        .unwrap();
    let director_id = created
        .links()
        .self_link()
        .and_then(|link| link.rsplit('/').next())
        .unwrap()
        .to_string();

    // Filing B cannot reach filing A's director
    let found = system
        .directors
        .find(&filing_b, &director_id, &request)
        .await
        .unwrap();
    assert_eq!(found.status(), ResponseStatus::NotFound);

    let renamed = Director {
        name: Some("Someone Else".to_string()),
        ..Default::default()
    };
    let updated = system
        .directors
        .update(renamed, &transaction, &filing_b, &director_id, &request)
        .await
        .unwrap();
    assert_eq!(updated.status(), ResponseStatus::NotFound);

    let deleted = system
        .directors
        .delete(&filing_b, &director_id, &request)
        .await
        .unwrap();
    assert_eq!(deleted.status(), ResponseStatus::NotFound);

    // Filing A is untouched
    let report = system
        .directors_report
        .find(&filing_a, &request)
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert!(report.directors.contains_key(&director_id));
    let found = system
        .directors
        .find(&filing_a, &director_id, &request)
        .await
        .unwrap();
    assert_eq!(found.data().unwrap().name.as_deref(), Some("Jo Bloggs"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejections_leave_no_trace() {
    let system = system();
    let transaction = Transaction::new("tx-4");
    let request = RequestContext::new("req-4");
    let company_accounts_id = file_small_full(&system, &transaction, &request).await;

    // Approval before period end
    let approval = Approval {
        name: Some("Jo Bloggs".to_string()),
        date: Some(date(2024, 1, 1)),
        ..Default::default()
    };
    let rejected = system
        .approval
        .create(approval, &transaction, &company_accounts_id, &request)
        .await
        .unwrap();
    assert_eq!(rejected.status(), ResponseStatus::ValidationError);
    assert!(rejected
        .errors()
        .unwrap()
        .contains("date.invalid", "$.approval.date"));

    // Wrong stocks total
    let stocks = Stocks {
        current_period: StocksPeriod {
            stocks: Some(1),
            payments_on_account: Some(1),
            total: Some(3),
        },
        ..Default::default()
    };
    let rejected = system
        .stocks
        .create(stocks, &transaction, &company_accounts_id, &request)
        .await
        .unwrap();
    assert_eq!(rejected.status(), ResponseStatus::ValidationError);

    // Nothing stored, nothing linked
    assert_eq!(
        system
            .approval
            .find(&company_accounts_id, &request)
            .await
            .unwrap()
            .status(),
        ResponseStatus::NotFound
    );
    assert!(!system
        .stocks
        .repository()
        .exists_by_id(&keys::resource_key(&company_accounts_id, "stocks"))
        .await
        .unwrap());
    let small_full = system
        .small_full
        .find(&company_accounts_id, &request)
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert!(!small_full.links().contains("approval"));
    assert!(!small_full.links().contains("stocks_note"));

    // Deleting what was never created
    let missing = system
        .debtors
        .delete(&company_accounts_id, &request)
        .await
        .unwrap();
    assert_eq!(missing.status(), ResponseStatus::NotFound);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_second_create_is_duplicate_key() {
    let system = system();
    let transaction = Transaction::new("tx-5");
    let request = RequestContext::new("req-5");
    let company_accounts_id = file_small_full(&system, &transaction, &request).await;

    let again = system
        .small_full
        .create(SmallFull::new(period()), &transaction, &company_accounts_id, &request)
        .await
        .unwrap();
    assert_eq!(again.status(), ResponseStatus::DuplicateKeyError);
    assert!(again.data().is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_statements_require_small_full() {
    let system = system();
    let transaction = Transaction::new("tx-6");
    let request = RequestContext::new("req-6");

    let err = system
        .statements
        .create(Statements::default(), &transaction, "no-such-accounts", &request)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("small-full"));

    system.shutdown().await.unwrap();
}
