use accounts_service::company_accounts;
use accounts_service::lifecycle::{setup_tracing, AccountsSystem, SystemError};
use accounts_service::model::{
    AccountingPeriod, Approval, CompanyAccounts, Debtors, DebtorsPeriod, Director, SmallFull,
    Statements,
};
use chrono::NaiveDate;
use filing_framework::{DataException, RequestContext, ResponseStatus, Transaction};
use tracing::{error, info, warn, Instrument};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    System(#[from] SystemError),

    #[error(transparent)]
    Data(#[from] DataException),

    #[error("{0}")]
    Rejected(String),
}

fn expect_status(resource: &str, actual: ResponseStatus, expected: ResponseStatus) -> Result<(), AppError> {
    if actual == expected {
        info!(resource, status = ?actual, "Accepted");
        Ok(())
    } else {
        warn!(resource, status = ?actual, "Rejected");
        Err(AppError::Rejected(format!("{resource}: {actual:?}")))
    }
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, AppError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::Rejected(format!("invalid date {year}-{month}-{day}")))
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting accounts service");
    let system = AccountsSystem::from_env()?;

    let transaction = Transaction::new("174001-123456-789012");
    let request = RequestContext::new("demo-request").with_user("demo-user");
    let period = AccountingPeriod {
        period_start_on: date(2023, 4, 1)?,
        period_end_on: date(2024, 3, 31)?,
    };

    let span = tracing::info_span!("filing", transaction_id = %transaction.id);
    let result = async {
        let created = system
            .company_accounts
            .create(CompanyAccounts::new(period.clone()), &transaction, &request)
            .await?;
        expect_status("company-accounts", created.status(), ResponseStatus::Created)?;
        let company_accounts_id = created
            .data()
            .and_then(company_accounts::company_accounts_id)
            .map(str::to_string)
            .ok_or_else(|| AppError::Rejected("company accounts without id".to_string()))?;

        let response = system
            .small_full
            .create(SmallFull::new(period.clone()), &transaction, &company_accounts_id, &request)
            .await?;
        expect_status("small-full", response.status(), ResponseStatus::Created)?;

        let response = system
            .directors_report
            .create(Default::default(), &transaction, &company_accounts_id, &request)
            .await?;
        expect_status("directors-report", response.status(), ResponseStatus::Created)?;

        let director = Director {
            name: Some("Jo Bloggs".to_string()),
            appointment_date: Some(date(2020, 1, 6)?),
            ..Default::default()
        };
        let response = system
            .directors
            .create(director, &transaction, &company_accounts_id, &request)
            .await?;
        expect_status("director", response.status(), ResponseStatus::Created)?;

        let debtors = Debtors {
            current_period: DebtorsPeriod {
                trade_debtors: Some(1_200),
                prepayments_and_accrued_income: Some(300),
                other_debtors: Some(50),
                total: Some(1_500),
                ..Default::default()
            },
            ..Default::default()
        };
        let response = system
            .debtors
            .create(debtors.clone(), &transaction, &company_accounts_id, &request)
            .await?;
        if let Some(errors) = response.errors() {
            for e in errors.iter() {
                warn!(error = %e.error, location = %e.location, "Debtors validation error");
            }
        }

        let corrected = Debtors {
            current_period: DebtorsPeriod {
                total: Some(1_550),
                ..debtors.current_period
            },
            ..debtors
        };
        let response = system
            .debtors
            .create(corrected, &transaction, &company_accounts_id, &request)
            .await?;
        expect_status("debtors", response.status(), ResponseStatus::Created)?;

        let approval = Approval {
            name: Some("Jo Bloggs".to_string()),
            date: Some(date(2024, 6, 1)?),
            ..Default::default()
        };
        let response = system
            .approval
            .create(approval, &transaction, &company_accounts_id, &request)
            .await?;
        expect_status("approval", response.status(), ResponseStatus::Created)?;

        let statements = Statements {
            has_agreed_to_all_statements: true,
            ..Default::default()
        };
        let response = system
            .statements
            .create(statements, &transaction, &company_accounts_id, &request)
            .await?;
        expect_status("statements", response.status(), ResponseStatus::Created)?;
        if let Some(statements) = response.data() {
            for (name, text) in &statements.legal_statements {
                info!(statement = %name, %text, "Legal statement");
            }
        }

        let response = system.small_full.find(&company_accounts_id, &request).await?;
        if let Some(small_full) = response.data() {
            let links: Vec<_> = small_full.meta.links.iter().map(|(rel, _)| rel).collect();
            info!(?links, "Small full links");
        }

        Ok::<_, AppError>(())
    }
    .instrument(span)
    .await;

    if let Err(e) = &result {
        error!(error = %e, "Filing failed");
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    result
}
