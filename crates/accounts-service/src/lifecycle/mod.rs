//! # System Lifecycle
//!
//! [`AccountsSystem`] starts one collection per resource type, wires the
//! services to their collections, validators and parents, and shuts the
//! collections down again.
//!
//! ## Wiring
//!
//! ```text
//! company accounts
//!   └─ small full
//!        ├─ approval          (validator reads small full)
//!        ├─ statements        (templates filled from small full)
//!        ├─ directors report
//!        │    └─ directors    (children map)
//!        ├─ debtors
//!        ├─ creditors within one year
//!        ├─ stocks
//!        └─ tangible assets
//! ```
//!
//! Parents are reached through [`ParentLinkManager`](filing_framework::ParentLinkManager)s
//! holding clones of the parent collection's repository.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all services** - every repository handle goes with them
//! 2. **Collections detect closure** - `receiver.recv()` returns `None` and they log their final size
//! 3. **Await completion** - every collection task is joined
//!
//! Nothing holds a repository except the services, so the shutdown order does
//! not matter.

pub mod tracing;

pub use self::tracing::setup_tracing;

use crate::approval::{self, ApprovalService};
use crate::company_accounts::CompanyAccountsService;
use crate::config::{AccountsConfig, ConfigError};
use crate::directors_report::{self, DirectorService, DirectorsReportService};
use crate::notes::creditors_within_one_year::{self, CreditorsWithinOneYearService};
use crate::notes::debtors::{self, DebtorsService};
use crate::notes::stocks::{self, StocksService};
use crate::notes::tangible_assets::{self, TangibleAssetsService};
use crate::small_full::{self, SmallFullService};
use crate::statements::StatementsService;
use ::tracing::{error, info};
use filing_framework::{CollectionActor, Repository};
use std::sync::Arc;
use tokio::task::JoinHandle;

#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("collection task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Starts collections and keeps their task handles.
struct Collections {
    buffer_size: usize,
    handles: Vec<JoinHandle<()>>,
}

impl Collections {
    fn spawn<F>(&mut self, name: &str) -> Repository<F> {
        let (actor, repository) = CollectionActor::new(name, self.buffer_size);
        self.handles.push(tokio::spawn(actor.run()));
        repository
    }
}

/// Every service of the accounts filing, backed by running collections.
pub struct AccountsSystem {
    pub company_accounts: Arc<CompanyAccountsService>,
    pub small_full: Arc<SmallFullService>,
    pub approval: ApprovalService,
    pub statements: StatementsService,
    pub directors_report: DirectorsReportService,
    pub directors: DirectorService,
    pub debtors: DebtorsService,
    pub creditors_within_one_year: CreditorsWithinOneYearService,
    pub stocks: StocksService,
    pub tangible_assets: TangibleAssetsService,

    handles: Vec<JoinHandle<()>>,
}

impl AccountsSystem {
    /// Spawns the collections and wires the services. Must be called inside a Tokio runtime.
    pub fn new(config: &AccountsConfig) -> Self {
        let mut collections = Collections {
            buffer_size: config.collection_buffer_size,
            handles: Vec::new(),
        };

        // 1. Collections
        let company_accounts_repository = collections.spawn(crate::company_accounts::NAME);
        let small_full_repository = collections.spawn(small_full::NAME);
        let approval_repository = collections.spawn(approval::descriptor().name);
        let statements_repository = collections.spawn(crate::statements::descriptor().name);
        let report_repository = collections.spawn(directors_report::REPORT_NAME);
        let director_repository = collections.spawn(directors_report::director_descriptor().name);
        let debtors_repository = collections.spawn(debtors::descriptor().name);
        let creditors_repository = collections.spawn(creditors_within_one_year::descriptor().name);
        let stocks_repository = collections.spawn(stocks::descriptor().name);
        let tangible_assets_repository = collections.spawn(tangible_assets::descriptor().name);

        // 2. Parents
        let company_accounts = Arc::new(CompanyAccountsService::new(company_accounts_repository));
        let small_full_parent = Arc::new(small_full::parent(small_full_repository.clone()));

        // 3. Services
        let small_full = Arc::new(small_full::service(
            small_full_repository,
            Arc::new(company_accounts.parent()),
        ));

        let system = Self {
            approval: approval::service(
                approval_repository,
                small_full.clone(),
                small_full_parent.clone(),
            ),
            statements: StatementsService::new(
                statements_repository,
                small_full.clone(),
                small_full_parent.clone(),
                config.legal_statements.clone(),
            ),
            directors_report: directors_report::report_service(
                report_repository.clone(),
                small_full_parent.clone(),
            ),
            directors: directors_report::director_service(director_repository, report_repository),
            debtors: debtors::service(debtors_repository, small_full_parent.clone()),
            creditors_within_one_year: creditors_within_one_year::service(
                creditors_repository,
                small_full_parent.clone(),
            ),
            stocks: stocks::service(stocks_repository, small_full_parent.clone()),
            tangible_assets: tangible_assets::service(tangible_assets_repository, small_full_parent),
            company_accounts,
            small_full,
            handles: collections.handles,
        };

        info!(collections = system.handles.len(), "Accounts system started");
        system
    }

    /// Loads configuration from the environment and starts the system.
    pub fn from_env() -> Result<Self, SystemError> {
        let config = AccountsConfig::from_env()?;
        Ok(Self::new(&config))
    }

    /// Drops every service and waits for all collections to stop.
    pub async fn shutdown(mut self) -> Result<(), SystemError> {
        info!("Shutting down accounts system...");

        let handles = std::mem::take(&mut self.handles);
        drop(self);

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Collection task failed");
                return Err(SystemError::Join(e));
            }
        }

        info!("Accounts system shut down");
        Ok(())
    }
}
