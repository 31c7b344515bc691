use chrono::NaiveDate;
use filing_framework::RestMeta;
use serde::{Deserialize, Serialize};

/// Start and end of an accounting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountingPeriod {
    pub period_start_on: NaiveDate,
    pub period_end_on: NaiveDate,
}

/// Root resource of a filing, one per transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAccounts {
    pub next_accounts: AccountingPeriod,
    #[serde(flatten)]
    pub meta: RestMeta,
}

impl CompanyAccounts {
    pub fn new(next_accounts: AccountingPeriod) -> Self {
        Self {
            next_accounts,
            meta: RestMeta::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAccountsFields {
    pub next_accounts: AccountingPeriod,
}
