use crate::model::AccountingPeriod;
use chrono::NaiveDate;
use filing_framework::RestMeta;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastAccounts {
    pub period_end_on: Option<NaiveDate>,
}

/// The small full accounts record: the period being filed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmallFull {
    pub next_accounts: AccountingPeriod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accounts: Option<LastAccounts>,
    #[serde(flatten)]
    pub meta: RestMeta,
}

impl SmallFull {
    pub fn new(next_accounts: AccountingPeriod) -> Self {
        Self {
            next_accounts,
            last_accounts: None,
            meta: RestMeta::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmallFullFields {
    pub next_accounts: AccountingPeriod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accounts: Option<LastAccounts>,
}
