use chrono::NaiveDate;
use filing_framework::RestMeta;
use serde::{Deserialize, Serialize};

/// Who approved the accounts, and when.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub meta: RestMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalFields {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
}
