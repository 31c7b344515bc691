use chrono::NaiveDate;
use filing_framework::RestMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The directors report. Its directors are separate list resources; the
/// report only exposes their URLs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorsReport {
    /// Director id → URL.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub directors: BTreeMap<String, String>,
    #[serde(flatten)]
    pub meta: RestMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorsReportFields {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Director {
    pub name: Option<String>,
    pub appointment_date: Option<NaiveDate>,
    pub resignation_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub meta: RestMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorFields {
    pub name: Option<String>,
    pub appointment_date: Option<NaiveDate>,
    pub resignation_date: Option<NaiveDate>,
}
