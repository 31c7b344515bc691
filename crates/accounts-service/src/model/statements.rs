use filing_framework::RestMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Agreement to the legal statements printed on the accounts.
///
/// `legal_statements` is generated by the service; anything submitted in it is
/// replaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statements {
    pub has_agreed_to_all_statements: bool,
    #[serde(default)]
    pub legal_statements: BTreeMap<String, String>,
    #[serde(flatten)]
    pub meta: RestMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementsFields {
    pub has_agreed_to_all_statements: bool,
    pub legal_statements: BTreeMap<String, String>,
}
