//! Balance sheet notes with a current and an optional previous period.

use filing_framework::RestMeta;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtorsPeriod {
    pub trade_debtors: Option<i64>,
    pub prepayments_and_accrued_income: Option<i64>,
    pub other_debtors: Option<i64>,
    pub total: Option<i64>,
    /// Amounts falling due after more than one year, outside the total.
    pub greater_than_one_year: Option<i64>,
    /// Current period only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Debtors {
    pub current_period: DebtorsPeriod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_period: Option<DebtorsPeriod>,
    #[serde(flatten)]
    pub meta: RestMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtorsFields {
    pub current_period: DebtorsPeriod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_period: Option<DebtorsPeriod>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditorsWithinOneYearPeriod {
    pub bank_loans_and_overdrafts: Option<i64>,
    pub finance_leases_and_hire_purchase_contracts: Option<i64>,
    pub trade_creditors: Option<i64>,
    pub taxation_and_social_security: Option<i64>,
    pub accruals_and_deferred_income: Option<i64>,
    pub other_creditors: Option<i64>,
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditorsWithinOneYear {
    pub current_period: CreditorsWithinOneYearPeriod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_period: Option<CreditorsWithinOneYearPeriod>,
    #[serde(flatten)]
    pub meta: RestMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditorsWithinOneYearFields {
    pub current_period: CreditorsWithinOneYearPeriod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_period: Option<CreditorsWithinOneYearPeriod>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StocksPeriod {
    pub stocks: Option<i64>,
    pub payments_on_account: Option<i64>,
    pub total: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stocks {
    pub current_period: StocksPeriod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_period: Option<StocksPeriod>,
    #[serde(flatten)]
    pub meta: RestMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StocksFields {
    pub current_period: StocksPeriod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_period: Option<StocksPeriod>,
}
