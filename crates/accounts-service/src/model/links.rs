//! Relation names recorded on parent resources.

use filing_framework::LinkType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyAccountsLinkType {
    Transaction,
    SmallFullAccounts,
}

impl LinkType for CompanyAccountsLinkType {
    fn link(&self) -> &'static str {
        match self {
            CompanyAccountsLinkType::Transaction => "transaction",
            CompanyAccountsLinkType::SmallFullAccounts => "small_full_accounts",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallFullLinkType {
    Approval,
    Statements,
    DirectorsReport,
    DebtorsNote,
    CreditorsWithinOneYearNote,
    StocksNote,
    TangibleAssetsNote,
}

impl LinkType for SmallFullLinkType {
    fn link(&self) -> &'static str {
        match self {
            SmallFullLinkType::Approval => "approval",
            SmallFullLinkType::Statements => "statements",
            SmallFullLinkType::DirectorsReport => "directors_report",
            SmallFullLinkType::DebtorsNote => "debtors_note",
            SmallFullLinkType::CreditorsWithinOneYearNote => "creditors_within_one_year_note",
            SmallFullLinkType::StocksNote => "stocks_note",
            SmallFullLinkType::TangibleAssetsNote => "tangible_assets_note",
        }
    }
}
