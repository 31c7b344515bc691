//! # Domain Models
//!
//! REST representations of every filing resource and the field sets persisted
//! for them. REST types carry a flattened [`RestMeta`](filing_framework::RestMeta)
//! so `kind`, `etag` and `links` sit next to the domain fields on the wire.

pub mod approval;
pub mod company_accounts;
pub mod directors_report;
pub mod links;
pub mod notes;
pub mod small_full;
pub mod statements;
pub mod tangible_assets;

pub use approval::*;
pub use company_accounts::*;
pub use directors_report::*;
pub use links::*;
pub use notes::*;
pub use small_full::*;
pub use statements::*;
pub use tangible_assets::*;

/// Implements [`RestObject`](filing_framework::RestObject) for types with a `meta` field.
macro_rules! rest_object {
    ($($rest:ty),+ $(,)?) => {
        $(
            impl filing_framework::RestObject for $rest {
                fn meta(&self) -> &filing_framework::RestMeta {
                    &self.meta
                }

                fn meta_mut(&mut self) -> &mut filing_framework::RestMeta {
                    &mut self.meta
                }
            }
        )+
    };
}

rest_object!(
    CompanyAccounts,
    SmallFull,
    Approval,
    Statements,
    DirectorsReport,
    Director,
    Debtors,
    CreditorsWithinOneYear,
    Stocks,
    TangibleAssets,
);
