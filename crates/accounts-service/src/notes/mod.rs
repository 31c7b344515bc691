//! # Balance Sheet Notes
//!
//! Notes share one rule: in each period the total must equal the sum of its
//! components. [`NoteTotalsValidator`] applies it to any note implementing
//! [`PeriodNote`]. Tangible assets have their own reconciliation rules.

pub mod creditors_within_one_year;
pub mod debtors;
pub mod stocks;
pub mod tangible_assets;

use async_trait::async_trait;
use filing_framework::{DataException, Errors, RequestContext, Transaction, Validator};

/// One period block of a note.
pub trait PeriodTotals {
    /// The amounts that make up the total.
    fn components(&self) -> Vec<Option<i64>>;

    fn total(&self) -> Option<i64>;
}

/// A note with a current and an optional previous period.
pub trait PeriodNote: Send + Sync {
    type Period: PeriodTotals;

    /// JSON name of the note, e.g. `debtors`.
    const NOTE: &'static str;

    fn current_period(&self) -> &Self::Period;

    fn previous_period(&self) -> Option<&Self::Period>;
}

/// Sum of the present values; absent values count as zero. `None` when the
/// sum overflows.
pub fn sum(values: impl IntoIterator<Item = Option<i64>>) -> Option<i64> {
    values
        .into_iter()
        .flatten()
        .try_fold(0i64, |total, value| total.checked_add(value))
}

fn check_period<P: PeriodTotals>(errors: &mut Errors, note: &str, period_name: &str, period: &P) {
    if sum(period.components()) != Some(period.total().unwrap_or(0)) {
        errors.add_error("incorrect_total", format!("$.{note}.{period_name}.total"));
    }
}

/// Checks every period total of a note.
pub fn check_totals<N: PeriodNote>(note: &N) -> Errors {
    let mut errors = Errors::new();
    check_period(&mut errors, N::NOTE, "current_period", note.current_period());
    if let Some(previous) = note.previous_period() {
        check_period(&mut errors, N::NOTE, "previous_period", previous);
    }
    errors
}

pub struct NoteTotalsValidator;

#[async_trait]
impl<N: PeriodNote> Validator<N> for NoteTotalsValidator {
    async fn validate(
        &self,
        rest: &N,
        _transaction: &Transaction,
        _company_accounts_id: &str,
        _request: &RequestContext,
    ) -> Result<Errors, DataException> {
        Ok(check_totals(rest))
    }
}
