//! Summary service
//!
//! Aggregates expense amounts, optionally scoped to a calendar month of the
//! current year and/or to a single category.

use chrono::{Datelike, NaiveDate, Utc};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{CategoryId, Dataset, Expense};

/// Sum of amounts over the expenses matching the predicate.
/// An empty match set sums to zero.
fn sum_where<P>(expenses: &[Expense], predicate: P) -> f64
where
    P: Fn(&Expense) -> bool,
{
    expenses
        .iter()
        .filter(|e| predicate(e))
        .map(|e| e.amount)
        .sum()
}

/// Read-only aggregation over the expense ledger
pub struct SummaryService<'a> {
    dataset: &'a Dataset,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Total spent, optionally filtered by month and/or category.
    ///
    /// The month filter only matches expenses from the current UTC year:
    /// `month = 3` means March of this year, never a past March.
    pub fn total(
        &self,
        month: Option<u32>,
        category_id: Option<CategoryId>,
    ) -> SpendlogResult<f64> {
        self.total_as_of(Utc::now().date_naive(), month, category_id)
    }

    /// Same as [`total`](Self::total), with the reference date made explicit
    pub fn total_as_of(
        &self,
        today: NaiveDate,
        month: Option<u32>,
        category_id: Option<CategoryId>,
    ) -> SpendlogResult<f64> {
        if let Some(m) = month {
            if !(1..=12).contains(&m) {
                return Err(SpendlogError::Validation(
                    "Month must be between 1 and 12".into(),
                ));
            }
        }

        if let Some(c) = category_id {
            if self.dataset.category(c).is_none() {
                return Err(SpendlogError::category_not_found(c.to_string()));
            }
        }

        let current_year = today.year();
        let total = sum_where(&self.dataset.expenses, |e| {
            month.map_or(true, |m| e.month() == m && e.year() == current_year)
                && category_id.map_or(true, |c| e.category_id == c)
        });

        Ok(total)
    }
}
