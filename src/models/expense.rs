//! Expense model
//!
//! An expense records a single purchase: what it was, how much it cost,
//! which category it belongs to, and the day it was recorded.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId};

/// A single recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent, in major currency units
    pub amount: f64,

    /// The category this expense belongs to
    pub category_id: CategoryId,

    /// When the expense was recorded
    pub created_at: NaiveDate,
}

impl Expense {
    /// Create a new expense dated today (UTC)
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: f64,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category_id,
            created_at: Utc::now().date_naive(),
        }
    }

    /// Calendar month (1-12) this expense was recorded in
    pub fn month(&self) -> u32 {
        self.created_at.month()
    }

    /// Calendar year this expense was recorded in
    pub fn year(&self) -> i32 {
        self.created_at.year()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${:.2})", self.description, self.amount)
    }
}
