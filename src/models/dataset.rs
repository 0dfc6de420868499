//! Dataset aggregate
//!
//! The full application state as persisted to disk: every expense and every
//! category, in insertion order. Lookup helpers and ID allocation live here
//! so the services stay focused on their own rules.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::expense::Expense;
use super::ids::{CategoryId, ExpenseId};

/// Everything the store persists
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// All recorded expenses, in insertion order
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// All categories, in insertion order
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Next sequential ID: one past the current maximum, starting at 1.
///
/// Re-derived from the live data on every call, so deleting the
/// highest-numbered entity makes its ID available again. Saturates at
/// the numeric limit instead of wrapping to 0 (only reachable through a
/// hand-edited store).
fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0).saturating_add(1)
}

impl Dataset {
    /// Allocate the next expense ID
    pub fn next_expense_id(&self) -> ExpenseId {
        next_id(self.expenses.iter().map(|e| e.id.value())).into()
    }

    /// Allocate the next category ID
    pub fn next_category_id(&self) -> CategoryId {
        next_id(self.categories.iter().map(|c| c.id.value())).into()
    }

    /// Look up an expense by ID
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Look up an expense by ID, mutably
    pub fn expense_mut(&mut self, id: ExpenseId) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|e| e.id == id)
    }

    /// Look up a category by ID
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a category by exact name (case-sensitive)
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Whether any expense still references this category
    pub fn category_in_use(&self, id: CategoryId) -> bool {
        self.expenses.iter().any(|e| e.category_id == id)
    }
}
