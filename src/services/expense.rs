//! Expense service
//!
//! Business rules for the expense ledger: every expense references an
//! existing category, amounts are positive finite numbers, and partial
//! updates touch only the fields that were actually supplied.

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{CategoryId, Dataset, Expense, ExpenseId};
use crate::storage::Store;

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a Store,
    dataset: &'a mut Dataset,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a Store, dataset: &'a mut Dataset) -> Self {
        Self { store, dataset }
    }

    /// Record a new expense
    pub fn add(
        &mut self,
        description: &str,
        amount: f64,
        category_id: CategoryId,
    ) -> SpendlogResult<Expense> {
        let description = description.trim();
        if description.is_empty() {
            return Err(SpendlogError::Validation(
                "Expense description cannot be empty".into(),
            ));
        }

        validate_amount(amount)?;

        if !category_id.is_valid() {
            return Err(SpendlogError::Validation(
                "A valid category id is required".into(),
            ));
        }
        if self.dataset.category(category_id).is_none() {
            return Err(SpendlogError::category_not_found(category_id.to_string()));
        }

        let expense = Expense::new(
            self.dataset.next_expense_id(),
            description,
            amount,
            category_id,
        );
        self.dataset.expenses.push(expense.clone());
        self.store.save(self.dataset)?;

        Ok(expense)
    }

    /// Update fields of an existing expense.
    ///
    /// Empty descriptions, zero amounts, and zero category ids count as
    /// "not supplied" rather than as values to validate. The creation date
    /// is never touched.
    pub fn update(
        &mut self,
        id: ExpenseId,
        description: Option<&str>,
        amount: Option<f64>,
        category_id: Option<CategoryId>,
    ) -> SpendlogResult<Expense> {
        if !id.is_valid() {
            return Err(SpendlogError::Validation(
                "A valid expense id is required".into(),
            ));
        }
        if self.dataset.expense(id).is_none() {
            return Err(SpendlogError::expense_not_found(id.to_string()));
        }

        let description = description.filter(|d| !d.is_empty());
        let amount = amount.filter(|a| *a != 0.0 && !a.is_nan());
        let category_id = category_id.filter(|c| c.is_valid());

        if description.is_none() && amount.is_none() && category_id.is_none() {
            return Err(SpendlogError::Validation(
                "At least one field must be provided".into(),
            ));
        }

        let description = match description {
            Some(d) => {
                let d = d.trim();
                if d.is_empty() {
                    return Err(SpendlogError::Validation(
                        "Expense description cannot be empty".into(),
                    ));
                }
                Some(d.to_string())
            }
            None => None,
        };

        if let Some(a) = amount {
            validate_amount(a)?;
        }

        if let Some(c) = category_id {
            if self.dataset.category(c).is_none() {
                return Err(SpendlogError::category_not_found(c.to_string()));
            }
        }

        let expense = self
            .dataset
            .expense_mut(id)
            .ok_or_else(|| SpendlogError::expense_not_found(id.to_string()))?;

        if let Some(d) = description {
            expense.description = d;
        }
        if let Some(a) = amount {
            expense.amount = a;
        }
        if let Some(c) = category_id {
            expense.category_id = c;
        }
        let updated = expense.clone();

        self.store.save(self.dataset)?;
        Ok(updated)
    }

    /// Delete an expense
    pub fn delete(&mut self, id: ExpenseId) -> SpendlogResult<Expense> {
        if !id.is_valid() {
            return Err(SpendlogError::Validation(
                "A valid expense id is required".into(),
            ));
        }

        let position = self
            .dataset
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| SpendlogError::expense_not_found(id.to_string()))?;

        let removed = self.dataset.expenses.remove(position);
        self.store.save(self.dataset)?;

        Ok(removed)
    }

    /// All expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        &self.dataset.expenses
    }
}

fn validate_amount(amount: f64) -> SpendlogResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(SpendlogError::Validation(
            "Expense amount must be positive".into(),
        ));
    }
    Ok(())
}
