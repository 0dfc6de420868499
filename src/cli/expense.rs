//! Expense CLI commands
//!
//! Handlers for recording, updating, deleting, and listing expenses.

use crate::display::format_expense_table;
use crate::models::{CategoryId, Dataset, ExpenseId};
use crate::services::ExpenseService;
use crate::storage::Store;

/// Handle `add`
pub fn handle_add(
    store: &Store,
    dataset: &mut Dataset,
    description: &str,
    amount: f64,
    category: u64,
) {
    let mut service = ExpenseService::new(store, dataset);
    match service.add(description, amount, CategoryId::new(category)) {
        Ok(expense) => println!(
            "Added expense '{}' (ID: {})",
            expense.description, expense.id
        ),
        Err(e) => eprintln!("Error adding expense: {}", e),
    }
}

/// Handle `update`
pub fn handle_update(
    store: &Store,
    dataset: &mut Dataset,
    id: u64,
    description: Option<&str>,
    amount: Option<f64>,
    category: Option<u64>,
) {
    let mut service = ExpenseService::new(store, dataset);
    let category = category.map(CategoryId::new);
    match service.update(ExpenseId::new(id), description, amount, category) {
        Ok(expense) => println!("Updated expense {}", expense.id),
        Err(e) => eprintln!("Error updating expense: {}", e),
    }
}

/// Handle `delete`
pub fn handle_delete(store: &Store, dataset: &mut Dataset, id: u64) {
    let mut service = ExpenseService::new(store, dataset);
    match service.delete(ExpenseId::new(id)) {
        Ok(expense) => println!("Deleted expense {}", expense.id),
        Err(e) => eprintln!("Error deleting expense: {}", e),
    }
}

/// Handle `list expense`
pub fn handle_list_expenses(dataset: &Dataset) {
    print!(
        "{}",
        format_expense_table(&dataset.expenses, &dataset.categories)
    );
}
