//! Expense display formatting
//!
//! Formats the expense ledger as a terminal table, resolving category ids
//! to names for readability.

use std::collections::HashMap;

use crate::models::{Category, CategoryId, Expense};

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], categories: &[Category]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let names: HashMap<CategoryId, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let desc_width = expenses
        .iter()
        .map(|e| e.description.len())
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:10}  {:<width$}  {:>10}  {}\n",
        "ID",
        "Date",
        "Description",
        "Amount",
        "Category",
        width = desc_width
    ));
    output.push_str(&format!(
        "{:->4}  {:->10}  {:-<width$}  {:->10}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        width = desc_width
    ));

    for expense in expenses {
        let category = names
            .get(&expense.category_id)
            .copied()
            .unwrap_or("Unknown");

        let amount = format!("${:.2}", expense.amount);
        output.push_str(&format!(
            "{:>4}  {}  {:<width$}  {:>10}  {}\n",
            expense.id,
            expense.created_at.format("%Y-%m-%d"),
            expense.description,
            amount,
            category,
            width = desc_width
        ));
    }

    output
}
