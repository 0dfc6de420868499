//! CSV export functionality
//!
//! Serializes the expense ledger to CSV, resolving category ids to names.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Dataset;

/// Write all expenses as CSV, returning how many rows were exported
pub fn export_expenses_csv<W: Write>(dataset: &Dataset, writer: &mut W) -> SpendlogResult<usize> {
    let category_names: HashMap<_, _> = dataset
        .categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    writeln!(writer, "ID,Date,Description,Amount,Category")
        .map_err(|e| SpendlogError::Export(e.to_string()))?;

    for expense in &dataset.expenses {
        let category_name = category_names
            .get(&expense.category_id)
            .copied()
            .unwrap_or("Unknown");

        writeln!(
            writer,
            "{},{},{},{},{}",
            expense.id,
            expense.created_at.format("%Y-%m-%d"),
            escape_csv(&expense.description),
            expense.amount,
            escape_csv(category_name)
        )
        .map_err(|e| SpendlogError::Export(e.to_string()))?;
    }

    Ok(dataset.expenses.len())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
