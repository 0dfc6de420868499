//! Export module for spendlog
//!
//! Serializes the ledger to spreadsheet-compatible CSV.

pub mod csv;

pub use csv::export_expenses_csv;
