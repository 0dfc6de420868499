//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.
//! The services never print; everything user-facing goes through here
//! or the CLI handlers.

pub mod category;
pub mod expense;
pub mod summary;

pub use category::format_category_table;
pub use expense::format_expense_table;
pub use summary::{format_summary, month_name};
