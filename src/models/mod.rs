//! Core data models for spendlog
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expenses, categories, and the dataset that holds them.

pub mod category;
pub mod dataset;
pub mod expense;
pub mod ids;

pub use category::Category;
pub use dataset::Dataset;
pub use expense::Expense;
pub use ids::{CategoryId, ExpenseId};
