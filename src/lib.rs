//! spendlog - Command-line expense tracker
//!
//! This library provides the core functionality for the spendlog expense
//! tracker: a single JSON store of expenses and categories with commands
//! to record, edit, summarize, and export spending.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, the dataset)
//! - `storage`: JSON file storage with atomic writes
//! - `services`: Business logic layer
//! - `display`: Terminal table and summary formatting
//! - `export`: CSV serialization of the ledger
//! - `cli`: Command definitions and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::services::ExpenseService;
//! use spendlog::storage::Store;
//!
//! let store = Store::new("expense.json");
//! let mut dataset = store.load()?;
//! let mut service = ExpenseService::new(&store, &mut dataset);
//! service.add("Lunch", 12.5, category_id)?;
//! ```

pub mod cli;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::SpendlogError;
