//! CLI command handlers
//!
//! This module contains the parsed command surface and the handlers that
//! bridge clap argument parsing with the service layer. Handlers report
//! their own failures on stderr; only load and parse problems abort the
//! process.

use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod category;
pub mod expense;
pub mod export;
pub mod summary;

pub use category::{
    handle_create_category, handle_delete_category, handle_edit_category, handle_list_categories,
};
pub use expense::{handle_add, handle_delete, handle_list_expenses, handle_update};
pub use export::handle_export;
pub use summary::handle_summary;

/// All spendlog commands
#[derive(Subcommand)]
pub enum Commands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        #[arg(short, long)]
        description: String,
        /// Amount spent
        #[arg(short, long, allow_negative_numbers = true)]
        amount: f64,
        /// Category id the expense belongs to
        #[arg(short, long)]
        category: u64,
    },

    /// Update fields of an existing expense
    Update {
        /// Expense id
        #[arg(long)]
        id: u64,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<f64>,
        /// New category id
        #[arg(short, long)]
        category: Option<u64>,
    },

    /// Delete an expense
    Delete {
        /// Expense id
        #[arg(long)]
        id: u64,
    },

    /// List expenses or categories
    List {
        /// What to list
        #[arg(value_enum)]
        kind: ListKind,
    },

    /// Show total spending, optionally filtered by month and category
    Summary {
        /// Month of the current year (1-12)
        #[arg(short, long)]
        month: Option<u32>,
        /// Category id to filter by
        #[arg(short, long)]
        category: Option<u64>,
    },

    /// Create a new category
    #[command(name = "create-category")]
    CreateCategory {
        /// Category name
        #[arg(short, long)]
        name: String,
    },

    /// Rename a category
    #[command(name = "edit-category")]
    EditCategory {
        /// Category id
        #[arg(long)]
        id: u64,
        /// New name
        #[arg(short, long)]
        name: String,
    },

    /// Delete a category (must not be referenced by any expense)
    #[command(name = "delete-category")]
    DeleteCategory {
        /// Category id
        #[arg(long)]
        id: u64,
    },

    /// Export expenses to CSV
    Export {
        /// Output file path
        #[arg(short, long, default_value = "expenses.csv")]
        output: PathBuf,
    },
}

/// Collections that can be listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    /// The expense ledger
    Expense,
    /// The category registry
    Category,
}
