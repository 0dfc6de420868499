//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum SpendlogError {
    /// Malformed or missing input (empty description, non-positive amount, bad month)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced entity does not exist
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Uniqueness violation (a category with that name already exists)
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Referential-use violation (a category still linked to expenses)
    #[error("{entity_type} is in use: {identifier}")]
    InUse {
        entity_type: &'static str,
        identifier: String,
    },

    /// The store file exists but does not parse as a dataset
    #[error("Corrupt store: {0}")]
    CorruptStore(String),

    /// The dataset cannot be serialized to the store format
    #[error("Invalid store format: {0}")]
    Format(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SpendlogError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a conflict (uniqueness or referential-use violation)
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Duplicate { .. } | Self::InUse { .. })
    }
}

impl From<std::io::Error> for SpendlogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type SpendlogResult<T> = Result<T, SpendlogError>;
