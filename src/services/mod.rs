//! Service layer for spendlog
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, referential integrity, and persistence after
//! every mutation.

pub mod category;
pub mod expense;
pub mod summary;

pub use category::CategoryService;
pub use expense::ExpenseService;
pub use summary::SummaryService;
