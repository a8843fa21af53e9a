//! Financial statement generation.
//!
//! This module derives ordered statement lines from a loaded trial balance:
//! - Balance sheet assets (gross, contra, net) and liabilities
//! - Income statement charges and products
//! - Sparse explanatory notes
//! - Intermediate management balances
//! - Per-account detail rows

pub mod error;
pub mod service;
pub mod types;


pub use error::StatementError;
pub use service::StatementService;
pub use types::{AmountLine, AssetLine, NoteTable, StatementId, StatementLine};
