//! Cross-statement consistency checks.
//!
//! Totals are recomputed two independent ways and compared:
//! - Balance sheet equilibrium (assets against equity and liabilities)
//! - Net result on the balance sheet against the income statement

pub mod types;
pub mod validator;

pub use types::{ConsistencyCheck, ValidationReport, ValidationSettings};
pub use validator::ConsistencyValidator;
