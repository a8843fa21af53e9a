//! SYSCOHADA chart-of-accounts to caption mapping.
//!
//! This module holds the static tables every statement is derived from:
//! - Caption catalogs for the balance sheet and the income statement
//! - Note catalogs at account-class granularity
//! - The intermediate balances (SIG) cascade and the cash flow table
//! - Condensed catalogs of the minimal reporting system (SMT)

pub mod cash_flow;
pub mod catalog;
pub mod notes;
pub mod sig;
pub mod smt;
pub mod syscohada;
pub mod system;

pub use cash_flow::{CashFlowRow, CashFlowRowKind, FlowTerm};
pub use catalog::{CaptionMapping, Catalog, Layout, Side, SumRule};
pub use notes::NoteId;
pub use sig::{SigRow, SigRowKind, SigSign, SigTerm};
pub use smt::{SMT_ASSETS, SMT_CHARGES, SMT_LIABILITIES, SMT_PRODUCTS, SMT_RESULT_CAPTION};
pub use syscohada::{ASSETS, CHARGES, LIABILITIES, PRODUCTS, RESULT_CAPTION};
pub use system::ReportingSystem;
