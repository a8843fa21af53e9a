//! Core derivation logic for the SYSCOHADA liasse fiscale.
//!
//! This crate contains pure business logic with ZERO file or UI dependencies.
//! A trial balance goes in; balance sheet, income statement, intermediate
//! management balances, cash flow table, annex notes and a consistency
//! report come out, in the normal or the minimal reporting system.
//!
//! # Modules
//!
//! - `balance` - Raw trial balance intake and normalization
//! - `aggregation` - Prefix-indexed signed balance sums
//! - `mapping` - SYSCOHADA caption, note, SIG and cash flow catalogs
//! - `statements` - Statement and note line derivation
//! - `validation` - Balance sheet and result consistency checks
//! - `liasse` - Caller-facing engine, bundles and batch derivation

pub mod aggregation;
pub mod balance;
pub mod liasse;
pub mod mapping;
pub mod statements;
pub mod validation;

pub use aggregation::AggregationEngine;
pub use balance::{BalanceEntry, RawRecord, normalize, try_normalize};
pub use liasse::{LiasseBundle, LiasseEngine, LiasseOptions, derive_batch};
pub use mapping::{NoteId, ReportingSystem};
pub use statements::{StatementError, StatementId, StatementLine};
pub use validation::{ValidationReport, ValidationSettings};
