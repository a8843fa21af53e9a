//! Trial balance intake.
//!
//! This module turns loosely-typed trial balance rows into canonical entries:
//! - Raw records with synonym-tolerant field lookup
//! - French-formatted amount parsing
//! - Sign correction and closing balance derivation

pub mod entry;
pub mod normalizer;
pub mod raw;

#[cfg(test)]
mod normalizer_props;

pub use entry::BalanceEntry;
pub use normalizer::{normalize, normalize_record, try_normalize};
pub use raw::{Field, RawRecord, parse_amount, try_parse_amount};
