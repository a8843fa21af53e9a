//! Prefix-searchable signed balance aggregation.
//!
//! This module implements the summation layer every statement is built on:
//! - Signed balance index keyed by account code
//! - Directional sums (debtor-only, creditor-only) and the raw signed sum
//! - Per-account listings for detail rows

pub mod engine;
pub mod index;

#[cfg(test)]
mod engine_props;

pub use engine::AggregationEngine;
pub use index::SignedBalanceIndex;
