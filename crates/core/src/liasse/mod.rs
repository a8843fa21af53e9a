//! Liasse derivation facade.
//!
//! Ties the pipeline together for callers: raw trial balance in, statements,
//! notes and validation report out.

pub mod batch;
pub mod bundle;
pub mod engine;

pub use batch::derive_batch;
pub use bundle::{BundleTotals, LiasseBundle};
pub use engine::{LiasseEngine, LiasseOptions};
