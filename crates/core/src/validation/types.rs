//! Validation report types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Validator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Largest gap still treated as equal.
    pub tolerance: Decimal,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            tolerance: Decimal::new(1, 2),
        }
    }
}

/// One comparison performed by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyCheck {
    /// Check reference (`BZ=DZ`, `XI=CH`).
    pub code: String,
    /// What is compared.
    pub label: String,
    /// First computation.
    pub left: Decimal,
    /// Second computation.
    pub right: Decimal,
    /// Absolute difference.
    pub gap: Decimal,
    /// True if the gap is within tolerance.
    pub ok: bool,
}

/// Outcome of a validation run. Discrepancies are data, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True if every check passed.
    pub is_consistent: bool,
    /// Human-readable message per failed check.
    pub discrepancies: Vec<String>,
    /// Every check, passed or not.
    pub checks: Vec<ConsistencyCheck>,
}
