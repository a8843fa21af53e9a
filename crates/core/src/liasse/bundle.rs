//! Serializable liasse bundle.

use chrono::NaiveDate;
use liasse_shared::types::{Currency, Money};
use serde::Serialize;

use crate::mapping::ReportingSystem;
use crate::statements::{NoteTable, StatementLine};
use crate::validation::ValidationReport;

/// Headline totals of a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleTotals {
    /// Sum of net asset values.
    pub total_assets: Money,
    /// Sum of equity and liability amounts.
    pub total_liabilities: Money,
    /// Products minus charges.
    pub net_result: Money,
}

impl BundleTotals {
    /// Returns true if the period closes on a loss.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.net_result.is_negative()
    }
}

/// Every statement derived from one trial balance, plus its validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiasseBundle {
    /// Closing date of the period, if known.
    pub period_end: Option<NaiveDate>,
    /// Reporting currency.
    pub currency: Currency,
    /// Caption layout of the balance sheet and the income statement.
    pub system: ReportingSystem,
    /// Balance sheet, assets.
    pub assets: Vec<StatementLine>,
    /// Balance sheet, equity and liabilities.
    pub liabilities: Vec<StatementLine>,
    /// Income statement, charges.
    pub charges: Vec<StatementLine>,
    /// Income statement, products.
    pub products: Vec<StatementLine>,
    /// Intermediate management balances.
    pub intermediate_balances: Vec<StatementLine>,
    /// Cash flow table, current period only.
    pub cash_flows: Vec<StatementLine>,
    /// Non-empty notes, in note number order.
    pub notes: Vec<NoteTable>,
    /// Headline totals.
    pub totals: BundleTotals,
    /// Consistency report.
    pub validation: ValidationReport,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_is_loss() {
        let totals = |result| BundleTotals {
            total_assets: Money::new(dec!(100), Currency::Xof),
            total_liabilities: Money::new(dec!(100), Currency::Xof),
            net_result: Money::new(result, Currency::Xof),
        };

        assert!(totals(dec!(-1)).is_loss());
        assert!(!totals(dec!(0)).is_loss());
        assert!(!totals(dec!(250)).is_loss());
    }
}
