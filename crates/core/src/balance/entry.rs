//! Canonical trial balance entry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One ledger account's period activity and closing balance.
///
/// Produced by the normalizer: every amount is non-negative and at most one
/// of `debit_balance` / `credit_balance` is non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    /// Chart-of-accounts number, whitespace removed. May be empty.
    pub account_code: String,
    /// Account name.
    pub label: String,
    /// Debit turnover for the period.
    pub debit_movement: Decimal,
    /// Credit turnover for the period.
    pub credit_movement: Decimal,
    /// Closing debit balance.
    pub debit_balance: Decimal,
    /// Closing credit balance.
    pub credit_balance: Decimal,
}

impl BalanceEntry {
    /// Creates an entry with zero movements and the given closing balances.
    #[must_use]
    pub fn with_balance(
        account_code: impl Into<String>,
        debit_balance: Decimal,
        credit_balance: Decimal,
    ) -> Self {
        Self {
            account_code: account_code.into(),
            label: String::new(),
            debit_movement: Decimal::ZERO,
            credit_movement: Decimal::ZERO,
            debit_balance,
            credit_balance,
        }
    }

    /// Signed closing balance: positive for a debtor account, negative for a creditor.
    #[must_use]
    pub fn signed_balance(&self) -> Decimal {
        self.debit_balance - self.credit_balance
    }

    /// Returns true if the entry satisfies the normalized-form invariant.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        let non_negative = [
            self.debit_movement,
            self.credit_movement,
            self.debit_balance,
            self.credit_balance,
        ]
        .iter()
        .all(|amount| !amount.is_sign_negative() || amount.is_zero());

        non_negative && (self.debit_balance.is_zero() || self.credit_balance.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_signed_balance() {
        assert_eq!(
            BalanceEntry::with_balance("512", dec!(1000), dec!(0)).signed_balance(),
            dec!(1000)
        );
        assert_eq!(
            BalanceEntry::with_balance("101", dec!(0), dec!(1000)).signed_balance(),
            dec!(-1000)
        );
    }

    #[test]
    fn test_is_normalized() {
        assert!(BalanceEntry::with_balance("512", dec!(10), dec!(0)).is_normalized());
        assert!(!BalanceEntry::with_balance("512", dec!(10), dec!(5)).is_normalized());
        assert!(!BalanceEntry::with_balance("512", dec!(-10), dec!(0)).is_normalized());
    }
}
