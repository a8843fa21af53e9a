//! Directional summation over a loaded trial balance.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use super::index::SignedBalanceIndex;
use crate::balance::BalanceEntry;

/// Holds the signed balance index of one trial balance.
///
/// `load` replaces the index wholesale; every summation reads it without
/// mutation.
#[derive(Debug, Clone, Default)]
pub struct AggregationEngine {
    index: Option<SignedBalanceIndex>,
    labels: BTreeMap<String, String>,
}

impl AggregationEngine {
    /// Creates an engine with nothing loaded.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            index: None,
            labels: BTreeMap::new(),
        }
    }

    /// Replaces the current index with one built from `entries`.
    pub fn load(&mut self, entries: &[BalanceEntry]) {
        let index = SignedBalanceIndex::from_entries(entries);
        debug!(
            entries = entries.len(),
            accounts = index.len(),
            "Loaded trial balance"
        );
        self.index = Some(index);

        // first non-empty label wins for duplicated codes
        self.labels.clear();
        for entry in entries.iter().filter(|entry| !entry.label.is_empty()) {
            self.labels
                .entry(entry.account_code.clone())
                .or_insert_with(|| entry.label.clone());
        }
    }

    /// Returns true once a trial balance has been loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.index.is_some()
    }

    /// Number of distinct accounts in the loaded balance.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.index.as_ref().map_or(0, SignedBalanceIndex::len)
    }

    /// Account name from the loaded balance, if one was supplied.
    #[must_use]
    pub fn label(&self, account_code: &str) -> Option<&str> {
        self.labels.get(account_code).map(String::as_str)
    }

    /// Sum of the debtor (positive) balances of matching accounts.
    ///
    /// Creditor accounts contribute nothing.
    #[must_use]
    pub fn sum_debit_positive(&self, prefixes: &[&str]) -> Decimal {
        self.accounts_matching(prefixes)
            .into_iter()
            .filter(|(_, balance)| *balance > Decimal::ZERO)
            .map(|(_, balance)| balance)
            .sum()
    }

    /// Sum of the absolute creditor (negative) balances of matching accounts.
    ///
    /// Debtor accounts contribute nothing.
    #[must_use]
    pub fn sum_credit_positive(&self, prefixes: &[&str]) -> Decimal {
        self.accounts_matching(prefixes)
            .into_iter()
            .filter(|(_, balance)| *balance < Decimal::ZERO)
            .map(|(_, balance)| -balance)
            .sum()
    }

    /// Raw signed sum of matching accounts, debtor positive.
    #[must_use]
    pub fn net_signed(&self, prefixes: &[&str]) -> Decimal {
        self.accounts_matching(prefixes)
            .into_iter()
            .map(|(_, balance)| balance)
            .sum()
    }

    /// Matching accounts with their signed balances, in account code order.
    ///
    /// An account matching several prefixes appears once.
    #[must_use]
    pub fn accounts_matching(&self, prefixes: &[&str]) -> Vec<(String, Decimal)> {
        self.index.as_ref().map_or_else(Vec::new, |index| {
            index
                .matching(prefixes)
                .map(|(code, balance)| (code.to_string(), balance))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn loaded(entries: &[BalanceEntry]) -> AggregationEngine {
        let mut engine = AggregationEngine::new();
        engine.load(entries);
        engine
    }

    #[test]
    fn test_not_loaded_sums_to_zero() {
        let engine = AggregationEngine::new();
        assert!(!engine.is_loaded());
        assert_eq!(engine.sum_debit_positive(&["5"]), dec!(0));
        assert_eq!(engine.net_signed(&["5"]), dec!(0));
        assert_eq!(engine.account_count(), 0);
    }

    #[test]
    fn test_empty_load_is_loaded() {
        let engine = loaded(&[]);
        assert!(engine.is_loaded());
        assert_eq!(engine.account_count(), 0);
    }

    #[test]
    fn test_directional_sums() {
        let engine = loaded(&[
            BalanceEntry::with_balance("4011", dec!(0), dec!(800)),
            BalanceEntry::with_balance("4012", dec!(150), dec!(0)),
            BalanceEntry::with_balance("411", dec!(500), dec!(0)),
        ]);

        assert_eq!(engine.sum_credit_positive(&["40"]), dec!(800));
        assert_eq!(engine.sum_debit_positive(&["40"]), dec!(150));
        assert_eq!(engine.net_signed(&["40"]), dec!(-650));
        assert_eq!(engine.sum_debit_positive(&["40", "41"]), dec!(650));
    }

    #[test]
    fn test_duplicate_codes_net_before_direction() {
        let engine = loaded(&[
            BalanceEntry::with_balance("31", dec!(100), dec!(0)),
            BalanceEntry::with_balance("31", dec!(0), dec!(40)),
        ]);

        assert_eq!(engine.sum_debit_positive(&["31"]), dec!(60));
        assert_eq!(engine.sum_credit_positive(&["31"]), dec!(0));
    }

    #[test]
    fn test_reload_discards_previous_index() {
        let mut engine = loaded(&[BalanceEntry::with_balance("512", dec!(100), dec!(0))]);
        engine.load(&[BalanceEntry::with_balance("521", dec!(7), dec!(0))]);

        assert_eq!(engine.sum_debit_positive(&["512"]), dec!(0));
        assert_eq!(engine.sum_debit_positive(&["52"]), dec!(7));
        assert_eq!(engine.account_count(), 1);
    }

    #[test]
    fn test_labels_first_non_empty_wins() {
        let mut first = BalanceEntry::with_balance("512", dec!(1), dec!(0));
        first.label = String::new();
        let mut second = BalanceEntry::with_balance("512", dec!(1), dec!(0));
        second.label = "Banque A".to_string();
        let mut third = BalanceEntry::with_balance("512", dec!(1), dec!(0));
        third.label = "Banque B".to_string();

        let mut engine = loaded(&[first, second, third]);
        assert_eq!(engine.label("512"), Some("Banque A"));
        assert_eq!(engine.label("101"), None);

        engine.load(&[]);
        assert_eq!(engine.label("512"), None);
    }

    #[test]
    fn test_accounts_matching() {
        let engine = loaded(&[
            BalanceEntry::with_balance("6012", dec!(3), dec!(0)),
            BalanceEntry::with_balance("6011", dec!(2), dec!(0)),
            BalanceEntry::with_balance("602", dec!(9), dec!(0)),
        ]);

        assert_eq!(
            engine.accounts_matching(&["601"]),
            vec![("6011".to_string(), dec!(2)), ("6012".to_string(), dec!(3))]
        );
    }
}
