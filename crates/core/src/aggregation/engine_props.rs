//! Property-based tests for directional summation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::AggregationEngine;
use crate::balance::BalanceEntry;

/// Strategy for a signed closing balance between -1,000,000.00 and 1,000,000.00.
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a short account code drawn from a small alphabet, so that
/// prefixes collide often.
fn account_code() -> impl Strategy<Value = String> {
    "[1-4][0-3]{0,3}"
}

/// Strategy for a prefix over the same alphabet.
fn prefix() -> impl Strategy<Value = String> {
    "[1-4][0-3]{0,2}"
}

fn entry(code: String, signed: Decimal) -> BalanceEntry {
    if signed.is_sign_negative() {
        BalanceEntry::with_balance(code, Decimal::ZERO, -signed)
    } else {
        BalanceEntry::with_balance(code, signed, Decimal::ZERO)
    }
}

fn entries() -> impl Strategy<Value = Vec<BalanceEntry>> {
    prop::collection::vec((account_code(), signed_amount()), 0..40)
        .prop_map(|rows| rows.into_iter().map(|(code, amount)| entry(code, amount)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Debtor and creditor sums bound the net sum and rebuild it exactly.
    #[test]
    fn prop_directional_exclusivity(
        entries in entries(),
        prefixes in prop::collection::vec(prefix(), 1..4),
    ) {
        let mut engine = AggregationEngine::new();
        engine.load(&entries);
        let prefixes: Vec<&str> = prefixes.iter().map(String::as_str).collect();

        let debit = engine.sum_debit_positive(&prefixes);
        let credit = engine.sum_credit_positive(&prefixes);
        let net = engine.net_signed(&prefixes);

        prop_assert!(debit >= Decimal::ZERO);
        prop_assert!(credit >= Decimal::ZERO);
        prop_assert_eq!(debit - credit, net);
        prop_assert!(debit + credit >= net.abs());
    }

    /// The indexed range scan agrees with an exhaustive scan of the entries.
    #[test]
    fn prop_matches_exhaustive_scan(
        entries in entries(),
        prefixes in prop::collection::vec(prefix(), 1..4),
    ) {
        let mut engine = AggregationEngine::new();
        engine.load(&entries);
        let prefixes: Vec<&str> = prefixes.iter().map(String::as_str).collect();

        let expected: Decimal = entries
            .iter()
            .filter(|e| prefixes.iter().any(|p| e.account_code.starts_with(p)))
            .map(BalanceEntry::signed_balance)
            .sum();

        prop_assert_eq!(engine.net_signed(&prefixes), expected);
    }

    /// Splitting a balance into duplicate rows does not change any sum.
    #[test]
    fn prop_duplicates_additive(
        code in account_code(),
        first in signed_amount(),
        second in signed_amount(),
    ) {
        let mut split = AggregationEngine::new();
        split.load(&[entry(code.clone(), first), entry(code.clone(), second)]);
        let mut merged = AggregationEngine::new();
        merged.load(&[entry(code.clone(), first + second)]);

        let prefixes = [code.as_str()];
        prop_assert_eq!(split.sum_debit_positive(&prefixes), merged.sum_debit_positive(&prefixes));
        prop_assert_eq!(split.sum_credit_positive(&prefixes), merged.sum_credit_positive(&prefixes));
    }
}
