//! Property-based tests for trial balance normalization.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::normalizer::{normalize, normalize_record};
use super::raw::RawRecord;

/// Strategy for a signed amount between -1,000,000.00 and 1,000,000.00.
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for an optional signed amount (absent columns are common).
fn optional_amount() -> impl Strategy<Value = Option<Decimal>> {
    prop::option::of(signed_amount())
}

/// Strategy for a SYSCOHADA-looking account code.
fn account_code() -> impl Strategy<Value = String> {
    "[1-8][0-9]{1,5}"
}

prop_compose! {
    fn raw_record()(
        code in account_code(),
        debit in optional_amount(),
        credit in optional_amount(),
        debit_balance in optional_amount(),
        credit_balance in optional_amount(),
        net in optional_amount(),
    ) -> RawRecord {
        let mut record = RawRecord::new().with("compte", code);
        let columns = [
            ("debit", debit),
            ("credit", credit),
            ("solde_debit", debit_balance),
            ("solde_credit", credit_balance),
            ("solde", net),
        ];
        for (column, amount) in columns {
            if let Some(amount) = amount {
                record.insert(column, amount.to_string());
            }
        }
        record
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every normalized entry is non-negative with at most one balance side set.
    #[test]
    fn prop_normalized_form(record in raw_record()) {
        let entry = normalize_record(&record);
        prop_assert!(entry.is_normalized(), "not normalized: {:?}", entry);
    }

    /// Normalizing an already normalized balance changes nothing.
    #[test]
    fn prop_normalize_idempotent(records in prop::collection::vec(raw_record(), 0..20)) {
        let first = normalize(&records);
        let again: Vec<RawRecord> = first.iter().map(RawRecord::from).collect();
        let second = normalize(&again);
        prop_assert_eq!(first, second);
    }

    /// Sign correction preserves the net movement.
    #[test]
    fn prop_net_movement_preserved(debit in signed_amount(), credit in signed_amount()) {
        let record = RawRecord::new()
            .with("compte", "471")
            .with("debit", debit.to_string())
            .with("credit", credit.to_string());
        let entry = normalize_record(&record);

        prop_assert_eq!(entry.debit_movement - entry.credit_movement, debit - credit);
        prop_assert_eq!(entry.signed_balance(), debit - credit);
    }

    /// Explicit closing balances net to their signed difference.
    #[test]
    fn prop_balance_difference_preserved(
        debit_balance in signed_amount(),
        credit_balance in signed_amount(),
    ) {
        prop_assume!(!(debit_balance.is_zero() && credit_balance.is_zero()));
        let record = RawRecord::new()
            .with("compte", "401")
            .with("sd", debit_balance.to_string())
            .with("sc", credit_balance.to_string());
        let entry = normalize_record(&record);

        prop_assert_eq!(entry.signed_balance(), debit_balance - credit_balance);
    }
}
