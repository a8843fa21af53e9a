//! Raw record to canonical entry conversion.

use liasse_shared::{AppError, AppResult};
use rust_decimal::Decimal;
use tracing::debug;

use super::entry::BalanceEntry;
use super::raw::{Field, RawRecord};

/// Normalizes a trial balance, one entry per raw record, in input order.
///
/// Never fails: missing fields default to zero and unreadable amounts are
/// treated as zero.
#[must_use]
pub fn normalize(records: &[RawRecord]) -> Vec<BalanceEntry> {
    records.iter().map(normalize_record).collect()
}

/// Normalizes a trial balance after checking that every amount is readable.
///
/// # Errors
///
/// Returns `AppError::Parse` naming the first row (1-based) whose amount is
/// ambiguous or unreadable.
pub fn try_normalize(records: &[RawRecord]) -> AppResult<Vec<BalanceEntry>> {
    for (index, record) in records.iter().enumerate() {
        record.check_amounts().map_err(|err| match err {
            AppError::Parse(message) => AppError::Parse(format!("Row {}: {message}", index + 1)),
            other => other,
        })?;
    }
    Ok(normalize(records))
}

/// Normalizes a single raw record.
///
/// 1. Negative movements are moved to the opposite movement side
/// 2. Negative closing balances are moved to the opposite balance side
/// 3. Empty closing balances are derived from the net field, or from movements
/// 4. Two-sided closing balances are netted
#[must_use]
pub fn normalize_record(record: &RawRecord) -> BalanceEntry {
    let account_code = record.account_code();

    let (debit_movement, credit_movement) = correct_signs(
        &account_code,
        "movement",
        record.amount(Field::DebitMovement),
        record.amount(Field::CreditMovement),
    );

    let (mut debit_balance, mut credit_balance) = correct_signs(
        &account_code,
        "balance",
        record.amount(Field::DebitBalance),
        record.amount(Field::CreditBalance),
    );

    if debit_balance.is_zero() && credit_balance.is_zero() {
        let net = if record.has(Field::NetBalance) {
            record.amount(Field::NetBalance)
        } else {
            debit_movement - credit_movement
        };
        (debit_balance, credit_balance) = split_signed(net);
    } else if !debit_balance.is_zero() && !credit_balance.is_zero() {
        debug!(
            account = %account_code,
            debit = %debit_balance,
            credit = %credit_balance,
            "Netting two-sided closing balance"
        );
        (debit_balance, credit_balance) = split_signed(debit_balance - credit_balance);
    }

    BalanceEntry {
        account_code,
        label: record.label(),
        debit_movement,
        credit_movement,
        debit_balance,
        credit_balance,
    }
}

/// Moves negative amounts to the opposite side.
///
/// Both sides are corrected from their original values, so a pair of
/// negatives swaps sides instead of compounding.
fn correct_signs(
    account_code: &str,
    pair: &str,
    debit: Decimal,
    credit: Decimal,
) -> (Decimal, Decimal) {
    if is_negative(debit) {
        debug!(account = %account_code, pair, amount = %debit, "Negative debit moved to credit");
    }
    if is_negative(credit) {
        debug!(account = %account_code, pair, amount = %credit, "Negative credit moved to debit");
    }

    let (debit_pos, debit_neg) = split_signed(debit);
    let (credit_pos, credit_neg) = split_signed(credit);
    (debit_pos + credit_neg, credit_pos + debit_neg)
}

/// Splits a signed amount into its (positive part, absolute negative part).
fn split_signed(amount: Decimal) -> (Decimal, Decimal) {
    if is_negative(amount) {
        (Decimal::ZERO, -amount)
    } else if amount.is_zero() {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        (amount, Decimal::ZERO)
    }
}

fn is_negative(amount: Decimal) -> bool {
    amount.is_sign_negative() && !amount.is_zero()
}
