//! Loosely-typed trial balance rows as produced by upstream imports.

use std::collections::BTreeMap;
use std::str::FromStr;

use liasse_shared::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::entry::BalanceEntry;

/// A canonical field of a trial balance row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Account number.
    AccountCode,
    /// Account name.
    Label,
    /// Debit turnover.
    DebitMovement,
    /// Credit turnover.
    CreditMovement,
    /// Closing debit balance.
    DebitBalance,
    /// Closing credit balance.
    CreditBalance,
    /// Single signed closing balance.
    NetBalance,
}

impl Field {
    /// Every numeric field.
    pub const AMOUNTS: [Self; 5] = [
        Self::DebitMovement,
        Self::CreditMovement,
        Self::DebitBalance,
        Self::CreditBalance,
        Self::NetBalance,
    ];

    /// Accepted column names, in lookup priority order.
    #[must_use]
    pub const fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::AccountCode => &[
                "account_code",
                "account",
                "code",
                "compte",
                "numero_compte",
                "num_compte",
                "numero",
            ],
            Self::Label => &["label", "name", "intitule", "libelle", "libelle_compte"],
            Self::DebitMovement => &["debit_movement", "debit", "mouvement_debit", "total_debit"],
            Self::CreditMovement => &[
                "credit_movement",
                "credit",
                "mouvement_credit",
                "total_credit",
            ],
            Self::DebitBalance => &["debit_balance", "solde_debit", "solde_debiteur", "sd"],
            Self::CreditBalance => &["credit_balance", "solde_credit", "solde_crediteur", "sc"],
            Self::NetBalance => &["net_balance", "balance", "solde", "solde_net"],
        }
    }
}

/// One raw trial balance row: column name to loosely-typed value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(BTreeMap<String, Value>);

impl RawRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column, builder style.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    /// Sets a column value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(column.into(), value.into());
    }

    /// Looks up a canonical field through its synonyms.
    ///
    /// Column names are compared case-insensitively and without French
    /// accents, ignoring surrounding whitespace and treating inner spaces or
    /// dashes as underscores.
    /// `null` values count as absent.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&Value> {
        field.synonyms().iter().find_map(|synonym| {
            self.0
                .iter()
                .find(|(column, value)| !value.is_null() && canonical_column(column) == *synonym)
                .map(|(_, value)| value)
        })
    }

    /// Returns the account code with all whitespace removed, or an empty string.
    #[must_use]
    pub fn account_code(&self) -> String {
        match self.get(Field::AccountCode) {
            Some(Value::String(code)) => code.chars().filter(|c| !c.is_whitespace()).collect(),
            Some(Value::Number(code)) => code.to_string(),
            _ => String::new(),
        }
    }

    /// Returns the trimmed label, or an empty string.
    #[must_use]
    pub fn label(&self) -> String {
        match self.get(Field::Label) {
            Some(Value::String(label)) => label.trim().to_string(),
            Some(Value::Number(label)) => label.to_string(),
            _ => String::new(),
        }
    }

    /// Returns the parsed amount of a numeric field, zero when absent or unparseable.
    #[must_use]
    pub fn amount(&self, field: Field) -> Decimal {
        self.get(field).map_or(Decimal::ZERO, parse_amount)
    }

    /// Returns the parsed amount of a numeric field, zero when absent.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Parse` if the value cannot be read as an amount.
    pub fn try_amount(&self, field: Field) -> AppResult<Decimal> {
        self.get(field).map_or(Ok(Decimal::ZERO), try_parse_amount)
    }

    /// Checks that every amount field present is readable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Parse` naming the first unreadable field.
    pub fn check_amounts(&self) -> AppResult<()> {
        for field in Field::AMOUNTS {
            self.try_amount(field)?;
        }
        Ok(())
    }

    /// Returns true if the field is present with a non-null value.
    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some()
    }
}

fn canonical_column(column: &str) -> String {
    column
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

impl From<serde_json::Map<String, Value>> for RawRecord {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        )
    }
}

impl From<&BalanceEntry> for RawRecord {
    fn from(entry: &BalanceEntry) -> Self {
        Self::new()
            .with("account_code", entry.account_code.clone())
            .with("label", entry.label.clone())
            .with("debit_movement", entry.debit_movement.to_string())
            .with("credit_movement", entry.credit_movement.to_string())
            .with("debit_balance", entry.debit_balance.to_string())
            .with("credit_balance", entry.credit_balance.to_string())
            .with("net_balance", entry.signed_balance().to_string())
    }
}

/// Parses a loosely-typed amount. Never fails: anything unreadable is zero.
///
/// Strings accept French formatting: spaces as thousands separators, a comma
/// decimal separator, parentheses for negatives and trailing currency symbols.
/// Rejected strings are logged before being treated as zero; use
/// [`try_parse_amount`] to surface them instead.
#[must_use]
pub fn parse_amount(value: &Value) -> Decimal {
    try_parse_amount(value).unwrap_or_else(|err| {
        warn!(error = %err, "Unreadable amount treated as zero");
        Decimal::ZERO
    })
}

/// Parses a loosely-typed amount.
///
/// Empty strings, text without digits, booleans and `null` read as zero.
///
/// # Errors
///
/// Returns `AppError::Parse` when a string uses the comma as a thousands
/// separator (`1,234.56`, `1,234,567`), since reading it the French way would
/// silently yield a different amount, or when its digits do not form a number.
pub fn try_parse_amount(value: &Value) -> AppResult<Decimal> {
    match value {
        Value::Number(number) => {
            let text = number.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .map_err(|err| AppError::Parse(format!("Unreadable amount {text}: {err}")))
        }
        Value::String(text) => parse_french_amount(text),
        _ => Ok(Decimal::ZERO),
    }
}

fn parse_french_amount(text: &str) -> AppResult<Decimal> {
    let mut body: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let parenthesized = body.len() >= 2 && body.starts_with('(') && body.ends_with(')');
    if parenthesized {
        body = body[1..body.len() - 1].to_string();
    }

    let commas = body.matches(',').count();
    let dots = body.matches('.').count();
    let comma_before_dot = matches!(
        (body.find(','), body.rfind('.')),
        (Some(comma), Some(dot)) if comma < dot
    );
    if commas > 1 || comma_before_dot {
        return Err(AppError::Parse(format!(
            "Ambiguous amount '{text}': comma used as a thousands separator"
        )));
    }

    // "1.234,56" and "1.234.567": dots are grouping
    if commas == 1 || dots > 1 {
        body = body.replace('.', "").replacen(',', ".", 1);
    }

    let cleaned: String = body
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return Ok(Decimal::ZERO);
    }

    let amount = Decimal::from_str(&cleaned)
        .map_err(|err| AppError::Parse(format!("Unreadable amount '{text}': {err}")))?;
    Ok(if parenthesized { -amount } else { amount })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[rstest]
    #[case(json!(1500), dec!(1500))]
    #[case(json!(-500), dec!(-500))]
    #[case(json!(1234.5), dec!(1234.5))]
    #[case(json!("1 234 567"), dec!(1234567))]
    #[case(json!("1\u{a0}234,50"), dec!(1234.50))]
    #[case(json!("(1 234,50)"), dec!(-1234.50))]
    #[case(json!("1.234,56"), dec!(1234.56))]
    #[case(json!("1.234.567"), dec!(1234567))]
    #[case(json!("12,5 FCFA"), dec!(12.5))]
    #[case(json!("-75"), dec!(-75))]
    #[case(json!(""), dec!(0))]
    #[case(json!("n/a"), dec!(0))]
    #[case(json!(true), dec!(0))]
    #[case(json!(null), dec!(0))]
    fn test_parse_amount(#[case] value: Value, #[case] expected: Decimal) {
        assert_eq!(parse_amount(&value), expected);
        assert_eq!(try_parse_amount(&value).unwrap(), expected);
    }

    #[rstest]
    #[case("1,234.56")]
    #[case("1,234,567")]
    #[case("(2,500.00)")]
    #[case("12-5")]
    fn test_ambiguous_amount_is_rejected(#[case] text: &str) {
        let err = try_parse_amount(&json!(text)).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)), "{err}");
        assert_eq!(parse_amount(&json!(text)), dec!(0));
    }

    #[test]
    fn test_check_amounts_names_the_value() {
        let record = RawRecord::new()
            .with("compte", "601")
            .with("debit", "1,234.56")
            .with("libelle", "1,2,3");
        let err = record.check_amounts().unwrap_err();
        assert!(err.to_string().contains("1,234.56"));

        let readable = RawRecord::new().with("compte", "601").with("debit", "1 234,56");
        assert!(readable.check_amounts().is_ok());
        assert_eq!(readable.try_amount(Field::DebitMovement).unwrap(), dec!(1234.56));
    }

    #[rstest]
    #[case("compte")]
    #[case("Compte")]
    #[case(" COMPTE ")]
    #[case("numero compte")]
    #[case("account-code")]
    #[case("Numéro Compte")]
    fn test_account_code_synonyms(#[case] column: &str) {
        let record = RawRecord::new().with(column, "52 11");
        assert_eq!(record.account_code(), "5211");
    }

    #[test]
    fn test_numeric_account_code() {
        let record = RawRecord::new().with("compte", 512);
        assert_eq!(record.account_code(), "512");
    }

    #[test]
    fn test_missing_account_code_is_empty() {
        let record = RawRecord::new().with("debit", 10);
        assert_eq!(record.account_code(), "");
        assert_eq!(record.label(), "");
    }

    #[test]
    fn test_balance_synonyms_are_not_movements() {
        let record = RawRecord::new()
            .with("Solde Debit", "100")
            .with("debit", "40");
        assert_eq!(record.amount(Field::DebitBalance), dec!(100));
        assert_eq!(record.amount(Field::DebitMovement), dec!(40));
    }

    #[test]
    fn test_null_counts_as_absent() {
        let record = RawRecord::new().with("solde", Value::Null);
        assert!(!record.has(Field::NetBalance));
    }

    #[test]
    fn test_from_json_object() {
        let value = json!({ "compte": "411", "intitule": "Clients", "sd": 25 });
        let Value::Object(map) = value else {
            panic!("expected object");
        };
        let record = RawRecord::from(map);
        assert_eq!(record.account_code(), "411");
        assert_eq!(record.label(), "Clients");
        assert_eq!(record.amount(Field::DebitBalance), dec!(25));
    }
}
