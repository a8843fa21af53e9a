//! Statement line types.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::mapping::NoteId;

/// A balance sheet asset line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLine {
    /// Caption code.
    pub code: String,
    /// Caption wording.
    pub label: String,
    /// Gross value.
    pub gross: Decimal,
    /// Amortization, depreciation or provision.
    pub contra: Decimal,
    /// `gross - contra`.
    pub net: Decimal,
    /// Prior period net. Always zero: no prior period balance is loaded.
    pub prior_period: Decimal,
}

/// A single-value line (liabilities, charges, products, SIG, detail rows).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountLine {
    /// Caption code.
    pub code: String,
    /// Caption wording.
    pub label: String,
    /// Amount.
    pub amount: Decimal,
    /// Prior period amount. Always zero: no prior period balance is loaded.
    pub prior_period: Decimal,
}

/// One derived statement row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatementLine {
    /// Gross / contra / net row.
    Asset(AssetLine),
    /// Single amount row.
    Amount(AmountLine),
}

impl StatementLine {
    /// Creates a gross / contra / net line.
    #[must_use]
    pub fn asset(
        code: impl Into<String>,
        label: impl Into<String>,
        gross: Decimal,
        contra: Decimal,
    ) -> Self {
        Self::Asset(AssetLine {
            code: code.into(),
            label: label.into(),
            gross,
            contra,
            net: gross - contra,
            prior_period: Decimal::ZERO,
        })
    }

    /// Creates a single amount line.
    #[must_use]
    pub fn amount(code: impl Into<String>, label: impl Into<String>, amount: Decimal) -> Self {
        Self::Amount(AmountLine {
            code: code.into(),
            label: label.into(),
            amount,
            prior_period: Decimal::ZERO,
        })
    }

    /// Caption code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Asset(line) => &line.code,
            Self::Amount(line) => &line.code,
        }
    }

    /// Caption wording.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Asset(line) => &line.label,
            Self::Amount(line) => &line.label,
        }
    }

    /// The value that enters totals: net for asset lines, amount otherwise.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        match self {
            Self::Asset(line) => line.net,
            Self::Amount(line) => line.amount,
        }
    }

    /// Returns true if every amount column is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Asset(line) => {
                line.gross.is_zero() && line.contra.is_zero() && line.net.is_zero()
            }
            Self::Amount(line) => line.amount.is_zero(),
        }
    }

    /// Sum of `value()` over lines.
    #[must_use]
    pub fn total(lines: &[Self]) -> Decimal {
        lines.iter().map(Self::value).sum()
    }

    /// Finds a line by caption code.
    #[must_use]
    pub fn find<'a>(lines: &'a [Self], code: &str) -> Option<&'a Self> {
        lines.iter().find(|line| line.code() == code)
    }
}

/// A generated explanatory note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteTable {
    /// Note identifier.
    pub note: NoteId,
    /// Note number in the annex.
    pub number: u8,
    /// Note title.
    pub title: String,
    /// Non-zero lines only.
    pub lines: Vec<StatementLine>,
}

/// Identifies one generatable statement or note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementId {
    /// Balance sheet, assets.
    Assets,
    /// Balance sheet, equity and liabilities.
    Liabilities,
    /// Income statement, charges.
    Charges,
    /// Income statement, products.
    Products,
    /// Intermediate management balances.
    IntermediateBalances,
    /// Cash flow table.
    CashFlows,
    /// An explanatory note.
    Note(NoteId),
}

impl fmt::Display for StatementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assets => write!(f, "assets"),
            Self::Liabilities => write!(f, "liabilities"),
            Self::Charges => write!(f, "charges"),
            Self::Products => write!(f, "products"),
            Self::IntermediateBalances => write!(f, "sig"),
            Self::CashFlows => write!(f, "cash_flows"),
            Self::Note(note) => write!(f, "note:{note}"),
        }
    }
}

impl FromStr for StatementId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match wanted.as_str() {
            "assets" | "actif" => Ok(Self::Assets),
            "liabilities" | "passif" => Ok(Self::Liabilities),
            "charges" => Ok(Self::Charges),
            "products" | "produits" => Ok(Self::Products),
            "sig" | "intermediate_balances" => Ok(Self::IntermediateBalances),
            "cash_flows" | "cash_flow" | "tft" => Ok(Self::CashFlows),
            other => other
                .strip_prefix("note:")
                .unwrap_or(other)
                .parse::<NoteId>()
                .map(Self::Note)
                .map_err(|_| format!("Unknown statement: {s}")),
        }
    }
}
