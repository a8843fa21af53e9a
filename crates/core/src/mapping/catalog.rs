//! Caption catalog types.

use serde::Serialize;

use crate::statements::StatementError;

/// Natural balance side of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Assets and charges: debtor balances.
    Debit,
    /// Liabilities and products: creditor balances.
    Credit,
}

/// Shape of the lines a catalog produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Gross, contra (amortization or provision) and net columns.
    GrossContraNet,
    /// A single amount column.
    Amount,
}

/// Summation primitive applied to a caption's gross prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SumRule {
    /// The catalog's natural direction.
    Natural,
    /// Signed sum, debtor positive (stock variations on the charge side).
    SignedDebit,
    /// Signed sum, creditor positive (results, stored production).
    SignedCredit,
    /// Debtor balances carried as a negative amount on a credit-side catalog.
    Deduction,
}

/// One regulatory caption and the accounts that feed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaptionMapping {
    /// Caption reference (e.g. `AD`, `CA`, `RA`).
    pub code: &'static str,
    /// Regulatory wording.
    pub label: &'static str,
    /// Account prefixes summed in the rule's direction.
    pub gross_prefixes: &'static [&'static str],
    /// Offsetting amortization or provision prefixes, summed creditor-positive.
    pub contra_prefixes: &'static [&'static str],
    /// Summation primitive for the gross prefixes.
    pub rule: SumRule,
}

impl CaptionMapping {
    /// Caption with the catalog's natural rule and no contra accounts.
    #[must_use]
    pub const fn new(
        code: &'static str,
        label: &'static str,
        gross_prefixes: &'static [&'static str],
    ) -> Self {
        Self {
            code,
            label,
            gross_prefixes,
            contra_prefixes: &[],
            rule: SumRule::Natural,
        }
    }

    /// Sets the contra prefixes.
    #[must_use]
    pub const fn contra(mut self, contra_prefixes: &'static [&'static str]) -> Self {
        self.contra_prefixes = contra_prefixes;
        self
    }

    /// Overrides the summation rule.
    #[must_use]
    pub const fn rule(mut self, rule: SumRule) -> Self {
        self.rule = rule;
        self
    }

    /// All prefixes of the caption, gross then contra.
    pub fn prefixes(&self) -> impl Iterator<Item = &'static str> {
        self.gross_prefixes
            .iter()
            .chain(self.contra_prefixes.iter())
            .copied()
    }
}

/// An ordered, immutable caption table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Catalog {
    /// Catalog name used in diagnostics.
    pub name: &'static str,
    /// Natural balance side.
    pub side: Side,
    /// Line shape.
    pub layout: Layout,
    /// Captions in regulatory order.
    pub captions: &'static [CaptionMapping],
}

impl Catalog {
    /// Looks up a caption by code.
    ///
    /// # Errors
    ///
    /// Returns `StatementError::UnknownCaption` if the catalog has no such caption.
    pub fn get(&self, code: &str) -> Result<&'static CaptionMapping, StatementError> {
        self.captions
            .iter()
            .find(|caption| caption.code == code)
            .ok_or_else(|| StatementError::UnknownCaption {
                catalog: self.name.to_string(),
                code: code.to_string(),
            })
    }

    /// Caption codes in declaration order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> {
        self.captions.iter().map(|caption| caption.code)
    }

    /// Pairs of distinct captions whose prefixes structurally overlap.
    ///
    /// Two prefixes overlap when one is equal to, or a prefix of, the other,
    /// so some account code could match both captions.
    #[must_use]
    pub fn overlaps(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::new();
        for (i, left) in self.captions.iter().enumerate() {
            for right in &self.captions[i + 1..] {
                let clash = left.prefixes().any(|a| {
                    right
                        .prefixes()
                        .any(|b| a.starts_with(b) || b.starts_with(a))
                });
                if clash {
                    pairs.push((left.code, right.code));
                }
            }
        }
        pairs
    }
}
