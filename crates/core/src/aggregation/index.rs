//! Signed balance index.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::balance::BalanceEntry;

/// Account code to signed closing balance (`debit - credit`).
///
/// Stored in code order so that every account sharing a prefix sits in one
/// contiguous range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignedBalanceIndex {
    balances: BTreeMap<String, Decimal>,
}

impl SignedBalanceIndex {
    /// Builds an index, adding up entries that share an account code.
    #[must_use]
    pub fn from_entries(entries: &[BalanceEntry]) -> Self {
        let mut balances: BTreeMap<String, Decimal> = BTreeMap::new();
        for entry in entries {
            *balances.entry(entry.account_code.clone()).or_default() += entry.signed_balance();
        }
        Self { balances }
    }

    /// Number of distinct account codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Returns true if no account is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Signed balance of one exact account code.
    #[must_use]
    pub fn get(&self, account_code: &str) -> Option<Decimal> {
        self.balances.get(account_code).copied()
    }

    /// Visits every account matching at least one prefix, once, in code order.
    ///
    /// A code matches a prefix when it equals it or starts with it.
    pub fn matching<'a>(
        &'a self,
        prefixes: &[&str],
    ) -> impl Iterator<Item = (&'a str, Decimal)> + 'a {
        minimal_prefixes(prefixes).into_iter().flat_map(move |prefix| {
            self.balances
                .range::<str, _>((std::ops::Bound::Included(prefix.as_str()), std::ops::Bound::Unbounded))
                .take_while(move |(code, _)| code.starts_with(prefix.as_str()))
                .map(|(code, balance)| (code.as_str(), *balance))
        })
    }
}

/// Sorts prefixes and drops any prefix already covered by a shorter one, so
/// the remaining ranges are disjoint and ascending.
fn minimal_prefixes(prefixes: &[&str]) -> Vec<String> {
    let mut sorted: Vec<&str> = prefixes.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut minimal: Vec<String> = Vec::with_capacity(sorted.len());
    for prefix in sorted {
        if minimal.last().is_some_and(|kept| prefix.starts_with(kept.as_str())) {
            continue;
        }
        minimal.push(prefix.to_string());
    }
    minimal
}
