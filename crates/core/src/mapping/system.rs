//! Reporting system selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::smt::{SMT_ASSETS, SMT_CHARGES, SMT_LIABILITIES, SMT_PRODUCTS, SMT_RESULT_CAPTION};
use super::syscohada::{ASSETS, CHARGES, LIABILITIES, PRODUCTS, RESULT_CAPTION};

/// SYSCOHADA reporting system, which fixes the caption layout of the
/// balance sheet and the income statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportingSystem {
    /// Système normal.
    #[default]
    Normal,
    /// Système minimal de trésorerie.
    Minimal,
}

impl ReportingSystem {
    /// Asset catalog.
    #[must_use]
    pub fn assets(self) -> &'static Catalog {
        match self {
            Self::Normal => &ASSETS,
            Self::Minimal => &SMT_ASSETS,
        }
    }

    /// Equity and liability catalog.
    #[must_use]
    pub fn liabilities(self) -> &'static Catalog {
        match self {
            Self::Normal => &LIABILITIES,
            Self::Minimal => &SMT_LIABILITIES,
        }
    }

    /// Charge catalog.
    #[must_use]
    pub fn charges(self) -> &'static Catalog {
        match self {
            Self::Normal => &CHARGES,
            Self::Minimal => &SMT_CHARGES,
        }
    }

    /// Product catalog.
    #[must_use]
    pub fn products(self) -> &'static Catalog {
        match self {
            Self::Normal => &PRODUCTS,
            Self::Minimal => &SMT_PRODUCTS,
        }
    }

    /// Liability caption holding the current-period result.
    #[must_use]
    pub const fn result_caption(self) -> &'static str {
        match self {
            Self::Normal => RESULT_CAPTION,
            Self::Minimal => SMT_RESULT_CAPTION,
        }
    }
}

impl fmt::Display for ReportingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Minimal => write!(f, "minimal"),
        }
    }
}

impl FromStr for ReportingSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "sn" => Ok(Self::Normal),
            "minimal" | "smt" => Ok(Self::Minimal),
            _ => Err(format!("Unknown reporting system: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("normal", ReportingSystem::Normal)]
    #[case("SMT", ReportingSystem::Minimal)]
    #[case(" minimal ", ReportingSystem::Minimal)]
    fn test_from_str(#[case] input: &str, #[case] expected: ReportingSystem) {
        assert_eq!(input.parse::<ReportingSystem>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_system() {
        assert!("allégé".parse::<ReportingSystem>().is_err());
    }

    #[rstest]
    #[case(ReportingSystem::Normal)]
    #[case(ReportingSystem::Minimal)]
    fn test_result_caption_resolves(#[case] system: ReportingSystem) {
        assert!(system.liabilities().get(system.result_caption()).is_ok());
    }

    #[test]
    fn test_default_is_normal() {
        assert_eq!(ReportingSystem::default(), ReportingSystem::Normal);
        assert_eq!(ReportingSystem::Minimal.to_string(), "minimal");
    }
}
