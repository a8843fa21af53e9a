//! Consistency validator.

use liasse_shared::types::format_amount;
use rust_decimal::Decimal;
use tracing::warn;

use super::types::{ConsistencyCheck, ValidationReport, ValidationSettings};
use crate::mapping::ReportingSystem;
use crate::statements::{StatementError, StatementLine};

/// Check reference for balance sheet equilibrium.
pub const BALANCE_CHECK: &str = "BZ=DZ";
/// Check reference for result coherence.
pub const RESULT_CHECK: &str = "XI=CH";

/// Compares statement totals computed independently.
pub struct ConsistencyValidator;

impl ConsistencyValidator {
    /// Validates generated statements.
    ///
    /// 1. Total net assets against total equity and liabilities
    /// 2. Balance sheet result caption against products minus charges
    ///
    /// # Errors
    ///
    /// Returns `StatementError::UnknownCaption` if the liability lines carry
    /// no result caption. Unbalanced figures are reported in the `Ok` value.
    pub fn validate(
        assets: &[StatementLine],
        liabilities: &[StatementLine],
        charges: &[StatementLine],
        products: &[StatementLine],
        settings: &ValidationSettings,
    ) -> Result<ValidationReport, StatementError> {
        Self::validate_for(
            ReportingSystem::Normal,
            assets,
            liabilities,
            charges,
            products,
            settings,
        )
    }

    /// Validates statements laid out in `system`'s captions.
    ///
    /// # Errors
    ///
    /// Returns `StatementError::UnknownCaption` if the liability lines carry
    /// no result caption for `system`.
    pub fn validate_for(
        system: ReportingSystem,
        assets: &[StatementLine],
        liabilities: &[StatementLine],
        charges: &[StatementLine],
        products: &[StatementLine],
        settings: &ValidationSettings,
    ) -> Result<ValidationReport, StatementError> {
        let result_caption = system.result_caption();
        let balance_sheet_result = StatementLine::find(liabilities, result_caption)
            .map(StatementLine::value)
            .ok_or_else(|| StatementError::UnknownCaption {
                catalog: system.liabilities().name.to_string(),
                code: result_caption.to_string(),
            })?;

        let total_assets = StatementLine::total(assets);
        let total_liabilities = StatementLine::total(liabilities);
        let income_statement_result =
            StatementLine::total(products) - StatementLine::total(charges);

        let checks = vec![
            check(
                BALANCE_CHECK,
                "Total assets equal total equity and liabilities",
                total_assets,
                total_liabilities,
                settings.tolerance,
            ),
            check(
                RESULT_CHECK,
                "Income statement result equals balance sheet result",
                income_statement_result,
                balance_sheet_result,
                settings.tolerance,
            ),
        ];

        let mut discrepancies = Vec::new();
        if !checks[0].ok {
            discrepancies.push(format!(
                "Balance sheet is not balanced: assets {}, liabilities {} (gap {})",
                format_amount(total_assets),
                format_amount(total_liabilities),
                format_amount(checks[0].gap),
            ));
        }
        if !checks[1].ok {
            discrepancies.push(format!(
                "Net result mismatch: balance sheet {}, income statement {} (gap {})",
                format_amount(balance_sheet_result),
                format_amount(income_statement_result),
                format_amount(checks[1].gap),
            ));
        }

        for message in &discrepancies {
            warn!(discrepancy = %message, "Consistency check failed");
        }

        Ok(ValidationReport {
            is_consistent: discrepancies.is_empty(),
            discrepancies,
            checks,
        })
    }
}

fn check(
    code: &str,
    label: &str,
    left: Decimal,
    right: Decimal,
    tolerance: Decimal,
) -> ConsistencyCheck {
    let gap = (left - right).abs();
    ConsistencyCheck {
        code: code.to_string(),
        label: label.to_string(),
        left,
        right,
        gap,
        ok: gap <= tolerance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn liabilities(capital: Decimal, result: Decimal) -> Vec<StatementLine> {
        vec![
            StatementLine::amount("CA", "Capital", capital),
            StatementLine::amount("CH", "Résultat net de l'exercice", result),
        ]
    }

    #[test]
    fn test_consistent_statements() {
        let assets = vec![StatementLine::asset("BS", "", dec!(1000000), dec!(0))];
        let report = ConsistencyValidator::validate(
            &assets,
            &liabilities(dec!(1000000), dec!(0)),
            &[],
            &[],
            &ValidationSettings::default(),
        )
        .unwrap();

        assert!(report.is_consistent);
        assert!(report.discrepancies.is_empty());
        assert_eq!(report.checks.len(), 2);
        assert!(report.checks.iter().all(|c| c.ok));
    }

    #[test]
    fn test_unbalanced_message_carries_both_totals() {
        let assets = vec![StatementLine::asset("BS", "", dec!(1000000), dec!(0))];
        let report = ConsistencyValidator::validate(
            &assets,
            &liabilities(dec!(900000), dec!(0)),
            &[],
            &[],
            &ValidationSettings::default(),
        )
        .unwrap();

        assert!(!report.is_consistent);
        assert_eq!(report.discrepancies.len(), 1);
        assert!(report.discrepancies[0].contains("1,000,000"));
        assert!(report.discrepancies[0].contains("900,000"));
        assert_eq!(report.checks[0].gap, dec!(100000));
    }

    #[test]
    fn test_result_mismatch() {
        let charges = vec![StatementLine::amount("RA", "", dec!(400))];
        let products = vec![StatementLine::amount("TA", "", dec!(1000))];
        let report = ConsistencyValidator::validate(
            &[StatementLine::asset("BS", "", dec!(600), dec!(0))],
            &liabilities(dec!(0), dec!(500)),
            &charges,
            &products,
            &ValidationSettings::default(),
        )
        .unwrap();

        assert!(!report.is_consistent);
        assert_eq!(report.checks[1].code, RESULT_CHECK);
        assert_eq!(report.checks[1].left, dec!(600));
        assert_eq!(report.checks[1].right, dec!(500));
        assert!(report.discrepancies.iter().any(|m| m.contains("Net result")));
    }

    #[test]
    fn test_gap_within_tolerance() {
        let assets = vec![StatementLine::asset("BS", "", dec!(100.01), dec!(0))];
        let report = ConsistencyValidator::validate(
            &assets,
            &liabilities(dec!(100), dec!(0)),
            &[],
            &[],
            &ValidationSettings::default(),
        )
        .unwrap();
        assert!(report.is_consistent);

        let strict = ValidationSettings {
            tolerance: dec!(0),
        };
        let liabilities = liabilities(dec!(100), dec!(0));
        let report =
            ConsistencyValidator::validate(&assets, &liabilities, &[], &[], &strict).unwrap();
        assert!(!report.is_consistent);
    }

    #[test]
    fn test_missing_result_caption_is_an_error() {
        let err = ConsistencyValidator::validate(
            &[],
            &[StatementLine::amount("CA", "", dec!(1))],
            &[],
            &[],
            &ValidationSettings::default(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            StatementError::UnknownCaption {
                catalog: "liabilities".to_string(),
                code: "CH".to_string(),
            }
        );
    }

    #[test]
    fn test_default_tolerance_is_one_cent() {
        assert_eq!(ValidationSettings::default().tolerance, dec!(0.01));
    }

    #[test]
    fn test_minimal_system_reads_its_own_result_caption() {
        let liabilities = vec![
            StatementLine::amount("CP_1", "Capital et primes", dec!(1000)),
            StatementLine::amount("CP_4", "Résultat de l'exercice", dec!(200)),
        ];
        let products = vec![StatementLine::amount("PR_1", "", dec!(500))];
        let charges = vec![StatementLine::amount("CH_1", "", dec!(300))];
        let report = ConsistencyValidator::validate_for(
            ReportingSystem::Minimal,
            &[StatementLine::asset("TA_1", "", dec!(1200), dec!(0))],
            &liabilities,
            &charges,
            &products,
            &ValidationSettings::default(),
        )
        .unwrap();

        assert!(report.is_consistent);
        assert_eq!(report.checks[1].right, dec!(200));

        let err = ConsistencyValidator::validate(
            &[],
            &liabilities,
            &[],
            &[],
            &ValidationSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, StatementError::UnknownCaption { ref code, .. } if code == "CH"));
    }
}
