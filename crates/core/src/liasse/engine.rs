//! Caller-owned liasse engine.

use chrono::NaiveDate;
use liasse_shared::AppResult;
use liasse_shared::types::{Currency, Money};
use tracing::debug;

use super::bundle::{BundleTotals, LiasseBundle};
use crate::aggregation::AggregationEngine;
use crate::balance::{BalanceEntry, RawRecord, normalize, try_normalize};
use crate::mapping::{Catalog, NoteId, ReportingSystem};
use crate::statements::{NoteTable, StatementError, StatementId, StatementLine, StatementService};
use crate::validation::{ConsistencyValidator, ValidationReport, ValidationSettings};

/// Everything an engine is configured with, apart from the loaded balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiasseOptions {
    /// Validator settings.
    pub settings: ValidationSettings,
    /// Reporting currency.
    pub currency: Currency,
    /// Closing date of the period, if known.
    pub period_end: Option<NaiveDate>,
    /// Caption layout of the balance sheet and the income statement.
    pub system: ReportingSystem,
}

/// Derives a liasse from one trial balance at a time.
///
/// Loading needs `&mut self`; every generator takes `&self`, so generation
/// can only start once a load has completed. Independent trial balances use
/// independent engines.
#[derive(Debug, Clone, Default)]
pub struct LiasseEngine {
    aggregation: AggregationEngine,
    options: LiasseOptions,
}

impl LiasseEngine {
    /// Creates an engine with default settings, reporting in XOF under the
    /// normal system.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with no balance loaded and the given options.
    #[must_use]
    pub fn with_options(options: LiasseOptions) -> Self {
        Self {
            aggregation: AggregationEngine::new(),
            options,
        }
    }

    /// Sets the validation settings.
    #[must_use]
    pub const fn with_settings(mut self, settings: ValidationSettings) -> Self {
        self.options.settings = settings;
        self
    }

    /// Sets the reporting currency.
    #[must_use]
    pub const fn with_currency(mut self, currency: Currency) -> Self {
        self.options.currency = currency;
        self
    }

    /// Sets the period closing date.
    #[must_use]
    pub const fn with_period_end(mut self, period_end: Option<NaiveDate>) -> Self {
        self.options.period_end = period_end;
        self
    }

    /// Sets the reporting system.
    #[must_use]
    pub const fn with_system(mut self, system: ReportingSystem) -> Self {
        self.options.system = system;
        self
    }

    /// Options in use.
    #[must_use]
    pub const fn options(&self) -> &LiasseOptions {
        &self.options
    }

    /// Validation settings in use.
    #[must_use]
    pub const fn settings(&self) -> &ValidationSettings {
        &self.options.settings
    }

    /// Normalizes raw records and replaces the loaded trial balance.
    ///
    /// Returns the normalized entries.
    pub fn load_balance(&mut self, records: &[RawRecord]) -> Vec<BalanceEntry> {
        let entries = normalize(records);
        self.load_entries(&entries);
        entries
    }

    /// Like [`Self::load_balance`], but refuses ambiguous or unreadable
    /// amounts instead of reading them as zero.
    ///
    /// The loaded balance is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Parse` naming the offending row.
    pub fn try_load_balance(&mut self, records: &[RawRecord]) -> AppResult<Vec<BalanceEntry>> {
        let entries = try_normalize(records)?;
        self.load_entries(&entries);
        Ok(entries)
    }

    /// Replaces the loaded trial balance with already normalized entries.
    pub fn load_entries(&mut self, entries: &[BalanceEntry]) {
        self.aggregation.load(entries);
    }

    /// Returns true once a trial balance has been loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.aggregation.is_loaded()
    }

    /// Underlying aggregation engine.
    #[must_use]
    pub const fn aggregation(&self) -> &AggregationEngine {
        &self.aggregation
    }

    /// Generates one statement or note.
    ///
    /// Balance sheet and income statement lines follow the configured
    /// reporting system. Notes hold their non-zero lines only.
    ///
    /// # Errors
    ///
    /// Returns `StatementError::UnknownCaption` on a catalog defect.
    pub fn generate(&self, statement: StatementId) -> Result<Vec<StatementLine>, StatementError> {
        let engine = &self.aggregation;
        let system = self.options.system;
        let lines = match statement {
            StatementId::Assets => self.lines(system.assets()),
            StatementId::Liabilities => self.lines(system.liabilities()),
            StatementId::Charges => self.lines(system.charges()),
            StatementId::Products => self.lines(system.products()),
            StatementId::IntermediateBalances => StatementService::intermediate_balances(engine)?,
            StatementId::CashFlows => StatementService::cash_flows(engine)?,
            StatementId::Note(note) => StatementService::note(engine, note).lines,
        };
        debug!(%statement, %system, lines = lines.len(), "Generated statement");
        Ok(lines)
    }

    /// Generates one note with its number and title.
    #[must_use]
    pub fn note(&self, note: NoteId) -> NoteTable {
        StatementService::note(&self.aggregation, note)
    }

    /// Per-account detail of a prefix set.
    #[must_use]
    pub fn detail_rows(&self, prefixes: &[&str]) -> Vec<StatementLine> {
        StatementService::detail_rows(&self.aggregation, prefixes)
    }

    /// Cross-checks the balance sheet and the income statement.
    ///
    /// # Errors
    ///
    /// Returns `StatementError::UnknownCaption` if the result caption is
    /// missing from the liability catalog.
    pub fn validate(&self) -> Result<ValidationReport, StatementError> {
        let system = self.options.system;
        ConsistencyValidator::validate_for(
            system,
            &self.lines(system.assets()),
            &self.lines(system.liabilities()),
            &self.lines(system.charges()),
            &self.lines(system.products()),
            &self.options.settings,
        )
    }

    /// Generates every statement, the non-empty notes and the validation report.
    ///
    /// # Errors
    ///
    /// Returns `StatementError::UnknownCaption` on a catalog defect.
    pub fn bundle(&self) -> Result<LiasseBundle, StatementError> {
        let engine = &self.aggregation;
        let LiasseOptions {
            settings,
            currency,
            period_end,
            system,
        } = self.options;

        let assets = self.lines(system.assets());
        let liabilities = self.lines(system.liabilities());
        let charges = self.lines(system.charges());
        let products = self.lines(system.products());
        let intermediate_balances = StatementService::intermediate_balances(engine)?;
        let cash_flows = StatementService::cash_flows(engine)?;

        let validation = ConsistencyValidator::validate_for(
            system,
            &assets,
            &liabilities,
            &charges,
            &products,
            &settings,
        )?;

        let notes = NoteId::ALL
            .into_iter()
            .map(|note| StatementService::note(engine, note))
            .filter(|table| !table.lines.is_empty())
            .collect();

        let totals = BundleTotals {
            total_assets: Money::new(StatementLine::total(&assets), currency),
            total_liabilities: Money::new(StatementLine::total(&liabilities), currency),
            net_result: Money::new(
                StatementLine::total(&products) - StatementLine::total(&charges),
                currency,
            ),
        };
        debug!(
            %system,
            net_result = %totals.net_result,
            loss = totals.is_loss(),
            "Derived bundle"
        );

        Ok(LiasseBundle {
            period_end,
            currency,
            system,
            assets,
            liabilities,
            charges,
            products,
            intermediate_balances,
            cash_flows,
            notes,
            totals,
            validation,
        })
    }

    fn lines(&self, catalog: &Catalog) -> Vec<StatementLine> {
        StatementService::catalog_lines(&self.aggregation, catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(code: &str, column: &str, amount: i64) -> RawRecord {
        RawRecord::new().with("compte", code).with(column, amount)
    }

    #[test]
    fn test_new_engine_is_empty() {
        let engine = LiasseEngine::new();
        assert!(!engine.is_loaded());
        assert_eq!(engine.settings().tolerance, dec!(0.01));
    }

    #[test]
    fn test_load_returns_normalized_entries() {
        let mut engine = LiasseEngine::new();
        let entries = engine.load_balance(&[record("601", "debit", -500)]);

        assert!(engine.is_loaded());
        assert_eq!(entries[0].credit_movement, dec!(500));
        assert_eq!(engine.aggregation().account_count(), 1);
    }

    #[test]
    fn test_generate_note_is_sparse() {
        let mut engine = LiasseEngine::new();
        engine.load_balance(&[record("512", "sd", 1000), record("101", "sc", 1000)]);

        let lines = engine.generate(StatementId::Note(NoteId::Inventories)).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_bundle_skips_empty_notes() {
        let mut engine = LiasseEngine::new()
            .with_currency(Currency::Xaf)
            .with_period_end(NaiveDate::from_ymd_opt(2025, 12, 31));
        engine.load_balance(&[record("5211", "sd", 1000), record("101", "sc", 1000)]);

        let bundle = engine.bundle().unwrap();
        let numbers: Vec<u8> = bundle.notes.iter().map(|note| note.number).collect();

        assert_eq!(numbers, vec![11, 13]);
        assert_eq!(bundle.currency, Currency::Xaf);
        assert_eq!(bundle.totals.total_assets, Money::new(dec!(1000), Currency::Xaf));
        assert!(bundle.validation.is_consistent);
    }

    #[test]
    fn test_bundle_reports_loss() {
        let mut engine = LiasseEngine::new();
        engine.load_balance(&[
            record("6011", "sd", 800),
            record("7011", "sc", 300),
            record("5211", "sc", 500),
        ]);

        let bundle = engine.bundle().unwrap();
        assert_eq!(bundle.totals.net_result.amount, dec!(-500));
        assert!(bundle.totals.is_loss());
    }

    #[test]
    fn test_cash_flows_statement() {
        let mut engine = LiasseEngine::new();
        engine.load_balance(&[record("512", "sd", 1_000_000), record("101", "sc", 1_000_000)]);

        let lines = engine.generate(StatementId::CashFlows).unwrap();
        let closing = StatementLine::find(&lines, "FS").map(StatementLine::value);
        assert_eq!(closing, Some(dec!(1000000)));
        assert_eq!(engine.bundle().unwrap().cash_flows, lines);
    }

    #[test]
    fn test_minimal_system_layout() {
        let mut engine = LiasseEngine::new().with_system(ReportingSystem::Minimal);
        engine.load_balance(&[record("5211", "sd", 1000), record("101", "sc", 1000)]);

        let assets = engine.generate(StatementId::Assets).unwrap();
        assert_eq!(assets.first().map(StatementLine::code), Some("AI_1"));
        assert_eq!(
            StatementLine::find(&assets, "TA_1").map(StatementLine::value),
            Some(dec!(1000))
        );

        let bundle = engine.bundle().unwrap();
        assert_eq!(bundle.system, ReportingSystem::Minimal);
        assert!(bundle.validation.is_consistent);
        assert!(engine.validate().unwrap().is_consistent);
    }

    #[test]
    fn test_try_load_keeps_previous_balance_on_error() {
        let mut engine = LiasseEngine::new();
        engine.load_balance(&[record("512", "sd", 100)]);

        let err = engine
            .try_load_balance(&[RawRecord::new().with("compte", "601").with("debit", "1,234.56")])
            .unwrap_err();
        assert!(err.to_string().contains("Row 1"));
        assert_eq!(engine.aggregation().sum_debit_positive(&["512"]), dec!(100));
    }

    #[test]
    fn test_with_options_copies_every_field() {
        let options = LiasseOptions {
            settings: ValidationSettings { tolerance: dec!(1) },
            currency: Currency::Gnf,
            period_end: NaiveDate::from_ymd_opt(2024, 6, 30),
            system: ReportingSystem::Minimal,
        };
        let engine = LiasseEngine::with_options(options);

        assert_eq!(engine.options(), &options);
        assert!(!engine.is_loaded());
    }
}
