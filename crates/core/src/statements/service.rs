//! Statement generators.
//!
//! Every generator is a pure function of the loaded aggregation engine and a
//! static catalog: calling one twice without reloading yields identical
//! lines.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::error::StatementError;
use super::types::{NoteTable, StatementLine};
use crate::aggregation::AggregationEngine;
use crate::mapping::cash_flow::CASH_FLOWS;
use crate::mapping::sig::INTERMEDIATE_BALANCES;
use crate::mapping::{
    ASSETS, CHARGES, CaptionMapping, CashFlowRowKind, Catalog, FlowTerm, LIABILITIES, Layout,
    NoteId, PRODUCTS, Side, SigRowKind, SigSign, SumRule,
};

const SIG_CATALOG: &str = "intermediate_balances";
const CASH_FLOW_CATALOG: &str = "cash_flows";

/// Statement generation service.
///
/// Stateless: all inputs come from the engine passed to each call.
pub struct StatementService;

impl StatementService {
    /// Balance sheet asset lines, one per caption, in catalog order.
    #[must_use]
    pub fn assets(engine: &AggregationEngine) -> Vec<StatementLine> {
        Self::catalog_lines(engine, &ASSETS)
    }

    /// Balance sheet equity and liability lines.
    ///
    /// Uncalled capital is a negative deduction and the result captions keep
    /// their sign, so the sum of amounts is the liability total.
    #[must_use]
    pub fn liabilities(engine: &AggregationEngine) -> Vec<StatementLine> {
        Self::catalog_lines(engine, &LIABILITIES)
    }

    /// Income statement charge lines.
    #[must_use]
    pub fn charges(engine: &AggregationEngine) -> Vec<StatementLine> {
        Self::catalog_lines(engine, &CHARGES)
    }

    /// Income statement product lines.
    #[must_use]
    pub fn products(engine: &AggregationEngine) -> Vec<StatementLine> {
        Self::catalog_lines(engine, &PRODUCTS)
    }

    /// One line per caption of `catalog`, zero lines included.
    #[must_use]
    pub fn catalog_lines(engine: &AggregationEngine, catalog: &Catalog) -> Vec<StatementLine> {
        catalog
            .captions
            .iter()
            .map(|caption| Self::caption_line(engine, catalog, caption))
            .collect()
    }

    /// Derives a single caption.
    #[must_use]
    pub fn caption_line(
        engine: &AggregationEngine,
        catalog: &Catalog,
        caption: &CaptionMapping,
    ) -> StatementLine {
        let gross = gross_amount(engine, catalog.side, caption);
        let contra = contra_amount(engine, catalog.side, caption);

        match catalog.layout {
            Layout::GrossContraNet => {
                StatementLine::asset(caption.code, caption.label, gross, contra)
            }
            Layout::Amount => StatementLine::amount(caption.code, caption.label, gross - contra),
        }
    }

    /// The value of one caption looked up by code.
    ///
    /// # Errors
    ///
    /// Returns `StatementError::UnknownCaption` if `catalog` has no such caption.
    pub fn caption_value(
        engine: &AggregationEngine,
        catalog: &Catalog,
        code: &str,
    ) -> Result<Decimal, StatementError> {
        let caption = catalog.get(code)?;
        Ok(Self::caption_line(engine, catalog, caption).value())
    }

    /// A note table holding only the lines with a non-zero amount.
    #[must_use]
    pub fn note(engine: &AggregationEngine, note: NoteId) -> NoteTable {
        let lines = Self::catalog_lines(engine, note.catalog())
            .into_iter()
            .filter(|line| !line.is_zero())
            .collect();

        NoteTable {
            note,
            number: note.number(),
            title: note.title().to_string(),
            lines,
        }
    }

    /// Intermediate management balances, detail lines and subtotals.
    ///
    /// # Errors
    ///
    /// Returns `StatementError::UnknownCaption` if a row references a caption
    /// or an earlier row that does not exist.
    pub fn intermediate_balances(
        engine: &AggregationEngine,
    ) -> Result<Vec<StatementLine>, StatementError> {
        let mut computed: BTreeMap<&str, Decimal> = BTreeMap::new();
        let mut lines = Vec::with_capacity(INTERMEDIATE_BALANCES.len());

        for row in INTERMEDIATE_BALANCES {
            let amount = match row.kind {
                SigRowKind::Line(terms) => {
                    let mut sum = Decimal::ZERO;
                    for term in terms {
                        sum += Self::caption_value(engine, term.catalog(), term.caption())?;
                    }
                    sum
                }
                SigRowKind::Subtotal(parts) => combine(&computed, parts, SIG_CATALOG)?,
            };

            computed.insert(row.code, amount);
            lines.push(StatementLine::amount(row.code, row.label, amount));
        }

        Ok(lines)
    }

    /// Cash flow table, current period only.
    ///
    /// Rows that need the prior period are zero, so the control row `FT`
    /// equals closing net cash less the computable flows.
    ///
    /// # Errors
    ///
    /// Returns `StatementError::UnknownCaption` if a subtotal references a
    /// row that does not exist.
    pub fn cash_flows(engine: &AggregationEngine) -> Result<Vec<StatementLine>, StatementError> {
        let net_result = StatementLine::total(&Self::products(engine))
            - StatementLine::total(&Self::charges(engine));
        let mut computed: BTreeMap<&str, Decimal> = BTreeMap::new();
        let mut lines = Vec::with_capacity(CASH_FLOWS.len());

        for row in CASH_FLOWS {
            let amount = match row.kind {
                CashFlowRowKind::Line(terms) => terms
                    .iter()
                    .map(|(sign, term)| {
                        let value = match term {
                            FlowTerm::NetResult => net_result,
                            FlowTerm::Debit(prefixes) => engine.sum_debit_positive(prefixes),
                            FlowTerm::Credit(prefixes) => engine.sum_credit_positive(prefixes),
                        };
                        match sign {
                            SigSign::Plus => value,
                            SigSign::Minus => -value,
                        }
                    })
                    .sum::<Decimal>(),
                CashFlowRowKind::Subtotal(parts) => combine(&computed, parts, CASH_FLOW_CATALOG)?,
                CashFlowRowKind::PriorPeriod => Decimal::ZERO,
            };

            computed.insert(row.code, amount);
            lines.push(StatementLine::amount(row.code, row.label, amount));
        }

        Ok(lines)
    }

    /// One line per matching account with a non-zero balance, by account code.
    ///
    /// The amount is the signed balance, debtor positive.
    #[must_use]
    pub fn detail_rows(engine: &AggregationEngine, prefixes: &[&str]) -> Vec<StatementLine> {
        engine
            .accounts_matching(prefixes)
            .into_iter()
            .filter(|(_, balance)| !balance.is_zero())
            .map(|(code, balance)| {
                let label = engine.label(&code).unwrap_or_default().to_string();
                StatementLine::amount(code, label, balance)
            })
            .collect()
    }
}

/// Signed sum of rows already computed.
fn combine(
    computed: &BTreeMap<&str, Decimal>,
    parts: &[(SigSign, &str)],
    catalog: &str,
) -> Result<Decimal, StatementError> {
    let mut sum = Decimal::ZERO;
    for (sign, code) in parts {
        let value = computed
            .get(code)
            .copied()
            .ok_or_else(|| StatementError::UnknownCaption {
                catalog: catalog.to_string(),
                code: (*code).to_string(),
            })?;
        match sign {
            SigSign::Plus => sum += value,
            SigSign::Minus => sum -= value,
        }
    }
    Ok(sum)
}

/// Gross value of a caption per its rule and the catalog's natural side.
fn gross_amount(engine: &AggregationEngine, side: Side, caption: &CaptionMapping) -> Decimal {
    let prefixes = caption.gross_prefixes;
    match (caption.rule, side) {
        (SumRule::Natural, Side::Debit) => engine.sum_debit_positive(prefixes),
        (SumRule::Natural, Side::Credit) => engine.sum_credit_positive(prefixes),
        (SumRule::SignedDebit, _) => engine.net_signed(prefixes),
        (SumRule::SignedCredit, _) => -engine.net_signed(prefixes),
        (SumRule::Deduction, Side::Debit) => -engine.sum_credit_positive(prefixes),
        (SumRule::Deduction, Side::Credit) => -engine.sum_debit_positive(prefixes),
    }
}

/// Contra accounts sit on the side opposite the catalog's.
fn contra_amount(engine: &AggregationEngine, side: Side, caption: &CaptionMapping) -> Decimal {
    if caption.contra_prefixes.is_empty() {
        return Decimal::ZERO;
    }
    match side {
        Side::Debit => engine.sum_credit_positive(caption.contra_prefixes),
        Side::Credit => engine.sum_debit_positive(caption.contra_prefixes),
    }
}
