//! Cash flow table (tableau des flux de trésorerie).
//!
//! Only the current period is loaded, so every row that needs an opening
//! balance or a period-over-period variation is carried at zero. What
//! remains computable is the self-financing capacity (`FA`..`FE`), disposal
//! proceeds (`FI`) and closing net cash (`FS`).

use super::sig::SigSign;

use FlowTerm::{Credit, Debit, NetResult};
use SigSign::{Minus, Plus};

/// One amount feeding a cash flow detail line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowTerm {
    /// Total products minus total charges.
    NetResult,
    /// Debtor balances of the prefixes.
    Debit(&'static [&'static str]),
    /// Creditor balances of the prefixes.
    Credit(&'static [&'static str]),
}

/// How a row's amount is obtained.
#[derive(Debug, Clone, Copy)]
pub enum CashFlowRowKind {
    /// Signed sum of balance terms.
    Line(&'static [(SigSign, FlowTerm)]),
    /// Signed combination of earlier rows.
    Subtotal(&'static [(SigSign, &'static str)]),
    /// Needs the prior period; always zero.
    PriorPeriod,
}

/// One row of the table.
#[derive(Debug, Clone, Copy)]
pub struct CashFlowRow {
    /// Row reference (`FA`..`FT`).
    pub code: &'static str,
    /// Row wording.
    pub label: &'static str,
    /// Computation.
    pub kind: CashFlowRowKind,
}

const fn line(
    code: &'static str,
    label: &'static str,
    terms: &'static [(SigSign, FlowTerm)],
) -> CashFlowRow {
    CashFlowRow {
        code,
        label,
        kind: CashFlowRowKind::Line(terms),
    }
}

const fn subtotal(
    code: &'static str,
    label: &'static str,
    parts: &'static [(SigSign, &'static str)],
) -> CashFlowRow {
    CashFlowRow {
        code,
        label,
        kind: CashFlowRowKind::Subtotal(parts),
    }
}

const fn prior(code: &'static str, label: &'static str) -> CashFlowRow {
    CashFlowRow {
        code,
        label,
        kind: CashFlowRowKind::PriorPeriod,
    }
}

/// Treasury asset accounts, gross of provisions.
pub const CASH_ASSET_PREFIXES: &[&str] = &["50", "51", "52", "53", "54", "55", "56", "57", "58"];

/// Treasury liability accounts (bank overdrafts and short-term credit).
pub const CASH_LIABILITY_PREFIXES: &[&str] = &["52", "561", "564", "565"];

/// The table, in presentation order.
pub static CASH_FLOWS: &[CashFlowRow] = &[
    line("FA", "Résultat net de l'exercice", &[(Plus, NetResult)]),
    line(
        "FB",
        "Dotations aux amortissements et aux provisions",
        &[(Plus, Debit(&["681", "687", "691", "697"]))],
    ),
    line(
        "FC",
        "Reprises de provisions et transferts",
        &[(Plus, Credit(&["787", "791", "797", "798", "799"]))],
    ),
    line(
        "FD",
        "Plus ou moins-values de cession",
        &[(Plus, Credit(&["82"])), (Minus, Debit(&["81"]))],
    ),
    subtotal(
        "FE",
        "Capacité d'autofinancement globale (CAFG)",
        &[(Plus, "FA"), (Plus, "FB"), (Minus, "FC"), (Minus, "FD")],
    ),
    prior("FF", "Variation du besoin de financement d'exploitation"),
    subtotal(
        "FG",
        "Flux de trésorerie provenant des activités opérationnelles",
        &[(Plus, "FE"), (Minus, "FF")],
    ),
    prior("FH", "Décaissements liés aux acquisitions d'immobilisations"),
    line("FI", "Encaissements liés aux cessions d'immobilisations", &[(Plus, Credit(&["82"]))]),
    prior("FJ", "Variation des immobilisations financières"),
    subtotal(
        "FK",
        "Flux de trésorerie provenant des activités d'investissement",
        &[(Minus, "FH"), (Plus, "FI"), (Minus, "FJ")],
    ),
    prior("FL", "Augmentations de capital"),
    prior("FM", "Emprunts nouveaux"),
    prior("FN", "Remboursements d'emprunts"),
    prior("FO", "Dividendes versés"),
    subtotal(
        "FP",
        "Flux de trésorerie provenant des activités de financement",
        &[(Plus, "FL"), (Plus, "FM"), (Minus, "FN"), (Minus, "FO")],
    ),
    subtotal(
        "FQ",
        "Variation de la trésorerie nette de la période",
        &[(Plus, "FG"), (Plus, "FK"), (Plus, "FP")],
    ),
    prior("FR", "Trésorerie nette au 1er janvier"),
    line(
        "FS",
        "Trésorerie nette au 31 décembre",
        &[(Plus, Debit(CASH_ASSET_PREFIXES)), (Minus, Credit(CASH_LIABILITY_PREFIXES))],
    ),
    subtotal("FT", "Contrôle", &[(Plus, "FS"), (Minus, "FR"), (Minus, "FQ")]),
];

/// Code of the closing net cash row.
pub const CLOSING_CASH_ROW: &str = "FS";
