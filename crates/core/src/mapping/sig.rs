//! Intermediate management balances (soldes intermédiaires de gestion).
//!
//! Each detail line sums income statement captions; each subtotal combines
//! earlier rows. Every charge and product caption is used exactly once, so
//! `SIG9` equals total products minus total charges.

use super::catalog::Catalog;
use super::syscohada::{CHARGES, PRODUCTS};

use SigSign::{Minus, Plus};
use SigTerm::{Charge, Product};

/// Sign of a row inside a subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigSign {
    /// Added.
    Plus,
    /// Subtracted.
    Minus,
}

/// One income statement caption feeding a detail line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigTerm {
    /// A charge caption.
    Charge(&'static str),
    /// A product caption.
    Product(&'static str),
}

impl SigTerm {
    /// Catalog holding the caption.
    #[must_use]
    pub fn catalog(self) -> &'static Catalog {
        match self {
            Self::Charge(_) => &CHARGES,
            Self::Product(_) => &PRODUCTS,
        }
    }

    /// Caption code.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Charge(code) | Self::Product(code) => code,
        }
    }
}

/// How a row's amount is obtained.
#[derive(Debug, Clone, Copy)]
pub enum SigRowKind {
    /// Sum of caption amounts.
    Line(&'static [SigTerm]),
    /// Signed combination of earlier rows.
    Subtotal(&'static [(SigSign, &'static str)]),
}

/// One row of the cascade.
#[derive(Debug, Clone, Copy)]
pub struct SigRow {
    /// Row reference (`T1`..`T27`, `SIG1`..`SIG9`).
    pub code: &'static str,
    /// Row wording.
    pub label: &'static str,
    /// Computation.
    pub kind: SigRowKind,
}

const fn line(code: &'static str, label: &'static str, terms: &'static [SigTerm]) -> SigRow {
    SigRow {
        code,
        label,
        kind: SigRowKind::Line(terms),
    }
}

const fn subtotal(
    code: &'static str,
    label: &'static str,
    parts: &'static [(SigSign, &'static str)],
) -> SigRow {
    SigRow {
        code,
        label,
        kind: SigRowKind::Subtotal(parts),
    }
}

/// The cascade, in presentation order.
pub static INTERMEDIATE_BALANCES: &[SigRow] = &[
    line("T1", "Ventes de marchandises", &[Product("TA")]),
    line("T2", "Achats de marchandises", &[Charge("RA")]),
    line("T3", "Variation de stocks de marchandises", &[Charge("RB")]),
    subtotal("SIG1", "Marge commerciale", &[(Plus, "T1"), (Minus, "T2"), (Minus, "T3")]),
    line("T4", "Production vendue", &[Product("TB"), Product("TC"), Product("TF")]),
    line("T5", "Production stockée (ou déstockage)", &[Product("TD")]),
    line("T6", "Production immobilisée", &[Product("TE")]),
    subtotal("SIG2", "Production de l'exercice", &[(Plus, "T4"), (Plus, "T5"), (Plus, "T6")]),
    line("T7", "Achats de matières premières", &[Charge("RC")]),
    line("T8", "Variation de stocks de matières et approvisionnements", &[Charge("RD"), Charge("RF")]),
    line("T9", "Autres achats et charges externes", &[Charge("RE"), Charge("RG"), Charge("RH")]),
    subtotal(
        "SIG3",
        "Valeur ajoutée",
        &[(Plus, "SIG1"), (Plus, "SIG2"), (Minus, "T7"), (Minus, "T8"), (Minus, "T9")],
    ),
    line("T10", "Subventions d'exploitation", &[Product("TG")]),
    line("T11", "Impôts et taxes", &[Charge("RI")]),
    line("T12", "Charges de personnel", &[Charge("RK")]),
    subtotal(
        "SIG4",
        "Excédent brut d'exploitation",
        &[(Plus, "SIG3"), (Plus, "T10"), (Minus, "T11"), (Minus, "T12")],
    ),
    line("T13", "Reprises d'amortissements et de provisions", &[Product("TI")]),
    line("T14", "Transferts de charges d'exploitation", &[Product("TM")]),
    line("T15", "Autres produits", &[Product("TH")]),
    line("T16", "Dotations aux amortissements et aux provisions", &[Charge("RL"), Charge("RM")]),
    line("T17", "Autres charges", &[Charge("RJ")]),
    subtotal(
        "SIG5",
        "Résultat d'exploitation",
        &[(Plus, "SIG4"), (Plus, "T13"), (Plus, "T14"), (Plus, "T15"), (Minus, "T16"), (Minus, "T17")],
    ),
    line("T18", "Produits financiers", &[Product("TJ"), Product("TK")]),
    line("T19", "Reprises de provisions financières", &[Product("TL")]),
    line("T20", "Charges financières", &[Charge("RN"), Charge("RO")]),
    line("T21", "Dotations aux provisions financières", &[Charge("RP")]),
    subtotal(
        "SIG6",
        "Résultat financier",
        &[(Plus, "T18"), (Plus, "T19"), (Minus, "T20"), (Minus, "T21")],
    ),
    subtotal("SIG7", "Résultat des activités ordinaires", &[(Plus, "SIG5"), (Plus, "SIG6")]),
    line("T22", "Produits des cessions d'immobilisations", &[Product("TN")]),
    line("T23", "Autres produits HAO", &[Product("TO")]),
    line("T24", "Valeurs comptables des cessions", &[Charge("RQ")]),
    line("T25", "Autres charges HAO", &[Charge("RR")]),
    subtotal(
        "SIG8",
        "Résultat hors activités ordinaires",
        &[(Plus, "T22"), (Plus, "T23"), (Minus, "T24"), (Minus, "T25")],
    ),
    line("T26", "Participation des travailleurs", &[Charge("RT")]),
    line("T27", "Impôts sur le résultat", &[Charge("RS")]),
    subtotal(
        "SIG9",
        "Résultat net",
        &[(Plus, "SIG7"), (Plus, "SIG8"), (Minus, "T26"), (Minus, "T27")],
    ),
];

/// Code of the net result row.
pub const NET_RESULT_ROW: &str = "SIG9";
