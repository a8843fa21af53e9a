//! Système minimal de trésorerie (SMT) catalogs.
//!
//! Very small entities file a condensed balance sheet and income statement.
//! Each caption groups whole account classes of the normal system and keeps
//! its reciprocal split (debtor 40-47 and 52 on assets, creditor on
//! liabilities), so a trial balance kept on standard sub-accounts carries the
//! same totals under both layouts.

use super::catalog::{CaptionMapping as C, Catalog, Layout, Side, SumRule};

/// Balance sheet result caption of the minimal system.
pub const SMT_RESULT_CAPTION: &str = "CP_4";

/// Condensed assets.
pub static SMT_ASSETS: Catalog = Catalog {
    name: "smt_assets",
    side: Side::Debit,
    layout: Layout::GrossContraNet,
    captions: &[
        C::new("AI_1", "Immobilisations incorporelles", &["201", "202", "206", "21"])
            .contra(&["2801", "2802", "2806", "281", "2901", "2902", "2906", "291"]),
        C::new("AI_2", "Immobilisations corporelles", &["22", "23", "24", "25"])
            .contra(&["282", "283", "284", "292", "293", "294"]),
        C::new("AI_3", "Immobilisations financières", &["26", "27"]).contra(&["296", "297"]),
        C::new("AC_1", "Stocks", &["31", "32", "33", "34", "35", "36", "37", "38"])
            .contra(&["39"]),
        C::new("AC_2", "Clients", &["41"]).contra(&["491"]),
        C::new(
            "AC_3",
            "Autres créances",
            &[
                "40", "42", "43", "44", "45", "46", "471", "472", "473", "474", "475", "477",
                "478", "485", "486", "487", "488",
            ],
        )
        .contra(&["490", "492", "493", "494", "495", "496", "497", "498"]),
        C::new("AC_4", "Charges constatées d'avance", &["476"]),
        C::new("TA_1", "Banques", &["52", "53"]).contra(&["592", "593"]),
        C::new("TA_2", "Caisse", &["57"]),
        C::new("TA_3", "Autres valeurs de trésorerie", &["50", "51", "54", "55", "56", "58"])
            .contra(&["590", "591", "594"]),
    ],
};

/// Condensed equity and liabilities.
pub static SMT_LIABILITIES: Catalog = Catalog {
    name: "smt_liabilities",
    side: Side::Credit,
    layout: Layout::Amount,
    captions: &[
        C::new("CP_1", "Capital et primes", &["101", "102", "103", "104", "105"]),
        C::new("CP_2", "Réserves", &["11"]),
        C::new("CP_3", "Report à nouveau", &["12"]).rule(SumRule::SignedCredit),
        C::new(SMT_RESULT_CAPTION, "Résultat de l'exercice", &["13"]).rule(SumRule::SignedCredit),
        C::new("CP_5", "Autres capitaux propres", &["106", "14", "15"]),
        C::new("CP_6", "Apporteurs, capital non appelé", &["109"]).rule(SumRule::Deduction),
        C::new("DF_1", "Emprunts et dettes financières", &["16", "17", "18", "19"]),
        C::new("PC_1", "Fournisseurs", &["40"]),
        C::new("PC_2", "Dettes fiscales et sociales", &["42", "43", "44"]),
        C::new(
            "PC_3",
            "Autres dettes",
            &[
                "41", "45", "46", "471", "472", "473", "474", "475", "476", "477", "479", "481",
                "482", "483", "484", "499",
            ],
        ),
        C::new("TP_1", "Trésorerie-Passif", &["52", "561", "564", "565"]),
    ],
};

/// Condensed charges.
pub static SMT_CHARGES: Catalog = Catalog {
    name: "smt_charges",
    side: Side::Debit,
    layout: Layout::Amount,
    captions: &[
        C::new("CH_1", "Achats de marchandises", &["601"]),
        C::new("CH_2", "Achats de matières et fournitures", &["602", "604", "605", "608"]),
        C::new("CH_3", "Variation de stocks", &["603"]).rule(SumRule::SignedDebit),
        C::new("CH_4", "Transports", &["61"]),
        C::new("CH_5", "Services extérieurs", &["62", "63"]),
        C::new("CH_6", "Impôts et taxes", &["64"]),
        C::new("CH_7", "Autres charges", &["65"]),
        C::new("CH_8", "Charges de personnel", &["66"]),
        C::new("CH_9", "Dotations aux amortissements et aux provisions", &["68", "69"]),
        C::new(
            "CH_10",
            "Charges financières, HAO et impôt",
            &["67", "81", "83", "85", "87", "89"],
        ),
    ],
};

/// Condensed products.
pub static SMT_PRODUCTS: Catalog = Catalog {
    name: "smt_products",
    side: Side::Credit,
    layout: Layout::Amount,
    captions: &[
        C::new("PR_1", "Ventes de marchandises", &["701"]),
        C::new("PR_2", "Ventes de produits et services", &["702", "703", "704", "705", "706"]),
        C::new("PR_3", "Production stockée et immobilisée", &["72", "73"])
            .rule(SumRule::SignedCredit),
        C::new("PR_4", "Subventions d'exploitation", &["71"]),
        C::new(
            "PR_5",
            "Autres produits et transferts de charges",
            &[
                "707", "75", "781", "782", "783", "784", "785", "786", "788", "789", "791", "798",
                "799",
            ],
        ),
        C::new(
            "PR_6",
            "Produits financiers et HAO",
            &["77", "787", "797", "82", "84", "86", "88"],
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&SMT_ASSETS)]
    #[case(&SMT_LIABILITIES)]
    #[case(&SMT_CHARGES)]
    #[case(&SMT_PRODUCTS)]
    fn test_catalog_is_overlap_free(#[case] catalog: &Catalog) {
        assert!(
            catalog.overlaps().is_empty(),
            "{} overlaps: {:?}",
            catalog.name,
            catalog.overlaps()
        );
    }

    #[test]
    fn test_result_caption_is_signed() {
        let caption = SMT_LIABILITIES.get(SMT_RESULT_CAPTION).unwrap();
        assert_eq!(caption.rule, SumRule::SignedCredit);
        assert_eq!(caption.gross_prefixes, &["13"]);
    }
}
