//! SYSCOHADA caption catalogs (système normal).
//!
//! Shared account classes (40-47, 48, 52) appear on both balance sheet
//! sides: debtor accounts feed the asset caption and creditor accounts the
//! liability caption, so a balanced trial balance yields a balanced sheet.

use super::catalog::{CaptionMapping as C, Catalog, Layout, Side, SumRule};

/// Liability caption holding the current-period result.
pub const RESULT_CAPTION: &str = "CH";

/// Balance sheet, assets.
pub static ASSETS: Catalog = Catalog {
    name: "assets",
    side: Side::Debit,
    layout: Layout::GrossContraNet,
    captions: &[
        C::new("AQ", "Frais d'établissement", &["201"]).contra(&["2801", "2901"]),
        C::new("AR", "Charges à répartir sur plusieurs exercices", &["202"])
            .contra(&["2802", "2902"]),
        C::new("AS", "Primes de remboursement des obligations", &["206"]).contra(&["2806", "2906"]),
        C::new("AD", "Frais de développement, brevets et licences", &["211", "212"])
            .contra(&["2811", "2812", "2911", "2912"]),
        C::new("AE", "Logiciels, marques et droits similaires", &["213", "214", "215"])
            .contra(&["2813", "2814", "2815", "2913", "2914", "2915"]),
        C::new("AF", "Fonds commercial et droit au bail", &["216", "217"])
            .contra(&["2816", "2817", "2916", "2917"]),
        C::new("AG", "Autres immobilisations incorporelles", &["218", "219"])
            .contra(&["2818", "2819", "2918", "2919"]),
        C::new("AJ", "Terrains", &["22"]).contra(&["282", "292"]),
        C::new("AK", "Bâtiments", &["231", "232", "233", "234"])
            .contra(&["2831", "2832", "2833", "2834", "2931", "2932", "2933", "2934"]),
        C::new("AL", "Aménagements, agencements et installations", &["235", "237", "238"])
            .contra(&["2835", "2837", "2838", "2935", "2937", "2938"]),
        C::new("AM", "Matériel, mobilier et actifs biologiques", &["241", "242", "243", "244"])
            .contra(&["2841", "2842", "2843", "2844", "2941", "2942", "2943", "2944"]),
        C::new("AN", "Matériel de transport", &["245"]).contra(&["2845", "2945"]),
        C::new("AP", "Avances et acomptes versés sur immobilisations", &["251", "252"]),
        C::new("AT", "Titres de participation", &["26"]).contra(&["296"]),
        C::new("AU", "Autres immobilisations financières", &["27"]).contra(&["297"]),
        C::new("BA", "Actif circulant HAO", &["485", "486", "487", "488"]).contra(&["498"]),
        C::new("BC", "Marchandises", &["31"]).contra(&["391"]),
        C::new("BD", "Matières premières et fournitures liées", &["32"]).contra(&["392"]),
        C::new("BE", "Autres approvisionnements", &["33"]).contra(&["393"]),
        C::new("BF", "Produits et services en cours", &["34", "35"]).contra(&["394", "395"]),
        C::new("BG", "Produits finis, intermédiaires et en cours de route", &["36", "37", "38"])
            .contra(&["396", "397", "398"]),
        C::new("BI", "Fournisseurs, avances versées", &["40"]).contra(&["490"]),
        C::new("BJ", "Clients", &["41"]).contra(&["491"]),
        C::new(
            "BK",
            "Autres créances",
            &["42", "43", "44", "45", "46", "471", "472", "473", "474", "475", "476", "477"],
        )
        .contra(&["492", "493", "494", "495", "496", "497"]),
        C::new("BQ", "Titres de placement", &["50"]).contra(&["590"]),
        C::new("BR", "Valeurs à encaisser", &["51"]).contra(&["591"]),
        C::new("BS", "Banques, chèques postaux, caisse et assimilés", &["52", "53", "54", "55", "56", "57", "58"])
            .contra(&["592", "593", "594"]),
        C::new("BU", "Écart de conversion-Actif", &["478"]),
    ],
};

/// Balance sheet, equity and liabilities.
pub static LIABILITIES: Catalog = Catalog {
    name: "liabilities",
    side: Side::Credit,
    layout: Layout::Amount,
    captions: &[
        C::new("CA", "Capital", &["101", "102", "103", "104"]),
        C::new("CB", "Apporteurs capital non appelé", &["109"]).rule(SumRule::Deduction),
        C::new("CC", "Primes liées au capital social", &["105"]),
        C::new("CD", "Écarts de réévaluation", &["106"]),
        C::new("CE", "Réserves indisponibles", &["111", "112"]),
        C::new("CF", "Réserves libres", &["113", "114", "115", "116", "117", "118"]),
        C::new("CG", "Report à nouveau", &["12"]).rule(SumRule::SignedCredit),
        C::new(RESULT_CAPTION, "Résultat net de l'exercice", &["13"]).rule(SumRule::SignedCredit),
        C::new("CI", "Subventions d'investissement", &["14"]),
        C::new("CJ", "Provisions réglementées", &["15"]),
        C::new("DA", "Emprunts obligataires", &["161"]),
        C::new("DB", "Emprunts et dettes auprès des établissements de crédit", &["162", "163", "164"]),
        C::new("DC", "Autres dettes financières", &["165", "166", "167", "168"]),
        C::new("DD", "Dettes de location-acquisition", &["17"]),
        C::new("DE", "Dettes liées à des participations et comptes de liaison", &["181", "182", "183", "184", "185", "186"]),
        C::new("DF", "Provisions pour risques et charges", &["19"]),
        C::new("DH", "Dettes circulantes HAO", &["481", "482", "483", "484"]),
        C::new("DI", "Clients, avances reçues", &["41"]),
        C::new("DJ", "Fournisseurs d'exploitation", &["40"]),
        C::new("DK", "Dettes fiscales et sociales", &["43", "44"]),
        C::new("DL", "Personnel", &["42"]),
        C::new("DM", "Autres dettes", &["45", "46", "471", "472", "473", "474", "475", "476", "477"]),
        C::new("DN", "Provisions pour risques à court terme", &["499"]),
        C::new("DQ", "Banques, crédits d'escompte", &["52", "561", "564"]),
        C::new("DR", "Banques, établissements financiers et crédits de trésorerie", &["565"]),
        C::new("DT", "Écart de conversion-Passif", &["479"]),
    ],
};

/// Income statement, charges.
pub static CHARGES: Catalog = Catalog {
    name: "charges",
    side: Side::Debit,
    layout: Layout::Amount,
    captions: &[
        C::new("RA", "Achats de marchandises", &["601"]),
        C::new("RB", "Variation de stocks de marchandises", &["6031"]).rule(SumRule::SignedDebit),
        C::new("RC", "Achats de matières premières et fournitures liées", &["602"]),
        C::new("RD", "Variation de stocks de matières premières", &["6032"]).rule(SumRule::SignedDebit),
        C::new("RE", "Autres achats", &["604", "605", "608"]),
        C::new("RF", "Variation de stocks d'autres approvisionnements", &["6033"])
            .rule(SumRule::SignedDebit),
        C::new("RG", "Transports", &["61"]),
        C::new("RH", "Services extérieurs", &["62", "63"]),
        C::new("RI", "Impôts et taxes", &["64"]),
        C::new("RJ", "Autres charges", &["65"]),
        C::new("RK", "Charges de personnel", &["66"]),
        C::new("RL", "Dotations aux amortissements et aux provisions", &["681"]),
        C::new("RM", "Dotations aux provisions d'exploitation", &["691"]),
        C::new(
            "RN",
            "Frais financiers et charges assimilées",
            &["671", "672", "673", "674", "675", "677", "678"],
        ),
        C::new("RO", "Pertes de change", &["676"]),
        C::new("RP", "Dotations aux provisions financières", &["679", "687", "697"]),
        C::new("RQ", "Valeurs comptables des cessions d'immobilisations", &["81"]),
        C::new("RR", "Autres charges HAO", &["83", "85"]),
        C::new("RT", "Participation des travailleurs", &["87"]),
        C::new("RS", "Impôts sur le résultat", &["89"]),
    ],
};

/// Income statement, products.
pub static PRODUCTS: Catalog = Catalog {
    name: "products",
    side: Side::Credit,
    layout: Layout::Amount,
    captions: &[
        C::new("TA", "Ventes de marchandises", &["701"]),
        C::new("TB", "Ventes de produits fabriqués", &["702", "703", "704", "705"]),
        C::new("TC", "Travaux, services vendus", &["706"]),
        C::new("TD", "Production stockée (ou déstockage)", &["73"]).rule(SumRule::SignedCredit),
        C::new("TE", "Production immobilisée", &["72"]),
        C::new("TF", "Produits accessoires", &["707"]),
        C::new("TG", "Subventions d'exploitation", &["71"]),
        C::new("TH", "Autres produits", &["75"]),
        C::new("TI", "Reprises de provisions et dépréciations", &["791", "798", "799"]),
        C::new(
            "TJ",
            "Revenus financiers et assimilés",
            &["771", "772", "773", "774", "775", "777", "778"],
        ),
        C::new("TK", "Gains de change", &["776"]),
        C::new("TL", "Reprises de provisions financières", &["779", "787", "797"]),
        C::new(
            "TM",
            "Transferts de charges",
            &["781", "782", "783", "784", "785", "786", "788", "789"],
        ),
        C::new("TN", "Produits des cessions d'immobilisations", &["82"]),
        C::new("TO", "Autres produits HAO", &["84", "86", "88"]),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&ASSETS)]
    #[case(&LIABILITIES)]
    #[case(&CHARGES)]
    #[case(&PRODUCTS)]
    fn test_catalog_is_overlap_free(#[case] catalog: &Catalog) {
        assert!(
            catalog.overlaps().is_empty(),
            "{} overlaps: {:?}",
            catalog.name,
            catalog.overlaps()
        );
    }

    #[rstest]
    #[case(&ASSETS)]
    #[case(&LIABILITIES)]
    #[case(&CHARGES)]
    #[case(&PRODUCTS)]
    fn test_codes_are_unique(#[case] catalog: &Catalog) {
        let mut codes: Vec<&str> = catalog.codes().collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total, "{} has duplicate codes", catalog.name);
    }

    #[test]
    fn test_result_caption_is_signed() {
        let caption = LIABILITIES.get(RESULT_CAPTION).unwrap();
        assert_eq!(caption.rule, SumRule::SignedCredit);
        assert_eq!(caption.gross_prefixes, &["13"]);
    }

    #[test]
    fn test_uncalled_capital_is_a_deduction() {
        assert_eq!(LIABILITIES.get("CB").unwrap().rule, SumRule::Deduction);
    }

    #[rstest]
    #[case("RB")]
    #[case("RD")]
    #[case("RF")]
    fn test_stock_variations_keep_sign(#[case] code: &str) {
        assert_eq!(CHARGES.get(code).unwrap().rule, SumRule::SignedDebit);
    }

    #[test]
    fn test_contra_only_on_asset_layout() {
        for catalog in [&LIABILITIES, &CHARGES, &PRODUCTS] {
            assert!(
                catalog.captions.iter().all(|c| c.contra_prefixes.is_empty()),
                "{} carries contra prefixes",
                catalog.name
            );
        }
    }

    #[test]
    fn test_operator_account_is_capital() {
        assert!(LIABILITIES.get("CA").unwrap().gross_prefixes.contains(&"104"));
        assert_eq!(LIABILITIES.get("CC").unwrap().gross_prefixes, &["105"]);
    }

    #[rstest]
    #[case("6771", &CHARGES, "RN")]
    #[case("6781", &CHARGES, "RN")]
    #[case("7771", &PRODUCTS, "TJ")]
    #[case("7781", &PRODUCTS, "TJ")]
    #[case("7791", &PRODUCTS, "TL")]
    #[case("7831", &PRODUCTS, "TM")]
    #[case("7881", &PRODUCTS, "TM")]
    fn test_financial_accounts_have_one_caption(
        #[case] account: &str,
        #[case] catalog: &Catalog,
        #[case] expected: &str,
    ) {
        let matching: Vec<&str> = catalog
            .captions
            .iter()
            .filter(|caption| caption.gross_prefixes.iter().any(|p| account.starts_with(p)))
            .map(|caption| caption.code)
            .collect();
        assert_eq!(matching, vec![expected]);
    }
}
