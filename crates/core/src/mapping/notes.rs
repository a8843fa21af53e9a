//! Note catalogs: finer-grained breakdowns of balance sheet and income
//! statement captions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::catalog::{CaptionMapping as C, Catalog, Layout, Side, SumRule};

/// Explanatory note identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteId {
    /// Fixed assets by class.
    FixedAssets,
    /// Financial fixed assets.
    FinancialAssets,
    /// Inventories by class.
    Inventories,
    /// Customer receivables.
    CustomerReceivables,
    /// Other receivables.
    OtherReceivables,
    /// Investment securities.
    InvestmentSecurities,
    /// Cash and cash equivalents.
    Treasury,
    /// Share capital composition.
    Capital,
    /// Premiums, reserves and results.
    Reserves,
    /// Trade payables.
    Suppliers,
    /// Tax and social security debts.
    TaxSocialDebts,
    /// Other debts and provisions for risks.
    OtherDebts,
    /// Bank overdrafts and short-term credit.
    BankCredit,
    /// Revenue breakdown.
    Revenue,
    /// Purchases of goods and supplies.
    Purchases,
    /// Taxes and duties.
    Taxes,
    /// Payroll charges.
    Payroll,
    /// Depreciation and provision charges net of reversals.
    Provisions,
    /// Financial income and expenses.
    FinancialResult,
}

impl NoteId {
    /// Every note, in note number order.
    pub const ALL: [Self; 19] = [
        Self::FixedAssets,
        Self::FinancialAssets,
        Self::Inventories,
        Self::CustomerReceivables,
        Self::OtherReceivables,
        Self::InvestmentSecurities,
        Self::Treasury,
        Self::Capital,
        Self::Reserves,
        Self::Suppliers,
        Self::TaxSocialDebts,
        Self::OtherDebts,
        Self::BankCredit,
        Self::Revenue,
        Self::Purchases,
        Self::Taxes,
        Self::Payroll,
        Self::Provisions,
        Self::FinancialResult,
    ];

    /// Note number in the SYSCOHADA annex.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::FixedAssets => 3,
            Self::FinancialAssets => 4,
            Self::Inventories => 6,
            Self::CustomerReceivables => 7,
            Self::OtherReceivables => 8,
            Self::InvestmentSecurities => 9,
            Self::Treasury => 11,
            Self::Capital => 13,
            Self::Reserves => 14,
            Self::Suppliers => 17,
            Self::TaxSocialDebts => 18,
            Self::OtherDebts => 19,
            Self::BankCredit => 20,
            Self::Revenue => 21,
            Self::Purchases => 22,
            Self::Taxes => 26,
            Self::Payroll => 27,
            Self::Provisions => 28,
            Self::FinancialResult => 29,
        }
    }

    /// Note title.
    #[must_use]
    pub fn title(self) -> &'static str {
        self.catalog().name
    }

    /// Caption catalog backing this note.
    #[must_use]
    pub fn catalog(self) -> &'static Catalog {
        match self {
            Self::FixedAssets => &FIXED_ASSETS,
            Self::FinancialAssets => &FINANCIAL_ASSETS,
            Self::Inventories => &INVENTORIES,
            Self::CustomerReceivables => &CUSTOMER_RECEIVABLES,
            Self::OtherReceivables => &OTHER_RECEIVABLES,
            Self::InvestmentSecurities => &INVESTMENT_SECURITIES,
            Self::Treasury => &TREASURY,
            Self::Capital => &CAPITAL,
            Self::Reserves => &RESERVES,
            Self::Suppliers => &SUPPLIERS,
            Self::TaxSocialDebts => &TAX_SOCIAL_DEBTS,
            Self::OtherDebts => &OTHER_DEBTS,
            Self::BankCredit => &BANK_CREDIT,
            Self::Revenue => &REVENUE,
            Self::Purchases => &PURCHASES,
            Self::Taxes => &TAXES,
            Self::Payroll => &PAYROLL,
            Self::Provisions => &PROVISIONS,
            Self::FinancialResult => &FINANCIAL_RESULT,
        }
    }

    const fn slug(self) -> &'static str {
        match self {
            Self::FixedAssets => "fixed_assets",
            Self::FinancialAssets => "financial_assets",
            Self::Inventories => "inventories",
            Self::CustomerReceivables => "customer_receivables",
            Self::OtherReceivables => "other_receivables",
            Self::InvestmentSecurities => "investment_securities",
            Self::Treasury => "treasury",
            Self::Capital => "capital",
            Self::Reserves => "reserves",
            Self::Suppliers => "suppliers",
            Self::TaxSocialDebts => "tax_social_debts",
            Self::OtherDebts => "other_debts",
            Self::BankCredit => "bank_credit",
            Self::Revenue => "revenue",
            Self::Purchases => "purchases",
            Self::Taxes => "taxes",
            Self::Payroll => "payroll",
            Self::Provisions => "provisions",
            Self::FinancialResult => "financial_result",
        }
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for NoteId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|note| note.slug() == wanted || note.number().to_string() == wanted)
            .ok_or_else(|| format!("Unknown note: {s}"))
    }
}

static FIXED_ASSETS: Catalog = Catalog {
    name: "Immobilisations",
    side: Side::Debit,
    layout: Layout::GrossContraNet,
    captions: &[
        C::new("3A", "Charges immobilisées", &["20"]).contra(&["280", "290"]),
        C::new("3B", "Immobilisations incorporelles", &["21"]).contra(&["281", "291"]),
        C::new("3C", "Terrains", &["22"]).contra(&["282", "292"]),
        C::new("3D", "Bâtiments, installations techniques et agencements", &["23"])
            .contra(&["283", "293"]),
        C::new("3E", "Matériel, mobilier et actifs biologiques", &["24"]).contra(&["284", "294"]),
        C::new("3F", "Avances et acomptes versés sur immobilisations", &["25"]),
        C::new("3G", "Titres de participation", &["26"]).contra(&["296"]),
        C::new("3H", "Autres immobilisations financières", &["27"]).contra(&["297"]),
    ],
};

static FINANCIAL_ASSETS: Catalog = Catalog {
    name: "Immobilisations financières",
    side: Side::Debit,
    layout: Layout::Amount,
    captions: &[
        C::new("4A", "Titres de participation", &["261", "262", "263", "264", "265", "268"]),
        C::new("4B", "Créances rattachées à des participations", &["266", "267"]),
        C::new("4C", "Autres titres immobilisés", &["271", "272", "273", "274"]),
        C::new("4D", "Dépôts et cautionnements versés", &["275"]),
        C::new("4E", "Prêts et créances non commerciales", &["276", "277"]),
        C::new("4F", "Immobilisations financières diverses", &["278"]),
        C::new("4G", "Intérêts courus", &["279"]),
        C::new("4H", "Dépréciations des immobilisations financières", &["296", "297"])
            .rule(SumRule::Deduction),
    ],
};

static INVENTORIES: Catalog = Catalog {
    name: "Stocks et en-cours",
    side: Side::Debit,
    layout: Layout::GrossContraNet,
    captions: &[
        C::new("6A", "Marchandises", &["31"]).contra(&["391"]),
        C::new("6B", "Matières premières et fournitures liées", &["32"]).contra(&["392"]),
        C::new("6C", "Autres approvisionnements", &["33"]).contra(&["393"]),
        C::new("6D", "Produits en cours", &["34"]).contra(&["394"]),
        C::new("6E", "Services en cours", &["35"]).contra(&["395"]),
        C::new("6F", "Produits finis", &["36"]).contra(&["396"]),
        C::new("6G", "Produits intermédiaires et résiduels", &["37"]).contra(&["397"]),
        C::new("6H", "Stocks en cours de route, en consignation ou en dépôt", &["38"])
            .contra(&["398"]),
    ],
};

static CUSTOMER_RECEIVABLES: Catalog = Catalog {
    name: "Clients",
    side: Side::Debit,
    layout: Layout::GrossContraNet,
    captions: &[
        C::new("7A", "Clients", &["411"]),
        C::new("7B", "Clients, effets à recevoir", &["412"]),
        C::new("7C", "Clients, chèques et effets à l'encaissement", &["413", "415"]),
        C::new("7D", "Créances sur cessions d'immobilisations", &["414"]),
        C::new("7E", "Clients douteux ou litigieux", &["416"]).contra(&["491"]),
        C::new("7F", "Clients, produits à recevoir", &["418"]),
    ],
};

static OTHER_RECEIVABLES: Catalog = Catalog {
    name: "Autres créances",
    side: Side::Debit,
    layout: Layout::GrossContraNet,
    captions: &[
        C::new("8A", "Fournisseurs, avances versées", &["409"]).contra(&["490"]),
        C::new("8B", "Personnel", &["42"]).contra(&["492"]),
        C::new("8C", "Organismes sociaux", &["43"]).contra(&["493"]),
        C::new("8D", "État et collectivités publiques", &["44"]).contra(&["494"]),
        C::new("8E", "Organismes internationaux", &["45"]).contra(&["495"]),
        C::new("8F", "Associés et groupe", &["46"]).contra(&["496"]),
        C::new("8G", "Débiteurs divers", &["471", "472", "473", "474", "475"]).contra(&["497"]),
        C::new("8H", "Charges constatées d'avance", &["476"]),
    ],
};

static INVESTMENT_SECURITIES: Catalog = Catalog {
    name: "Titres de placement",
    side: Side::Debit,
    layout: Layout::Amount,
    captions: &[
        C::new("9A", "Titres du Trésor et bons de caisse à court terme", &["501"]),
        C::new("9B", "Actions", &["502"]),
        C::new("9C", "Obligations", &["503"]),
        C::new("9D", "Bons de souscription", &["504"]),
        C::new("9E", "Titres négociables hors région", &["505"]),
        C::new("9F", "Intérêts courus", &["506"]),
        C::new("9G", "Autres valeurs assimilées", &["507", "508"]),
        C::new("9H", "Dépréciations des titres de placement", &["590"]).rule(SumRule::Deduction),
    ],
};

static TREASURY: Catalog = Catalog {
    name: "Trésorerie-Actif",
    side: Side::Debit,
    layout: Layout::GrossContraNet,
    captions: &[
        C::new("11A", "Titres de placement", &["50"]).contra(&["590"]),
        C::new("11B", "Valeurs à encaisser", &["51"]).contra(&["591"]),
        C::new("11C", "Banques", &["52"]).contra(&["592"]),
        C::new("11D", "Établissements financiers et assimilés", &["53"]).contra(&["593"]),
        C::new("11E", "Instruments de trésorerie", &["54"]).contra(&["594"]),
        C::new("11F", "Instruments de monnaie électronique", &["55"]),
        C::new("11G", "Banques, crédits de trésorerie et d'escompte", &["56"]),
        C::new("11H", "Caisse", &["57"]),
        C::new("11I", "Régies d'avances, accréditifs et virements internes", &["58"]),
    ],
};

static CAPITAL: Catalog = Catalog {
    name: "Capital",
    side: Side::Credit,
    layout: Layout::Amount,
    captions: &[
        C::new("13A", "Capital social", &["101"]),
        C::new("13B", "Capital par dotation", &["102"]),
        C::new("13C", "Capital personnel", &["103"]),
        C::new("13D", "Compte de l'exploitant", &["104"]),
        C::new("13E", "Apporteurs, capital souscrit non appelé", &["109"]).rule(SumRule::Deduction),
    ],
};

static RESERVES: Catalog = Catalog {
    name: "Primes et réserves",
    side: Side::Credit,
    layout: Layout::Amount,
    captions: &[
        C::new("14A", "Primes liées au capital social", &["105"]),
        C::new("14B", "Écarts de réévaluation", &["106"]),
        C::new("14C", "Réserve légale", &["111"]),
        C::new("14D", "Réserves statutaires ou contractuelles", &["112"]),
        C::new("14E", "Réserves réglementées", &["113", "114", "115", "116", "117"]),
        C::new("14F", "Autres réserves", &["118"]),
        C::new("14G", "Report à nouveau", &["12"]).rule(SumRule::SignedCredit),
        C::new("14H", "Résultat net de l'exercice", &["13"]).rule(SumRule::SignedCredit),
    ],
};

static SUPPLIERS: Catalog = Catalog {
    name: "Fournisseurs d'exploitation",
    side: Side::Credit,
    layout: Layout::Amount,
    captions: &[
        C::new("17A", "Fournisseurs, dettes en compte", &["401"]),
        C::new("17B", "Fournisseurs, effets à payer", &["402"]),
        C::new("17C", "Fournisseurs, dettes en compte groupe", &["403", "405"]),
        C::new("17D", "Fournisseurs d'investissements", &["404"]),
        C::new("17E", "Fournisseurs, factures non parvenues", &["408"]),
    ],
};

static TAX_SOCIAL_DEBTS: Catalog = Catalog {
    name: "Dettes fiscales et sociales",
    side: Side::Credit,
    layout: Layout::Amount,
    captions: &[
        C::new("18A", "Personnel", &["42"]),
        C::new("18B", "Organismes sociaux", &["43"]),
        C::new("18C", "État, impôt sur les bénéfices", &["441"]),
        C::new("18D", "État, taxe sur la valeur ajoutée", &["443", "444"]),
        C::new("18E", "État, autres impôts et taxes", &["442", "445", "446", "447", "448", "449"]),
    ],
};

static OTHER_DEBTS: Catalog = Catalog {
    name: "Autres dettes et provisions pour risques",
    side: Side::Credit,
    layout: Layout::Amount,
    captions: &[
        C::new("19A", "Organismes internationaux", &["45"]),
        C::new("19B", "Associés et groupe", &["46"]),
        C::new("19C", "Créditeurs divers", &["471", "472", "473", "474", "475"]),
        C::new("19D", "Produits constatés d'avance", &["477"]),
        C::new("19E", "Dettes sur acquisitions d'immobilisations", &["481", "482", "483", "484"]),
        C::new("19F", "Provisions pour risques à court terme", &["499"]),
        C::new("19G", "Provisions pour risques et charges", &["19"]),
    ],
};

static BANK_CREDIT: Catalog = Catalog {
    name: "Banques, crédits d'escompte et de trésorerie",
    side: Side::Credit,
    layout: Layout::Amount,
    captions: &[
        C::new("20A", "Banques, soldes créditeurs", &["52"]),
        C::new("20B", "Crédits de trésorerie", &["561"]),
        C::new("20C", "Escompte de crédits ordinaires", &["564"]),
        C::new("20D", "Escompte de crédits de campagne", &["565"]),
    ],
};

static REVENUE: Catalog = Catalog {
    name: "Chiffre d'affaires et autres produits",
    side: Side::Credit,
    layout: Layout::Amount,
    captions: &[
        C::new("21A", "Ventes de marchandises", &["701"]),
        C::new("21B", "Ventes de produits fabriqués", &["702", "703"]),
        C::new("21C", "Travaux et services vendus", &["704", "705", "706"]),
        C::new("21D", "Produits accessoires", &["707"]),
        C::new("21E", "Subventions d'exploitation", &["71"]),
        C::new("21F", "Autres produits", &["75"]),
    ],
};

static PURCHASES: Catalog = Catalog {
    name: "Achats",
    side: Side::Debit,
    layout: Layout::Amount,
    captions: &[
        C::new("22A", "Achats de marchandises", &["601"]),
        C::new("22B", "Achats de matières premières et fournitures liées", &["602"]),
        C::new("22C", "Matières et fournitures consommables", &["604"]),
        C::new("22D", "Autres achats", &["605"]),
        C::new("22E", "Achats d'emballages", &["608"]),
        C::new("22F", "Variations des stocks", &["603"]).rule(SumRule::SignedDebit),
    ],
};

static TAXES: Catalog = Catalog {
    name: "Impôts et taxes",
    side: Side::Debit,
    layout: Layout::Amount,
    captions: &[
        C::new("26A", "Impôts et taxes directs", &["641"]),
        C::new("26B", "Impôts et taxes indirects", &["645"]),
        C::new("26C", "Droits d'enregistrement", &["646"]),
        C::new("26D", "Pénalités et amendes fiscales", &["647"]),
        C::new("26E", "Autres impôts et taxes", &["648"]),
    ],
};

static PAYROLL: Catalog = Catalog {
    name: "Charges de personnel",
    side: Side::Debit,
    layout: Layout::Amount,
    captions: &[
        C::new("27A", "Rémunérations directes versées au personnel national", &["661"]),
        C::new("27B", "Rémunérations directes versées au personnel non national", &["662"]),
        C::new("27C", "Indemnités forfaitaires versées au personnel", &["663"]),
        C::new("27D", "Charges sociales", &["664"]),
        C::new("27E", "Rémunérations et charges sociales de l'exploitant individuel", &["666"]),
        C::new("27F", "Rémunérations transférées de personnel extérieur", &["667"]),
        C::new("27G", "Autres charges sociales", &["668"]),
    ],
};

static PROVISIONS: Catalog = Catalog {
    name: "Dotations et reprises de provisions",
    side: Side::Debit,
    layout: Layout::Amount,
    captions: &[
        C::new("28A", "Dotations aux amortissements d'exploitation", &["681"]),
        C::new("28B", "Dotations aux provisions et dépréciations d'exploitation", &["691"]),
        C::new("28C", "Dotations aux provisions et dépréciations financières", &["697"]),
        C::new("28D", "Reprises de provisions et dépréciations d'exploitation", &["791"])
            .rule(SumRule::Deduction),
        C::new("28E", "Reprises de provisions et dépréciations financières", &["797"])
            .rule(SumRule::Deduction),
    ],
};

static FINANCIAL_RESULT: Catalog = Catalog {
    name: "Produits et charges financiers",
    side: Side::Credit,
    layout: Layout::Amount,
    captions: &[
        C::new(
            "29A",
            "Revenus financiers et assimilés",
            &["771", "772", "773", "774", "775", "777", "778"],
        ),
        C::new("29B", "Gains de change", &["776"]),
        C::new("29C", "Reprises de provisions financières", &["779", "787", "797"]),
        C::new(
            "29D",
            "Frais financiers et charges assimilées",
            &["671", "672", "673", "674", "675", "677", "678"],
        )
        .rule(SumRule::Deduction),
        C::new("29E", "Pertes de change", &["676"]).rule(SumRule::Deduction),
        C::new("29F", "Dotations aux provisions financières", &["679", "687", "697"])
            .rule(SumRule::Deduction),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_every_note_catalog_is_overlap_free() {
        for note in NoteId::ALL {
            let catalog = note.catalog();
            assert!(
                catalog.overlaps().is_empty(),
                "note {} overlaps: {:?}",
                note.number(),
                catalog.overlaps()
            );
        }
    }

    #[test]
    fn test_caption_codes_carry_note_number() {
        for note in NoteId::ALL {
            let number = note.number().to_string();
            for code in note.catalog().codes() {
                assert!(code.starts_with(&number), "{code} is not in note {number}");
            }
        }
    }

    #[test]
    fn test_note_numbers_ascending() {
        let numbers: Vec<u8> = NoteId::ALL.iter().map(|note| note.number()).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        assert_eq!(numbers, sorted);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("inventories".parse::<NoteId>().unwrap(), NoteId::Inventories);
        assert_eq!("tax-social-debts".parse::<NoteId>().unwrap(), NoteId::TaxSocialDebts);
        assert_eq!("13".parse::<NoteId>().unwrap(), NoteId::Capital);
        assert_eq!("bank-credit".parse::<NoteId>().unwrap(), NoteId::BankCredit);
        assert_eq!("29".parse::<NoteId>().unwrap(), NoteId::FinancialResult);
        assert!("goodwill".parse::<NoteId>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for note in NoteId::ALL {
            assert_eq!(note.to_string().parse::<NoteId>().unwrap(), note);
        }
    }

    #[test]
    fn test_operator_account_in_capital_note() {
        assert_eq!(NoteId::Capital.catalog().get("13D").unwrap().gross_prefixes, &["104"]);
        assert!(
            NoteId::Reserves
                .catalog()
                .captions
                .iter()
                .all(|caption| !caption.gross_prefixes.contains(&"104"))
        );
    }

    #[rstest]
    #[case(NoteId::FinancialAssets, "4H")]
    #[case(NoteId::InvestmentSecurities, "9H")]
    #[case(NoteId::Provisions, "28D")]
    #[case(NoteId::Provisions, "28E")]
    #[case(NoteId::FinancialResult, "29D")]
    #[case(NoteId::FinancialResult, "29F")]
    fn test_offsetting_lines_are_deductions(#[case] note: NoteId, #[case] code: &str) {
        assert_eq!(note.catalog().get(code).unwrap().rule, SumRule::Deduction);
    }
}
