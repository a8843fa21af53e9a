//! Application configuration management.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::money::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Consistency validation configuration.
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Report metadata configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Trial balance input configuration.
    #[serde(default)]
    pub input: InputConfig,
}

/// Consistency validation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Largest gap tolerated between two totals that should agree.
    #[serde(default = "default_tolerance")]
    pub tolerance: Decimal,
}

fn default_tolerance() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
        }
    }
}

/// Report metadata configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Reporting currency.
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// Closing date of the fiscal year being reported.
    #[serde(default)]
    pub period_end: Option<NaiveDate>,
    /// Reporting system: `normal` or `minimal`.
    #[serde(default = "default_system")]
    pub system: String,
}

fn default_currency() -> Currency {
    Currency::Xof
}

fn default_system() -> String {
    "normal".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            period_end: None,
            system: default_system(),
        }
    }
}

/// Trial balance input configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Field delimiter for CSV trial balances.
    #[serde(default = "default_csv_delimiter")]
    pub csv_delimiter: String,
}

fn default_csv_delimiter() -> String {
    ";".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            csv_delimiter: default_csv_delimiter(),
        }
    }
}

impl InputConfig {
    /// Returns the CSV delimiter as a single byte.
    ///
    /// Returns `None` when the configured delimiter is not exactly one ASCII character.
    #[must_use]
    pub fn delimiter_byte(&self) -> Option<u8> {
        match self.csv_delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Some(*byte),
            _ => None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LIASSE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            [
                "LIASSE__VALIDATION__TOLERANCE",
                "LIASSE__REPORT__CURRENCY",
                "LIASSE__REPORT__SYSTEM",
                "LIASSE__INPUT__CSV_DELIMITER",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.validation.tolerance, dec!(0.01));
                assert_eq!(config.report.currency, Currency::Xof);
                assert!(config.report.period_end.is_none());
                assert_eq!(config.report.system, "normal");
                assert_eq!(config.input.delimiter_byte(), Some(b';'));
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("LIASSE__VALIDATION__TOLERANCE", Some("1")),
                ("LIASSE__REPORT__CURRENCY", Some("XAF")),
                ("LIASSE__REPORT__SYSTEM", Some("minimal")),
                ("LIASSE__INPUT__CSV_DELIMITER", Some(",")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.validation.tolerance, dec!(1));
                assert_eq!(config.report.currency, Currency::Xaf);
                assert_eq!(config.report.system, "minimal");
                assert_eq!(config.input.delimiter_byte(), Some(b','));
            },
        );
    }

    #[test]
    fn test_delimiter_must_be_single_ascii_byte() {
        let input = InputConfig {
            csv_delimiter: ";;".to_string(),
        };
        assert_eq!(input.delimiter_byte(), None);

        let input = InputConfig {
            csv_delimiter: String::new(),
        };
        assert_eq!(input.delimiter_byte(), None);
    }
}
