//! Liasse command-line interface
//!
//! Reads a trial balance, derives the liasse and prints it as JSON.

mod input;

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use liasse_core::statements::StatementId;
use liasse_core::{LiasseEngine, ReportingSystem, ValidationSettings};
use liasse_shared::types::Currency;
use liasse_shared::{AppConfig, AppError};

use input::InputFormat;

#[derive(Parser, Debug)]
#[command(name = "liasse", version, about = "Derive a SYSCOHADA liasse fiscale from a trial balance")]
struct Cli {
    /// Trial balance file (stdin when omitted)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Input format (guessed from the file extension when omitted)
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<InputFormat>,

    /// Single statement to print: assets, liabilities, charges, products, sig, cash_flows or note:<name>
    #[arg(short = 's', long = "statement")]
    statement: Option<StatementId>,

    /// Print the validation report only
    #[arg(long = "validate", conflicts_with = "statement")]
    validate: bool,

    /// Exit with status 1 when the liasse is inconsistent
    #[arg(long = "strict")]
    strict: bool,

    /// Override the configured validation tolerance
    #[arg(long = "tolerance")]
    tolerance: Option<Decimal>,

    /// Override the configured reporting currency
    #[arg(long = "currency")]
    currency: Option<Currency>,

    /// Override the configured period closing date (YYYY-MM-DD)
    #[arg(long = "period-end")]
    period_end: Option<NaiveDate>,

    /// Override the configured reporting system: normal or minimal (SMT)
    #[arg(long = "system")]
    system: Option<ReportingSystem>,

    /// Read ambiguous or unreadable amounts as zero instead of failing
    #[arg(long = "lenient-amounts")]
    lenient_amounts: bool,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pretty: bool,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "liasse=info,liasse_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(consistent) if cli.strict && !consistent => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<AppError>().map_or(70, AppError::exit_code);
            eprintln!("Error: {err:#}");
            ExitCode::from(code)
        }
    }
}

/// Derives and prints the requested output. Returns the consistency verdict.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = AppConfig::load().map_err(AppError::from)?;

    let settings = ValidationSettings {
        tolerance: cli.tolerance.unwrap_or(config.validation.tolerance),
    };
    let delimiter = config.input.delimiter_byte().ok_or_else(|| {
        AppError::Config(format!(
            "CSV delimiter must be one ASCII character, got '{}'",
            config.input.csv_delimiter
        ))
    })?;

    let format = cli
        .format
        .or_else(|| cli.input.as_deref().map(InputFormat::from_path))
        .unwrap_or(InputFormat::Json);

    let reader: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(
            File::open(path)
                .map_err(|e| AppError::Input(format!("{path}: {e}")))
                .context("opening trial balance")?,
        ),
        None => Box::new(io::stdin()),
    };
    let reader = BufReader::new(reader);

    let records = match format {
        InputFormat::Json => input::read_json(reader)?,
        InputFormat::Csv => input::read_csv(reader, delimiter)?,
    };
    info!(rows = records.len(), ?format, "Trial balance read");

    let system = match cli.system {
        Some(system) => system,
        None => config.report.system.parse().map_err(AppError::Config)?,
    };

    let mut engine = LiasseEngine::new()
        .with_settings(settings)
        .with_currency(cli.currency.unwrap_or(config.report.currency))
        .with_period_end(cli.period_end.or(config.report.period_end))
        .with_system(system);
    if cli.lenient_amounts {
        engine.load_balance(&records);
    } else {
        engine.try_load_balance(&records)?;
    }

    let catalog_error = |e: liasse_core::StatementError| AppError::Catalog(e.to_string());

    let report = engine.validate().map_err(catalog_error)?;
    for discrepancy in &report.discrepancies {
        warn!("{discrepancy}");
    }

    let output = if let Some(statement) = cli.statement {
        serde_json::to_value(engine.generate(statement).map_err(catalog_error)?)
    } else if cli.validate {
        serde_json::to_value(&report)
    } else {
        let bundle = engine.bundle().map_err(catalog_error)?;
        info!(
            %system,
            net_result = %bundle.totals.net_result,
            loss = bundle.totals.is_loss(),
            notes = bundle.notes.len(),
            "Liasse derived"
        );
        serde_json::to_value(bundle)
    }
    .map_err(|e| AppError::Internal(e.to_string()))?;

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .map_err(|e| AppError::Internal(e.to_string()))?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").context("writing output")?;

    Ok(report.is_consistent)
}
