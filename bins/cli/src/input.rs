//! Trial balance file readers.

use std::io::Read;

use liasse_core::RawRecord;
use liasse_shared::{AppError, AppResult};
use serde_json::Value;

/// Supported trial balance file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// Array of objects, one per account.
    Json,
    /// Delimited text with a header row.
    Csv,
}

impl InputFormat {
    /// Guesses the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &str) -> Self {
        let is_csv = std::path::Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("txt"));
        if is_csv { Self::Csv } else { Self::Json }
    }
}

/// Reads a JSON trial balance.
///
/// Accepts either a bare array of row objects or an object wrapping that
/// array under `balance` or `entries`.
pub fn read_json(reader: impl Read) -> AppResult<Vec<RawRecord>> {
    let value: Value = serde_json::from_reader(reader)?;
    let rows = match value {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match map.remove("balance").or_else(|| map.remove("entries")) {
            Some(Value::Array(rows)) => rows,
            _ => {
                return Err(AppError::Parse(
                    "expected an array of rows, or an object with a 'balance' array".to_string(),
                ));
            }
        },
        _ => return Err(AppError::Parse("expected an array of rows".to_string())),
    };

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| match row {
            Value::Object(map) => Ok(RawRecord::from(map)),
            other => Err(AppError::Parse(format!(
                "row {} is not an object: {other}",
                index + 1
            ))),
        })
        .collect()
}

/// Reads a delimited trial balance with a header row.
///
/// Cells are kept as text; empty cells are dropped so they count as absent.
pub fn read_csv(reader: impl Read, delimiter: u8) -> AppResult<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| AppError::Parse(format!("header row: {e}")))?
        .clone();

    let mut records = Vec::new();
    for (index, row) in rdr.records().enumerate() {
        let row = row.map_err(|e| AppError::Parse(format!("row {}: {e}", index + 1)))?;
        let record: RawRecord = headers
            .iter()
            .zip(row.iter())
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(column, cell)| (column.to_string(), cell.to_string()))
            .collect();
        records.push(record);
    }
    Ok(records)
}
