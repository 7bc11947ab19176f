// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::models::Transaction;

pub const DEFAULT_EXPORT_FILE: &str = "expenses.csv";
pub const CSV_HEADER: [&str; 5] = ["Date", "Type", "Category", "Description", "Amount"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown format: {} (use csv|json)", other)),
        }
    }
}

#[derive(Serialize)]
struct ExportRow<'a> {
    date: String,
    #[serde(rename = "type")]
    kind: &'static str,
    category: &'a str,
    description: &'a str,
    amount: String,
}

impl<'a> From<&'a Transaction> for ExportRow<'a> {
    fn from(t: &'a Transaction) -> Self {
        Self {
            date: t.date.to_string(),
            kind: t.kind.as_str(),
            category: &t.category,
            description: &t.description,
            amount: t.amount.normalize().to_string(),
        }
    }
}

/// Write every transaction, in store order, as CSV. Fields holding commas,
/// quotes or newlines are quoted.
pub fn write_csv<W: Write>(out: W, txs: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(CSV_HEADER)?;
    for t in txs {
        let row = ExportRow::from(t);
        wtr.write_record([
            row.date.as_str(),
            row.kind,
            row.category,
            row.description,
            row.amount.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut out: W, txs: &[Transaction]) -> Result<()> {
    let rows: Vec<ExportRow> = txs.iter().map(ExportRow::from).collect();
    serde_json::to_writer_pretty(&mut out, &rows)?;
    writeln!(out)?;
    Ok(())
}

pub fn export_to_path(path: &Path, format: ExportFormat, txs: &[Transaction]) -> Result<()> {
    let file = File::create(path)?;
    match format {
        ExportFormat::Csv => write_csv(file, txs)?,
        ExportFormat::Json => write_json(file, txs)?,
    }
    info!(path = %path.display(), count = txs.len(), ?format, "exported transactions");
    Ok(())
}
