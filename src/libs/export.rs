//! Report export for external analysis and billing.
//!
//! Exports a filtered entry set as a flat table, one row per entry, in CSV,
//! JSON, or Excel format. The default filename is derived from the active
//! date-range bounds so consecutive exports of different ranges never
//! collide.

use crate::libs::aggregate::client_name;
use crate::libs::client::Client;
use crate::libs::entry::TimeEntry;
use crate::libs::formatter::{format_clock, format_date};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use chrono::NaiveDateTime;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Column headers for the flattened report table, shared by every format.
const HEADERS: [&str; 8] = [
    "Date",
    "Client",
    "Project",
    "Description",
    "Start Time",
    "End Time",
    "Duration (min)",
    "Billable",
];

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
    /// Excel worksheet with header formatting and auto-sized columns.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "excel",
        };
        write!(f, "{}", name)
    }
}

/// One flattened report row. All fields are pre-formatted strings except the
/// raw minute count, which stays numeric for spreadsheet arithmetic.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportRow {
    pub date: String,
    pub client: String,
    pub project: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_min: i64,
    pub billable: String,
}

/// Flattens filtered entries into export rows, resolving client names with
/// the usual "Unknown Client" fallback.
pub fn rows_from_entries(entries: &[TimeEntry], clients: &[Client]) -> Vec<ExportRow> {
    entries
        .iter()
        .map(|entry| ExportRow {
            date: format_date(&entry.start),
            client: client_name(clients, entry.client_id),
            project: entry.project.clone(),
            description: entry.description.clone().unwrap_or_default(),
            start_time: format_clock(&entry.start),
            end_time: format_clock(&entry.end),
            duration_min: entry.duration_min,
            billable: if entry.billable { "Yes" } else { "No" }.to_string(),
        })
        .collect()
}

/// Default filename named by the active range bounds,
/// e.g. `time-report-2025-01-05-to-2025-01-11.csv`.
pub fn default_file_name(format: ExportFormat, bounds: (NaiveDateTime, NaiveDateTime)) -> String {
    format!("time-report-{}-to-{}.{}", bounds.0.date(), bounds.1.date(), format.extension())
}

/// Export handler holding the output format and destination path.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter, generating the range-derived default filename
    /// when no explicit output path is given.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, bounds: (NaiveDateTime, NaiveDateTime)) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(default_file_name(format, bounds)));
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    pub fn export(&self, rows: &[ExportRow]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(rows)?,
            ExportFormat::Json => self.export_json(rows)?,
            ExportFormat::Excel => self.export_excel(rows)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, rows: &[ExportRow]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(HEADERS)?;

        for row in rows {
            wtr.write_record(&[
                row.date.clone(),
                row.client.clone(),
                row.project.clone(),
                row.description.clone(),
                row.start_time.clone(),
                row.end_time.clone(),
                row.duration_min.to_string(),
                row.billable.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, rows: &[ExportRow]) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, rows: &[ExportRow]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            worksheet.write_string(r, 0, &row.date)?;
            worksheet.write_string(r, 1, &row.client)?;
            worksheet.write_string(r, 2, &row.project)?;
            worksheet.write_string(r, 3, &row.description)?;
            worksheet.write_string(r, 4, &row.start_time)?;
            worksheet.write_string(r, 5, &row.end_time)?;
            worksheet.write_number(r, 6, row.duration_min as f64)?;
            worksheet.write_string(r, 7, &row.billable)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
