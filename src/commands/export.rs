//! Report export command.
//!
//! Applies the same filters as `report`, then writes the filtered entries to
//! a file instead of the terminal. The output path defaults to a
//! range-derived filename inside the configured export directory, or the
//! current directory when none is configured.

use crate::{
    commands::report::FilterArgs,
    libs::{
        config::Config,
        export::{default_file_name, rows_from_entries, Exporter, ExportFormat},
        messages::Message,
    },
    msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    filter: FilterArgs,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,
    /// Output file path; defaults to a range-derived filename
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(export_args: ExportArgs) -> Result<()> {
    let query = export_args.filter.build_query()?;
    let (entries, clients) = super::report::fetch_filtered(&query)?;

    if entries.is_empty() {
        msg_warning!(Message::ExportNoData);
        return Ok(());
    }

    let output = export_args.output.or_else(|| {
        Config::read()
            .ok()
            .and_then(|c| c.export_directory())
            .map(|dir| dir.join(default_file_name(export_args.format, (query.start, query.end))))
    });

    msg_print!(Message::ExportingData("time entries".to_string(), export_args.format.to_string()));

    let rows = rows_from_entries(&entries, &clients);
    Exporter::new(export_args.format, output, (query.start, query.end)).export(&rows)?;
    Ok(())
}
