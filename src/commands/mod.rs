pub mod client;
pub mod entry;
pub mod export;
pub mod init;
pub mod report;
pub mod timer;

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage clients and their project types")]
    Client(client::ClientArgs),
    #[command(about = "Manage time entries")]
    Entry(entry::EntryArgs),
    #[command(about = "Track time with a live timer")]
    Timer(timer::TimerArgs),
    #[command(about = "Summarize tracked time for a date range")]
    Report(report::ReportArgs),
    #[command(about = "Export a filtered report to a file")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Client(args) => client::cmd(args).await,
            Commands::Entry(args) => entry::cmd(args).await,
            Commands::Timer(args) => timer::cmd(args).await,
            Commands::Report(args) => report::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}

/// Parses a calendar day from user input. "today" resolves against the
/// local clock.
pub(crate) fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDateFormat(trimmed.to_string())))
}

pub(crate) fn parse_time(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|_| msg_error_anyhow!(Message::InvalidTimeFormat(trimmed.to_string())))
}
