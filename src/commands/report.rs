//! Time report command.
//!
//! Resolves the requested date range, filters the stored entries by client
//! and project, and prints the entry table with per-client and per-project
//! breakdowns. Filtering and aggregation run in memory over the full entry
//! set; SQL only supplies chronological storage order.

use crate::{
    db::{clients::Clients, entries::Entries},
    libs::{
        aggregate::{aggregate, Summary},
        client::Client,
        entry::TimeEntry,
        filter::{filter_entries, ClientSelector, EntryQuery, ProjectSelector},
        formatter::format_minutes,
        messages::Message,
        range::{resolve, RangeToken},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

/// Filter arguments shared between `report` and `export`.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Restrict to one client id
    #[arg(short, long)]
    pub client: Option<i64>,
    /// Restrict to one project type label
    #[arg(short, long)]
    pub project: Option<String>,
    /// Date range to cover
    #[arg(short, long, value_enum, default_value_t = RangeToken::Week)]
    pub range: RangeToken,
    /// Range start date (YYYY-MM-DD), for --range custom
    #[arg(long)]
    pub from: Option<String>,
    /// Range end date (YYYY-MM-DD), for --range custom
    #[arg(long)]
    pub to: Option<String>,
}

impl FilterArgs {
    /// Resolves the range against today's date and builds the entry query.
    pub(crate) fn build_query(&self) -> Result<EntryQuery> {
        let custom = match (&self.from, &self.to) {
            (Some(from), Some(to)) => Some((super::parse_date(from)?, super::parse_date(to)?)),
            _ => None,
        };
        let (start, end) = resolve(self.range, Local::now().date_naive(), custom)?;

        let client = self.client.map(ClientSelector::Id).unwrap_or_default();
        let project = self.project.clone().map(ProjectSelector::Label).unwrap_or_default();
        Ok(EntryQuery::new(client, project, start, end))
    }
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    filter: FilterArgs,
}

pub async fn cmd(report_args: ReportArgs) -> Result<()> {
    let query = report_args.filter.build_query()?;
    let (entries, clients) = fetch_filtered(&query)?;

    if entries.is_empty() {
        msg_info!(Message::NoEntriesMatchFilter);
        return Ok(());
    }

    let summary = aggregate(&entries, &clients);
    print_report(&query, &entries, &clients, &summary)?;
    Ok(())
}

/// Loads all entries and clients, then applies the query in memory.
pub(crate) fn fetch_filtered(query: &EntryQuery) -> Result<(Vec<TimeEntry>, Vec<Client>)> {
    let entries = Entries::new()?.fetch_all()?;
    let clients = Clients::new()?.fetch_all()?;
    Ok((filter_entries(&entries, query), clients))
}

fn print_report(query: &EntryQuery, entries: &[TimeEntry], clients: &[Client], summary: &Summary) -> Result<()> {
    msg_print!(
        Message::ReportHeader {
            start: query.start.date().to_string(),
            end: query.end.date().to_string(),
        },
        true
    );
    View::entries(entries, clients)?;

    msg_print!(Message::ClientBreakdownHeader, true);
    View::client_breakdown(summary)?;

    msg_print!(Message::ProjectBreakdownHeader, true);
    View::project_breakdown(summary)?;

    msg_print!(
        Message::ReportTotal {
            entries: entries.len(),
            total: format_minutes(summary.total_minutes),
        },
        true
    );
    Ok(())
}
