use crate::libs::aggregate::{percentage, Summary};
use crate::libs::client::Client;
use crate::libs::entry::TimeEntry;
use crate::libs::formatter::{format_clock, format_date, format_minutes};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn clients(clients: &[Client]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "TYPE", "PROJECT TYPES"]);
        for client in clients {
            table.add_row(row![client.id, client.name, client.kind, client.projects.join(", ")]);
        }
        table.printstd();

        Ok(())
    }

    pub fn entries(entries: &[TimeEntry], clients: &[Client]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "CLIENT", "PROJECT", "DESCRIPTION", "START", "END", "DURATION", "BILLABLE"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                format_date(&entry.start),
                crate::libs::aggregate::client_name(clients, entry.client_id),
                entry.project,
                entry.description.as_deref().unwrap_or("-"),
                format_clock(&entry.start),
                format_clock(&entry.end),
                format_minutes(entry.duration_min),
                if entry.billable { "Yes" } else { "No" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Client breakdown with hours and percentage of the filtered total.
    /// A zero total renders "-" instead of a division result.
    pub fn client_breakdown(summary: &Summary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["CLIENT", "HOURS", "PERCENT"]);
        for total in &summary.clients {
            table.add_row(row![
                total.name,
                format!("{:.1}", total.minutes as f64 / 60.0),
                Self::format_percent(percentage(total.minutes, summary.total_minutes)),
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn project_breakdown(summary: &Summary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PROJECT", "HOURS", "PERCENT"]);
        for total in &summary.projects {
            table.add_row(row![
                total.project,
                format!("{:.1}", total.minutes as f64 / 60.0),
                Self::format_percent(percentage(total.minutes, summary.total_minutes)),
            ]);
        }
        table.printstd();

        Ok(())
    }

    fn format_percent(value: Option<f64>) -> String {
        match value {
            Some(p) => format!("{:.1}%", p),
            None => "-".to_string(),
        }
    }
}
