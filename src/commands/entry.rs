//! Manual time entry command.
//!
//! Covers entries recorded after the fact, as opposed to the live timer.
//! The interactive form walks through client, project, date, start and end
//! times; start and end share the chosen calendar day.

use crate::{
    commands::{parse_date, parse_time},
    db::{clients::Clients, entries::Entries},
    libs::{
        client::Client,
        config::Config,
        entry::{TimeEntry, TimeEntryDraft},
        messages::Message,
        range::day_bounds,
        view::View,
    },
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct EntryArgs {
    #[command(subcommand)]
    command: Option<EntryCommand>,
}

#[derive(Debug, Subcommand)]
enum EntryCommand {
    /// Record a time entry
    Add,
    /// Edit an existing time entry
    Edit {
        /// Entry id to edit
        id: i64,
    },
    /// Delete a time entry
    Delete {
        /// Entry id to delete
        id: i64,
    },
    /// List time entries for a date
    List {
        /// Date to list (YYYY-MM-DD or "today")
        #[arg(default_value = "today")]
        date: String,
    },
}

pub async fn cmd(args: EntryArgs) -> Result<()> {
    match args.command {
        Some(EntryCommand::Add) | None => handle_add(),
        Some(EntryCommand::Edit { id }) => handle_edit(id),
        Some(EntryCommand::Delete { id }) => handle_delete(id),
        Some(EntryCommand::List { date }) => handle_list(&date),
    }
}

fn handle_add() -> Result<()> {
    let clients = Clients::new()?.fetch_all()?;
    if clients.is_empty() {
        msg_info!(Message::NoClientsFound);
        return Ok(());
    }

    let client = prompt_client(&clients, None)?;
    let project = prompt_project(client, None)?;
    let (start, end) = prompt_interval(None, None)?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let billable = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptBillable.to_string())
        .default(Config::read()?.billable_default())
        .interact()?;

    let draft = TimeEntryDraft::new(client.id, &project, start, end, billable).with_description(Some(description));
    let entry = Entries::new()?.insert(&draft)?;

    msg_success!(Message::EntryCreated(entry.duration_min));
    Ok(())
}

fn handle_edit(id: i64) -> Result<()> {
    let mut entries_db = Entries::new()?;
    let entry = match entries_db.get(id)? {
        Some(e) => e,
        None => {
            msg_error!(Message::EntryNotFound(id));
            return Ok(());
        }
    };

    let clients = Clients::new()?.fetch_all()?;
    if clients.is_empty() {
        msg_info!(Message::NoClientsFound);
        return Ok(());
    }

    let client = prompt_client(&clients, Some(entry.client_id))?;
    let project = prompt_project(client, Some(&entry.project))?;
    let (start, end) = prompt_interval(Some(entry.start), Some(entry.end))?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDescription.to_string())
        .default(entry.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let billable = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptBillable.to_string())
        .default(entry.billable)
        .interact()?;

    let updated = TimeEntry {
        id: entry.id,
        client_id: client.id,
        project,
        description: Some(description.trim().to_string()).filter(|d| !d.is_empty()),
        start,
        end,
        duration_min: entry.duration_min,
        billable,
    };
    match entries_db.update(&updated)? {
        Some(entry) => msg_success!(Message::EntryUpdated(entry.id)),
        None => msg_error!(Message::EntryNotFound(id)),
    }
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut entries_db = Entries::new()?;
    if entries_db.get(id)?.is_none() {
        msg_error!(Message::EntryNotFound(id));
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteEntry(id).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        entries_db.delete(id)?;
        msg_success!(Message::EntryDeleted(id));
    } else {
        msg_info!(Message::OperationCancelled);
    }
    Ok(())
}

fn handle_list(date: &str) -> Result<()> {
    let date = parse_date(date)?;
    let (start, end) = day_bounds(date);

    let entries: Vec<_> = Entries::new()?
        .fetch_all()?
        .into_iter()
        .filter(|e| start <= e.start && e.start <= end)
        .collect();

    if entries.is_empty() {
        msg_info!(Message::NoEntriesForDate(date.to_string()));
        return Ok(());
    }

    let clients = Clients::new()?.fetch_all()?;
    View::entries(&entries, &clients)?;
    Ok(())
}

fn prompt_client(clients: &[Client], default_id: Option<i64>) -> Result<&Client> {
    let default_index = default_id
        .and_then(|id| clients.iter().position(|c| c.id == id))
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectClient.to_string())
        .items(&clients.iter().map(|c| c.name.as_str()).collect::<Vec<_>>())
        .default(default_index)
        .interact()?;
    Ok(&clients[selection])
}

fn prompt_project(client: &Client, default_label: Option<&str>) -> Result<String> {
    let default_index = default_label
        .and_then(|label| client.projects.iter().position(|p| p == label))
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectProject.to_string())
        .items(&client.projects)
        .default(default_index)
        .interact()?;
    Ok(client.projects[selection].clone())
}

/// Prompts for the entry date and start/end times on that day.
fn prompt_interval(default_start: Option<NaiveDateTime>, default_end: Option<NaiveDateTime>) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let default_date = default_start
        .map(|s| s.date().to_string())
        .unwrap_or_else(|| Local::now().date_naive().to_string());
    let date_input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEntryDate.to_string())
        .default(default_date)
        .interact_text()?;
    let date = parse_date(&date_input)?;

    let start_input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptStartTime.to_string())
        .default(default_start.map(|s| s.format("%H:%M").to_string()).unwrap_or_default())
        .interact_text()?;
    let start = date.and_time(parse_time(&start_input)?);

    let end_input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEndTime.to_string())
        .default(default_end.map(|e| e.format("%H:%M").to_string()).unwrap_or_default())
        .interact_text()?;
    let end = date.and_time(parse_time(&end_input)?);

    Ok((start, end))
}
