//! Client management command.
//!
//! Clients own the project-type labels that time entries are recorded
//! against, so every other command starts here. Subcommands cover the
//! full CRUD cycle; deleting a client cascades to its time entries after
//! an explicit confirmation.

use crate::{
    db::clients::Clients,
    libs::{
        client::{Client, ClientDraft, ClientKind},
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

#[derive(Debug, Args)]
pub struct ClientArgs {
    #[command(subcommand)]
    command: Option<ClientCommand>,
}

#[derive(Debug, Subcommand)]
enum ClientCommand {
    /// Add a new client
    Add,
    /// Edit an existing client
    Edit {
        /// Client id to edit
        id: i64,
    },
    /// Delete a client and all of its time entries
    Delete {
        /// Client id to delete
        id: i64,
    },
    /// List all clients
    List,
}

pub async fn cmd(args: ClientArgs) -> Result<()> {
    match args.command {
        Some(ClientCommand::Add) => handle_add(),
        Some(ClientCommand::Edit { id }) => handle_edit(id),
        Some(ClientCommand::Delete { id }) => handle_delete(id),
        Some(ClientCommand::List) | None => handle_list(),
    }
}

fn handle_add() -> Result<()> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptClientName.to_string())
        .interact_text()?;

    let kind = prompt_kind(ClientKind::Business)?;
    let projects = prompt_projects(Vec::new())?;

    let draft = ClientDraft::new(&name, kind, projects);
    let client = Clients::new()?.insert(&draft)?;

    msg_success!(Message::ClientCreated(client.name));
    Ok(())
}

fn handle_edit(id: i64) -> Result<()> {
    let mut clients_db = Clients::new()?;
    let client = match clients_db.get(id)? {
        Some(c) => c,
        None => {
            msg_error!(Message::ClientNotFound(id));
            return Ok(());
        }
    };

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptClientName.to_string())
        .default(client.name.clone())
        .interact_text()?;

    let kind = prompt_kind(client.kind)?;
    let kept = prompt_projects_to_keep(&client.projects)?;
    let projects = prompt_projects(kept)?;

    let updated = Client {
        id: client.id,
        name: name.trim().to_string(),
        kind,
        projects,
    };
    match clients_db.update(&updated)? {
        Some(client) => msg_success!(Message::ClientUpdated(client.name)),
        None => msg_error!(Message::ClientNotFound(id)),
    }
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut clients_db = Clients::new()?;
    let client = match clients_db.get(id)? {
        Some(c) => c,
        None => {
            msg_error!(Message::ClientNotFound(id));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteClient(client.name.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        clients_db.delete(id)?;
        msg_success!(Message::ClientDeleted(client.name));
    } else {
        msg_info!(Message::OperationCancelled);
    }
    Ok(())
}

fn handle_list() -> Result<()> {
    let clients = Clients::new()?.fetch_all()?;

    if clients.is_empty() {
        msg_info!(Message::NoClientsFound);
        return Ok(());
    }

    msg_print!(Message::ClientsHeader, true);
    View::clients(&clients)?;
    Ok(())
}

fn prompt_kind(default: ClientKind) -> Result<ClientKind> {
    let kinds = [ClientKind::Business, ClientKind::Individual];
    let default_index = kinds.iter().position(|k| *k == default).unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectClientKind.to_string())
        .items(&kinds.iter().map(|k| k.to_string()).collect::<Vec<_>>())
        .default(default_index)
        .interact()?;
    Ok(kinds[selection])
}

/// Lets the user deselect labels to drop from an existing client. All
/// current labels start checked; when every label is deselected the add
/// prompt that follows requires at least one new one.
fn prompt_projects_to_keep(projects: &[String]) -> Result<Vec<String>> {
    if projects.is_empty() {
        return Ok(Vec::new());
    }

    let defaults = vec![true; projects.len()];
    let selected = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptProjectsToKeep.to_string())
        .items(projects)
        .defaults(&defaults)
        .interact()?;

    Ok(selected.into_iter().map(|i| projects[i].clone()).collect())
}

/// Collects project-type labels one by one. Duplicates are rejected at
/// entry time with a warning so the final set always validates.
fn prompt_projects(mut projects: Vec<String>) -> Result<Vec<String>> {
    loop {
        let label: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptProjectLabel.to_string())
            .allow_empty(!projects.is_empty())
            .interact_text()?;

        let label = label.trim().to_string();
        if !label.is_empty() {
            if projects.contains(&label) {
                msg_warning!(Message::DuplicateProjectLabel(label));
            } else {
                projects.push(label);
            }
        }

        let another = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAddAnotherProject.to_string())
            .default(false)
            .interact()?;
        if !another {
            break;
        }
    }
    Ok(projects)
}
