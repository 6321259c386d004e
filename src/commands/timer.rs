//! Live timer command.
//!
//! The timer is a single persisted session: at most one can run at a time,
//! and it survives process restarts because every transition is written
//! straight back to the session store. Stopping converts the session into a
//! regular time entry with the duration derived from the wall-clock
//! start and stop instants.

use crate::{
    db::{clients::Clients, entries::Entries, sessions::Sessions},
    libs::{
        aggregate::client_name,
        config::Config,
        formatter::{format_elapsed, format_minutes, format_relative},
        messages::Message,
        timer::{SessionState, StartOutcome},
    },
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TimerArgs {
    #[command(subcommand)]
    command: Option<TimerCommand>,
}

#[derive(Debug, Subcommand)]
enum TimerCommand {
    /// Start the timer
    Start {
        /// Client id; defaults to the last used client
        #[arg(short, long)]
        client: Option<i64>,
        /// Project type label; defaults to the last used project
        #[arg(short, long)]
        project: Option<String>,
        /// Entry description
        #[arg(short, long)]
        description: Option<String>,
        /// Override the configured billable default
        #[arg(short, long)]
        billable: Option<bool>,
    },
    /// Stop the timer and record a time entry
    Stop,
    /// Show the running timer
    Status,
    /// Discard the running timer without recording an entry
    Cancel,
}

pub async fn cmd(args: TimerArgs) -> Result<()> {
    match args.command {
        Some(TimerCommand::Start {
            client,
            project,
            description,
            billable,
        }) => handle_start(client, project, description, billable),
        Some(TimerCommand::Stop) => handle_stop(),
        Some(TimerCommand::Status) | None => handle_status(),
        Some(TimerCommand::Cancel) => handle_cancel(),
    }
}

fn handle_start(client: Option<i64>, project: Option<String>, description: Option<String>, billable: Option<bool>) -> Result<()> {
    let mut sessions = Sessions::new()?;
    let mut session = sessions.load()?;
    let now = Local::now().naive_local();
    let billable = match billable {
        Some(value) => value,
        None => Config::read()?.billable_default(),
    };

    match session.start(now, client, project, description, billable)? {
        StartOutcome::AlreadyRunning => {
            let elapsed = session.elapsed(now).map(|d| format_elapsed(d.num_seconds())).unwrap_or_default();
            msg_warning!(Message::TimerAlreadyRunning(elapsed));
        }
        StartOutcome::Started => {
            sessions.store(&session)?;
            if let SessionState::Running { client_id, project, .. } = &session.state {
                let clients = Clients::new()?.fetch_all()?;
                msg_success!(Message::TimerStarted {
                    client: client_name(&clients, *client_id),
                    project: project.clone(),
                });
            }
        }
    }
    Ok(())
}

fn handle_stop() -> Result<()> {
    let mut sessions = Sessions::new()?;
    let mut session = sessions.load()?;
    let now = Local::now().naive_local();

    match session.stop(now) {
        None => msg_info!(Message::TimerNotRunning),
        Some(draft) => {
            let entry = Entries::new()?.insert(&draft)?;
            sessions.store(&session)?;
            msg_success!(Message::TimerStopped(format_minutes(entry.duration_min)));
        }
    }
    Ok(())
}

fn handle_status() -> Result<()> {
    let session = Sessions::new()?.load()?;
    let now = Local::now().naive_local();

    match &session.state {
        SessionState::Idle => {
            msg_info!(Message::TimerNotRunning);
            if let Some(last) = Entries::new()?.fetch_all()?.last() {
                msg_info!(Message::LastEntryRecorded(format_relative(&last.end, &now)));
            }
        }
        SessionState::Running { client_id, project, .. } => {
            let clients = Clients::new()?.fetch_all()?;
            let elapsed = session.elapsed(now).map(|d| format_elapsed(d.num_seconds())).unwrap_or_default();
            msg_info!(Message::TimerStatus {
                client: client_name(&clients, *client_id),
                project: project.clone(),
                elapsed,
            });
        }
    }
    Ok(())
}

fn handle_cancel() -> Result<()> {
    let mut sessions = Sessions::new()?;
    let mut session = sessions.load()?;

    if session.cancel() {
        sessions.store(&session)?;
        msg_success!(Message::TimerCancelled);
    } else {
        msg_info!(Message::TimerNotRunning);
    }
    Ok(())
}
