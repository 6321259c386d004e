//! Display implementation for lextrack application messages.
//!
//! Converts structured `Message` values into the human-readable text shown in
//! the terminal. All user-facing strings live here so wording stays in one
//! place and message parameters are type-checked at the call site.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CLIENT MESSAGES ===
            Message::ClientCreated(name) => format!("Client '{}' created", name),
            Message::ClientUpdated(name) => format!("Client '{}' updated", name),
            Message::ClientDeleted(name) => format!("Client '{}' and all of its time entries deleted", name),
            Message::ClientNotFound(id) => format!("Client with id {} not found", id),
            Message::ClientNameRequired => "Client name is required".to_string(),
            Message::ClientProjectsRequired => "At least one project type is required".to_string(),
            Message::DuplicateProjectLabel(label) => format!("Project type '{}' already exists for this client", label),
            Message::NoClientsFound => "No clients yet. Add your first client to start tracking time".to_string(),
            Message::ConfirmDeleteClient(name) => {
                format!("Delete client '{}'? All time entries for this client will also be deleted", name)
            }
            Message::ClientsHeader => "Clients".to_string(),
            Message::SelectClient => "Select client".to_string(),
            Message::SelectClientKind => "Client type".to_string(),
            Message::PromptClientName => "Client name".to_string(),
            Message::PromptProjectLabel => "Project type".to_string(),
            Message::PromptProjectsToKeep => "Project types to keep".to_string(),
            Message::PromptAddAnotherProject => "Add another project type?".to_string(),

            // === TIME ENTRY MESSAGES ===
            Message::EntryCreated(minutes) => format!("Time entry saved ({} min)", minutes),
            Message::EntryUpdated(id) => format!("Time entry {} updated", id),
            Message::EntryDeleted(id) => format!("Time entry {} deleted", id),
            Message::EntryNotFound(id) => format!("Time entry with id {} not found", id),
            Message::EndBeforeStart => "End time must be after start time".to_string(),
            Message::NoEntriesForDate(date) => format!("No time entries for {}", date),
            Message::ConfirmDeleteEntry(id) => format!("Delete time entry {}?", id),
            Message::InvalidDateFormat(input) => format!("Invalid date '{}', expected YYYY-MM-DD", input),
            Message::InvalidTimeFormat(input) => format!("Invalid time '{}', expected HH:MM", input),
            Message::SelectProject => "Select project type".to_string(),
            Message::PromptDescription => "Description (optional)".to_string(),
            Message::PromptBillable => "Billable?".to_string(),
            Message::PromptEntryDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptStartTime => "Start time (HH:MM)".to_string(),
            Message::PromptEndTime => "End time (HH:MM)".to_string(),

            // === TIMER MESSAGES ===
            Message::TimerStarted { client, project } => format!("Timer started for {} / {}", client, project),
            Message::TimerAlreadyRunning(elapsed) => format!("Timer is already running ({} elapsed)", elapsed),
            Message::TimerStopped(duration) => format!("Timer stopped, {} recorded", duration),
            Message::TimerNotRunning => "No timer is running".to_string(),
            Message::TimerRequiresClient => "Select a client before starting the timer".to_string(),
            Message::TimerRequiresProject => "Select a project before starting the timer".to_string(),
            Message::TimerStatus { client, project, elapsed } => {
                format!("Timer running for {} / {} ({} elapsed)", client, project, elapsed)
            }
            Message::TimerCancelled => "Timer cancelled, no entry recorded".to_string(),
            Message::LastEntryRecorded(relative) => format!("Last entry recorded {}", relative),

            // === REPORT MESSAGES ===
            Message::ReportHeader { start, end } => format!("Time report {} - {}", start, end),
            Message::ReportTotal { entries, total } => format!("{} time entries, {} total", entries, total),
            Message::NoEntriesMatchFilter => "No time entries found for the selected filters".to_string(),
            Message::CustomRangeRequiresBounds => "Custom range requires --from and --to dates".to_string(),
            Message::ClientBreakdownHeader => "Client breakdown".to_string(),
            Message::ProjectBreakdownHeader => "Project breakdown".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(data, format) => format!("Exporting {} as {}...", data, format),
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
            Message::ExportNoData => "No data to export".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptSelectModules => "Select configuration modules".to_string(),
            Message::ConfigModuleExport => "Export settings".to_string(),
            Message::ConfigModuleTimer => "Timer settings".to_string(),
            Message::PromptExportDirectory => "Default export directory".to_string(),
            Message::PromptBillableDefault => "Mark new entries billable by default?".to_string(),

            // === GENERAL MESSAGES ===
            Message::UnknownClientPlaceholder => "Unknown Client".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
