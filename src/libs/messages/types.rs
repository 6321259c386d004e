#[derive(Debug, Clone)]
pub enum Message {
    // === CLIENT MESSAGES ===
    ClientCreated(String),
    ClientUpdated(String),
    ClientDeleted(String),
    ClientNotFound(i64),
    ClientNameRequired,
    ClientProjectsRequired,
    DuplicateProjectLabel(String),
    NoClientsFound,
    ConfirmDeleteClient(String),
    ClientsHeader,
    SelectClient,
    SelectClientKind,
    PromptClientName,
    PromptProjectLabel,
    PromptProjectsToKeep,
    PromptAddAnotherProject,

    // === TIME ENTRY MESSAGES ===
    EntryCreated(i64),   // duration minutes
    EntryUpdated(i64),   // entry id
    EntryDeleted(i64),   // entry id
    EntryNotFound(i64),  // entry id
    EndBeforeStart,
    NoEntriesForDate(String),
    ConfirmDeleteEntry(i64),
    InvalidDateFormat(String),
    InvalidTimeFormat(String),
    SelectProject,
    PromptDescription,
    PromptBillable,
    PromptEntryDate,
    PromptStartTime,
    PromptEndTime,

    // === TIMER MESSAGES ===
    TimerStarted { client: String, project: String },
    TimerAlreadyRunning(String),  // elapsed
    TimerStopped(String),         // formatted duration
    TimerNotRunning,
    TimerRequiresClient,
    TimerRequiresProject,
    TimerStatus { client: String, project: String, elapsed: String },
    TimerCancelled,
    LastEntryRecorded(String), // relative time

    // === REPORT MESSAGES ===
    ReportHeader { start: String, end: String },
    ReportTotal { entries: usize, total: String },
    NoEntriesMatchFilter,
    CustomRangeRequiresBounds,
    ClientBreakdownHeader,
    ProjectBreakdownHeader,

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // data description, format
    ExportCompleted(String),       // output path
    ExportNoData,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptSelectModules,
    ConfigModuleExport,
    ConfigModuleTimer,
    PromptExportDirectory,
    PromptBillableDefault,

    // === GENERAL MESSAGES ===
    UnknownClientPlaceholder,
    OperationCancelled,
}
