//! # Lextrack - Legal Time Tracker
//!
//! A command-line utility for recording billable time against clients and
//! project types, and rendering summary reports.
//!
//! ## Features
//!
//! - **Client Management**: Business and individual clients with project-type labels
//! - **Time Entries**: Timer-driven or manual entries with derived durations
//! - **Reporting**: Date-range filtering with per-client and per-project breakdowns
//! - **Data Export**: Export filtered reports to CSV, JSON, and Excel formats
//! - **Timer Session**: A single persistent running timer across invocations
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lextrack::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
