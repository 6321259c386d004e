//! Application configuration stored as JSON in the data directory.
//!
//! Configuration is optional; a missing file yields defaults so the
//! application runs without any setup. `init` drives the interactive
//! setup wizard used by the `init` command.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::File;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Metadata for one selectable configuration module in the setup wizard.
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory that exports default into when no output path is given.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Whether new entries are marked billable when nothing is specified.
    pub billable_by_default: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { billable_by_default: true }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<TimerConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        // Missing file means default configuration; no setup is required.
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    pub fn billable_default(&self) -> bool {
        self.timer.as_ref().map(|t| t.billable_by_default).unwrap_or(true)
    }

    pub fn export_directory(&self) -> Option<PathBuf> {
        self.export.as_ref().and_then(|e| e.directory.clone())
    }

    /// Interactive setup wizard. Existing values are used as prompt defaults
    /// so re-running only changes what the user touches.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "export".to_string(),
                name: Message::ConfigModuleExport.to_string(),
            },
            ConfigModule {
                key: "timer".to_string(),
                name: Message::ConfigModuleTimer.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "export" => {
                    msg_print!(Message::ConfigModuleExport);
                    let default_dir = config
                        .export_directory()
                        .map(|d| d.display().to_string())
                        .unwrap_or_default();
                    let directory: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptExportDirectory.to_string())
                        .default(default_dir)
                        .allow_empty(true)
                        .interact_text()?;
                    config.export = Some(ExportConfig {
                        directory: if directory.trim().is_empty() {
                            None
                        } else {
                            Some(PathBuf::from(directory.trim()))
                        },
                    });
                }
                "timer" => {
                    msg_print!(Message::ConfigModuleTimer);
                    let default = config.timer.clone().unwrap_or_default();
                    config.timer = Some(TimerConfig {
                        billable_by_default: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptBillableDefault.to_string())
                            .default(default.billable_by_default)
                            .interact()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
