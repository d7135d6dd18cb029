// ABOUTME: CLI argument parsing and command routing for project-wizard
//
// Provides command-line interface for:
// - Running the wizard (tui, default)
// - Printing the effective starting configuration (defaults)
// - Writing a starter config file (init-config)

pub mod config_cmd;
pub mod report;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use project_wizard::config::WizardConfig;

/// Interactive wizard for setting up a new project
#[derive(Parser, Debug)]
#[command(name = "project-wizard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Config file to use instead of ~/.project-wizard/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Starting project name
    #[arg(long, global = true)]
    pub project_name: Option<String>,

    /// Starting project type
    #[arg(long, global = true)]
    pub project_type: Option<String>,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the wizard (default if no command given)
    Tui,

    /// Print the configuration the wizard would start with
    Defaults,

    /// Write a config file with the default settings
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Load the config file and apply command-line overrides
    pub fn load_config(&self) -> anyhow::Result<WizardConfig> {
        let mut config = match &self.config {
            Some(path) => WizardConfig::load_from(path)?,
            None => WizardConfig::load()?,
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut WizardConfig) {
        if let Some(name) = &self.project_name {
            config.defaults.project_name.clone_from(name);
        }
        if let Some(ty) = &self.project_type {
            config.defaults.project_type.clone_from(ty);
        }
    }

    /// Where init-config writes
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => WizardConfig::config_path(),
        }
    }
}
