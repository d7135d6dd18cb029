// ABOUTME: Formats the wizard outcome for stdout once the TUI has closed

use super::OutputFormat;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use project_wizard::wizard::{ConfigurationData, DialogResult};

#[derive(Debug, Serialize)]
pub struct WizardReport<'a> {
    pub outcome: &'a DialogResult,
    pub finished_at: DateTime<Utc>,
}

/// Render a finished wizard's result
pub fn render(result: &DialogResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let report = WizardReport {
                outcome: result,
                finished_at: Utc::now(),
            };
            serde_json::to_string_pretty(&report).context("Failed to serialize wizard result")
        }
        OutputFormat::Text => Ok(match result {
            DialogResult::Confirmed(data) => render_configuration("Project configured", data),
            DialogResult::Cancelled => "Wizard cancelled".to_string(),
        }),
    }
}

/// Human-readable block for a configuration
pub fn render_configuration(heading: &str, data: &ConfigurationData) -> String {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };
    format!(
        "{heading}\n  Project name:   {}\n  Project type:   {}\n  Include tests:  {}\n  Initialize git: {}",
        data.project_name,
        data.project_type,
        yes_no(data.include_tests),
        yes_no(data.initialize_git),
    )
}
