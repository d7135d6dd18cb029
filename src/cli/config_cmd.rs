// ABOUTME: CLI commands that inspect or write the wizard config without opening the TUI

use super::{Cli, OutputFormat};
use anyhow::{bail, Result};
use tracing::info;

use project_wizard::config::WizardConfig;

/// Print the configuration the wizard would start with
pub fn defaults(cli: &Cli) -> Result<()> {
    let config = cli.load_config()?;
    println!("{}", render_defaults(&config, cli.format)?);
    Ok(())
}

fn render_defaults(config: &WizardConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Text => {
            let mut out = super::report::render_configuration("Starting configuration", &config.defaults);
            out.push_str("\n  Project types:  ");
            out.push_str(&config.selectable_project_types().join(", "));
            Ok(out)
        }
    }
}

/// Write the default config to disk
pub fn init_config(cli: &Cli, force: bool) -> Result<()> {
    let path = cli.config_path()?;
    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    WizardConfig::default().save_to(&path)?;
    info!("Wrote default config to {}", path.display());
    println!("✅ Wrote default config to {}", path.display());
    Ok(())
}
