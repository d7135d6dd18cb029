// ABOUTME: Configuration management for project-wizard
// Initial wizard values, selectable project types and UI preferences, stored as TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::wizard::ConfigurationData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Application version that wrote this file
    #[serde(default = "default_version")]
    pub version: String,

    /// Project types offered on the configuration step, in display order
    #[serde(default = "default_project_types")]
    pub project_types: Vec<String>,

    /// Values the configuration step starts with
    #[serde(default)]
    pub defaults: ConfigurationData,

    /// UI preferences
    #[serde(default)]
    pub ui: UiPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Whether to show the step progress dots in the header
    #[serde(default = "default_true")]
    pub show_step_progress: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            show_step_progress: default_true(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_true() -> bool {
    true
}

fn default_project_types() -> Vec<String> {
    [
        "Console Application",
        "Class Library",
        "Web Application",
        "Desktop Application",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            defaults: ConfigurationData::default(),
            project_types: default_project_types(),
            ui: UiPreferences::default(),
        }
    }
}

impl WizardConfig {
    /// Get the base project-wizard directory
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".project-wizard"))
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults when it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// Project types for the selector. The default type is always included
    /// and blank or duplicate entries are dropped.
    pub fn selectable_project_types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for ty in &self.project_types {
            let ty = ty.trim();
            if !ty.is_empty() && !types.iter().any(|t| t == ty) {
                types.push(ty.to_string());
            }
        }

        let default = self.defaults.project_type.trim();
        if !default.is_empty() && !types.iter().any(|t| t == default) {
            types.push(default.to_string());
        }

        if types.is_empty() {
            types = default_project_types();
        }
        types
    }
}
