// ABOUTME: Wizard step variants and the project configuration record they carry
// Titles, descriptions and the advance rule for each page live here

use serde::{Deserialize, Serialize};

/// Project settings edited on the configuration page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationData {
    pub project_name: String,
    pub project_type: String,
    pub include_tests: bool,
    pub initialize_git: bool,
}

impl Default for ConfigurationData {
    fn default() -> Self {
        Self {
            project_name: "MyNewProject".to_string(),
            project_type: "Console Application".to_string(),
            include_tests: true,
            initialize_git: true,
        }
    }
}

impl ConfigurationData {
    /// Set the project name. Returns true if the value changed.
    pub fn set_project_name(&mut self, value: impl Into<String>) -> bool {
        set_if_changed(&mut self.project_name, value.into())
    }

    /// Set the project type. Returns true if the value changed.
    pub fn set_project_type(&mut self, value: impl Into<String>) -> bool {
        set_if_changed(&mut self.project_type, value.into())
    }

    /// Set the include-tests flag. Returns true if the value changed.
    pub fn set_include_tests(&mut self, value: bool) -> bool {
        set_if_changed(&mut self.include_tests, value)
    }

    /// Set the initialize-git flag. Returns true if the value changed.
    pub fn set_initialize_git(&mut self, value: bool) -> bool {
        set_if_changed(&mut self.initialize_git, value)
    }

    /// The only domain rule: a project needs a name that isn't just whitespace
    pub fn can_advance(&self) -> bool {
        !self.project_name.trim().is_empty()
    }
}

fn set_if_changed<T: PartialEq>(field: &mut T, value: T) -> bool {
    if *field == value {
        return false;
    }
    *field = value;
    true
}

/// Discriminant of a [`Step`], handy for matching without borrowing data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Welcome,
    Configuration,
    Summary,
}

/// One page of the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Introductory page, always passable
    Welcome,
    /// Editable project settings
    Configuration(ConfigurationData),
    /// Read-only copy of the settings, taken when the page is entered
    Summary(Option<ConfigurationData>),
}

impl Step {
    /// Configuration page seeded with the given settings
    pub fn configuration(data: ConfigurationData) -> Self {
        Self::Configuration(data)
    }

    /// Summary page with no snapshot yet
    pub fn summary() -> Self {
        Self::Summary(None)
    }

    pub fn kind(&self) -> StepKind {
        match self {
            Self::Welcome => StepKind::Welcome,
            Self::Configuration(_) => StepKind::Configuration,
            Self::Summary(_) => StepKind::Summary,
        }
    }

    /// Get display title for this step
    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Configuration(_) => "Configuration",
            Self::Summary(_) => "Summary",
        }
    }

    /// Get description for this step given its 0-based position
    pub fn description(&self, index: usize, total: usize) -> String {
        let position = format!("Step {} of {}", index + 1, total);
        match self {
            Self::Welcome => position,
            Self::Configuration(_) => format!("{position} - Configure your project"),
            Self::Summary(_) => format!("{position} - Review your configuration"),
        }
    }

    /// Can we go past this step?
    pub fn can_advance(&self) -> bool {
        match self {
            Self::Configuration(data) => data.can_advance(),
            Self::Welcome | Self::Summary(_) => true,
        }
    }

    /// Settings held by a configuration page
    pub fn configuration_data(&self) -> Option<&ConfigurationData> {
        match self {
            Self::Configuration(data) => Some(data),
            _ => None,
        }
    }

    /// Snapshot held by a summary page, once one has been taken
    pub fn snapshot(&self) -> Option<&ConfigurationData> {
        match self {
            Self::Summary(snapshot) => snapshot.as_ref(),
            _ => None,
        }
    }

    /// Replace the summary snapshot with a copy of `data`. No-op on other pages.
    pub(crate) fn take_snapshot(&mut self, data: &ConfigurationData) {
        if let Self::Summary(snapshot) = self {
            *snapshot = Some(data.clone());
        }
    }
}
