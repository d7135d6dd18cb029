// ABOUTME: Application state for the wizard TUI
// Owns the wizard, field focus, text cursor and the inline validation hint

use tracing::debug;

use crate::config::WizardConfig;
use crate::wizard::{
    DialogResult, Outcome, ResultSlot, StepKind, StepSequence, Wizard, WizardView,
};

/// Hint shown when forward navigation is refused on the configuration step
pub const EMPTY_NAME_HINT: &str = "Project name cannot be empty";

/// Editable fields on the configuration step, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    ProjectName,
    ProjectType,
    IncludeTests,
    InitializeGit,
}

impl ConfigField {
    pub fn all() -> &'static [ConfigField] {
        &[
            Self::ProjectName,
            Self::ProjectType,
            Self::IncludeTests,
            Self::InitializeGit,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ProjectName => "Project name",
            Self::ProjectType => "Project type",
            Self::IncludeTests => "Include tests",
            Self::InitializeGit => "Initialize git",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::ProjectName => Self::ProjectType,
            Self::ProjectType => Self::IncludeTests,
            Self::IncludeTests => Self::InitializeGit,
            Self::InitializeGit => Self::ProjectName,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::ProjectName => Self::InitializeGit,
            Self::ProjectType => Self::ProjectName,
            Self::IncludeTests => Self::ProjectType,
            Self::InitializeGit => Self::IncludeTests,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub wizard: Wizard<ResultSlot>,
    /// Focused field on the configuration step
    pub focus: ConfigField,
    /// Cursor position in the project name, in characters
    pub cursor_position: usize,
    /// Project types the selector cycles through
    pub project_types: Vec<String>,
    /// Inline message under the navigation buttons
    pub hint: Option<String>,
    /// Whether to show progress dots in the header
    pub show_step_progress: bool,
    /// View as of the last action, for change tracking
    last_view: WizardView,
}

impl AppState {
    pub fn new(config: &WizardConfig) -> Self {
        let sequence = StepSequence::standard(config.defaults.clone());
        let wizard = Wizard::with_result_slot(sequence);
        let last_view = wizard.view();
        Self {
            cursor_position: config.defaults.project_name.chars().count(),
            wizard,
            focus: ConfigField::ProjectName,
            project_types: config.selectable_project_types(),
            hint: None,
            show_step_progress: config.ui.show_step_progress,
            last_view,
        }
    }

    pub fn view(&self) -> WizardView {
        self.wizard.view()
    }

    pub fn current_kind(&self) -> StepKind {
        self.wizard.sequence().current().kind()
    }

    pub fn is_finished(&self) -> bool {
        self.wizard.is_closed()
    }

    pub fn result(&self) -> Option<&DialogResult> {
        self.wizard.result()
    }

    pub fn take_result(&mut self) -> Option<DialogResult> {
        self.wizard.host_mut().take()
    }

    pub fn go_forward(&mut self) {
        let outcome = self.wizard.go_forward();
        self.hint = match outcome {
            Outcome::Blocked if self.current_kind() == StepKind::Configuration => {
                Some(EMPTY_NAME_HINT.to_string())
            }
            _ => None,
        };
        if outcome == Outcome::Advanced && self.current_kind() == StepKind::Configuration {
            self.focus = ConfigField::ProjectName;
            self.cursor_end();
        }
        self.refresh();
    }

    pub fn go_back(&mut self) {
        if self.wizard.go_back() {
            self.hint = None;
            if self.current_kind() == StepKind::Configuration {
                self.cursor_end();
            }
        }
        self.refresh();
    }

    pub fn cancel(&mut self) {
        self.wizard.cancel();
        self.refresh();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Current project name, empty when no configuration exists
    pub fn project_name(&self) -> &str {
        self.wizard
            .sequence()
            .configuration()
            .map_or("", |d| d.project_name.as_str())
    }

    /// Handle text input character
    pub fn input_char(&mut self, c: char) {
        if self.focus != ConfigField::ProjectName {
            return;
        }
        let mut name = self.project_name().to_string();
        let at = byte_offset(&name, self.cursor_position);
        name.insert(at, c);
        if self.wizard.edit(|d| d.set_project_name(name)).is_some() {
            self.cursor_position += 1;
            self.hint = None;
        }
        self.refresh();
    }

    /// Handle backspace
    pub fn backspace(&mut self) {
        if self.focus != ConfigField::ProjectName || self.cursor_position == 0 {
            return;
        }
        let mut name = self.project_name().to_string();
        let at = byte_offset(&name, self.cursor_position - 1);
        name.remove(at);
        if self.wizard.edit(|d| d.set_project_name(name)).is_some() {
            self.cursor_position -= 1;
        }
        self.refresh();
    }

    /// Handle delete key
    pub fn delete(&mut self) {
        if self.focus != ConfigField::ProjectName
            || self.cursor_position >= self.project_name().chars().count()
        {
            return;
        }
        let mut name = self.project_name().to_string();
        let at = byte_offset(&name, self.cursor_position);
        name.remove(at);
        self.wizard.edit(|d| d.set_project_name(name));
        self.refresh();
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        if self.cursor_position < self.project_name().chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Move cursor to start
    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    /// Move cursor to end
    pub fn cursor_end(&mut self) {
        self.cursor_position = self.project_name().chars().count();
    }

    /// Flip the focused boolean field
    pub fn toggle_focused(&mut self) {
        let focus = self.focus;
        self.wizard.edit(|d| match focus {
            ConfigField::IncludeTests => d.set_include_tests(!d.include_tests),
            ConfigField::InitializeGit => d.set_initialize_git(!d.initialize_git),
            ConfigField::ProjectName | ConfigField::ProjectType => false,
        });
        self.refresh();
    }

    /// Select the next (or previous) project type, wrapping around
    pub fn cycle_project_type(&mut self, forward: bool) {
        if self.project_types.is_empty() {
            return;
        }
        let len = self.project_types.len();
        let current = self
            .wizard
            .sequence()
            .configuration()
            .and_then(|d| self.project_types.iter().position(|t| *t == d.project_type));
        let index = match (current, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, _) => 0,
        };
        let selected = self.project_types[index].clone();
        self.wizard.edit(|d| d.set_project_type(selected));
        self.refresh();
    }

    /// Recompute the derived view and log what changed since the last action
    fn refresh(&mut self) {
        let view = self.wizard.view();
        let changed = self.last_view.changed_properties(&view);
        if !changed.is_empty() {
            debug!(?changed, step = %view.title, "Wizard view changed");
        }
        self.last_view = view;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&WizardConfig::default())
    }
}

/// Byte index of the `chars`-th character, or the end of the string
fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: &WizardConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}
