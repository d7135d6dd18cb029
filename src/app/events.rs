// ABOUTME: Event handling system for keyboard input and wizard actions

use crate::app::state::{AppState, ConfigField};
use crate::wizard::StepKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // Navigation
    Next,
    Back,
    Cancel,
    // Field focus on the configuration step
    FocusNextField,
    FocusPreviousField,
    // Project name editing
    InputChar(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    // Other fields
    ToggleField,
    NextProjectType,
    PreviousProjectType,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.is_finished() {
            return None;
        }

        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Char('c') if ctrl => return Some(AppEvent::Cancel),
            KeyCode::Char('n') if ctrl => return Some(AppEvent::Next),
            KeyCode::Char('p') if ctrl => return Some(AppEvent::Back),
            KeyCode::Esc => return Some(AppEvent::Cancel),
            KeyCode::Enter => return Some(AppEvent::Next),
            _ => {}
        }

        if state.current_kind() == StepKind::Configuration {
            return Self::handle_configuration_key(key_event, state.focus);
        }

        match key_event.code {
            KeyCode::Right | KeyCode::Char('l' | 'n') => Some(AppEvent::Next),
            KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h' | 'b') => Some(AppEvent::Back),
            KeyCode::Char('q') => Some(AppEvent::Cancel),
            _ => None,
        }
    }

    fn handle_configuration_key(key_event: KeyEvent, focus: ConfigField) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Tab | KeyCode::Down => return Some(AppEvent::FocusNextField),
            KeyCode::BackTab | KeyCode::Up => return Some(AppEvent::FocusPreviousField),
            _ => {}
        }

        match focus {
            ConfigField::ProjectName => match key_event.code {
                KeyCode::Char(c)
                    if !key_event
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Some(AppEvent::InputChar(c))
                }
                KeyCode::Backspace => Some(AppEvent::Backspace),
                KeyCode::Delete => Some(AppEvent::Delete),
                KeyCode::Left => Some(AppEvent::CursorLeft),
                KeyCode::Right => Some(AppEvent::CursorRight),
                KeyCode::Home => Some(AppEvent::CursorHome),
                KeyCode::End => Some(AppEvent::CursorEnd),
                _ => None,
            },
            ConfigField::ProjectType => match key_event.code {
                KeyCode::Right | KeyCode::Char(' ') => Some(AppEvent::NextProjectType),
                KeyCode::Left => Some(AppEvent::PreviousProjectType),
                _ => None,
            },
            ConfigField::IncludeTests | ConfigField::InitializeGit => match key_event.code {
                KeyCode::Char(' ') => Some(AppEvent::ToggleField),
                KeyCode::Left => Some(AppEvent::Back),
                KeyCode::Right => Some(AppEvent::Next),
                _ => None,
            },
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Next => state.go_forward(),
            AppEvent::Back => state.go_back(),
            AppEvent::Cancel => {
                info!("Cancel requested");
                state.cancel();
            }
            AppEvent::FocusNextField => state.focus_next(),
            AppEvent::FocusPreviousField => state.focus_previous(),
            AppEvent::InputChar(c) => state.input_char(c),
            AppEvent::Backspace => state.backspace(),
            AppEvent::Delete => state.delete(),
            AppEvent::CursorLeft => state.cursor_left(),
            AppEvent::CursorRight => state.cursor_right(),
            AppEvent::CursorHome => state.cursor_home(),
            AppEvent::CursorEnd => state.cursor_end(),
            AppEvent::ToggleField => state.toggle_focused(),
            AppEvent::NextProjectType => state.cycle_project_type(true),
            AppEvent::PreviousProjectType => state.cycle_project_type(false),
        }
    }
}
