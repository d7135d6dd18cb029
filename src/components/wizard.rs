// ABOUTME: Main wizard component
// Header with progress, the current step's body, and the Back / Next / Finish footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::state::{AppState, ConfigField};
use crate::wizard::{ConfigurationData, Step, WizardView};

// Color palette
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);

/// The wizard component
pub struct WizardComponent;

impl WizardComponent {
    pub fn new() -> Self {
        Self
    }

    /// Main render function
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let view = state.view();

        // Main layout: header, content, footer
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header with progress
                Constraint::Min(8),    // Step body
                Constraint::Length(4), // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0], state, &view);
        self.render_step_content(frame, layout[1], state, &view);
        self.render_navigation(frame, layout[2], state, &view);
    }

    /// Render the header with step title, description and progress
    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState, view: &WizardView) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Description
                Constraint::Length(1), // Progress
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("New Project", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(" · ", Style::default().fg(SUBDUED_BORDER)),
            Span::styled(view.title.clone(), Style::default().fg(SOFT_WHITE)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        let description = Paragraph::new(Span::styled(
            view.description.clone(),
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(description, header_layout[1]);

        if state.show_step_progress {
            self.render_progress(frame, header_layout[2], state, view);
        }
    }

    /// Render step progress dots
    fn render_progress(&self, frame: &mut Frame, area: Rect, state: &AppState, view: &WizardView) {
        let steps = state.wizard.sequence().steps();
        let mut spans = Vec::new();

        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < view.step_index {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == view.step_index {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                step.title(),
                if idx == view.step_index {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx < steps.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
    }

    /// Render the body of the current step
    fn render_step_content(&self, frame: &mut Frame, area: Rect, state: &AppState, view: &WizardView) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {} ", view.title))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = match state.wizard.sequence().current() {
            Step::Welcome => welcome_lines(),
            Step::Configuration(data) => configuration_lines(data, state),
            Step::Summary(snapshot) => summary_lines(snapshot.as_ref()),
        };

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Render the footer with Back / Next / Finish
    fn render_navigation(&self, frame: &mut Frame, area: Rect, state: &AppState, view: &WizardView) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let button = |key: &'static str, label: String, enabled: bool| {
            let (key_style, label_style) = if enabled {
                (Style::default().fg(GOLD), Style::default().fg(SOFT_WHITE))
            } else {
                (Style::default().fg(MUTED_GRAY), Style::default().fg(MUTED_GRAY))
            };
            vec![
                Span::styled("[", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(key, key_style),
                Span::styled("]", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(format!(" {label}"), label_style),
            ]
        };
        let separator = || Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER));

        let mut spans = button("Ctrl+P", "Back".to_string(), view.can_go_back);
        spans.push(separator());
        spans.extend(button(
            "Enter",
            view.next_button_label.to_string(),
            view.can_go_forward,
        ));
        spans.push(separator());
        spans.extend(button("Esc", "Cancel".to_string(), true));

        let mut lines = vec![Line::from(spans)];
        if let Some(hint) = &state.hint {
            lines.push(Line::from(Span::styled(
                hint.clone(),
                Style::default().fg(ERROR_RED),
            )));
        }

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}

impl Default for WizardComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn welcome_lines() -> Vec<Line<'static>> {
    let bullet = |text: &'static str| {
        Line::from(vec![
            Span::raw("  "),
            Span::styled("• ", Style::default().fg(GOLD)),
            Span::styled(text, Style::default().fg(SOFT_WHITE)),
        ])
    };

    vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to the new project wizard!",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This wizard will help you:",
            Style::default().fg(MUTED_GRAY),
        )),
        bullet("Name your project"),
        bullet("Pick a project type"),
        bullet("Choose whether to add tests and a git repository"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter or → to continue",
            Style::default().fg(MUTED_GRAY),
        )),
    ]
}

fn configuration_lines(data: &ConfigurationData, state: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    for &field in ConfigField::all() {
        let focused = field == state.focus;
        let marker = if focused {
            Span::styled("▶ ", Style::default().fg(GOLD))
        } else {
            Span::raw("  ")
        };
        let label = Span::styled(
            format!("{:<16}", field.label()),
            if focused {
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_GRAY)
            },
        );

        let mut spans = vec![marker, label];
        match field {
            ConfigField::ProjectName => {
                spans.extend(name_input_spans(&data.project_name, state.cursor_position, focused));
                if !data.can_advance() {
                    spans.push(Span::styled("  (required)", Style::default().fg(ERROR_RED)));
                }
            }
            ConfigField::ProjectType => {
                spans.push(Span::styled("◀ ", Style::default().fg(SUBDUED_BORDER)));
                spans.push(Span::styled(data.project_type.clone(), Style::default().fg(SOFT_WHITE)));
                spans.push(Span::styled(" ▶", Style::default().fg(SUBDUED_BORDER)));
            }
            ConfigField::IncludeTests => spans.push(checkbox(data.include_tests)),
            ConfigField::InitializeGit => spans.push(checkbox(data.initialize_git)),
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Tab/↑↓ move between fields · Space toggles · ←→ change type",
        Style::default().fg(MUTED_GRAY),
    )));
    lines
}

/// Project name with the character under the cursor highlighted
fn name_input_spans(name: &str, cursor: usize, focused: bool) -> Vec<Span<'static>> {
    let text_style = Style::default().fg(SOFT_WHITE);
    if !focused {
        return vec![Span::styled(name.to_string(), text_style)];
    }

    let before: String = name.chars().take(cursor).collect();
    let at: String = name.chars().nth(cursor).map_or_else(|| " ".to_string(), String::from);
    let after: String = name.chars().skip(cursor + 1).collect();

    vec![
        Span::styled(before, text_style),
        Span::styled(at, Style::default().fg(DARK_BG).bg(GOLD)),
        Span::styled(after, text_style),
    ]
}

fn checkbox(checked: bool) -> Span<'static> {
    if checked {
        Span::styled("[x]", Style::default().fg(SELECTION_GREEN))
    } else {
        Span::styled("[ ]", Style::default().fg(MUTED_GRAY))
    }
}

fn summary_lines(snapshot: Option<&ConfigurationData>) -> Vec<Line<'static>> {
    let Some(data) = snapshot else {
        return vec![Line::from(Span::styled(
            "Nothing to review yet",
            Style::default().fg(MUTED_GRAY),
        ))];
    };

    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(SELECTION_GREEN)),
            Span::styled(format!("{label:<16}"), Style::default().fg(SOFT_WHITE)),
            Span::styled(value, Style::default().fg(GOLD)),
        ])
    };
    let yes_no = |flag: bool| (if flag { "Yes" } else { "No" }).to_string();

    vec![
        Line::from(""),
        row("Project name", data.project_name.clone()),
        row("Project type", data.project_type.clone()),
        row("Include tests", yes_no(data.include_tests)),
        row("Initialize git", yes_no(data.initialize_git)),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to create the project",
            Style::default().fg(MUTED_GRAY),
        )),
    ]
}
