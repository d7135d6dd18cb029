// ABOUTME: Main entry point for project-wizard with TUI and CLI support
//
// Binary: project-wizard
// Usage: project-wizard [COMMAND]
// - No command: runs the wizard in the terminal
// - defaults: print the starting configuration
// - init-config: write a default config file
//
// Exit status is 0 when the wizard is confirmed, 1 when it is cancelled and 2 on error.
// The screen is drawn on stderr; stdout only carries the printed result.

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*};
use std::{
    io::{self, IsTerminal},
    process::ExitCode,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

mod cli;
mod logging;

use project_wizard::app::{App, EventHandler};
use project_wizard::components::WizardComponent;
use project_wizard::config::WizardConfig;
use project_wizard::wizard::DialogResult;

/// Set while raw mode and the alternate screen are active on stderr
static TERMINAL_ENTERED: AtomicBool = AtomicBool::new(false);

/// Restore the terminal if the TUI entered it. Stdout is never touched.
fn cleanup_terminal() {
    if !TERMINAL_ENTERED.swap(false, Ordering::SeqCst) {
        return;
    }
    let _ = disable_raw_mode();
    let _ = execute!(io::stderr(), LeaveAlternateScreen);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    TERMINAL_ENTERED.store(false, Ordering::SeqCst);
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    // Only interactive runs get a log file; the print commands stay side-effect free
    if matches!(args.command, Some(cli::Commands::Tui) | None) {
        logging::setup_logging();
    }
    setup_panic_handler();

    let result = match &args.command {
        Some(cli::Commands::Defaults) => cli::config_cmd::defaults(&args).map(|()| ExitCode::SUCCESS),
        Some(cli::Commands::InitConfig { force }) => {
            cli::config_cmd::init_config(&args, *force).map(|()| ExitCode::SUCCESS)
        }
        Some(cli::Commands::Tui) | None => run_wizard(&args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run_wizard(args: &cli::Cli) -> Result<ExitCode> {
    // The TUI draws on stderr so stdout can carry the report into a pipe
    if !io::stderr().is_terminal() {
        return Err(anyhow::anyhow!(
            "No TTY detected on stderr. The wizard draws its screen there.\n\
             Redirect stdout only, e.g. `project-wizard --format json > result.json`."
        ));
    }

    let config: WizardConfig = args.load_config()?;
    let mut app = App::new(&config);
    let component = WizardComponent::new();

    tracing::info!(
        project_name = %config.defaults.project_name,
        "Starting wizard"
    );

    // Flush any pending terminal events so stray keypresses don't navigate
    while event::poll(Duration::from_millis(10)).unwrap_or(false) {
        let _ = event::read();
    }

    run_tui(&mut app, &component)?;

    let outcome = app.state.take_result().unwrap_or(DialogResult::Cancelled);
    println!("{}", cli::report::render(&outcome, args.format)?);

    Ok(match outcome {
        DialogResult::Confirmed(_) => ExitCode::SUCCESS,
        DialogResult::Cancelled => ExitCode::FAILURE,
    })
}

fn run_tui(app: &mut App, component: &WizardComponent) -> Result<()> {
    enable_raw_mode()?;
    TERMINAL_ENTERED.store(true, Ordering::SeqCst);
    let mut stderr = io::stderr();
    if let Err(e) = execute!(stderr, EnterAlternateScreen) {
        cleanup_terminal();
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            cleanup_terminal();
            return Err(e.into());
        }
    };

    // Ensure terminal cleanup happens even if there's an error
    let result = run_tui_loop(app, component, &mut terminal);

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

fn run_tui_loop(
    app: &mut App,
    component: &WizardComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);

    while !app.state.is_finished() {
        terminal.draw(|frame| {
            let area = frame.size();
            component.render(frame, area, &app.state);
        })?;

        if !event::poll(tick_rate)? {
            continue;
        }

        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                if let Some(app_event) = EventHandler::handle_key_event(key_event, &app.state) {
                    tracing::debug!(?app_event, "Handling event");
                    EventHandler::process_event(app_event, &mut app.state);
                }
            }
            // Resizes are picked up by the next draw
            _ => {}
        }
    }

    Ok(())
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        tracing::error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
