// ABOUTME: JSON-lines file logging for interactive wizard runs
// One timestamped file per TUI session under ~/.project-wizard/logs, oldest pruned

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use project_wizard::config::WizardConfig;

/// Log files kept in the log directory, including the one being opened
pub const MAX_LOG_FILES: usize = 10;

const LOG_PREFIX: &str = "project-wizard-";
const LOG_SUFFIX: &str = ".jsonl";

/// Install the file subscriber. Never logs to stdout or stderr;
/// the TUI owns the terminal and stdout carries the report.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let log_dir = WizardConfig::base_dir()
        .map(|base| base.join("logs"))
        .unwrap_or_else(|_| PathBuf::from(".project-wizard/logs"));

    if fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    // Make room for the file about to be created
    let _ = prune_old_logs(&log_dir, MAX_LOG_FILES - 1);

    let log_file = log_dir.join(format!(
        "{LOG_PREFIX}{}{LOG_SUFFIX}",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "project_wizard=info".into()),
        )
        .init();
}

/// Delete the oldest wizard log files so at most `keep` remain.
/// Timestamped names sort chronologically. Returns how many were removed.
pub fn prune_old_logs(dir: &Path, keep: usize) -> io::Result<usize> {
    let mut logs: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(LOG_PREFIX) && name.ends_with(LOG_SUFFIX))
        })
        .collect();

    if logs.len() <= keep {
        return Ok(0);
    }

    logs.sort();
    let excess = logs.len() - keep;
    for path in &logs[..excess] {
        fs::remove_file(path)?;
    }
    Ok(excess)
}
