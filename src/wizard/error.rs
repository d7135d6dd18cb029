// ABOUTME: Typed errors for building a wizard
// Navigation itself never fails; only constructing an inconsistent sequence does

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("A wizard needs at least one step")]
    EmptySequence,

    #[error("Summary step at position {position} has no configuration step before it")]
    SummaryWithoutConfiguration { position: usize },
}
