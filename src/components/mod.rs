// ABOUTME: UI components for the wizard TUI

pub mod wizard;

pub use wizard::WizardComponent;
