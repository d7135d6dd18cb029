// ABOUTME: Wizard core - steps, the navigation state machine and completion signalling
// Nothing in here knows about terminals or key presses

pub mod error;
pub mod host;
pub mod sequence;
pub mod step;
pub mod view;

pub use error::WizardError;
pub use host::{DialogResult, ResultSlot, Wizard, WizardHost};
pub use sequence::{Outcome, StepSequence};
pub use step::{ConfigurationData, Step, StepKind};
pub use view::{Property, WizardView};
