// ABOUTME: Completion signalling between the wizard and whatever hosts it
// Wizard drives a StepSequence and tells its host how the dialog ended

use serde::Serialize;
use tracing::info;

use super::sequence::{Outcome, StepSequence};
use super::step::ConfigurationData;
use super::view::WizardView;

/// How the wizard ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "configuration", rename_all = "snake_case")]
pub enum DialogResult {
    Confirmed(ConfigurationData),
    Cancelled,
}

/// Receives the close signal. Called at most once per wizard.
#[cfg_attr(test, mockall::automock)]
pub trait WizardHost {
    fn close(&mut self, result: DialogResult);
}

/// Host that just keeps the result for the caller to pick up
#[derive(Debug, Default)]
pub struct ResultSlot {
    result: Option<DialogResult>,
}

impl ResultSlot {
    pub fn result(&self) -> Option<&DialogResult> {
        self.result.as_ref()
    }

    pub fn take(&mut self) -> Option<DialogResult> {
        self.result.take()
    }
}

impl WizardHost for ResultSlot {
    fn close(&mut self, result: DialogResult) {
        self.result = Some(result);
    }
}

/// A step sequence bound to a host. Once closed, every action is ignored.
#[derive(Debug)]
pub struct Wizard<H: WizardHost> {
    sequence: StepSequence,
    host: H,
    closed: bool,
}

impl<H: WizardHost> Wizard<H> {
    pub fn new(sequence: StepSequence, host: H) -> Self {
        Self {
            sequence,
            host,
            closed: false,
        }
    }

    pub fn sequence(&self) -> &StepSequence {
        &self.sequence
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn view(&self) -> WizardView {
        WizardView::of(&self.sequence)
    }

    pub fn go_back(&mut self) -> bool {
        !self.closed && self.sequence.go_back()
    }

    /// Advance, closing the host with a confirmed result past the last step
    pub fn go_forward(&mut self) -> Outcome {
        if self.closed {
            return Outcome::Blocked;
        }

        let outcome = self.sequence.go_forward();
        if outcome == Outcome::Finished {
            let data = self
                .sequence
                .summary()
                .or_else(|| self.sequence.configuration())
                .cloned()
                .unwrap_or_default();
            info!(project_name = %data.project_name, "Wizard confirmed");
            self.close(DialogResult::Confirmed(data));
        }
        outcome
    }

    /// Close with a cancelled result. No-op if already closed.
    pub fn cancel(&mut self) {
        if self.closed {
            return;
        }
        info!(step = self.sequence.current().title(), "Wizard cancelled");
        self.close(DialogResult::Cancelled);
    }

    /// Edit the configuration while its step is current.
    /// Returns None when there is nothing editable right now.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut ConfigurationData) -> R) -> Option<R> {
        if self.closed {
            return None;
        }
        self.sequence.configuration_mut().map(f)
    }

    fn close(&mut self, result: DialogResult) {
        self.closed = true;
        self.host.close(result);
    }
}

impl Wizard<ResultSlot> {
    /// Wizard whose result is kept in memory
    pub fn with_result_slot(sequence: StepSequence) -> Self {
        Self::new(sequence, ResultSlot::default())
    }

    pub fn result(&self) -> Option<&DialogResult> {
        self.host.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn standard() -> StepSequence {
        StepSequence::standard(ConfigurationData::default())
    }

    #[test]
    fn test_finish_confirms_once() {
        let mut host = MockWizardHost::new();
        host.expect_close()
            .with(eq(DialogResult::Confirmed(ConfigurationData::default())))
            .times(1)
            .return_const(());

        let mut wizard = Wizard::new(standard(), host);
        assert_eq!(wizard.go_forward(), Outcome::Advanced);
        assert_eq!(wizard.go_forward(), Outcome::Advanced);
        assert_eq!(wizard.go_forward(), Outcome::Finished);
        assert!(wizard.is_closed());

        // Closed wizards ignore everything
        assert_eq!(wizard.go_forward(), Outcome::Blocked);
        assert!(!wizard.go_back());
        wizard.cancel();
    }

    #[test]
    fn test_cancel_signals_cancelled() {
        let mut host = MockWizardHost::new();
        host.expect_close()
            .with(eq(DialogResult::Cancelled))
            .times(1)
            .return_const(());

        let mut wizard = Wizard::new(standard(), host);
        wizard.go_forward();
        wizard.cancel();
        wizard.cancel();
        assert!(wizard.edit(|d| d.set_project_name("x")).is_none());
    }

    #[test]
    fn test_blocked_forward_does_not_close() {
        let mut host = MockWizardHost::new();
        host.expect_close().times(0);

        let mut wizard = Wizard::new(standard(), host);
        wizard.go_forward();
        assert_eq!(wizard.edit(|d| d.set_project_name("   ")), Some(true));
        assert_eq!(wizard.go_forward(), Outcome::Blocked);
        assert!(!wizard.is_closed());
    }

    #[test]
    fn test_result_slot_holds_confirmed_snapshot() {
        let mut wizard = Wizard::with_result_slot(standard());
        wizard.go_forward();
        wizard.edit(|d| d.set_project_name("Demo"));
        wizard.go_forward();
        wizard.go_forward();

        match wizard.result() {
            Some(DialogResult::Confirmed(data)) => assert_eq!(data.project_name, "Demo"),
            other => panic!("Expected confirmed result, got {other:?}"),
        }
    }

    #[test]
    fn test_dialog_result_json_shape() {
        let json = serde_json::to_value(DialogResult::Cancelled).unwrap();
        assert_eq!(json, serde_json::json!({ "result": "cancelled" }));

        let json = serde_json::to_value(DialogResult::Confirmed(ConfigurationData::default()))
            .unwrap();
        assert_eq!(json["result"], "confirmed");
        assert_eq!(json["configuration"]["project_name"], "MyNewProject");
    }
}
