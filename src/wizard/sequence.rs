// ABOUTME: Ordered list of wizard steps with a cursor and the navigation state machine
// Copies configuration into the summary page every time it is entered going forward

use tracing::{debug, info};

use super::error::WizardError;
use super::step::{ConfigurationData, Step, StepKind};

/// Result of asking the sequence to move forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Cursor moved to the next step
    Advanced,
    /// Last step was passed; the host should close with a confirmed result
    Finished,
    /// Current step refused to advance; nothing changed
    Blocked,
}

#[derive(Debug, Clone)]
pub struct StepSequence {
    steps: Vec<Step>,
    cursor: usize,
}

impl StepSequence {
    /// Build a sequence starting at the first step
    pub fn new(steps: Vec<Step>) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::EmptySequence);
        }

        let first_config = steps.iter().position(|s| s.kind() == StepKind::Configuration);
        if let Some(position) = steps.iter().position(|s| s.kind() == StepKind::Summary) {
            if first_config.map_or(true, |config| config > position) {
                return Err(WizardError::SummaryWithoutConfiguration { position });
            }
        }

        Ok(Self { steps, cursor: 0 })
    }

    /// Welcome, configuration, summary
    pub fn standard(data: ConfigurationData) -> Self {
        Self {
            steps: vec![Step::Welcome, Step::configuration(data), Step::summary()],
            cursor: 0,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_index(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> &Step {
        &self.steps[self.cursor]
    }

    pub fn is_last(&self) -> bool {
        self.cursor == self.steps.len() - 1
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current().can_advance()
    }

    /// Label for the forward button
    pub fn next_button_label(&self) -> &'static str {
        if self.is_last() {
            "Finish"
        } else {
            "Next"
        }
    }

    /// Description of the current step, numbered by position
    pub fn current_description(&self) -> String {
        self.current().description(self.cursor, self.steps.len())
    }

    /// Move to the previous step. Returns false when already at the start.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.cursor -= 1;
        debug!(step = self.current().title(), index = self.cursor, "Moved back");
        true
    }

    /// Move to the next step, or finish from the last one
    pub fn go_forward(&mut self) -> Outcome {
        if !self.can_go_forward() {
            debug!(step = self.current().title(), "Forward blocked by step validation");
            return Outcome::Blocked;
        }

        if self.is_last() {
            info!(steps = self.steps.len(), "Wizard finished");
            return Outcome::Finished;
        }

        self.cursor += 1;
        if self.current().kind() == StepKind::Summary {
            self.snapshot_configuration();
        }
        debug!(step = self.current().title(), index = self.cursor, "Moved forward");
        Outcome::Advanced
    }

    /// Settings from the first configuration step
    pub fn configuration(&self) -> Option<&ConfigurationData> {
        self.steps.iter().find_map(Step::configuration_data)
    }

    /// Editable settings, only while a configuration step is current
    pub fn configuration_mut(&mut self) -> Option<&mut ConfigurationData> {
        match &mut self.steps[self.cursor] {
            Step::Configuration(data) => Some(data),
            _ => None,
        }
    }

    /// Snapshot held by the first summary step
    pub fn summary(&self) -> Option<&ConfigurationData> {
        self.steps.iter().find_map(Step::snapshot)
    }

    fn snapshot_configuration(&mut self) {
        let Some(data) = self.configuration().cloned() else {
            return;
        };
        debug!(project_name = %data.project_name, "Copying configuration into summary");
        self.steps[self.cursor].take_snapshot(&data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_name_sequence() -> StepSequence {
        let data = ConfigurationData {
            project_name: String::new(),
            ..ConfigurationData::default()
        };
        StepSequence::standard(data)
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(StepSequence::new(vec![]).unwrap_err(), WizardError::EmptySequence);
    }

    #[test]
    fn test_new_rejects_summary_without_configuration() {
        let err = StepSequence::new(vec![Step::Welcome, Step::summary()]).unwrap_err();
        assert_eq!(err, WizardError::SummaryWithoutConfiguration { position: 1 });

        let err = StepSequence::new(vec![
            Step::summary(),
            Step::configuration(ConfigurationData::default()),
        ])
        .unwrap_err();
        assert_eq!(err, WizardError::SummaryWithoutConfiguration { position: 0 });

        let err = StepSequence::new(vec![
            Step::Welcome,
            Step::summary(),
            Step::configuration(ConfigurationData::default()),
        ])
        .unwrap_err();
        assert_eq!(err, WizardError::SummaryWithoutConfiguration { position: 1 });
    }

    #[test]
    fn test_new_accepts_welcome_only() {
        let mut seq = StepSequence::new(vec![Step::Welcome]).unwrap();
        assert!(seq.is_last());
        assert_eq!(seq.next_button_label(), "Finish");
        assert_eq!(seq.go_forward(), Outcome::Finished);
        assert_eq!(seq.current_index(), 0);
    }

    #[test]
    fn test_go_back_at_start_is_noop() {
        let mut seq = StepSequence::standard(ConfigurationData::default());
        assert!(!seq.can_go_back());
        assert!(!seq.go_back());
        assert_eq!(seq.current_index(), 0);
    }

    #[test]
    fn test_blocked_forward_leaves_cursor() {
        let mut seq = blank_name_sequence();
        assert_eq!(seq.go_forward(), Outcome::Advanced);
        assert_eq!(seq.current().kind(), StepKind::Configuration);
        assert!(!seq.can_go_forward());
        assert_eq!(seq.go_forward(), Outcome::Blocked);
        assert_eq!(seq.current_index(), 1);
    }

    #[test]
    fn test_labels() {
        let mut seq = StepSequence::standard(ConfigurationData::default());
        assert_eq!(seq.next_button_label(), "Next");
        seq.go_forward();
        assert_eq!(seq.next_button_label(), "Next");
        seq.go_forward();
        assert_eq!(seq.next_button_label(), "Finish");
    }

    #[test]
    fn test_finish_does_not_move_cursor() {
        let mut seq = StepSequence::standard(ConfigurationData::default());
        seq.go_forward();
        seq.go_forward();
        assert_eq!(seq.go_forward(), Outcome::Finished);
        assert_eq!(seq.go_forward(), Outcome::Finished);
        assert_eq!(seq.current_index(), 2);
    }

    #[test]
    fn test_configuration_mut_only_on_configuration_step() {
        let mut seq = StepSequence::standard(ConfigurationData::default());
        assert!(seq.configuration_mut().is_none());
        seq.go_forward();
        assert!(seq.configuration_mut().is_some());
        seq.go_forward();
        assert!(seq.configuration_mut().is_none());
        assert!(seq.configuration().is_some());
    }

    #[test]
    fn test_summary_resnapshots_on_every_entry() {
        let mut seq = StepSequence::standard(ConfigurationData::default());
        seq.go_forward();
        seq.go_forward();
        assert_eq!(seq.summary().map(|d| d.project_name.as_str()), Some("MyNewProject"));

        seq.go_back();
        seq.configuration_mut().unwrap().set_project_name("Renamed");
        // Still the old snapshot until we re-enter the summary
        assert_eq!(seq.summary().map(|d| d.project_name.as_str()), Some("MyNewProject"));

        seq.go_forward();
        assert_eq!(seq.summary().map(|d| d.project_name.as_str()), Some("Renamed"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use proptest::sample::Index;

        /// Welcome / configuration steps with blank or named projects, and
        /// optionally one summary placed somewhere after the first configuration
        fn step_lists() -> impl Strategy<Value = Vec<Step>> {
            (
                prop::collection::vec((any::<bool>(), any::<bool>()), 1..10),
                any::<bool>(),
                any::<Index>(),
            )
                .prop_map(|(kinds, with_summary, at)| {
                    let mut steps: Vec<Step> = kinds
                        .into_iter()
                        .map(|(is_config, blank)| {
                            if is_config {
                                Step::configuration(ConfigurationData {
                                    project_name: if blank { "  ".into() } else { "App1".into() },
                                    ..ConfigurationData::default()
                                })
                            } else {
                                Step::Welcome
                            }
                        })
                        .collect();
                    let first_config = steps.iter().position(|s| s.kind() == StepKind::Configuration);
                    if let (true, Some(first)) = (with_summary, first_config) {
                        let slots = steps.len() - first;
                        steps.insert(first + 1 + at.index(slots), Step::summary());
                    }
                    steps
                })
        }

        proptest! {
            #[test]
            fn test_cursor_stays_in_bounds(
                steps in step_lists(),
                moves in prop::collection::vec(any::<bool>(), 0..60),
            ) {
                let mut seq = StepSequence::new(steps).unwrap();
                for forward in moves {
                    let before = seq.current_index();
                    if forward {
                        let was_last = seq.is_last();
                        match seq.go_forward() {
                            Outcome::Finished => {
                                prop_assert!(was_last);
                                prop_assert_eq!(seq.current_index(), before);
                            }
                            Outcome::Blocked => prop_assert_eq!(seq.current_index(), before),
                            Outcome::Advanced => prop_assert_eq!(seq.current_index(), before + 1),
                        }
                    } else {
                        let moved = seq.go_back();
                        prop_assert_eq!(moved, before > 0);
                        prop_assert_eq!(seq.current_index(), before.saturating_sub(1));
                    }
                    prop_assert!(seq.current_index() < seq.step_count());
                }
            }
        }
    }
}
