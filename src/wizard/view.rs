// ABOUTME: Derived presentation state for the current wizard step
// Renderers re-read a WizardView after every action and diff it against the previous one

use super::sequence::StepSequence;
use super::step::StepKind;

/// Names of observable values a renderer may care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    CurrentStepTitle,
    CurrentStepDescription,
    CurrentStepContent,
    NextButtonText,
    CanGoBack,
    CanGoForward,
}

/// Snapshot of everything the presentation layer shows outside the step body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardView {
    pub title: String,
    pub description: String,
    pub content: StepKind,
    pub next_button_label: &'static str,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub step_index: usize,
    pub step_count: usize,
}

impl WizardView {
    pub fn of(sequence: &StepSequence) -> Self {
        Self {
            title: sequence.current().title().to_string(),
            description: sequence.current_description(),
            content: sequence.current().kind(),
            next_button_label: sequence.next_button_label(),
            can_go_back: sequence.can_go_back(),
            can_go_forward: sequence.can_go_forward(),
            step_index: sequence.current_index(),
            step_count: sequence.step_count(),
        }
    }

    /// Properties whose value differs between `self` and `newer`
    pub fn changed_properties(&self, newer: &Self) -> Vec<Property> {
        let mut changed = Vec::new();
        if self.title != newer.title {
            changed.push(Property::CurrentStepTitle);
        }
        if self.description != newer.description {
            changed.push(Property::CurrentStepDescription);
        }
        if self.content != newer.content || self.step_index != newer.step_index {
            changed.push(Property::CurrentStepContent);
        }
        if self.next_button_label != newer.next_button_label {
            changed.push(Property::NextButtonText);
        }
        if self.can_go_back != newer.can_go_back {
            changed.push(Property::CanGoBack);
        }
        if self.can_go_forward != newer.can_go_forward {
            changed.push(Property::CanGoForward);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::step::ConfigurationData;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_view_of_first_step() {
        let seq = StepSequence::standard(ConfigurationData::default());
        let view = WizardView::of(&seq);
        assert_eq!(
            view,
            WizardView {
                title: "Welcome".to_string(),
                description: "Step 1 of 3".to_string(),
                content: StepKind::Welcome,
                next_button_label: "Next",
                can_go_back: false,
                can_go_forward: true,
                step_index: 0,
                step_count: 3,
            }
        );
    }

    #[test]
    fn test_no_changes_for_identical_views() {
        let seq = StepSequence::standard(ConfigurationData::default());
        let view = WizardView::of(&seq);
        assert!(view.changed_properties(&view.clone()).is_empty());
    }

    #[test]
    fn test_changes_after_navigation() {
        let mut seq = StepSequence::standard(ConfigurationData::default());
        seq.go_forward();
        let before = WizardView::of(&seq);
        seq.go_forward();
        let after = WizardView::of(&seq);

        assert_eq!(
            before.changed_properties(&after),
            vec![
                Property::CurrentStepTitle,
                Property::CurrentStepDescription,
                Property::CurrentStepContent,
                Property::NextButtonText,
            ]
        );
    }

    #[test]
    fn test_validation_change_only_flips_can_go_forward() {
        let mut seq = StepSequence::standard(ConfigurationData::default());
        seq.go_forward();
        let before = WizardView::of(&seq);
        seq.configuration_mut().unwrap().set_project_name("");
        let after = WizardView::of(&seq);

        assert_eq!(before.changed_properties(&after), vec![Property::CanGoForward]);
    }
}
