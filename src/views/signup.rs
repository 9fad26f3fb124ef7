//! Multi-step signup flow.
//!
//! Wraps a [`SignupWizard`] with the focus state the screen needs: which text
//! field receives typed characters, and which interest the cursor is on.

use super::clamp_selection;
use crate::types::Interest;
use crate::wizard::{FormField, SignupStep, SignupWizard, ValidationRules};
use strum::IntoEnumIterator;
use tracing::{debug, info};

/// What "Continue" did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Moved to the next step
    Advanced,
    /// Current step failed validation; nothing changed
    Rejected,
    /// Already on the final step; the flow is done
    Finished,
}

#[derive(Debug, Clone)]
pub struct SignupView {
    wizard: SignupWizard,
    /// Index into the current step's fields
    focus: usize,
    /// Index into `Interest::iter()`
    interest_cursor: usize,
}

impl SignupView {
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            wizard: SignupWizard::new(rules),
            focus: 0,
            interest_cursor: 0,
        }
    }

    pub fn wizard(&self) -> &SignupWizard {
        &self.wizard
    }

    pub fn step(&self) -> SignupStep {
        self.wizard.step()
    }

    pub fn interest_cursor(&self) -> usize {
        self.interest_cursor
    }

    /// Text field receiving keystrokes, if the step has any
    pub fn focused_field(&self) -> Option<FormField> {
        self.step().fields().get(self.focus).copied()
    }

    /// Whether printable keys should be typed rather than treated as shortcuts
    pub fn is_text_entry(&self) -> bool {
        self.focused_field().is_some()
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            self.wizard.form_mut().field_mut(field).push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(field) = self.focused_field() {
            self.wizard.form_mut().field_mut(field).pop();
        }
    }

    /// Up/Down: cycle fields on form steps, move the interest cursor on the
    /// interests step.
    pub fn focus_next(&mut self) {
        let fields = self.step().fields().len();
        if fields > 0 {
            self.focus = (self.focus + 1) % fields;
        } else if self.step() == SignupStep::Interests {
            self.interest_cursor =
                clamp_selection(self.interest_cursor + 1, Interest::iter().count());
        }
    }

    pub fn focus_previous(&mut self) {
        let fields = self.step().fields().len();
        if fields > 0 {
            self.focus = (self.focus + fields - 1) % fields;
        } else if self.step() == SignupStep::Interests {
            self.interest_cursor = self.interest_cursor.saturating_sub(1);
        }
    }

    /// Space on the interests step
    pub fn toggle_interest(&mut self) {
        if self.step() != SignupStep::Interests {
            return;
        }
        if let Some(interest) = Interest::iter().nth(self.interest_cursor) {
            self.wizard.form_mut().toggle_interest(interest);
        }
    }

    /// Enter: advance if the current step validates.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.wizard.is_complete() {
            info!("signup finished");
            return SubmitOutcome::Finished;
        }
        if self.wizard.advance() {
            self.focus = 0;
            SubmitOutcome::Advanced
        } else {
            SubmitOutcome::Rejected
        }
    }

    /// Esc: previous step. Returns `false` on the first step, where the
    /// caller leaves the screen instead.
    pub fn back(&mut self) -> bool {
        let moved = self.wizard.retreat();
        if moved {
            self.focus = 0;
            debug!(step = ?self.step(), "signup went back");
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(view: &mut SignupView, text: &str) {
        for c in text.chars() {
            view.insert_char(c);
        }
    }

    #[test]
    fn test_full_flow() {
        let mut view = SignupView::new(ValidationRules::default());
        assert_eq!(view.submit(), SubmitOutcome::Rejected);
        type_text(&mut view, "Jane Doe");
        assert_eq!(view.submit(), SubmitOutcome::Advanced);

        assert_eq!(view.focused_field(), Some(FormField::Email));
        type_text(&mut view, "jane@example.com");
        view.focus_next();
        type_text(&mut view, "hunter22");
        assert_eq!(view.submit(), SubmitOutcome::Advanced);

        assert!(!view.is_text_entry());
        assert_eq!(view.submit(), SubmitOutcome::Rejected);
        view.focus_next();
        view.toggle_interest();
        assert_eq!(view.submit(), SubmitOutcome::Advanced);
        assert!(view.wizard().form().interests.contains(&Interest::Development));

        assert_eq!(view.step(), SignupStep::Complete);
        assert_eq!(view.submit(), SubmitOutcome::Finished);
        assert_eq!(view.step(), SignupStep::Complete);
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut view = SignupView::new(ValidationRules::default());
        type_text(&mut view, "Janex");
        view.delete_char();
        assert_eq!(view.wizard().form().name, "Jane");
    }

    #[test]
    fn test_back_on_first_step_reports_false() {
        let mut view = SignupView::new(ValidationRules::default());
        assert!(!view.back());
        type_text(&mut view, "Jane");
        view.submit();
        assert!(view.back());
        assert_eq!(view.step(), SignupStep::Name);
        // Typed data survives going back
        assert_eq!(view.wizard().form().name, "Jane");
    }

    #[test]
    fn test_focus_wraps_between_account_fields() {
        let mut view = SignupView::new(ValidationRules::default());
        type_text(&mut view, "Jane");
        view.submit();
        view.focus_previous();
        assert_eq!(view.focused_field(), Some(FormField::Password));
        view.focus_next();
        assert_eq!(view.focused_field(), Some(FormField::Email));
    }
}
