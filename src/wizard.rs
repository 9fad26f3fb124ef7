//! Signup wizard: step order, form data and per-step validation.
//!
//! The wizard progresses through its steps linearly. Backward navigation is
//! always allowed; forward navigation requires the current step to pass its
//! check.
//!
//! # State Transitions
//!
//! ```text
//! Name -> Account -> Interests -> Complete
//! ```
//!
//! # Invariants
//!
//! - Cannot leave `Name` without a non-blank name
//! - Cannot leave `Account` without an email and a long enough password
//! - Cannot reach `Complete` without at least one interest
//! - `Complete` is terminal: advancing there is a no-op

use crate::cursor::StepCursor;
use crate::types::{EmailValidation, Interest};
use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroUsize;
use tracing::debug;

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupStep {
    Name,
    Account,
    Interests,
    Complete,
}

impl SignupStep {
    /// Total number of steps.
    pub const TOTAL_STEPS: usize = 4;

    /// Step for a 1-indexed cursor position.
    pub fn from_position(position: usize) -> Option<Self> {
        match position {
            1 => Some(Self::Name),
            2 => Some(Self::Account),
            3 => Some(Self::Interests),
            4 => Some(Self::Complete),
            _ => None,
        }
    }

    /// Get the step number (1-indexed for display).
    pub fn position(&self) -> usize {
        match self {
            Self::Name => 1,
            Self::Account => 2,
            Self::Interests => 3,
            Self::Complete => 4,
        }
    }

    /// Get the display title for this step.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Name => "What should we call you?",
            Self::Account => "Create your account",
            Self::Interests => "Pick your interests",
            Self::Complete => "You're all set",
        }
    }

    /// Text fields shown on this step, in focus order
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            Self::Name => &[FormField::Name],
            Self::Account => &[FormField::Email, FormField::Password],
            Self::Interests | Self::Complete => &[],
        }
    }
}

/// Editable text field of the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    /// Whether the value is masked on screen
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password)
    }
}

/// Data collected across the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub interests: BTreeSet<Interest>,
}

impl SignupForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        }
    }

    /// Select `interest` if absent, deselect it if present.
    pub fn toggle_interest(&mut self, interest: Interest) {
        if !self.interests.remove(&interest) {
            self.interests.insert(interest);
        }
    }
}

/// Why the current step cannot be left yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    NameRequired,
    EmailMissingAt,
    EmailMalformed,
    PasswordTooShort { min: usize },
    InterestsRequired,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => write!(f, "Enter your name to continue"),
            Self::EmailMissingAt => write!(f, "Email needs an @"),
            Self::EmailMalformed => write!(f, "Enter an address like jane@example.com"),
            Self::PasswordTooShort { min } => {
                write!(f, "Password needs at least {} characters", min)
            }
            Self::InterestsRequired => write!(f, "Pick at least one interest"),
        }
    }
}

/// Outcome of validating one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCheck {
    Passed,
    Blocked(Hint),
}

impl StepCheck {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn hint(&self) -> Option<Hint> {
        match self {
            Self::Passed => None,
            Self::Blocked(hint) => Some(*hint),
        }
    }
}

/// Per-step validation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub email: EmailValidation,
    pub min_password_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            email: EmailValidation::Lax,
            min_password_length: 6,
        }
    }
}

impl ValidationRules {
    /// Pure predicate gating forward navigation out of `step`.
    pub fn check(&self, step: SignupStep, form: &SignupForm) -> StepCheck {
        match step {
            SignupStep::Name => {
                if form.name.trim().is_empty() {
                    return StepCheck::Blocked(Hint::NameRequired);
                }
            }
            SignupStep::Account => {
                if !form.email.contains('@') {
                    return StepCheck::Blocked(Hint::EmailMissingAt);
                }
                if self.email == EmailValidation::Strict && !is_well_formed_email(&form.email) {
                    return StepCheck::Blocked(Hint::EmailMalformed);
                }
                if form.password.chars().count() < self.min_password_length {
                    return StepCheck::Blocked(Hint::PasswordTooShort {
                        min: self.min_password_length,
                    });
                }
            }
            SignupStep::Interests => {
                if form.interests.is_empty() {
                    return StepCheck::Blocked(Hint::InterestsRequired);
                }
            }
            SignupStep::Complete => {}
        }
        StepCheck::Passed
    }
}

/// One `@`, non-empty local part, a domain with an interior dot and no
/// empty labels, and no whitespace anywhere.
pub fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

/// Step cursor, form and rules of one signup flow.
#[derive(Debug, Clone)]
pub struct SignupWizard {
    cursor: StepCursor,
    form: SignupForm,
    rules: ValidationRules,
}

impl SignupWizard {
    pub fn new(rules: ValidationRules) -> Self {
        let steps = NonZeroUsize::MIN.saturating_add(SignupStep::TOTAL_STEPS - 1);
        Self {
            cursor: StepCursor::nonzero(steps),
            form: SignupForm::default(),
            rules,
        }
    }

    pub fn step(&self) -> SignupStep {
        SignupStep::from_position(self.cursor.position()).unwrap_or(SignupStep::Complete)
    }

    pub fn cursor(&self) -> &StepCursor {
        &self.cursor
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SignupForm {
        &mut self.form
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validation result for the current step
    pub fn check(&self) -> StepCheck {
        self.rules.check(self.step(), &self.form)
    }

    /// Whether "Continue" is enabled
    pub fn can_advance(&self) -> bool {
        !self.cursor.is_last() && self.check().is_passed()
    }

    /// Move forward if the current step passes; returns whether it moved.
    pub fn advance(&mut self) -> bool {
        if let StepCheck::Blocked(hint) = self.check() {
            debug!(step = ?self.step(), %hint, "advance rejected");
            return false;
        }
        let moved = self.cursor.advance();
        if moved {
            debug!(step = ?self.step(), "wizard advanced");
        }
        moved
    }

    /// Move back one step; never gated.
    pub fn retreat(&mut self) -> bool {
        self.cursor.retreat()
    }

    pub fn is_complete(&self) -> bool {
        self.step() == SignupStep::Complete
    }
}
