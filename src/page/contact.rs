use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

/// Simulated time for the message to "send".
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the success state stays up before the form comes back.
pub const RESET_DELAY: Duration = Duration::from_millis(5000);

// Same set as ECMAScript `trim()` and `\s`. Differs from Rust's Unicode
// whitespace: U+FEFF is in, U+0085 is out.
const NOT_SPACE: &str = r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

// loose: something@something.something
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{NOT_SPACE}+@{NOT_SPACE}+\.{NOT_SPACE}+$"))
        .expect("email pattern should compile")
});

fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_blank(value: &str) -> bool {
    value.trim_matches(is_space).is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}

/// One message per field; an empty string means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn is_clear(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}

pub fn validate(form: &FormState) -> (bool, FormErrors) {
    let mut errors = FormErrors::default();

    if is_blank(&form.name) {
        errors.name = "Name is required".to_string();
    }

    if is_blank(&form.email) {
        errors.email = "Email is required".to_string();
    } else if !EMAIL_SHAPE.is_match(&form.email) {
        errors.email = "Email is invalid".to_string();
    }

    if is_blank(&form.message) {
        errors.message = "Message is required".to_string();
    }

    (errors.is_clear(), errors)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Timed transitions the form asks its owner to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    CompleteSubmission,
    ResetStatus,
}

impl DeferredAction {
    pub fn delay(self) -> Duration {
        match self {
            DeferredAction::CompleteSubmission => SUBMIT_DELAY,
            DeferredAction::ResetStatus => RESET_DELAY,
        }
    }
}

/// The contact form: `Idle -> Submitting -> Submitted -> Idle`.
///
/// The form never touches a clock. Transitions that happen later are handed
/// back as [`DeferredAction`]s and come back in through [`ContactForm::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    state: FormState,
    errors: FormErrors,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn edit(&mut self, field: FormField, value: impl Into<String>) {
        *self.state.slot(field) = value.into();
        let error = self.errors.slot(field);
        if !error.is_empty() {
            error.clear();
        }
    }

    /// Validates and, if the form is good, starts sending it. Returns the
    /// action the caller must schedule.
    pub fn submit(&mut self) -> Option<DeferredAction> {
        if self.status != SubmissionStatus::Idle {
            log::debug!("ignoring submit while {:?}", self.status);
            return None;
        }
        let (is_valid, errors) = validate(&self.state);
        self.errors = errors;
        if !is_valid {
            log::debug!("contact form failed validation: {:?}", self.errors);
            return None;
        }
        log::info!("sending contact form");
        self.status = SubmissionStatus::Submitting;
        Some(DeferredAction::CompleteSubmission)
    }

    /// Applies a deferred transition. Returns the follow-up action, if any.
    pub fn apply(&mut self, action: DeferredAction) -> Option<DeferredAction> {
        match (action, self.status) {
            (DeferredAction::CompleteSubmission, SubmissionStatus::Submitting) => {
                self.status = SubmissionStatus::Submitted;
                self.state = FormState::default();
                log::info!("contact form sent");
                Some(DeferredAction::ResetStatus)
            }
            (DeferredAction::ResetStatus, SubmissionStatus::Submitted) => {
                self.status = SubmissionStatus::Idle;
                None
            }
            (action, status) => {
                log::debug!("ignoring {action:?} while {status:?}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> FormState {
        FormState {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn filled() -> ContactForm {
        let mut contact = ContactForm::default();
        contact.edit(FormField::Name, "Ann");
        contact.edit(FormField::Email, "a@b.co");
        contact.edit(FormField::Message, "hi");
        contact
    }

    #[test]
    fn test_validate_empty_form() {
        let (is_valid, errors) = validate(&FormState::default());
        assert!(!is_valid);
        assert_eq!(errors.name, "Name is required");
        assert_eq!(errors.email, "Email is required");
        assert_eq!(errors.message, "Message is required");
    }

    #[test]
    fn test_validate_whitespace_only() {
        let (is_valid, errors) = validate(&form("   ", "\t", "\n "));
        assert!(!is_valid);
        assert_eq!(errors.name, "Name is required");
        assert_eq!(errors.email, "Email is required");
        assert_eq!(errors.message, "Message is required");

        let (_, errors) = validate(&form("\u{FEFF}\u{3000}", "\u{2028}", "\u{A0}"));
        assert_eq!(errors.name, "Name is required");
        assert_eq!(errors.email, "Email is required");
        assert_eq!(errors.message, "Message is required");

        // NEL is text here, not whitespace
        let (is_valid, errors) = validate(&form("\u{85}", "a@b.co", "\u{85}"));
        assert!(is_valid);
        assert!(errors.is_clear());
    }

    #[test]
    fn test_validate_bad_email_only() {
        let (is_valid, errors) = validate(&form("Ann", "bad-email", "hi"));
        assert!(!is_valid);
        assert_eq!(
            errors,
            FormErrors {
                email: "Email is invalid".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_validate_good_form() {
        let state = form("Ann", "a@b.co", "hi");
        let (is_valid, errors) = validate(&state);
        assert!(is_valid);
        assert!(errors.is_clear());
        assert_eq!(state, form("Ann", "a@b.co", "hi"));
    }

    #[test]
    fn test_email_shape() {
        let check = |email: &str| validate(&form("Ann", email, "hi")).0;
        assert!(check("a@b.c"));
        assert!(check("first.last@sub.example.org"));
        assert!(check("a@@b..c"));
        assert!(!check("a@b"));
        assert!(!check("ab.co"));
        assert!(!check("a b@c.d"));
        // surrounding whitespace fails the shape check, it is not trimmed
        assert!(!check(" a@b.co"));
        assert!(!check("a@b.co "));
        assert!(!check("a\u{FEFF}@b.co"));
        assert!(!check("a@b\u{A0}.co"));
        assert!(check("a\u{85}@b.co"));
    }

    #[test]
    fn test_edit_clears_only_that_error() {
        let mut contact = ContactForm::default();
        assert_eq!(contact.submit(), None);
        assert!(!contact.errors().name.is_empty());

        contact.edit(FormField::Name, "A");
        assert_eq!(contact.state().name, "A");
        assert_eq!(contact.errors().name, "");
        assert_eq!(contact.errors().email, "Email is required");
        assert_eq!(contact.errors().message, "Message is required");
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let mut contact = ContactForm::default();
        contact.edit(FormField::Email, "nope");
        assert_eq!(contact.submit(), None);
        assert_eq!(contact.status(), SubmissionStatus::Idle);
        assert_eq!(contact.errors().email, "Email is invalid");
        assert_eq!(contact.state().email, "nope");
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut contact = filled();
        assert_eq!(contact.submit(), Some(DeferredAction::CompleteSubmission));
        assert_eq!(contact.status(), SubmissionStatus::Submitting);
        assert_eq!(contact.state(), &form("Ann", "a@b.co", "hi"));

        assert_eq!(
            contact.apply(DeferredAction::CompleteSubmission),
            Some(DeferredAction::ResetStatus)
        );
        assert_eq!(contact.status(), SubmissionStatus::Submitted);
        assert_eq!(contact.state(), &FormState::default());

        assert_eq!(contact.apply(DeferredAction::ResetStatus), None);
        assert_eq!(contact.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_submit_while_busy_is_ignored() {
        let mut contact = filled();
        contact.submit();
        assert_eq!(contact.submit(), None);
        assert_eq!(contact.status(), SubmissionStatus::Submitting);

        contact.apply(DeferredAction::CompleteSubmission);
        assert_eq!(contact.submit(), None);
        assert_eq!(contact.status(), SubmissionStatus::Submitted);
    }

    #[test]
    fn test_out_of_order_actions_ignored() {
        let mut contact = filled();
        assert_eq!(contact.apply(DeferredAction::CompleteSubmission), None);
        assert_eq!(contact.apply(DeferredAction::ResetStatus), None);
        assert_eq!(contact, filled());

        contact.submit();
        assert_eq!(contact.apply(DeferredAction::ResetStatus), None);
        assert_eq!(contact.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn test_edit_during_submitting_is_accepted() {
        let mut contact = filled();
        contact.submit();
        contact.edit(FormField::Message, "changed");
        assert_eq!(contact.state().message, "changed");
        contact.apply(DeferredAction::CompleteSubmission);
        assert_eq!(contact.state(), &FormState::default());
    }

    #[test]
    fn test_action_delays() {
        assert_eq!(DeferredAction::CompleteSubmission.delay(), Duration::from_millis(1500));
        assert_eq!(DeferredAction::ResetStatus.delay(), Duration::from_millis(5000));
    }
}
