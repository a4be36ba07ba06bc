use std::{fmt, sync::LazyLock, time::Duration};

use regex::Regex;
use serde::Serialize;

use super::{
    notification::NotificationCenter,
    timer::{Scheduler, TimerId},
    Relay,
};

pub const RESET_AFTER: Duration = Duration::from_millis(2000);
pub const SUCCESS_MESSAGE: &str = "Your message has been sent successfully!";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern should compile")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(&email.to_lowercase())
}

// BOM counts as padding in browsers' trim but not in `str::trim`
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Name used in the relay's form body and as the input's `name`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    fn required_message(&self) -> &'static str {
        match self {
            Field::Name => "Name is required",
            Field::Email => "Email is required",
            Field::Subject => "Subject is required",
            Field::Message => "Message is required",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn validate(&self) -> Validation {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            let value = self.get(field);
            if is_blank(value) {
                errors.set(field, field.required_message());
            } else if field == Field::Email && !is_valid_email(value) {
                errors.set(field, "Please enter a valid email");
            }
        }
        Validation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

// empty string means no error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, error: &str) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        slot.clear();
        slot.push_str(error);
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub errors: FieldErrors,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Editing,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    ValidationFailed,
    AlreadySubmitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionResult {
    Accepted,
    Rejected(Rejection),
}

#[derive(Debug, Default)]
pub struct FormController {
    form: ContactForm,
    errors: FieldErrors,
    state: SubmissionState,
    pending_reset: Option<TimerId>,
    generation: u64,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn value(&self, field: Field) -> &str {
        self.form.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> &str {
        self.errors.get(field)
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    // non-blank input clears the field's error without re-checking format
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if !is_blank(&value) {
            self.errors.set(field, "");
        }
        *self.form.get_mut(field) = value;
    }

    pub fn validate(&self) -> Validation {
        self.form.validate()
    }

    pub fn submit(
        &mut self,
        relay: &impl Relay,
        notifications: &mut NotificationCenter,
        scheduler: &mut impl Scheduler,
    ) -> SubmissionResult {
        if self.state == SubmissionState::Submitted {
            log::debug!("ignoring submit while a sent form is still showing");
            return SubmissionResult::Rejected(Rejection::AlreadySubmitted);
        }

        let Validation { is_valid, errors } = self.validate();
        self.errors = errors;
        if !is_valid {
            log::debug!("contact form rejected: {:?}", self.errors);
            return SubmissionResult::Rejected(Rejection::ValidationFailed);
        }

        relay.send(&self.form);
        self.state = SubmissionState::Submitted;
        notifications.success(SUCCESS_MESSAGE, scheduler);

        self.generation += 1;
        let timer = TimerId::FormReset(self.generation);
        self.pending_reset = Some(timer);
        scheduler.schedule(timer, RESET_AFTER);
        log::info!("contact form sent to relay");
        SubmissionResult::Accepted
    }

    pub fn on_timer(&mut self, timer: TimerId) -> bool {
        if self.pending_reset != Some(timer) {
            return false;
        }
        self.pending_reset = None;
        self.state = SubmissionState::Editing;
        self.form = ContactForm::default();
        true
    }

    pub fn dispose(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(timer) = self.pending_reset.take() {
            scheduler.cancel(timer);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::contact::{notification::NotificationKind, timer::ManualScheduler};

    #[derive(Default)]
    struct RecordingRelay {
        sent: RefCell<Vec<ContactForm>>,
    }

    impl Relay for RecordingRelay {
        fn send(&self, form: &ContactForm) {
            self.sent.borrow_mut().push(form.clone());
        }
    }

    fn controller_with(name: &str, email: &str, subject: &str, message: &str) -> FormController {
        let mut c = FormController::new();
        c.update_field(Field::Name, name);
        c.update_field(Field::Email, email);
        c.update_field(Field::Subject, subject);
        c.update_field(Field::Message, message);
        c
    }

    struct Harness {
        relay: RecordingRelay,
        toasts: NotificationCenter,
        scheduler: ManualScheduler,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                relay: RecordingRelay::default(),
                toasts: NotificationCenter::new(),
                scheduler: ManualScheduler::new(),
            }
        }

        fn submit(&mut self, c: &mut FormController) -> SubmissionResult {
            c.submit(&self.relay, &mut self.toasts, &mut self.scheduler)
        }

        fn advance(&mut self, c: &mut FormController, ms: u64) {
            for timer in self.scheduler.advance(Duration::from_millis(ms)) {
                c.on_timer(timer);
                self.toasts.on_timer(timer);
            }
        }
    }

    #[test]
    fn test_valid_emails() {
        for email in [
            "jo@example.com",
            "a@b.co",
            "first.last@sub.domain.org",
            "UPPER@EXAMPLE.COM",
            "\"quoted name\"@example.com",
            "user@[192.168.0.1]",
            "x-y_z+tag@my-host.io",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "bad-email",
            "a@b",
            "a@b.c",
            "a@b.c0m",
            "a..b@example.com",
            ".a@example.com",
            "a b@example.com",
            "a@@example.com",
            "<a>@example.com",
            "a@example.com ",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_validate_all_valid() {
        let c = controller_with("Jo", "jo@example.com", "Hi", "Hello");
        let v = c.validate();
        assert!(v.is_valid);
        assert_eq!(v.errors, FieldErrors::default());
    }

    #[test]
    fn test_validate_each_blank_field() {
        for field in Field::ALL {
            let mut c = controller_with("Jo", "jo@example.com", "Hi", "Hello");
            c.update_field(field, "   ");
            let v = c.validate();
            assert!(!v.is_valid);
            assert_eq!(v.errors.get(field), field.required_message());
            for other in Field::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(v.errors.get(other), "", "{other} should have no error");
            }
        }
    }

    #[test]
    fn test_validate_all_blank() {
        let v = FormController::new().validate();
        assert!(!v.is_valid);
        assert_eq!(v.errors.name, "Name is required");
        assert_eq!(v.errors.email, "Email is required");
        assert_eq!(v.errors.subject, "Subject is required");
        assert_eq!(v.errors.message, "Message is required");
    }

    #[test]
    fn test_bom_only_is_blank() {
        let mut c = controller_with("Jo", "jo@example.com", "Hi", "Hello");
        c.update_field(Field::Name, "\u{FEFF}");
        assert_eq!(c.validate().errors.name, "Name is required");
        c.update_field(Field::Subject, " \u{FEFF}\t");
        assert_eq!(c.validate().errors.subject, "Subject is required");
        c.update_field(Field::Name, "\u{FEFF}Jo");
        assert_eq!(c.validate().errors.name, "");
    }

    #[test]
    fn test_validate_is_pure() {
        let c = controller_with("", "nope", "Hi", "");
        let first = c.validate();
        let second = c.validate();
        assert_eq!(first, second);
        // validation alone never stores errors
        assert!(c.errors().is_empty());
    }

    #[test]
    fn test_update_field_clears_error_optimistically() {
        let mut h = Harness::new();
        let mut c = FormController::new();
        h.submit(&mut c);
        assert_eq!(c.error(Field::Email), "Email is required");

        c.update_field(Field::Email, "not-an-email");
        assert_eq!(c.error(Field::Email), "");
        assert_eq!(c.value(Field::Email), "not-an-email");
        // siblings keep their errors
        assert_eq!(c.error(Field::Name), "Name is required");
    }

    #[test]
    fn test_update_field_blank_keeps_error() {
        let mut h = Harness::new();
        let mut c = FormController::new();
        h.submit(&mut c);
        c.update_field(Field::Subject, "  ");
        assert_eq!(c.error(Field::Subject), "Subject is required");
        assert_eq!(c.value(Field::Subject), "  ");
    }

    #[test]
    fn test_submit_missing_name() {
        let mut h = Harness::new();
        let mut c = controller_with("", "a@b.com", "Hi", "Hello");
        let res = h.submit(&mut c);
        assert_eq!(res, SubmissionResult::Rejected(Rejection::ValidationFailed));
        assert_eq!(c.errors().name, "Name is required");
        assert_eq!(c.errors().email, "");
        assert_eq!(c.errors().subject, "");
        assert_eq!(c.errors().message, "");
        assert_eq!(c.state(), SubmissionState::Editing);
        assert!(!h.toasts.visible());
        assert!(h.relay.sent.borrow().is_empty());
        assert_eq!(c.value(Field::Email), "a@b.com");
    }

    #[test]
    fn test_submit_bad_email() {
        let mut h = Harness::new();
        let mut c = controller_with("Jo", "bad-email", "Hi", "Hello");
        let res = h.submit(&mut c);
        assert_eq!(res, SubmissionResult::Rejected(Rejection::ValidationFailed));
        assert_eq!(c.errors().email, "Please enter a valid email");
        assert!(h.relay.sent.borrow().is_empty());
        assert_eq!(h.scheduler.pending_count(), 0);
    }

    #[test]
    fn test_submit_accepted_then_reset() {
        let mut h = Harness::new();
        let mut c = controller_with("Jo", "jo@example.com", "Hi", "Hello");
        let res = h.submit(&mut c);
        assert_eq!(res, SubmissionResult::Accepted);

        assert_eq!(
            *h.relay.sent.borrow(),
            vec![ContactForm {
                name: "Jo".to_string(),
                email: "jo@example.com".to_string(),
                subject: "Hi".to_string(),
                message: "Hello".to_string(),
            }]
        );
        assert_eq!(c.state(), SubmissionState::Submitted);
        assert!(c.errors().is_empty());
        assert!(h.toasts.visible());
        assert_eq!(h.toasts.message(), SUCCESS_MESSAGE);
        assert_eq!(h.toasts.kind(), Some(NotificationKind::Success));

        h.advance(&mut c, 1999);
        assert_eq!(c.state(), SubmissionState::Submitted);
        assert_eq!(c.value(Field::Name), "Jo");

        h.advance(&mut c, 1);
        assert_eq!(c.state(), SubmissionState::Editing);
        assert_eq!(c.form(), &ContactForm::default());
        assert!(h.toasts.visible());

        h.advance(&mut c, 1000);
        assert!(!h.toasts.visible());
    }

    #[test]
    fn test_submit_clears_previous_errors() {
        let mut h = Harness::new();
        let mut c = FormController::new();
        h.submit(&mut c);
        assert!(!c.errors().is_empty());

        c.update_field(Field::Name, "Jo");
        c.update_field(Field::Email, "jo@example.com");
        c.update_field(Field::Subject, "Hi");
        c.update_field(Field::Message, "Hello");
        assert_eq!(h.submit(&mut c), SubmissionResult::Accepted);
        assert!(c.errors().is_empty());
    }

    #[test]
    fn test_repeat_submit_ignored_while_submitted() {
        let mut h = Harness::new();
        let mut c = controller_with("Jo", "jo@example.com", "Hi", "Hello");
        assert_eq!(h.submit(&mut c), SubmissionResult::Accepted);
        assert_eq!(
            h.submit(&mut c),
            SubmissionResult::Rejected(Rejection::AlreadySubmitted)
        );
        assert_eq!(h.relay.sent.borrow().len(), 1);

        h.advance(&mut c, 2000);
        c.update_field(Field::Name, "Jo");
        c.update_field(Field::Email, "jo@example.com");
        c.update_field(Field::Subject, "Again");
        c.update_field(Field::Message, "Hello");
        assert_eq!(h.submit(&mut c), SubmissionResult::Accepted);
        assert_eq!(h.relay.sent.borrow().len(), 2);
    }

    #[test]
    fn test_foreign_timer_ignored() {
        let mut h = Harness::new();
        let mut c = controller_with("Jo", "jo@example.com", "Hi", "Hello");
        h.submit(&mut c);
        assert!(!c.on_timer(TimerId::Dismiss(1)));
        assert!(!c.on_timer(TimerId::FormReset(99)));
        assert_eq!(c.state(), SubmissionState::Submitted);
    }

    #[test]
    fn test_dispose_cancels_reset() {
        let mut h = Harness::new();
        let mut c = controller_with("Jo", "jo@example.com", "Hi", "Hello");
        h.submit(&mut c);
        c.dispose(&mut h.scheduler);
        h.toasts.dispose(&mut h.scheduler);
        assert_eq!(h.scheduler.pending_count(), 0);

        h.advance(&mut c, 5000);
        assert_eq!(c.state(), SubmissionState::Submitted);
        assert_eq!(c.value(Field::Name), "Jo");
    }

    #[test]
    fn test_field_names() {
        let names = Field::ALL.iter().map(|f| f.to_string()).collect::<Vec<_>>();
        assert_eq!(names, vec!["name", "email", "subject", "message"]);
    }
}
