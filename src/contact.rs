//! Contact form state and the toast shown after user actions.
//!
//! Both pieces are plain state machines. Deferred work goes through a
//! [`Scheduler`] and comes back via `on_timer`, so the same code runs under
//! browser timeouts and under [`ManualScheduler`] in tests.

mod form;
mod notification;
mod timer;

pub use form::{
    is_valid_email, ContactForm, Field, FieldErrors, FormController, Rejection, SubmissionResult,
    SubmissionState, Validation, RESET_AFTER, SUCCESS_MESSAGE,
};
pub use notification::{Notification, NotificationCenter, NotificationKind, DISMISS_AFTER};
pub use timer::{ManualScheduler, Scheduler, TimerId};

// fire-and-forget: the outcome never comes back to the caller
pub trait Relay {
    fn send(&self, form: &ContactForm);
}
