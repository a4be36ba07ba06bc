use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use leptos::{prelude::*, task::spawn_local};

use super::contact::relay_contact;
use crate::contact::{
    ContactForm, Field, FormController, NotificationCenter, NotificationKind, Relay, Rejection,
    Scheduler, SubmissionResult, TimerId,
};

type FireFn = Arc<dyn Fn(TimerId) + Send + Sync>;

/// Browser timeouts keyed by [`TimerId`]; expiry is routed through `fire`.
#[derive(Clone)]
struct BrowserScheduler {
    handles: Arc<Mutex<HashMap<TimerId, TimeoutHandle>>>,
    fire: FireFn,
}

impl BrowserScheduler {
    fn new(fire: FireFn) -> Self {
        Self {
            handles: Arc::new(Mutex::new(HashMap::new())),
            fire,
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&mut self, timer: TimerId, delay: Duration) {
        let handles = self.handles.clone();
        let fire = self.fire.clone();
        let res = set_timeout_with_handle(
            move || {
                handles
                    .lock()
                    .expect("should be able to acquire lock")
                    .remove(&timer);
                fire(timer);
            },
            delay,
        );
        match res {
            Ok(handle) => {
                self.handles
                    .lock()
                    .expect("should be able to acquire lock")
                    .insert(timer, handle);
            }
            Err(e) => log::error!("couldn't schedule {timer:?}: {e:?}"),
        }
    }

    fn cancel(&mut self, timer: TimerId) {
        let handle = self
            .handles
            .lock()
            .expect("should be able to acquire lock")
            .remove(&timer);
        if let Some(handle) = handle {
            handle.clear();
        }
    }
}

/// Sends the form through the `relay_contact` server function without
/// waiting on it. Failures only reach the console.
struct ServerRelay;

impl Relay for ServerRelay {
    fn send(&self, form: &ContactForm) {
        let ContactForm {
            name,
            email,
            subject,
            message,
        } = form.clone();
        spawn_local(async move {
            if let Err(e) = relay_contact(name, email, subject, message).await {
                log::warn!("contact relay failed: {e}");
            }
        });
    }
}

#[derive(Clone, Copy)]
pub struct SiteState {
    pub form: RwSignal<FormController>,
    pub toasts: RwSignal<NotificationCenter>,
    timers: StoredValue<BrowserScheduler>,
}

impl SiteState {
    fn new() -> Self {
        let form = RwSignal::new(FormController::new());
        let toasts = RwSignal::new(NotificationCenter::new());
        let fire: FireFn = Arc::new(move |timer| match timer {
            TimerId::FormReset(_) => form.update(|f| {
                f.on_timer(timer);
            }),
            TimerId::Dismiss(_) => toasts.update(|t| {
                t.on_timer(timer);
            }),
        });
        Self {
            form,
            toasts,
            timers: StoredValue::new(BrowserScheduler::new(fire)),
        }
    }

    pub fn update_field(&self, field: Field, value: String) {
        self.form.update(|f| f.update_field(field, value));
    }

    pub fn submit(&self) -> SubmissionResult {
        let mut timers = self.timers.get_value();
        let mut res = SubmissionResult::Rejected(Rejection::ValidationFailed);
        self.toasts.update(|toasts| {
            self.form.update(|form| {
                res = form.submit(&ServerRelay, toasts, &mut timers);
            });
        });
        res
    }

    pub fn notify(&self, message: &str, kind: NotificationKind) {
        let mut timers = self.timers.get_value();
        self.toasts
            .update(|toasts| toasts.show(message, kind, &mut timers));
    }

    pub fn dismiss(&self) {
        self.toasts.update(|toasts| toasts.dismiss());
    }

    fn dispose(&self) {
        let Some(mut timers) = self.timers.try_get_value() else {
            return;
        };
        self.form.try_update_untracked(|f| f.dispose(&mut timers));
        self.toasts.try_update_untracked(|t| t.dispose(&mut timers));
    }
}

pub fn provide_site_state() -> SiteState {
    let state = SiteState::new();
    provide_context(state);
    on_cleanup(move || state.dispose());
    state
}

pub fn use_site_state() -> SiteState {
    expect_context::<SiteState>()
}
