use std::time::Duration;

use super::timer::{Scheduler, TimerId};

pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Holds the single toast. Each `show` restarts the dismiss timer.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    pending: Option<TimerId>,
    generation: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn message(&self) -> &str {
        self.current.as_ref().map_or("", |n| n.message.as_str())
    }

    pub fn kind(&self) -> Option<NotificationKind> {
        self.current.as_ref().map(|n| n.kind)
    }

    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        scheduler: &mut impl Scheduler,
    ) {
        if let Some(prev) = self.pending.take() {
            scheduler.cancel(prev);
        }
        self.generation += 1;
        let timer = TimerId::Dismiss(self.generation);
        self.current = Some(Notification {
            message: message.into(),
            kind,
        });
        self.pending = Some(timer);
        scheduler.schedule(timer, DISMISS_AFTER);
        log::debug!("showing {:?} notification", kind);
    }

    pub fn info(&mut self, message: impl Into<String>, scheduler: &mut impl Scheduler) {
        self.show(message, NotificationKind::Info, scheduler);
    }

    pub fn success(&mut self, message: impl Into<String>, scheduler: &mut impl Scheduler) {
        self.show(message, NotificationKind::Success, scheduler);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
        self.pending = None;
    }

    pub fn on_timer(&mut self, timer: TimerId) -> bool {
        if self.pending != Some(timer) {
            return false;
        }
        self.dismiss();
        true
    }

    pub fn dispose(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(timer) = self.pending.take() {
            scheduler.cancel(timer);
        }
    }
}
