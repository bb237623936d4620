//! Notifier
//!
//! Stacked, dismissible toast messages that expire on their own.

use std::time::Duration;

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "toast toast-info",
            Severity::Success => "toast toast-success",
            Severity::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Ordered toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Reactive toast handle provided via context
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<ToastQueue>,
    lifetime: StoredValue<Duration>,
}

impl Notifier {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            lifetime: StoredValue::new(lifetime),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.toasts().to_vec())
    }

    pub fn show(&self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        log::info!("[TOAST] {:?}: {}", severity, message);
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(severity, message));

        schedule_expiry(self.queue, id, self.lifetime.get_value());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(Severity::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Severity::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Severity::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.dismiss(id));
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_expiry(queue: RwSignal<ToastQueue>, id: u64, lifetime: Duration) {
    gloo_timers::callback::Timeout::new(lifetime.as_millis() as u32, move || {
        // The app may have been torn down meanwhile
        let _ = queue.try_update(|queue| queue.dismiss(id));
    })
    .forget();
}

/// No browser timers off wasm: toasts stay until dismissed
#[cfg(not(target_arch = "wasm32"))]
fn schedule_expiry(_queue: RwSignal<ToastQueue>, _id: u64, _lifetime: Duration) {}
