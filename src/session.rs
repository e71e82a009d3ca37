//! Per-visitor form sessions.
//!
//! Each visitor owns one [`ContactFormController`] identified by a cookie.
//! Sessions that stay idle longer than the configured TTL are discarded by
//! the [`SessionSweeper`].

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use portfolio_contact::{ContactFormController, Notification, Notifier, Relay, Settings};
use tokio::task::JoinHandle;

pub const SESSION_COOKIE: &str = "portfolio_session";

/// Notifications waiting to be rendered for one visitor.
#[derive(Default)]
pub struct ToastQueue(Mutex<Vec<Notification>>);

impl ToastQueue {
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

pub struct FormSession {
    pub id: String,
    pub controller: ContactFormController,
    pub toasts: Arc<ToastQueue>,
}

struct Entry {
    session: Arc<FormSession>,
    last_seen: Instant,
}

pub struct FormSessions {
    relay: Arc<dyn Relay>,
    settings: Settings,
    ttl: Duration,
    entries: Mutex<HashMap<String, Entry>>,
}

impl FormSessions {
    pub fn new(relay: Arc<dyn Relay>, settings: Settings, ttl: Duration) -> Self {
        Self {
            relay,
            settings,
            ttl,
            entries: Mutex::default(),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the visitor's session, starting a fresh one when the id is
    /// missing or expired.
    pub fn get_or_create(&self, id: Option<&str>) -> Arc<FormSession> {
        let mut entries = self.entries();

        if let Some(entry) = id.and_then(|id| entries.get_mut(id)) {
            entry.last_seen = Instant::now();
            return entry.session.clone();
        }

        let toasts = Arc::new(ToastQueue::default());
        let session = Arc::new(FormSession {
            id: ulid::Ulid::new().to_string(),
            controller: ContactFormController::new(
                self.relay.clone(),
                toasts.clone(),
                self.settings.clone(),
            ),
            toasts,
        });

        tracing::debug!(session = %session.id, "form session started");

        entries.insert(
            session.id.clone(),
            Entry {
                session: session.clone(),
                last_seen: Instant::now(),
            },
        );

        session
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }

    /// Drops sessions idle for longer than the TTL. A session with a send in
    /// flight is kept until the send resolves.
    pub fn sweep_at(&self, now: Instant) -> usize {
        let mut entries = self.entries();
        let before = entries.len();

        entries.retain(|_, entry| {
            entry.session.controller.is_busy()
                || now.saturating_duration_since(entry.last_seen) <= self.ttl
        });

        before - entries.len()
    }
}

/// Background task that periodically discards idle sessions.
///
/// Started explicitly with [`SessionSweeper::start`]; the task is stopped by
/// [`SessionSweeper::stop`] or when the sweeper is dropped.
pub struct SessionSweeper {
    handle: Option<JoinHandle<()>>,
}

impl SessionSweeper {
    pub fn start(sessions: Arc<FormSessions>, every: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                let removed = sessions.sweep();
                if removed > 0 {
                    tracing::debug!(removed, remaining = sessions.len(), "form sessions swept");
                }
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub async fn stop(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            let _ = handle.await;
        }
        tracing::debug!("session sweeper stopped");
    }
}

impl Drop for SessionSweeper {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
