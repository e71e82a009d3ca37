use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use strum::{AsRefStr, Display};
use tracing::{debug, info, warn};

use crate::{
    ContactSubmission, Field, FieldErrors, Notification, Notifier, Relay, RelayMessage,
};

/// Fixed identities the controller is initialized with.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Recipient display name passed to the relay with every message.
    pub to_name: String,
    /// Address shown to the visitor when the relay fails.
    pub fallback_address: String,
}

#[derive(Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Submitting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Failure(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A send is already in flight, nothing happened.
    Busy,
    /// Validation failed, nothing was sent.
    Invalid(FieldErrors),
    /// The relay was called once and one notification was emitted.
    Completed(SubmissionResult),
}

#[derive(Default)]
struct Inner {
    state: FormState,
    fields: ContactSubmission,
    errors: FieldErrors,
}

pub struct ContactFormController {
    relay: Arc<dyn Relay>,
    notifier: Arc<dyn Notifier>,
    settings: Settings,
    inner: Mutex<Inner>,
}

impl ContactFormController {
    pub fn new(relay: Arc<dyn Relay>, notifier: Arc<dyn Notifier>, settings: Settings) -> Self {
        Self {
            relay,
            notifier,
            settings,
            inner: Mutex::default(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> FormState {
        self.lock().state
    }

    pub fn is_busy(&self) -> bool {
        self.state() == FormState::Submitting
    }

    pub fn field(&self, field: Field) -> String {
        self.lock().fields.get(field).to_owned()
    }

    pub fn fields(&self) -> ContactSubmission {
        self.lock().fields.clone()
    }

    pub fn errors(&self) -> FieldErrors {
        self.lock().errors.clone()
    }

    /// Updates one field and drops the message attached to it, if any.
    /// Ignored while a send is in flight.
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let mut inner = self.lock();
        if inner.state == FormState::Submitting {
            return;
        }
        inner.fields.set(field, value);
        inner.errors.remove(&field);
    }

    /// Replaces every field. Ignored while a send is in flight.
    pub fn set_fields(&self, submission: ContactSubmission) {
        let mut inner = self.lock();
        if inner.state == FormState::Submitting {
            return;
        }
        inner.fields = submission;
        inner.errors.clear();
    }

    /// Runs one submission attempt with the current fields.
    ///
    /// The relay error never escapes: it is logged and turned into the failure
    /// notification. While the relay call is pending every other call returns
    /// [`SubmitOutcome::Busy`].
    pub async fn submit(&self) -> SubmitOutcome {
        self.run(None).await
    }

    /// Replaces the fields and submits them, as one step.
    ///
    /// When a send is already in flight the fields are left untouched and
    /// [`SubmitOutcome::Busy`] is returned.
    pub async fn submit_with(&self, submission: ContactSubmission) -> SubmitOutcome {
        self.run(Some(submission)).await
    }

    async fn run(&self, submission: Option<ContactSubmission>) -> SubmitOutcome {
        let message = {
            let mut inner = self.lock();
            if inner.state != FormState::Idle {
                debug!(state = %inner.state, "submit ignored, send in flight");
                return SubmitOutcome::Busy;
            }

            if let Some(submission) = submission {
                inner.fields = submission;
            }

            inner.state = FormState::Validating;
            match inner.fields.validate() {
                Ok(valid) => {
                    inner.errors.clear();
                    inner.state = FormState::Submitting;
                    RelayMessage::new(valid, self.settings.to_name.as_str())
                }
                Err(errors) => {
                    debug!(fields = ?errors.keys().collect::<Vec<_>>(), "submission rejected");
                    inner.errors = errors.clone();
                    inner.state = FormState::Idle;
                    return SubmitOutcome::Invalid(errors);
                }
            }
        };

        let in_flight = InFlight { controller: self };
        let relay = self.relay.name();

        let (result, notification) = match self.relay.send(&message).await {
            Ok(()) => {
                info!(relay, "contact message sent");
                (SubmissionResult::Success, Notification::sent())
            }
            Err(err) => {
                warn!(relay, error = %err, "contact message failed");
                (
                    SubmissionResult::Failure(err.to_string()),
                    Notification::failed(&self.settings.fallback_address),
                )
            }
        };

        in_flight.finish(result == SubmissionResult::Success, notification);

        SubmitOutcome::Completed(result)
    }
}

/// Leaves Submitting once the attempt is over, or if the relay panics.
struct InFlight<'a> {
    controller: &'a ContactFormController,
}

impl InFlight<'_> {
    /// Queues the notification before the busy flag drops.
    fn finish(self, sent: bool, notification: Notification) {
        if sent {
            self.controller.lock().fields.clear();
        }
        self.controller.notifier.notify(notification);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut inner = self.controller.lock();
        if inner.state == FormState::Submitting {
            inner.state = FormState::Idle;
        }
    }
}
