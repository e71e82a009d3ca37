use std::sync::{Arc, Mutex};

use portfolio_contact::{
    ContactFormController, Field, Notification, Notifier, Relay, RelayMessage, SendError, Settings,
};
use tokio::sync::Notify;

pub const FALLBACK: &str = "owner@portfolio.localhost";

pub fn settings() -> Settings {
    Settings {
        to_name: "Portfolio Owner".to_owned(),
        fallback_address: FALLBACK.to_owned(),
    }
}

#[derive(Default)]
pub struct RecordingRelay {
    pub sent: Mutex<Vec<RelayMessage>>,
    pub fail: bool,
}

impl RecordingRelay {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<RelayMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Relay for RecordingRelay {
    async fn send(&self, message: &RelayMessage) -> Result<(), SendError> {
        self.sent.lock().unwrap().push(message.clone());
        if self.fail {
            return Err(SendError::Rejected {
                status: 400,
                body: "The template ID is invalid".to_owned(),
            });
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Blocks inside `send` until released, so tests can observe the in-flight state.
#[derive(Default)]
pub struct GatedRelay {
    pub calls: Mutex<usize>,
    pub entered: Notify,
    pub release: Notify,
}

impl GatedRelay {
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl Relay for GatedRelay {
    async fn send(&self, _message: &RelayMessage) -> Result<(), SendError> {
        *self.calls.lock().unwrap() += 1;
        self.entered.notify_one();
        self.release.notified().await;

        Ok(())
    }

    fn name(&self) -> &'static str {
        "gated"
    }
}

#[derive(Default)]
pub struct RecordingNotifier(pub Mutex<Vec<Notification>>);

impl RecordingNotifier {
    pub fn all(&self) -> Vec<Notification> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.0.lock().unwrap().push(notification);
    }
}

#[allow(dead_code)]
pub fn controller(
    relay: Arc<dyn Relay>,
    notifier: Arc<RecordingNotifier>,
) -> ContactFormController {
    ContactFormController::new(relay, notifier, settings())
}

#[allow(dead_code)]
pub fn fill_jane(controller: &ContactFormController) {
    controller.set_field(Field::Name, "Jane Doe");
    controller.set_field(Field::Email, "jane@example.com");
    controller.set_field(Field::Subject, "Hello");
    controller.set_field(Field::Message, "Hi there");
}
