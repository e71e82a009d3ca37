use serde::Serialize;
use strum::{AsRefStr, Display};

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn sent() -> Self {
        Self {
            title: "Message sent!".to_owned(),
            description: "Thank you for reaching out. I'll get back to you soon.".to_owned(),
            kind: NotificationKind::Success,
        }
    }

    pub fn failed(fallback_address: &str) -> Self {
        Self {
            title: "Failed to send message".to_owned(),
            description: format!(
                "Please try again or email me directly at {fallback_address}."
            ),
            kind: NotificationKind::Error,
        }
    }
}

/// Channel responsible for showing transient feedback to the visitor.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
