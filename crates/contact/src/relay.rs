use serde::Serialize;

use crate::ValidSubmission;

/// Payload handed to the email relay for one submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelayMessage {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}

impl RelayMessage {
    pub fn new(submission: ValidSubmission, to_name: impl Into<String>) -> Self {
        Self {
            from_name: submission.name,
            from_email: submission.email,
            subject: submission.subject,
            message: submission.message,
            to_name: to_name.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("relay unreachable: {0}")]
    Transport(String),

    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("relay timed out")]
    Timeout,

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

/// External operation that delivers a contact message on behalf of the page.
///
/// Implementations own their timeouts; the controller awaits the call to
/// completion and treats every error the same way.
#[async_trait::async_trait]
pub trait Relay: Send + Sync {
    async fn send(&self, message: &RelayMessage) -> Result<(), SendError>;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}
