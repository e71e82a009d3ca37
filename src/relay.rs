//! Concrete email relays behind the contact form.

use std::sync::Arc;

use portfolio_contact::{Relay, RelayMessage, SendError};

use crate::config::{Config, RelayKind};

mod emailjs;
mod smtp;

pub use emailjs::EmailJsRelay;
pub use smtp::SmtpRelay;

/// Builds the relay selected by `relay.kind`.
pub fn from_config(config: &Config) -> anyhow::Result<Arc<dyn Relay>> {
    let relay: Arc<dyn Relay> = match config.relay.kind {
        RelayKind::EmailJs => Arc::new(EmailJsRelay::new(config.relay.emailjs.clone())?),
        RelayKind::Smtp => Arc::new(SmtpRelay::new(&config.relay.smtp)?),
        RelayKind::Log => Arc::new(LogRelay),
    };

    tracing::info!(relay = relay.name(), "Contact relay configured");

    Ok(relay)
}

/// Development relay: logs the envelope and reports success.
pub struct LogRelay;

#[async_trait::async_trait]
impl Relay for LogRelay {
    async fn send(&self, message: &RelayMessage) -> Result<(), SendError> {
        tracing::info!(
            from_name = %message.from_name,
            from_email = %message.from_email,
            subject = %message.subject,
            to_name = %message.to_name,
            message_len = message.message.chars().count(),
            "Contact message accepted by log relay"
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
