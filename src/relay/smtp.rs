//! SMTP relay using lettre
use std::time::Duration;

use lettre::{
    Address, Message, SmtpTransport, Transport,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use portfolio_contact::{Relay, RelayMessage, SendError};
use tracing::info;

use crate::config::SmtpConfig;

/// Delivers contact messages to a fixed mailbox through an SMTP server.
#[derive(Clone)]
pub struct SmtpRelay {
    mailer: SmtpTransport,
    from: Mailbox,
    to: Address,
}

impl SmtpRelay {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let timeout = Some(Duration::from_secs(config.timeout_secs));

        let mailer = if config.username.is_empty() || config.password.is_empty() {
            info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.host)
                .port(config.port)
                .timeout(timeout)
                .build()
        } else {
            info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                from = %config.from_address,
                "SMTP relay initialized with authentication and STARTTLS"
            );
            let creds = Credentials::new(config.username.clone(), config.password.clone());
            SmtpTransport::starttls_relay(&config.host)?
                .port(config.port)
                .credentials(creds)
                .timeout(timeout)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.parse()?,
            to: config.to_address.parse()?,
        })
    }

    fn build_message(&self, message: &RelayMessage) -> Result<Message, SendError> {
        let reply_to = Mailbox::new(
            Some(message.from_name.clone()),
            message
                .from_email
                .parse()
                .map_err(|e| SendError::Unknown(anyhow::anyhow!("invalid reply-to: {e}")))?,
        );

        let body = format!(
            "New message from the portfolio contact form\n\
             ============================================\n\n\
             From: {} <{}>\n\
             Subject: {}\n\n\
             {}\n",
            message.from_name, message.from_email, message.subject, message.message
        );

        Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(Mailbox::new(Some(message.to_name.clone()), self.to.clone()))
            .subject(format!("[Portfolio] {}", message.subject))
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| SendError::Unknown(e.into()))
    }
}

#[async_trait::async_trait]
impl Relay for SmtpRelay {
    async fn send(&self, message: &RelayMessage) -> Result<(), SendError> {
        let email = self.build_message(message)?;
        let mailer = self.mailer.clone();

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| SendError::Unknown(e.into()))?
            .map_err(|e| {
                if e.is_permanent() {
                    SendError::Rejected {
                        status: e
                            .status()
                            .and_then(|code| code.to_string().parse().ok())
                            .unwrap_or_default(),
                        body: e.to_string(),
                    }
                } else {
                    SendError::Transport(e.to_string())
                }
            })?;

        Ok(())
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}
