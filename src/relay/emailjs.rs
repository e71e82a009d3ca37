use std::time::Duration;

use portfolio_contact::{Relay, RelayMessage, SendError};
use reqwest::Client;
use serde::Serialize;

use crate::config::EmailJsConfig;

/// Hosted email API that sends a templated message without a custom backend.
pub struct EmailJsRelay {
    http: Client,
    config: EmailJsConfig,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a RelayMessage,
}

impl EmailJsRelay {
    pub fn new(config: EmailJsConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }
}

fn transport_error(err: reqwest::Error) -> SendError {
    if err.is_timeout() {
        SendError::Timeout
    } else {
        SendError::Transport(err.to_string())
    }
}

#[async_trait::async_trait]
impl Relay for EmailJsRelay {
    async fn send(&self, message: &RelayMessage) -> Result<(), SendError> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: Some(self.config.private_key.as_str()).filter(|k| !k.is_empty()),
            template_params: message,
        };

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SendError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "emailjs"
    }
}
