use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use strum::{AsRefStr, Display};
use validator::ValidateEmail;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub contact: ContactConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Recipient display name sent with every message
    pub to_name: String,
    /// Shown to visitors when the relay fails
    pub fallback_address: String,
    pub session_ttl_secs: u64,
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RelayKind {
    EmailJs,
    Smtp,
    #[default]
    Log,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RelayConfig {
    #[serde(default)]
    pub kind: RelayKind,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsConfig {
    #[serde(default = "default_emailjs_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
    /// Optional private key, required when the account enforces it
    #[serde(default)]
    pub private_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_emailjs_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            private_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_emailjs_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Mailbox that receives contact messages
    #[serde(default)]
    pub to_address: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from_address: default_from_address(),
            to_address: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

fn default_from_address() -> String {
    "noreply@portfolio.localhost".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProfileConfig {
    /// TOML file with page content; the built-in profile is used when unset
    #[serde(default)]
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PORTFOLIO__RELAY__KIND, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("contact.to_name", "Ruturaj Daphal")?
            .set_default("contact.fallback_address", "ruturajdaphal05@gmail.com")?
            .set_default("contact.session_ttl_secs", 1800)?
            .set_default("contact.sweep_interval_secs", 60)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.contact.to_name.trim().is_empty() {
            return Err("contact.to_name must not be empty".to_string());
        }
        if !self.contact.fallback_address.validate_email() {
            return Err(format!(
                "contact.fallback_address is not a valid email: {}",
                self.contact.fallback_address
            ));
        }
        if self.contact.session_ttl_secs == 0 || self.contact.sweep_interval_secs == 0 {
            return Err("contact session ttl and sweep interval must be positive".to_string());
        }

        match self.relay.kind {
            RelayKind::EmailJs => {
                let emailjs = &self.relay.emailjs;
                if emailjs.service_id.is_empty()
                    || emailjs.template_id.is_empty()
                    || emailjs.public_key.is_empty()
                {
                    return Err(
                        "emailjs relay requires service_id, template_id and public_key"
                            .to_string(),
                    );
                }
                if emailjs.timeout_secs == 0 {
                    return Err("relay.emailjs.timeout_secs must be positive".to_string());
                }
            }
            RelayKind::Smtp => {
                let smtp = &self.relay.smtp;
                if !smtp.to_address.validate_email() {
                    return Err("relay.smtp.to_address must be a valid email".to_string());
                }
                if !smtp.from_address.validate_email() {
                    return Err("relay.smtp.from_address must be a valid email".to_string());
                }
            }
            RelayKind::Log => {}
        }

        Ok(())
    }
}
