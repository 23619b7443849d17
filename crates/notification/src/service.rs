//! Email notification service using lettre

use async_trait::async_trait;
use jungmarker_contact::{Lead, Mailer, NotifyError};
use lettre::{
    Address, Message, SmtpTransport, Transport,
    message::{Mailbox, header},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

use crate::template::{LeadNotificationTemplate, render};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Sender address, defaults to the SMTP username
    #[serde(default)]
    pub from_address: String,
    /// Operator receiving every lead notification
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_name: default_from_name(),
            from_address: String::new(),
            contact_address: default_contact_address(),
        }
    }
}

impl EmailConfig {
    pub fn has_credentials(&self) -> bool {
        !self.smtp_username.is_empty() && !self.smtp_password.is_empty()
    }

    fn sender_address(&self) -> &str {
        if self.from_address.is_empty() {
            &self.smtp_username
        } else {
            &self.from_address
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_from_name() -> String {
    "Nick Jungmarker Site".to_string()
}

fn default_contact_address() -> String {
    "nickjungmarker@lnf.com".to_string()
}

/// Subject line of the lead notification.
pub fn lead_subject(lead: &Lead) -> String {
    format!(
        "New Contact Form Lead — {} ({})",
        lead.full_name(),
        lead.lead_type
    )
}

/// Email service for sending lead notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from_name: String,
    from: String,
    to: String,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.has_credentials() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.sender_address(),
                "Email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        } else {
            tracing::warn!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        };

        Ok(Self {
            mailer,
            from_name: config.from_name.clone(),
            from: config.sender_address().to_owned(),
            to: config.contact_address.clone(),
        })
    }

    /// Builds the plaintext notification for `lead`.
    pub fn lead_message(&self, lead: &Lead) -> Result<Message, NotifyError> {
        let from = self
            .from
            .parse::<Address>()
            .map_err(|e| NotifyError::Message(format!("sender {:?}: {e}", self.from)))?;
        let to = self
            .to
            .parse::<Mailbox>()
            .map_err(|e| NotifyError::Message(format!("recipient {:?}: {e}", self.to)))?;

        Message::builder()
            .from(Mailbox::new(Some(self.from_name.clone()), from))
            .to(to)
            .subject(lead_subject(lead))
            .header(header::ContentType::TEXT_PLAIN)
            .body(render(LeadNotificationTemplate { lead })?)
            .map_err(|e| NotifyError::Message(e.to_string()))
    }
}

#[async_trait]
impl Mailer for EmailService {
    async fn send_mail(&self, lead: &Lead) -> Result<(), NotifyError> {
        let message = self.lead_message(lead)?;

        tracing::info!(to = %self.to, "Sending lead notification");

        // SmtpTransport blocks on network I/O
        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        Ok(())
    }
}
