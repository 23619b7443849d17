//! SMS auto-replies through the Twilio messaging API

use async_trait::async_trait;
use jungmarker_contact::{MessageId, NotifyError, PhoneNumber, SmsSender};
use serde::Deserialize;

use crate::template::{AutoReplyTemplate, render};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SmsConfig {
    #[serde(default)]
    pub account_sid: String,
    #[serde(default)]
    pub auth_token: String,
    /// Sender number in E.164 form
    #[serde(default)]
    pub from_number: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
            api_url: default_api_url(),
        }
    }
}

impl SmsConfig {
    /// Auto-replies are only sent when every credential is present.
    pub fn is_configured(&self) -> bool {
        !self.account_sid.is_empty() && !self.auth_token.is_empty() && !self.from_number.is_empty()
    }

    pub fn messages_url(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            self.api_url.trim_end_matches('/'),
            self.account_sid
        )
    }
}

fn default_api_url() -> String {
    "https://api.twilio.com/2010-04-01".to_string()
}

#[derive(Deserialize)]
struct SentMessage {
    sid: MessageId,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

/// Sends auto-replies through the Twilio REST API.
#[derive(Clone)]
pub struct TwilioClient {
    client: reqwest::Client,
    url: String,
    account_sid: String,
    auth_token: String,
    from: String,
}

impl TwilioClient {
    pub fn new(config: &SmsConfig) -> Self {
        TwilioClient {
            client: reqwest::Client::new(),
            url: config.messages_url(),
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from: config.from_number.clone(),
        }
    }
}

#[async_trait]
impl SmsSender for TwilioClient {
    async fn send_sms(&self, to: &PhoneNumber, first_name: &str) -> Result<MessageId, NotifyError> {
        let body = render(AutoReplyTemplate { first_name })?;

        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("To", to.as_str()),
                ("From", self.from.as_str()),
                ("Body", body.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorResponse>(&text) {
                Ok(error) => error.message,
                Err(_) if text.trim().is_empty() => format!("Twilio responded with {status}"),
                Err(_) => text,
            };
            return Err(NotifyError::Rejected(message));
        }

        let sent: SentMessage = serde_json::from_str(&text)
            .map_err(|e| NotifyError::Transport(format!("unexpected Twilio response: {e}")))?;

        Ok(sent.sid)
    }
}
