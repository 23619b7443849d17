use async_trait::async_trait;

use crate::{Lead, NotifyError, PhoneNumber};

/// Identifier assigned by the messaging API to a sent message.
pub type MessageId = String;

/// Sends the new-lead notification to the site operator.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_mail(&self, lead: &Lead) -> Result<(), NotifyError>;
}

/// Sends the auto-reply text message to the submitter.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send_sms(&self, to: &PhoneNumber, first_name: &str)
    -> Result<MessageId, NotifyError>;
}
