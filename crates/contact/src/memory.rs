//! In-memory collaborators, used in place of the network-backed store and
//! notifiers when exercising the relay.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    Lead, LeadStore, Mailer, MessageId, NotifyError, PhoneNumber, RecordId, SmsSender, StoreError,
};

/// Keeps created records in a vector.
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<Vec<Lead>>>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store rejecting every write with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub async fn records(&self) -> Vec<Lead> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl LeadStore for MemoryStore {
    async fn create_record(&self, lead: &Lead) -> Result<RecordId, StoreError> {
        if let Some(message) = &self.failure {
            return Err(StoreError::Rejected(message.to_owned()));
        }

        let mut records = self.records.lock().await;
        records.push(lead.clone());

        Ok(format!("rec{:014}", records.len()))
    }
}

/// Records every lead it is asked to mail.
#[derive(Clone, Default)]
pub struct MemoryMailer {
    sent: Arc<Mutex<Vec<Lead>>>,
    failure: Option<String>,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer failing every send with `message`. Attempts are still
    /// recorded.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub async fn sent(&self) -> Vec<Lead> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send_mail(&self, lead: &Lead) -> Result<(), NotifyError> {
        self.sent.lock().await.push(lead.clone());

        match &self.failure {
            Some(message) => Err(NotifyError::Transport(message.to_owned())),
            None => Ok(()),
        }
    }
}

/// A text message handed to [`MemorySms`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentSms {
    pub to: PhoneNumber,
    pub first_name: String,
}

/// Records every auto-reply it is asked to send.
#[derive(Clone, Default)]
pub struct MemorySms {
    sent: Arc<Mutex<Vec<SentSms>>>,
    failure: Option<String>,
}

impl MemorySms {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender failing every message with `message`. Attempts are still
    /// recorded.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub async fn sent(&self) -> Vec<SentSms> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl SmsSender for MemorySms {
    async fn send_sms(&self, to: &PhoneNumber, first_name: &str) -> Result<MessageId, NotifyError> {
        let mut sent = self.sent.lock().await;
        sent.push(SentSms {
            to: to.clone(),
            first_name: first_name.to_owned(),
        });

        match &self.failure {
            Some(message) => Err(NotifyError::Rejected(message.to_owned())),
            None => Ok(format!("SM{:032}", sent.len())),
        }
    }
}
