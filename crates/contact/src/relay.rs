use std::sync::Arc;

use strum::Display;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::{ContactSubmission, Lead, LeadStore, Mailer, Result, SmsSender, normalize_phone};

/// Why a notification was not attempted.
#[derive(Display, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum SkipReason {
    BlankPhone,
    InvalidPhone,
    NotConfigured,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    Skipped(SkipReason),
    Failed(String),
}

/// Settled outcome of both notifications for one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchReport {
    pub email: Outcome,
    pub sms: Outcome,
}

/// Handle on the notifications spawned by [`Relay::submit`].
///
/// Dropping it leaves the notifications running in the background.
pub struct Dispatch(JoinHandle<DispatchReport>);

impl Dispatch {
    /// Waits for both notifications to settle. Returns `None` if the
    /// notification task panicked or was cancelled.
    pub async fn settled(self) -> Option<DispatchReport> {
        self.0.await.ok()
    }
}

/// Forwards contact submissions to the lead store, then notifies the
/// operator by email and the submitter by SMS.
#[derive(Clone)]
pub struct Relay {
    store: Arc<dyn LeadStore>,
    mailer: Arc<dyn Mailer>,
    sms: Option<Arc<dyn SmsSender>>,
}

impl Relay {
    /// `sms` is `None` when the messaging API is not configured, in which
    /// case auto-replies are skipped.
    pub fn new(
        store: Arc<dyn LeadStore>,
        mailer: Arc<dyn Mailer>,
        sms: Option<Arc<dyn SmsSender>>,
    ) -> Self {
        Self { store, mailer, sms }
    }

    /// Writes the lead to the store and, once that succeeds, starts the
    /// notifications without waiting for them.
    pub async fn submit(&self, submission: ContactSubmission) -> Result<Dispatch> {
        let lead = Lead::from(submission);

        let record_id = self.store.create_record(&lead).await.inspect_err(|e| {
            tracing::error!(error = %e, email = %lead.email, "Failed to add lead to store");
        })?;

        tracing::info!(
            record_id = %record_id,
            name = %lead.full_name(),
            email = %lead.email,
            lead_type = %lead.lead_type,
            "Lead added to store"
        );

        let task = notify(lead, self.mailer.clone(), self.sms.clone()).in_current_span();

        Ok(Dispatch(tokio::spawn(task)))
    }
}

async fn notify(
    lead: Lead,
    mailer: Arc<dyn Mailer>,
    sender: Option<Arc<dyn SmsSender>>,
) -> DispatchReport {
    let (email, sms) = futures::future::join(
        send_mail(&lead, mailer.as_ref()),
        send_sms(&lead, sender.as_deref()),
    )
    .await;

    DispatchReport { email, sms }
}

async fn send_mail(lead: &Lead, mailer: &dyn Mailer) -> Outcome {
    match mailer.send_mail(lead).await {
        Ok(()) => {
            tracing::info!(channel = "email", "Lead notification sent");
            Outcome::Sent
        }
        Err(e) => {
            tracing::error!(channel = "email", error = %e, "Lead notification failed");
            Outcome::Failed(e.to_string())
        }
    }
}

async fn send_sms(lead: &Lead, sender: Option<&dyn SmsSender>) -> Outcome {
    if lead.phone.trim().is_empty() {
        return Outcome::Skipped(SkipReason::BlankPhone);
    }

    let Some(to) = normalize_phone(&lead.phone) else {
        tracing::warn!(channel = "sms", phone = %lead.phone, "Could not normalize phone, skipping auto-reply");
        return Outcome::Skipped(SkipReason::InvalidPhone);
    };

    let Some(sender) = sender else {
        tracing::warn!(channel = "sms", "Messaging API not configured, skipping auto-reply");
        return Outcome::Skipped(SkipReason::NotConfigured);
    };

    match sender.send_sms(&to, &lead.first_name).await {
        Ok(message_id) => {
            tracing::info!(channel = "sms", to = %to, message_id = %message_id, "Auto-reply sent");
            Outcome::Sent
        }
        Err(e) => {
            tracing::error!(channel = "sms", to = %to, error = %e, "Auto-reply failed");
            Outcome::Failed(e.to_string())
        }
    }
}
