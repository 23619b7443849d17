use async_trait::async_trait;
use jungmarker_contact::{Lead, LeadStore, LeadType, RecordId, StoreError};
use serde::{Deserialize, Serialize};

use crate::AirtableConfig;

#[derive(Serialize)]
struct CreateRecord<'a> {
    fields: RecordFields<'a>,
}

#[derive(Serialize)]
struct RecordFields<'a> {
    #[serde(rename = "First Name")]
    first_name: &'a str,
    #[serde(rename = "Last Name")]
    last_name: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "Phone")]
    phone: &'a str,
    #[serde(rename = "Type")]
    lead_type: LeadType,
    #[serde(rename = "Message")]
    message: &'a str,
    #[serde(rename = "Status")]
    status: &'a str,
}

#[derive(Deserialize)]
struct CreatedRecord {
    id: RecordId,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

// The API reports errors either as an object or as a bare code.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Object { message: String },
    Code(String),
}

/// Lead store backed by an Airtable table.
#[derive(Clone)]
pub struct AirtableClient {
    client: reqwest::Client,
    url: String,
    token: String,
    status: String,
}

impl AirtableClient {
    pub fn new(config: &AirtableConfig) -> Self {
        AirtableClient {
            client: reqwest::Client::new(),
            url: config.table_url(),
            token: config.token.clone(),
            status: config.status.clone(),
        }
    }
}

#[async_trait]
impl LeadStore for AirtableClient {
    async fn create_record(&self, lead: &Lead) -> Result<RecordId, StoreError> {
        let request = CreateRecord {
            fields: RecordFields {
                first_name: &lead.first_name,
                last_name: &lead.last_name,
                email: &lead.email,
                phone: &lead.phone,
                lead_type: lead.lead_type,
                message: &lead.message,
                status: &self.status,
            },
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(status = %status, body = %body, "Airtable rejected record");
            return Err(StoreError::Rejected(error_message(&body, status)));
        }

        let record: CreatedRecord = serde_json::from_str(&body)
            .map_err(|e| StoreError::Transport(format!("unexpected Airtable response: {e}")))?;

        Ok(record.id)
    }
}

fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            error: ErrorDetail::Object { message },
        }) => message,
        Ok(ErrorResponse {
            error: ErrorDetail::Code(code),
        }) => code,
        Err(_) if body.trim().is_empty() => format!("Airtable responded with {status}"),
        Err(_) => body.to_owned(),
    }
}
