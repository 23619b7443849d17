use serde::Deserialize;

use crate::{Intent, LeadType, RelayError};

/// Contact form payload as posted by the site. Every field is optional on
/// the wire and defaults to an empty string.
#[derive(Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub intent: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn from_json(body: &[u8]) -> Result<Self, RelayError> {
        serde_json::from_slice(body).map_err(|e| RelayError::InvalidPayload(e.to_string()))
    }
}

/// Splits "First Last" into its first token and the remaining tokens.
pub fn split_name(name: &str) -> (String, String) {
    let mut parts = name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_owned();
    let last = parts.collect::<Vec<_>>().join(" ");

    (first, last)
}

/// A submission with its derived CRM fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Lead {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub lead_type: LeadType,
    pub message: String,
}

impl Lead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<ContactSubmission> for Lead {
    fn from(submission: ContactSubmission) -> Self {
        let (first_name, last_name) = split_name(&submission.name);

        Lead {
            first_name,
            last_name,
            email: submission.email,
            phone: submission.phone,
            lead_type: Intent::parse(&submission.intent).into(),
            message: submission.message,
        }
    }
}
