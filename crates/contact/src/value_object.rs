use std::str::FromStr;

use serde::Serialize;
use strum::{Display, EnumString};

/// Reason for contact selected on the form.
#[derive(EnumString, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Intent {
    Buy,
    Sell,
    Invest,
    Cma,
    #[default]
    Other,
}

impl Intent {
    /// Parses a form intent code. Codes are case-sensitive and anything
    /// unknown falls back to [`Intent::Other`].
    pub fn parse(code: &str) -> Self {
        Intent::from_str(code).unwrap_or_default()
    }
}

/// Lead type label as stored in the CRM.
#[derive(Display, Default, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LeadType {
    Buyer,
    Seller,
    Investor,
    #[strum(serialize = "CMA")]
    #[serde(rename = "CMA")]
    Cma,
    #[default]
    Other,
}

impl From<Intent> for LeadType {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Buy => LeadType::Buyer,
            Intent::Sell => LeadType::Seller,
            Intent::Invest => LeadType::Investor,
            Intent::Cma => LeadType::Cma,
            Intent::Other => LeadType::Other,
        }
    }
}
