use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AirtableConfig {
    /// Personal access token, sent as a bearer token
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_base")]
    pub base: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Status given to every new lead
    #[serde(default = "default_status")]
    pub status: String,
}

impl Default for AirtableConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base: default_base(),
            table: default_table(),
            api_url: default_api_url(),
            status: default_status(),
        }
    }
}

impl AirtableConfig {
    /// Endpoint creating rows in the configured table.
    pub fn table_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.api_url.trim_end_matches('/'),
            self.base,
            self.table
        )
    }
}

fn default_base() -> String {
    "appWApjlYYxfe3Vj2".to_string()
}

fn default_table() -> String {
    "tbl46E8jx9l8fQWay".to_string()
}

fn default_api_url() -> String {
    "https://api.airtable.com/v0".to_string()
}

fn default_status() -> String {
    "Cold/Long Term".to_string()
}
