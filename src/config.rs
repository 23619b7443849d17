use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use jungmarker_airtable::AirtableConfig;
use jungmarker_notification::{EmailConfig, SmsConfig};
use serde::Deserialize;
use std::{env, io, path::Path};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub airtable: AirtableConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub sms: SmsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

// Flat variable names used by existing deployments
const LEGACY_ENV: [(&str, &str); 8] = [
    ("AIRTABLE_TOKEN", "airtable.token"),
    ("AIRTABLE_BASE", "airtable.base"),
    ("AIRTABLE_TABLE", "airtable.table"),
    ("GMAIL_USER", "email.smtp_username"),
    ("GMAIL_APP_PASSWORD", "email.smtp_password"),
    ("TWILIO_ACCOUNT_SID", "sms.account_sid"),
    ("TWILIO_AUTH_TOKEN", "sms.auth_token"),
    ("TWILIO_FROM_NUMBER", "sms.from_number"),
];

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (AIRTABLE_TOKEN, GMAIL_USER, TWILIO_ACCOUNT_SID, ...)
    /// 2. Environment variables (JUNGMARKER__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5001)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        for (var, key) in LEGACY_ENV {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        // Values stay strings so credentials and phone numbers keep their
        // exact text; numeric keys are converted during deserialization.
        builder = builder.add_source(Environment::with_prefix("JUNGMARKER").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// Loads variables from a `.env` file into the process environment,
    /// from `path` or else the working directory. Variables that are
    /// already set are kept. A missing file is not an error.
    pub fn load_env_file(path: Option<&Path>) -> Result<(), dotenv::Error> {
        let result = match path {
            Some(path) => dotenv::from_path(path),
            None => dotenv::dotenv().map(|_| ()),
        };

        match result {
            Err(dotenv::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            result => result,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Missing credentials. None of these stop the server; the affected
    /// collaborator fails or is skipped per request instead.
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = vec![];

        if self.airtable.token.is_empty() {
            warnings.push("AIRTABLE_TOKEN not set, lead records will be rejected");
        }
        if self.email.smtp_username.is_empty() {
            warnings.push("GMAIL_USER not set, lead notifications will fail");
        }
        if self.email.smtp_password.is_empty() {
            warnings.push("GMAIL_APP_PASSWORD not set, lead notifications will fail");
        }
        if !self.sms.is_configured() {
            warnings.push("Twilio credentials not set, SMS auto-replies are disabled");
        }

        warnings
    }
}
