//! Client configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file).

use serde::Deserialize;
use status_core::{Emojiset, UserId};
use std::env;

/// Main client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub account: AccountConfig,
    pub display: DisplayConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Read `APP_ENV` (after `.env`), falling back to development
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        env::var("APP_ENV")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

/// Chat server the client talks to
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Base URL, e.g. `https://chat.example.com`
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ServerConfig {
    /// Join the base URL with an API path such as `/json/settings`
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Credentials and identity of the current user
#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
    pub email: String,
    pub api_key: String,
    pub user_id: UserId,
}

/// Display preferences that affect cached rendering info
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub emojiset: Emojiset,
}

// Default value functions
fn default_app_name() -> String {
    "status-client".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::MissingVar(key));

        let url = required("STATUS_SERVER_URL")?;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue("STATUS_SERVER_URL", url));
        }

        let user_id = required("STATUS_USER_ID")?;
        let user_id = UserId::parse(&user_id)
            .map_err(|_| ConfigError::InvalidValue("STATUS_USER_ID", user_id))?;

        let emojiset = match lookup("STATUS_EMOJISET") {
            Some(s) => s
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STATUS_EMOJISET", s))?,
            None => Emojiset::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                url,
                timeout_secs: lookup("STATUS_HTTP_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_timeout_secs),
            },
            account: AccountConfig {
                email: required("STATUS_EMAIL")?,
                api_key: required("STATUS_API_KEY")?,
                user_id,
            },
            display: DisplayConfig { emojiset },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
