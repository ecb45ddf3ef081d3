//! Client configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file).

use multiclient_core::ItemsHandlingFlags;
use std::env;

/// Main client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub env: Environment,
    pub connection: ConnectionSettings,
    pub transport: TransportConfig,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
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

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Parameters the client connects with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub game: String,
    pub tags: Vec<String>,
    pub items_handling: ItemsHandlingFlags,
    /// Fixed client identity; a fresh one is generated when absent
    pub uuid: Option<String>,
}

/// Buffer sizes of the in-process transport channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportConfig {
    pub outbound_buffer: usize,
    pub message_buffer: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            outbound_buffer: default_outbound_buffer(),
            message_buffer: default_message_buffer(),
        }
    }
}

// Default value functions
fn default_outbound_buffer() -> usize {
    64
}

fn default_message_buffer() -> usize {
    256
}

fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `MULTICLIENT_GAME` is missing or a value does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let items_handling = match lookup("MULTICLIENT_ITEMS_HANDLING") {
            Some(raw) => ItemsHandlingFlags::parse(&raw)
                .map_err(|_| ConfigError::InvalidValue("MULTICLIENT_ITEMS_HANDLING", raw))?,
            None => ItemsHandlingFlags::NO_ITEMS,
        };

        Ok(Self {
            env: lookup("MULTICLIENT_ENV")
                .and_then(|s| Environment::parse(&s))
                .unwrap_or_default(),
            connection: ConnectionSettings {
                game: lookup("MULTICLIENT_GAME")
                    .filter(|s| !s.is_empty())
                    .ok_or(ConfigError::MissingVar("MULTICLIENT_GAME"))?,
                tags: lookup("MULTICLIENT_TAGS")
                    .map(|s| parse_tags(&s))
                    .unwrap_or_default(),
                items_handling,
                uuid: lookup("MULTICLIENT_UUID").filter(|s| !s.is_empty()),
            },
            transport: TransportConfig {
                outbound_buffer: parse_buffer(&lookup, "MULTICLIENT_OUTBOUND_BUFFER")?
                    .unwrap_or_else(default_outbound_buffer),
                message_buffer: parse_buffer(&lookup, "MULTICLIENT_MESSAGE_BUFFER")?
                    .unwrap_or_else(default_message_buffer),
            },
        })
    }
}

fn parse_buffer<F>(lookup: &F, key: &'static str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(ConfigError::InvalidValue(key, raw)),
        },
        None => Ok(None),
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
