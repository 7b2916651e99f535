//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use sidebar_core::{
    ChannelPolicy, ChannelRestrictions, DomainError, Locale, RestrictionLevel,
    TeammateNameDisplay,
};
use std::env;
use tracing::{debug, warn};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    #[serde(default)]
    pub sidebar: SidebarConfig,
    #[serde(default)]
    pub policy: ChannelPolicy,
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
    /// Parse `development`, `staging` or `production` (any case)
    pub fn from_config_value(value: &str) -> Option<Self> {
        [Self::Development, Self::Staging, Self::Production]
            .into_iter()
            .find(|env| value.trim().eq_ignore_ascii_case(env.as_str()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Sidebar presentation settings
#[derive(Debug, Clone, Deserialize)]
pub struct SidebarConfig {
    /// Locale used when no locale provider is injected
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub teammate_name_display: TeammateNameDisplay,
    /// Label for direct conversations whose partner has no loaded profile
    #[serde(default = "default_unknown_user_label")]
    pub unknown_user_label: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            teammate_name_display: TeammateNameDisplay::default(),
            unknown_user_label: default_unknown_user_label(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "sidebar".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_unknown_user_label() -> String {
    "Unknown user".to_string()
}

/// Environment variable for each restriction setting
const RESTRICTION_VARS: [&str; 6] = [
    "RESTRICT_PUBLIC_CHANNEL_CREATION",
    "RESTRICT_PRIVATE_CHANNEL_CREATION",
    "RESTRICT_PUBLIC_CHANNEL_MANAGEMENT",
    "RESTRICT_PRIVATE_CHANNEL_MANAGEMENT",
    "RESTRICT_PUBLIC_CHANNEL_DELETION",
    "RESTRICT_PRIVATE_CHANNEL_DELETION",
];

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but invalid. Unknown restriction
    /// levels are not errors; they are logged and treated as unrestricted.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => warn!(error = %e, "Ignoring unreadable .env file"),
        }

        Self::from_source(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source
    pub fn from_source<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = match get("SIDEBAR_LOCALE") {
            Some(tag) => Locale::parse(&tag)?,
            None => Locale::default(),
        };

        let teammate_name_display = match get("TEAMMATE_NAME_DISPLAY") {
            Some(value) => TeammateNameDisplay::from_config_value(&value)
                .ok_or(DomainError::InvalidNameDisplay(value))?,
            None => TeammateNameDisplay::default(),
        };

        let licensed = match get("LICENSED") {
            Some(value) => parse_bool(&value)
                .ok_or_else(|| ConfigError::InvalidValue("LICENSED", value))?,
            None => false,
        };

        let [public_creation, private_creation, public_management, private_management, public_deletion, private_deletion] =
            RESTRICTION_VARS.map(|var| restriction_from(var, get(var)));

        Ok(Self {
            app: AppSettings {
                name: get("APP_NAME").unwrap_or_else(default_app_name),
                env: get("APP_ENV")
                    .as_deref()
                    .and_then(Environment::from_config_value)
                    .unwrap_or_default(),
            },
            sidebar: SidebarConfig {
                locale,
                teammate_name_display,
                unknown_user_label: get("UNKNOWN_USER_LABEL")
                    .filter(|label| !label.trim().is_empty())
                    .unwrap_or_else(default_unknown_user_label),
            },
            policy: ChannelPolicy {
                licensed,
                restrictions: ChannelRestrictions {
                    public_channel_creation: public_creation,
                    private_channel_creation: private_creation,
                    public_channel_management: public_management,
                    private_channel_management: private_management,
                    public_channel_deletion: public_deletion,
                    private_channel_deletion: private_deletion,
                },
            },
        })
    }
}

/// Unknown restriction values fail open to `Unrestricted`
fn restriction_from(setting: &'static str, value: Option<String>) -> RestrictionLevel {
    let Some(value) = value else {
        return RestrictionLevel::Unrestricted;
    };

    RestrictionLevel::from_config_value(&value).unwrap_or_else(|| {
        let err = DomainError::InvalidRestriction { setting, value };
        warn!(error = %err, "Treating unknown restriction level as unrestricted");
        RestrictionLevel::Unrestricted
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
