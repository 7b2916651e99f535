//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// A direct channel name that does not identify a conversation partner
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectNameError {
    #[error("direct channel name is not two user ids: {name}")]
    Malformed { name: String },

    #[error("user {user_id} is not a participant of direct channel {name}")]
    NotAParticipant { name: String, user_id: Snowflake },

    #[error("direct channel {name} has no partner other than the current user")]
    SelfConversation { name: String },
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    DirectName(#[from] DirectNameError),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Invalid restriction level for {setting}: {value}")]
    InvalidRestriction { setting: &'static str, value: String },

    #[error("Invalid teammate name display: {0}")]
    InvalidNameDisplay(String),
}

impl DomainError {
    /// Get an error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::DirectName(DirectNameError::Malformed { .. }) => "MALFORMED_DIRECT_NAME",
            Self::DirectName(DirectNameError::NotAParticipant { .. }) => "NOT_A_PARTICIPANT",
            Self::DirectName(DirectNameError::SelfConversation { .. }) => "SELF_CONVERSATION",
            Self::InvalidLocale(_) => "INVALID_LOCALE",
            Self::InvalidRestriction { .. } => "INVALID_RESTRICTION",
            Self::InvalidNameDisplay(_) => "INVALID_NAME_DISPLAY",
        }
    }

    /// Check if this error comes from a configuration value
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidLocale(_) | Self::InvalidRestriction { .. } | Self::InvalidNameDisplay(_)
        )
    }
}
