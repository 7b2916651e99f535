//! User entities - profiles, presence status and team membership

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// User presence status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// User is online and active
    Online,
    /// User is away from keyboard
    Away,
    /// Do not disturb
    Dnd,
    /// User is offline, or no presence is known
    #[default]
    Offline,
}

impl UserStatus {
    /// Check if this status should be shown as present
    #[must_use]
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Offline)
    }

    /// Parse a presence string, treating anything unknown as offline
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Away => write!(f, "away"),
            Self::Dnd => write!(f, "dnd"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "away" => Ok(Self::Away),
            "dnd" => Ok(Self::Dnd),
            "offline" => Ok(Self::Offline),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}

/// How a teammate's name is shown in direct-conversation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeammateNameDisplay {
    /// Always the username
    #[default]
    Username,
    /// Nickname if set, else full name, else username
    NicknameFullName,
    /// Full name if set, else username
    FullName,
}

impl TeammateNameDisplay {
    /// Parse a configuration value
    pub fn from_config_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "username" => Some(Self::Username),
            "nickname_full_name" => Some(Self::NicknameFullName),
            "full_name" => Some(Self::FullName),
            _ => None,
        }
    }
}

/// Public profile of a user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Snowflake,
    pub username: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl UserProfile {
    /// Create a profile with only a username
    pub fn new(id: Snowflake, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            ..Self::default()
        }
    }

    /// "First Last", or whichever part is set
    pub fn full_name(&self) -> Option<String> {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        (!full.is_empty()).then(|| full.to_string())
    }

    /// Name to show according to the display setting
    pub fn display_name(&self, display: TeammateNameDisplay) -> String {
        let preferred = match display {
            TeammateNameDisplay::Username => None,
            TeammateNameDisplay::NicknameFullName => {
                let nickname = self.nickname.trim();
                if nickname.is_empty() {
                    self.full_name()
                } else {
                    Some(nickname.to_string())
                }
            }
            TeammateNameDisplay::FullName => self.full_name(),
        };
        preferred.unwrap_or_else(|| self.username.clone())
    }
}

/// A user's relationship to a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamMembership {
    /// Active member of the team
    Active,
    /// Known user who is not (or no longer) an active member
    NotMember,
    /// Membership has not been loaded
    #[default]
    Unknown,
}
