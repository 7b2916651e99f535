//! Channel entity - a public channel, private channel, or direct conversation

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::UserStatus;
use crate::error::DirectNameError;
use crate::value_objects::Snowflake;

/// Separator between the two participant ids of a direct channel name
pub const DIRECT_NAME_SEPARATOR: &str = "__";

/// Channel type, serialized as its single-letter code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChannelType {
    /// Public channel, open to every team member
    #[default]
    Open,
    /// Private channel, invite only
    Private,
    /// Direct conversation between two users
    Direct,
    /// A type this crate does not know about yet
    Other(String),
}

impl ChannelType {
    /// Parse a type code (`O`, `P`, `D`); anything else is kept as `Other`
    pub fn from_code(code: &str) -> Self {
        Self::from(code.to_string())
    }

    /// Get the type code
    pub fn code(&self) -> &str {
        match self {
            Self::Open => "O",
            Self::Private => "P",
            Self::Direct => "D",
            Self::Other(code) => code,
        }
    }

    /// Sort bucket: public, then private, then direct, then anything else
    #[inline]
    pub fn rank(&self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Private => 1,
            Self::Direct => 2,
            Self::Other(_) => 3,
        }
    }

    /// Public and private channels are subject to restriction policy
    #[inline]
    pub fn is_channel_like(&self) -> bool {
        matches!(self, Self::Open | Self::Private)
    }
}

impl From<String> for ChannelType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "O" => Self::Open,
            "P" => Self::Private,
            "D" => Self::Direct,
            _ => Self::Other(code),
        }
    }
}

impl From<ChannelType> for String {
    fn from(channel_type: ChannelType) -> Self {
        match channel_type {
            ChannelType::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Channel entity
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Channel {
    /// Absent for placeholder direct channels that were never persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teammate_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub fake: bool,
    #[serde(default)]
    pub last_post_at: i64,
    #[serde(default)]
    pub total_msg_count: i64,
}

impl Channel {
    /// Create a public channel
    #[must_use]
    pub fn new_open(id: Snowflake, name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            display_name: display_name.into(),
            channel_type: ChannelType::Open,
            ..Self::default()
        }
    }

    /// Create a private channel
    #[must_use]
    pub fn new_private(
        id: Snowflake,
        name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            channel_type: ChannelType::Private,
            ..Self::new_open(id, name, display_name)
        }
    }

    /// Create a persisted direct channel between two users
    #[must_use]
    pub fn new_direct(id: Snowflake, user_id: Snowflake, other_user_id: Snowflake) -> Self {
        Self {
            id: Some(id),
            name: direct_channel_name(user_id, other_user_id),
            channel_type: ChannelType::Direct,
            ..Self::default()
        }
    }

    /// Create a placeholder direct channel for a conversation with no messages yet
    #[must_use]
    pub fn placeholder_direct(user_id: Snowflake, other_user_id: Snowflake) -> Self {
        Self {
            id: None,
            name: direct_channel_name(user_id, other_user_id),
            channel_type: ChannelType::Direct,
            fake: true,
            last_post_at: 0,
            total_msg_count: 0,
            ..Self::default()
        }
    }

    /// Copy of this channel carrying direct-conversation details
    #[must_use]
    pub fn with_direct_info(
        &self,
        display_name: impl Into<String>,
        teammate_id: Snowflake,
        status: UserStatus,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            teammate_id: Some(teammate_id),
            status: Some(status),
            ..self.clone()
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.channel_type == ChannelType::Open
    }

    #[inline]
    pub fn is_private(&self) -> bool {
        self.channel_type == ChannelType::Private
    }

    #[inline]
    pub fn is_direct(&self) -> bool {
        self.channel_type == ChannelType::Direct
    }

    /// Participants of a direct channel, decoded from its name
    pub fn direct_members(&self) -> Result<(Snowflake, Snowflake), DirectNameError> {
        direct_channel_members(&self.name)
    }

    /// Check if this is a direct channel between `self_id` and `user_id`
    pub fn is_direct_with(&self, self_id: Snowflake, user_id: Snowflake) -> bool {
        self.is_direct() && direct_partner_id(&self.name, self_id).is_ok_and(|id| id == user_id)
    }
}

/// Canonical name of the direct channel between two users
///
/// The smaller id comes first, so both participants derive the same name.
pub fn direct_channel_name(user_id: Snowflake, other_user_id: Snowflake) -> String {
    let (low, high) = if user_id <= other_user_id {
        (user_id, other_user_id)
    } else {
        (other_user_id, user_id)
    };
    format!("{low}{DIRECT_NAME_SEPARATOR}{high}")
}

/// Decode the two participant ids from a direct channel name
pub fn direct_channel_members(name: &str) -> Result<(Snowflake, Snowflake), DirectNameError> {
    let malformed = || DirectNameError::Malformed {
        name: name.to_string(),
    };

    let (first, second) = name.split_once(DIRECT_NAME_SEPARATOR).ok_or_else(malformed)?;
    let first = Snowflake::parse(first).map_err(|_| malformed())?;
    let second = Snowflake::parse(second).map_err(|_| malformed())?;
    Ok((first, second))
}

/// The participant of a direct channel that is not `self_id`
pub fn direct_partner_id(name: &str, self_id: Snowflake) -> Result<Snowflake, DirectNameError> {
    let (first, second) = direct_channel_members(name)?;
    match (first == self_id, second == self_id) {
        (true, true) => Err(DirectNameError::SelfConversation {
            name: name.to_string(),
        }),
        (true, false) => Ok(second),
        (false, true) => Ok(first),
        (false, false) => Err(DirectNameError::NotAParticipant {
            name: name.to_string(),
            user_id: self_id,
        }),
    }
}
