//! Channel restriction policy
//!
//! A licensed deployment can restrict who may create, manage or delete public
//! and private channels. Each (action, channel type) pair carries its own
//! [`RestrictionLevel`]; unlicensed deployments are never restricted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::ChannelType;

/// Who is allowed to perform a restricted channel action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RestrictionLevel {
    /// Any member may perform the action
    #[default]
    Unrestricted,
    /// Team admins (and above) only
    TeamAdminRequired,
    /// System admins only
    SystemAdminRequired,
}

impl RestrictionLevel {
    /// Parse a configuration value (`all`, `team_admin`, `system_admin`)
    ///
    /// Returns `None` for unrecognized values so callers can decide how to report them.
    pub fn from_config_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" | "unrestricted" => Some(Self::Unrestricted),
            "team_admin" => Some(Self::TeamAdminRequired),
            "system_admin" => Some(Self::SystemAdminRequired),
            _ => None,
        }
    }

    /// Configuration value for this level
    pub fn as_config_value(self) -> &'static str {
        match self {
            Self::Unrestricted => "all",
            Self::TeamAdminRequired => "team_admin",
            Self::SystemAdminRequired => "system_admin",
        }
    }

    /// Check whether a user with the given roles passes this level
    pub fn permits(self, is_team_admin: bool, is_system_admin: bool) -> bool {
        if self == Self::SystemAdminRequired && !is_system_admin {
            return false;
        }
        if self == Self::TeamAdminRequired && !is_team_admin {
            return false;
        }
        true
    }
}

// Unknown values fail open
impl From<String> for RestrictionLevel {
    fn from(value: String) -> Self {
        Self::from_config_value(&value).unwrap_or_default()
    }
}

impl From<RestrictionLevel> for String {
    fn from(level: RestrictionLevel) -> Self {
        level.as_config_value().to_string()
    }
}

impl fmt::Display for RestrictionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_config_value())
    }
}

/// A restrictable channel action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelAction {
    Create,
    Manage,
    Delete,
}

impl fmt::Display for ChannelAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Manage => write!(f, "manage"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Per-action, per-type restriction table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelRestrictions {
    pub public_channel_creation: RestrictionLevel,
    pub private_channel_creation: RestrictionLevel,
    pub public_channel_management: RestrictionLevel,
    pub private_channel_management: RestrictionLevel,
    pub public_channel_deletion: RestrictionLevel,
    pub private_channel_deletion: RestrictionLevel,
}

/// License and restriction snapshot used by permission gating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelPolicy {
    pub licensed: bool,
    pub restrictions: ChannelRestrictions,
}

impl ChannelPolicy {
    /// Policy for an unlicensed deployment
    pub fn unlicensed() -> Self {
        Self::default()
    }

    /// Policy for a licensed deployment with the given restrictions
    pub fn licensed(restrictions: ChannelRestrictions) -> Self {
        Self {
            licensed: true,
            restrictions,
        }
    }

    /// Restriction level for an action on a channel type
    ///
    /// Only public and private channels are restrictable; other types yield `None`.
    pub fn restriction_level(
        &self,
        action: ChannelAction,
        channel_type: &ChannelType,
    ) -> Option<RestrictionLevel> {
        let r = &self.restrictions;
        let level = match (action, channel_type) {
            (ChannelAction::Create, ChannelType::Open) => r.public_channel_creation,
            (ChannelAction::Create, ChannelType::Private) => r.private_channel_creation,
            (ChannelAction::Manage, ChannelType::Open) => r.public_channel_management,
            (ChannelAction::Manage, ChannelType::Private) => r.private_channel_management,
            (ChannelAction::Delete, ChannelType::Open) => r.public_channel_deletion,
            (ChannelAction::Delete, ChannelType::Private) => r.private_channel_deletion,
            _ => return None,
        };
        Some(level)
    }

    /// Decide whether an action on a channel type is permitted
    pub fn permits(
        &self,
        action: ChannelAction,
        channel_type: &ChannelType,
        is_team_admin: bool,
        is_system_admin: bool,
    ) -> bool {
        if !self.licensed {
            return true;
        }

        self.restriction_level(action, channel_type)
            .is_none_or(|level| level.permits(is_team_admin, is_system_admin))
    }
}
