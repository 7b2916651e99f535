//! JSON store snapshot
//!
//! A frozen copy of everything the sidebar reads: channels, profiles,
//! presence, preferences and team membership. Implements every lookup trait.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use sidebar_common::{AppError, AppResult};
use sidebar_core::{
    Channel, IdentityLookup, Locale, PreferenceLookup, Snowflake, TeamLookup, TeamMembership,
    UserProfile, UserStatus,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub current_user_id: Snowflake,
    pub current_team_id: Snowflake,
    /// Overrides the configured locale when present
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub users: Vec<UserProfile>,
    /// Raw presence strings; unknown values read as offline
    #[serde(default)]
    pub statuses: HashMap<Snowflake, String>,
    #[serde(default)]
    pub favorite_channels: HashSet<Snowflake>,
    #[serde(default)]
    pub direct_visibility: HashMap<Snowflake, bool>,
    #[serde(default)]
    pub team_members: HashMap<Snowflake, TeamMembership>,
}

impl Snapshot {
    /// Read a snapshot file
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(path.display())
            } else {
                AppError::internal(anyhow::Error::new(e).context(format!("reading {}", path.display())))
            }
        })?;
        Self::parse(&raw)
    }

    /// Parse snapshot JSON
    pub fn parse(raw: &str) -> AppResult<Self> {
        let snapshot: Self = serde_json::from_str(raw)?;
        if snapshot.current_user_id.is_zero() {
            return Err(AppError::invalid_input("current_user_id must be set"));
        }
        if let Some(locale) = &snapshot.locale {
            Locale::parse(locale.as_str())?;
        }
        Ok(snapshot)
    }
}

impl IdentityLookup for Snapshot {
    fn current_user_id(&self) -> Snowflake {
        self.current_user_id
    }

    fn profile(&self, user_id: Snowflake) -> Option<UserProfile> {
        self.users.iter().find(|user| user.id == user_id).cloned()
    }

    fn presence_status(&self, user_id: Snowflake) -> Option<UserStatus> {
        self.statuses
            .get(&user_id)
            .map(|raw| UserStatus::parse_lenient(raw))
    }
}

impl PreferenceLookup for Snapshot {
    fn is_favorite(&self, channel_id: Snowflake) -> bool {
        self.favorite_channels.contains(&channel_id)
    }

    fn is_direct_visible(&self, user_id: Snowflake) -> bool {
        self.direct_visibility.get(&user_id).copied().unwrap_or(false)
    }

    fn visible_direct_partners(&self) -> BTreeSet<Snowflake> {
        self.direct_visibility
            .iter()
            .filter_map(|(id, visible)| visible.then_some(*id))
            .collect()
    }
}

impl TeamLookup for Snapshot {
    fn current_team_id(&self) -> Snowflake {
        self.current_team_id
    }

    fn membership(&self, team_id: Snowflake, user_id: Snowflake) -> TeamMembership {
        if team_id != self.current_team_id {
            return TeamMembership::Unknown;
        }
        self.team_members.get(&user_id).copied().unwrap_or_default()
    }
}
