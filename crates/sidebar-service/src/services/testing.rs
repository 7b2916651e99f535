//! In-memory lookups for unit tests

use std::collections::{BTreeSet, HashMap, HashSet};

use sidebar_core::{
    IdentityLookup, PreferenceLookup, Snowflake, TeamLookup, TeamMembership, UserProfile,
    UserStatus,
};

pub(crate) const TEAM: Snowflake = Snowflake::new(500);

/// One struct implementing every lookup, configured field by field
#[derive(Debug, Default)]
pub(crate) struct Directory {
    pub me: Snowflake,
    pub profiles: HashMap<Snowflake, UserProfile>,
    pub statuses: HashMap<Snowflake, UserStatus>,
    pub favorites: HashSet<Snowflake>,
    pub direct_visibility: HashMap<Snowflake, bool>,
    pub memberships: HashMap<Snowflake, TeamMembership>,
}

impl Directory {
    pub fn new(me: i64) -> Self {
        Self {
            me: Snowflake::new(me),
            ..Self::default()
        }
    }

    /// Add a user with a profile, presence, visibility and membership in one go
    pub fn with_teammate(
        mut self,
        id: i64,
        username: &str,
        status: Option<UserStatus>,
        visible: bool,
        membership: TeamMembership,
    ) -> Self {
        let id = Snowflake::new(id);
        self.profiles.insert(id, UserProfile::new(id, username));
        if let Some(status) = status {
            self.statuses.insert(id, status);
        }
        self.direct_visibility.insert(id, visible);
        self.memberships.insert(id, membership);
        self
    }

    pub fn with_favorite(mut self, channel_id: i64) -> Self {
        self.favorites.insert(Snowflake::new(channel_id));
        self
    }
}

impl IdentityLookup for Directory {
    fn current_user_id(&self) -> Snowflake {
        self.me
    }

    fn profile(&self, user_id: Snowflake) -> Option<UserProfile> {
        self.profiles.get(&user_id).cloned()
    }

    fn presence_status(&self, user_id: Snowflake) -> Option<UserStatus> {
        self.statuses.get(&user_id).copied()
    }
}

impl PreferenceLookup for Directory {
    fn is_favorite(&self, channel_id: Snowflake) -> bool {
        self.favorites.contains(&channel_id)
    }

    fn is_direct_visible(&self, user_id: Snowflake) -> bool {
        self.direct_visibility.get(&user_id).copied().unwrap_or(false)
    }

    fn visible_direct_partners(&self) -> BTreeSet<Snowflake> {
        self.direct_visibility
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(id, _)| *id)
            .collect()
    }
}

impl TeamLookup for Directory {
    fn current_team_id(&self) -> Snowflake {
        TEAM
    }

    fn membership(&self, team_id: Snowflake, user_id: Snowflake) -> TeamMembership {
        if team_id != TEAM {
            return TeamMembership::Unknown;
        }
        self.memberships.get(&user_id).copied().unwrap_or_default()
    }
}
