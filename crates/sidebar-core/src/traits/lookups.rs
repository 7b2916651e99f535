//! Lookup traits - read-only views over identity, preference and team stores
//!
//! Every method reads a snapshot at call time and never mutates the store.
//! Implementations must tolerate concurrent updates between calls.

use std::collections::BTreeSet;

use crate::entities::{TeamMembership, TeammateNameDisplay, UserProfile, UserStatus};
use crate::value_objects::{Locale, Snowflake};

/// Identity and presence lookup
pub trait IdentityLookup: Send + Sync {
    /// The viewing user
    fn current_user_id(&self) -> Snowflake;

    /// Profile for a user, if loaded
    fn profile(&self, user_id: Snowflake) -> Option<UserProfile>;

    /// Presence for a user, if known
    fn presence_status(&self, user_id: Snowflake) -> Option<UserStatus>;

    /// Display name for a user under the given display setting
    fn display_name(&self, user_id: Snowflake, display: TeammateNameDisplay) -> Option<String> {
        self.profile(user_id).map(|profile| profile.display_name(display))
    }
}

/// User preference lookup
pub trait PreferenceLookup: Send + Sync {
    /// Whether a channel is marked favorite
    fn is_favorite(&self, channel_id: Snowflake) -> bool;

    /// Whether the direct conversation with a user is shown in the sidebar
    fn is_direct_visible(&self, user_id: Snowflake) -> bool;

    /// Every user whose direct conversation is marked visible
    fn visible_direct_partners(&self) -> BTreeSet<Snowflake>;
}

/// Team membership lookup
pub trait TeamLookup: Send + Sync {
    /// The team the sidebar is shown for
    fn current_team_id(&self) -> Snowflake;

    /// A user's membership in a team
    fn membership(&self, team_id: Snowflake, user_id: Snowflake) -> TeamMembership;

    /// Check if a user is an active member of a team
    fn is_active_member(&self, team_id: Snowflake, user_id: Snowflake) -> bool {
        self.membership(team_id, user_id) == TeamMembership::Active
    }
}

/// Source of the active locale
pub trait LocaleProvider: Send + Sync {
    fn current_locale(&self) -> Locale;
}

impl LocaleProvider for Locale {
    fn current_locale(&self) -> Locale {
        self.clone()
    }
}
