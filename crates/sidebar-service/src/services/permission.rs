//! Channel permission gating
//!
//! Decides whether the create, manage and delete options are offered for a
//! channel. Unlicensed deployments allow everything. Licensed deployments
//! apply the configured restriction level for public and private channels;
//! direct channels are never restricted.

use sidebar_core::{Channel, ChannelAction, ChannelPolicy, ChannelType};
use tracing::debug;

/// Check if the user may create a channel of the given type
pub fn can_create(
    policy: &ChannelPolicy,
    channel_type: &ChannelType,
    is_team_admin: bool,
    is_system_admin: bool,
) -> bool {
    check(policy, ChannelAction::Create, channel_type, is_team_admin, is_system_admin)
}

/// Check if the user may rename, re-purpose or otherwise manage a channel
pub fn can_manage(
    policy: &ChannelPolicy,
    channel: &Channel,
    is_team_admin: bool,
    is_system_admin: bool,
) -> bool {
    check(
        policy,
        ChannelAction::Manage,
        &channel.channel_type,
        is_team_admin,
        is_system_admin,
    )
}

/// Check if the user may delete a channel
pub fn can_delete(
    policy: &ChannelPolicy,
    channel: &Channel,
    is_team_admin: bool,
    is_system_admin: bool,
) -> bool {
    check(
        policy,
        ChannelAction::Delete,
        &channel.channel_type,
        is_team_admin,
        is_system_admin,
    )
}

fn check(
    policy: &ChannelPolicy,
    action: ChannelAction,
    channel_type: &ChannelType,
    is_team_admin: bool,
    is_system_admin: bool,
) -> bool {
    let allowed = policy.permits(action, channel_type, is_team_admin, is_system_admin);
    if !allowed {
        debug!(
            action = %action,
            channel_type = %channel_type,
            is_team_admin,
            is_system_admin,
            "Channel action restricted by policy"
        );
    }
    allowed
}
