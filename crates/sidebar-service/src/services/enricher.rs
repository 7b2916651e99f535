//! Direct channel enrichment
//!
//! Attaches the teammate's display name, id and presence to direct channels.
//! Every call returns a new value; the input channel is never modified.

use sidebar_core::{direct_partner_id, Channel, Snowflake};
use tracing::warn;

use super::context::SidebarContext;

/// Enriches direct channels for one viewing user
pub struct DirectChannelEnricher<'a> {
    ctx: &'a SidebarContext,
    self_id: Snowflake,
}

impl<'a> DirectChannelEnricher<'a> {
    /// Create an enricher for the context's current user
    pub fn new(ctx: &'a SidebarContext) -> Self {
        Self::for_user(ctx, ctx.identity().current_user_id())
    }

    /// Create an enricher for an explicit viewing user
    pub fn for_user(ctx: &'a SidebarContext, self_id: Snowflake) -> Self {
        Self { ctx, self_id }
    }

    /// Copy of `channel` with direct-conversation details filled in
    ///
    /// Non-direct channels are returned as-is. A direct channel whose name does
    /// not identify a partner is logged and returned without details.
    pub fn enrich(&self, channel: &Channel) -> Channel {
        if !channel.is_direct() {
            return channel.clone();
        }

        let teammate_id = match direct_partner_id(&channel.name, self.self_id) {
            Ok(id) => id,
            Err(e) => {
                warn!(
                    channel_id = ?channel.id,
                    user_id = %self.self_id,
                    error = %e,
                    "Direct channel has no resolvable teammate"
                );
                return channel.clone();
            }
        };

        let identity = self.ctx.identity();
        let display_name = identity
            .display_name(teammate_id, self.ctx.name_display())
            .unwrap_or_else(|| self.ctx.unknown_user_label().to_string());
        let status = identity.presence_status(teammate_id).unwrap_or_default();

        channel.with_direct_info(display_name, teammate_id, status)
    }
}

/// Enrich a single channel for the context's current user
pub fn enrich(ctx: &SidebarContext, channel: &Channel) -> Channel {
    DirectChannelEnricher::new(ctx).enrich(channel)
}
