//! Sidebar display list
//!
//! Builds the five sidebar sections from the raw channel list:
//! 1. add placeholder direct channels for visible partners without one
//! 2. enrich direct channels with teammate details
//! 3. sort everything once with [`ChannelSorter`]
//! 4. split into sections; each section keeps the global order
//!
//! A favorite channel only ever appears under favorites. Direct channels must
//! be marked visible, and are split by whether the teammate is an active
//! member of the current team. A direct channel whose name names no teammate
//! is still listed under direct channels, without teammate details. Unknown
//! channel types only show up as favorites.

use serde::Serialize;
use sidebar_core::{direct_partner_id, Channel, ChannelType, Snowflake, TeamMembership};
use tracing::{debug, instrument};

use super::context::SidebarContext;
use super::enricher::DirectChannelEnricher;
use super::sorting::ChannelSorter;
use super::synthesizer::synthesize_missing;

/// Sidebar section a channel is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelCategory {
    Favorite,
    Public,
    Private,
    Direct,
    DirectNonTeam,
}

/// Ordered channels for each sidebar section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayList {
    pub favorite_channels: Vec<Channel>,
    pub public_channels: Vec<Channel>,
    pub private_channels: Vec<Channel>,
    pub direct_channels: Vec<Channel>,
    pub direct_non_team_channels: Vec<Channel>,
}

impl DisplayList {
    /// Channels in one section
    pub fn section(&self, category: ChannelCategory) -> &[Channel] {
        match category {
            ChannelCategory::Favorite => &self.favorite_channels,
            ChannelCategory::Public => &self.public_channels,
            ChannelCategory::Private => &self.private_channels,
            ChannelCategory::Direct => &self.direct_channels,
            ChannelCategory::DirectNonTeam => &self.direct_non_team_channels,
        }
    }

    fn section_mut(&mut self, category: ChannelCategory) -> &mut Vec<Channel> {
        match category {
            ChannelCategory::Favorite => &mut self.favorite_channels,
            ChannelCategory::Public => &mut self.public_channels,
            ChannelCategory::Private => &mut self.private_channels,
            ChannelCategory::Direct => &mut self.direct_channels,
            ChannelCategory::DirectNonTeam => &mut self.direct_non_team_channels,
        }
    }

    /// Total number of displayed channels
    pub fn len(&self) -> usize {
        self.favorite_channels.len()
            + self.public_channels.len()
            + self.private_channels.len()
            + self.direct_channels.len()
            + self.direct_non_team_channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sidebar service
pub struct SidebarService<'a> {
    ctx: &'a SidebarContext,
}

impl<'a> SidebarService<'a> {
    /// Create a new SidebarService
    pub fn new(ctx: &'a SidebarContext) -> Self {
        Self { ctx }
    }

    /// Build the sectioned, sorted sidebar for the current user
    #[instrument(skip_all, fields(channels = channels.len()))]
    pub fn build_display_list(&self, channels: &[Channel]) -> DisplayList {
        let self_id = self.ctx.identity().current_user_id();
        let team_id = self.ctx.teams().current_team_id();
        let locale = self.ctx.current_locale();

        let placeholders = synthesize_missing(
            channels,
            &self.ctx.preferences().visible_direct_partners(),
            self_id,
        );

        let enricher = DirectChannelEnricher::for_user(self.ctx, self_id);
        let mut all: Vec<Channel> = channels
            .iter()
            .chain(placeholders.iter())
            .map(|channel| enricher.enrich(channel))
            .collect();

        ChannelSorter::new(&locale).sort(&mut all);

        let mut list = DisplayList::default();
        let mut hidden = 0usize;
        for channel in all {
            match self.category_in_team(&channel, team_id) {
                Some(category) => list.section_mut(category).push(channel),
                None => hidden += 1,
            }
        }

        debug!(
            user_id = %self_id,
            team_id = %team_id,
            locale = %locale,
            placeholders = placeholders.len(),
            favorites = list.favorite_channels.len(),
            public = list.public_channels.len(),
            private = list.private_channels.len(),
            direct = list.direct_channels.len(),
            direct_non_team = list.direct_non_team_channels.len(),
            hidden,
            "Built sidebar display list"
        );

        list
    }

    /// Section for an enriched channel in the current team, or `None` if hidden
    pub fn category(&self, channel: &Channel) -> Option<ChannelCategory> {
        self.category_in_team(channel, self.ctx.teams().current_team_id())
    }

    fn category_in_team(&self, channel: &Channel, team_id: Snowflake) -> Option<ChannelCategory> {
        if self.is_favorite_channel(channel) {
            return Some(ChannelCategory::Favorite);
        }

        match channel.channel_type {
            ChannelType::Open => Some(ChannelCategory::Public),
            ChannelType::Private => Some(ChannelCategory::Private),
            ChannelType::Direct => {
                let Some(teammate_id) = self.teammate_of(channel) else {
                    // No resolvable teammate: listed as a plain direct channel
                    return Some(ChannelCategory::Direct);
                };
                if !self.ctx.preferences().is_direct_visible(teammate_id) {
                    return None;
                }
                match self.ctx.teams().membership(team_id, teammate_id) {
                    TeamMembership::Active => Some(ChannelCategory::Direct),
                    TeamMembership::NotMember => Some(ChannelCategory::DirectNonTeam),
                    TeamMembership::Unknown => None,
                }
            }
            ChannelType::Other(_) => None,
        }
    }

    /// Check if a channel is marked favorite; placeholders never are
    pub fn is_favorite_channel(&self, channel: &Channel) -> bool {
        channel
            .id
            .is_some_and(|id| self.ctx.preferences().is_favorite(id))
    }

    /// Check if a direct channel's teammate is marked visible
    pub fn is_direct_channel_visible(&self, channel: &Channel) -> bool {
        channel.is_direct()
            && self
                .teammate_of(channel)
                .is_some_and(|id| self.ctx.preferences().is_direct_visible(id))
    }

    /// Check if a channel is the current user's direct channel with `user_id`
    pub fn is_direct_channel_for_user(&self, channel: &Channel, user_id: Snowflake) -> bool {
        channel.is_direct_with(self.ctx.identity().current_user_id(), user_id)
    }

    fn teammate_of(&self, channel: &Channel) -> Option<Snowflake> {
        channel.teammate_id.or_else(|| {
            direct_partner_id(&channel.name, self.ctx.identity().current_user_id()).ok()
        })
    }
}

/// Build the sidebar display list for the context's current user
pub fn build_display_list(ctx: &SidebarContext, channels: &[Channel]) -> DisplayList {
    SidebarService::new(ctx).build_display_list(channels)
}
