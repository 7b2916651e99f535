//! Channel ordering
//!
//! One total order over all channels: type bucket first (public, private,
//! direct, then unknown types), then display name, then name. Names are
//! compared with the locale collator in numeric mode.

use std::cmp::Ordering;

use sidebar_core::{Channel, Collator, Locale, SortKey};

/// Precomputed ordering key for a channel
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ChannelSortKey {
    rank: u8,
    display_name: SortKey,
    name: SortKey,
}

/// Sorts channels for one locale
#[derive(Debug, Clone, Copy)]
pub struct ChannelSorter {
    collator: Collator,
}

impl ChannelSorter {
    pub fn new(locale: &Locale) -> Self {
        Self {
            collator: Collator::new(locale).numeric(true),
        }
    }

    pub fn sort_key(&self, channel: &Channel) -> ChannelSortKey {
        ChannelSortKey {
            rank: channel.channel_type.rank(),
            display_name: self.collator.sort_key(&channel.display_name),
            name: self.collator.sort_key(&channel.name),
        }
    }

    pub fn compare(&self, a: &Channel, b: &Channel) -> Ordering {
        self.sort_key(a).cmp(&self.sort_key(b))
    }

    /// Stable sort; channels with equal keys keep their input order
    pub fn sort(&self, channels: &mut [Channel]) {
        channels.sort_by_cached_key(|channel| self.sort_key(channel));
    }
}
