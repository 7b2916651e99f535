//! Placeholder direct channels
//!
//! A user can mark a direct conversation visible before a single message was
//! exchanged, so no channel exists for it yet. Those conversations get a
//! placeholder channel that lives only for one display list computation.

use std::collections::BTreeSet;

use sidebar_core::{Channel, Snowflake};
use tracing::debug;

/// Placeholder channels for visible partners that have no direct channel yet
///
/// Placeholders come out in ascending partner id order. `self_id` is never
/// treated as a partner.
pub fn synthesize_missing(
    existing: &[Channel],
    visible_partners: &BTreeSet<Snowflake>,
    self_id: Snowflake,
) -> Vec<Channel> {
    let placeholders: Vec<Channel> = visible_partners
        .iter()
        .copied()
        .filter(|&partner| partner != self_id)
        .filter(|&partner| {
            !existing
                .iter()
                .any(|channel| channel.is_direct_with(self_id, partner))
        })
        .map(|partner| Channel::placeholder_direct(self_id, partner))
        .collect();

    if !placeholders.is_empty() {
        debug!(
            user_id = %self_id,
            count = placeholders.len(),
            "Synthesized placeholder direct channels"
        );
    }

    placeholders
}
