//! Test helper functions

use std::sync::Arc;

use sidebar_common::SidebarConfig;
use sidebar_core::{Channel, Snowflake};
use sidebar_service::{SidebarContext, SidebarContextBuilder};

use crate::fixtures::TestStore;

/// Build a context backed entirely by `store`, including its locale
pub fn context(store: &Arc<TestStore>) -> anyhow::Result<SidebarContext> {
    context_with_config(store, &SidebarConfig::default())
}

/// Build a context with configured presentation settings
pub fn context_with_config(
    store: &Arc<TestStore>,
    config: &SidebarConfig,
) -> anyhow::Result<SidebarContext> {
    let ctx = SidebarContextBuilder::from_config(config)
        .identity(store.clone())
        .preferences(store.clone())
        .teams(store.clone())
        .locale(store.clone())
        .build()?;
    Ok(ctx)
}

/// Shorthand for building ids
pub fn id(value: i64) -> Snowflake {
    Snowflake::new(value)
}

/// Channel names in section order
pub fn names(channels: &[Channel]) -> Vec<&str> {
    channels.iter().map(|c| c.name.as_str()).collect()
}

/// Display names in section order
pub fn display_names(channels: &[Channel]) -> Vec<&str> {
    channels.iter().map(|c| c.display_name.as_str()).collect()
}
