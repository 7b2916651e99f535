//! Sidebar services
//!
//! The display list pipeline runs synthesizer → enricher → sorter → classifier.
//! Permission gating is independent and only reads a policy snapshot.

pub mod context;
pub mod display_list;
pub mod enricher;
pub mod error;
pub mod permission;
pub mod sorting;
pub mod synthesizer;

pub use context::{SidebarContext, SidebarContextBuilder};
pub use display_list::{build_display_list, ChannelCategory, DisplayList, SidebarService};
pub use enricher::{enrich, DirectChannelEnricher};
pub use error::{ServiceError, ServiceResult};
pub use permission::{can_create, can_delete, can_manage};
pub use sorting::{ChannelSortKey, ChannelSorter};
pub use synthesizer::synthesize_missing;

#[cfg(test)]
pub(crate) mod testing;
