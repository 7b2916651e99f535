//! # sidebar-service
//!
//! Application layer: derives the categorized, sorted sidebar from raw channel
//! records and decides which channel actions a user may perform.

pub mod services;

pub use services::{
    build_display_list, can_create, can_delete, can_manage, enrich, synthesize_missing,
    ChannelCategory, ChannelSortKey, ChannelSorter, DirectChannelEnricher, DisplayList,
    ServiceError, ServiceResult, SidebarContext, SidebarContextBuilder, SidebarService,
};
