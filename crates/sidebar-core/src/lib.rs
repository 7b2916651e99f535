//! # sidebar-core
//!
//! Domain layer for the channel sidebar: channel and user entities, value objects
//! (identifiers, locale collation, restriction policy) and the read-only lookup
//! traits the derivation pipeline consumes.
//! This crate has zero dependencies on infrastructure (stores, network, UI).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    direct_channel_members, direct_channel_name, direct_partner_id, Channel, ChannelType,
    TeamMembership, TeammateNameDisplay, UserProfile, UserStatus, DIRECT_NAME_SEPARATOR,
};
pub use error::{DirectNameError, DomainError};
pub use traits::{IdentityLookup, LocaleProvider, PreferenceLookup, TeamLookup};
pub use value_objects::{
    CaseFirst, ChannelAction, ChannelPolicy, ChannelRestrictions, Collator, Locale,
    RestrictionLevel, Snowflake, SnowflakeParseError, SortKey,
};
