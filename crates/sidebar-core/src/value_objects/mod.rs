//! Value objects - immutable types that represent domain concepts

mod locale;
mod policy;
mod snowflake;

pub use locale::{CaseFirst, Collator, Locale, SortKey};
pub use policy::{ChannelAction, ChannelPolicy, ChannelRestrictions, RestrictionLevel};
pub use snowflake::{Snowflake, SnowflakeParseError};
