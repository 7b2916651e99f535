//! Domain entities - core business objects

mod channel;
mod user;

pub use channel::{
    direct_channel_members, direct_channel_name, direct_partner_id, Channel, ChannelType,
    DIRECT_NAME_SEPARATOR,
};
pub use user::{TeamMembership, TeammateNameDisplay, UserProfile, UserStatus};
