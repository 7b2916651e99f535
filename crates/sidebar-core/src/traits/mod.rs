//! Read-only lookup traits implemented by the store layer

mod lookups;

pub use lookups::{IdentityLookup, LocaleProvider, PreferenceLookup, TeamLookup};
