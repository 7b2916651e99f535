//! Snowflake ID - 64-bit identifier for users, channels and teams
//!
//! Identifiers are opaque to this crate: ordering is only used to build the
//! canonical direct-conversation name, never to infer creation time. On the
//! wire they are decimal strings; plain JSON numbers are accepted on input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Opaque 64-bit identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "WireId", into = "String")]
pub struct Snowflake(i64);

impl Snowflake {
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Zero marks an id that was never set
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse a decimal id: ASCII digits with at most one leading `-`, which is
    /// exactly what `Display` produces. `+1` and ` 1` are rejected.
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        if s.is_empty() {
            return Err(SnowflakeParseError::Empty);
        }
        let digits = s.strip_prefix('-').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SnowflakeParseError::NotDecimal(s.to_string()));
        }
        s.parse::<i64>()
            .map(Self)
            .map_err(|source| SnowflakeParseError::OutOfRange {
                input: s.to_string(),
                source,
            })
    }
}

/// Error when parsing a Snowflake from a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("empty identifier")]
    Empty,

    #[error("identifier is not a decimal number: {0:?}")]
    NotDecimal(String),

    #[error("identifier out of range: {input}")]
    OutOfRange {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl From<Snowflake> for String {
    fn from(id: Snowflake) -> Self {
        id.to_string()
    }
}

impl FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Accepted input shapes for an id
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(i64),
}

impl TryFrom<WireId> for Snowflake {
    type Error = String;

    fn try_from(wire: WireId) -> Result<Self, Self::Error> {
        match wire {
            WireId::Text(text) => Self::parse(&text).map_err(|e| e.to_string()),
            WireId::Number(n) => Ok(Self(n)),
        }
    }
}
