//! Product identifiers spanning both id namespaces.
//!
//! The remote catalog assigns numeric ids; products created client-side
//! get a timestamp-derived string id with a reserved `local-` prefix.
//! Keeping the two namespaces in one enum makes collisions impossible by
//! construction: a number can never equal a string.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a product in the merged (remote ∪ local) set.
///
/// Serializes untagged, so the wire shape is either a JSON number
/// (remote) or a JSON string (local), matching the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Id assigned by the remote catalog.
    Remote(i64),
    /// Synthetic id assigned at client-side creation time.
    Local(String),
}

impl ProductId {
    /// Synthesize a fresh local id from the current wall clock.
    ///
    /// The `local-<millis>` shape mirrors what the storefront persists,
    /// so ids survive a round-trip through durable storage unchanged.
    #[must_use]
    pub fn new_local() -> Self {
        Self::Local(format!(
            "local-{}",
            chrono::Utc::now().timestamp_millis()
        ))
    }

    /// Whether this id was synthesized client-side.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote(n) => write!(f, "{n}"),
            Self::Local(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::Remote(id)
    }
}

impl FromStr for ProductId {
    type Err = Infallible;

    /// Numeric input parses as a remote id; anything else is local.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>().map_or_else(
            |_| Self::Local(s.to_owned()),
            Self::Remote,
        ))
    }
}
