//! Faction type - the closed set of faction kinds
//!
//! The store keeps the Russian labels (`открытая`, `закрытая`, `криминальная`),
//! and the front end filters on those same labels, so they are also the wire form.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Kind of faction a user may belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactionType {
    /// Anyone may join
    #[serde(rename = "открытая")]
    Open,
    /// Membership by invitation
    #[serde(rename = "закрытая")]
    Closed,
    /// Criminal organisation
    #[serde(rename = "криминальная")]
    Criminal,
}

impl FactionType {
    /// All faction types in listing order
    pub const ALL: [FactionType; 3] = [Self::Open, Self::Closed, Self::Criminal];

    /// Label stored in the `factions.type` column
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "открытая",
            Self::Closed => "закрытая",
            Self::Criminal => "криминальная",
        }
    }

    /// Position in faction listings (open first, criminal last)
    #[inline]
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Open => 1,
            Self::Closed => 2,
            Self::Criminal => 3,
        }
    }

    /// Compare two faction types by listing precedence
    #[must_use]
    pub fn listing_cmp(self, other: Self) -> Ordering {
        self.precedence().cmp(&other.precedence())
    }
}

impl fmt::Display for FactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a faction type label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown faction type: {0}")]
pub struct FactionTypeParseError(pub String);

impl FromStr for FactionType {
    type Err = FactionTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "открытая" | "open" => Ok(Self::Open),
            "закрытая" | "closed" => Ok(Self::Closed),
            "криминальная" | "criminal" => Ok(Self::Criminal),
            other => Err(FactionTypeParseError(other.to_string())),
        }
    }
}
