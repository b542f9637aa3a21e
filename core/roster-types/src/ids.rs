//! Identifier types for remote records.
//!
//! The remote service assigns stable integer IDs. Users and groups live in
//! separate ID spaces, so each gets its own newtype.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wraps a raw remote ID.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw remote ID.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Parses a user ID from a decimal string.
    pub fn parse(s: &str) -> crate::Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for UserId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// Identifier of a group record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(i64);

impl GroupId {
    /// Wraps a raw remote ID.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw remote ID.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Parses a group ID from a decimal string.
    pub fn parse(s: &str) -> crate::Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GroupId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for GroupId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}
