//! Core record types for Roster.
//!
//! This crate defines the plain data that flows through the client core:
//! - [`User`] and [`Group`] records with stable integer identifiers
//! - the [`Record`] trait the record store and the sectioning engine rely on
//! - conjunctive [`Filter`]s built from [`Predicate`]s
//! - [`NewsPost`] and author resolution for the news feed
//!
//! Records are immutable snapshots. Mutation is owned by the record store.

mod filter;
mod group;
mod ids;
mod news;
mod record;
mod user;

pub use filter::{Filter, FilterState, Predicate, Scope};
pub use group::{Group, NONEXISTENT_GROUP_PHOTO_URL};
pub use ids::{GroupId, UserId};
pub use news::{Author, NewsPost};
pub use record::{section_key_of, Record, UNTITLED_SECTION};
pub use user::{User, DEFAULT_USER_PHOTO_URL};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),
}

/// Serde adapter for the remote API's `0`/`1` integer flags.
pub(crate) mod int_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(i64::deserialize(deserializer)? != 0)
    }
}
