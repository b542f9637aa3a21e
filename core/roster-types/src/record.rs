//! The interface shared by every cached record type.
//!
//! Section keys are the first character of the record's sort field, or
//! `#` when that field is empty.

use std::fmt;
use std::hash::Hash;

/// Section title used when a record's key source is empty.
pub const UNTITLED_SECTION: &str = "#";

/// A record that can be cached, filtered, and sectioned.
///
/// Implemented by [`User`](crate::User) and [`Group`](crate::Group). The
/// record store keys records by [`Record::id`]; the filter layer reads
/// [`Record::is_active`] and [`Record::search_text`]; the sectioning engine
/// groups by [`Record::section_key`].
pub trait Record: Clone + PartialEq + fmt::Debug {
    /// Stable identifier assigned by the remote service.
    type Id: Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display;

    fn id(&self) -> Self::Id;

    /// Status flag used by [`Predicate::Active`](crate::Predicate::Active):
    /// online for users, membership for groups.
    fn is_active(&self) -> bool;

    /// Concatenated name fields matched by text predicates.
    fn search_text(&self) -> String;

    /// Title of the section this record belongs to.
    fn section_key(&self) -> String;
}

/// Returns the first character of `source` as a section title, or
/// [`UNTITLED_SECTION`] when `source` is empty.
#[must_use]
pub fn section_key_of(source: &str) -> String {
    source
        .chars()
        .next()
        .map(String::from)
        .unwrap_or_else(|| UNTITLED_SECTION.to_string())
}
