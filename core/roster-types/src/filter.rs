//! Filter predicates over cached records.
//!
//! A [`Filter`] is a conjunction of [`Predicate`]s. The empty filter matches
//! everything, and an empty search string never becomes a predicate, so
//! clearing the search field restores the unfiltered list.

use crate::record::Record;
use serde::{Deserialize, Serialize};

/// A single boolean condition on a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Record's status flag is set (online user, joined group).
    Active,
    /// Case-insensitive substring match against the record's name fields.
    TextContains(String),
}

impl Predicate {
    /// Builds a text predicate, or `None` for empty text.
    pub fn text(needle: &str) -> Option<Self> {
        if needle.is_empty() {
            None
        } else {
            Some(Self::TextContains(needle.to_lowercase()))
        }
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        match self {
            Self::Active => record.is_active(),
            Self::TextContains(needle) => record
                .search_text()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}

/// Conjunction of predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    /// The filter that matches every record.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Adds a predicate; duplicates are dropped.
    #[must_use]
    pub fn and(mut self, predicate: Predicate) -> Self {
        if !self.predicates.contains(&predicate) {
            self.predicates.push(predicate);
        }
        self
    }

    /// Adds a text predicate unless `needle` is empty.
    #[must_use]
    pub fn and_text(self, needle: &str) -> Self {
        match Predicate::text(needle) {
            Some(predicate) => self.and(predicate),
            None => self,
        }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    /// Returns the matching records in input order.
    pub fn apply<'a, R: Record>(&self, records: impl IntoIterator<Item = &'a R>) -> Vec<R>
    where
        R: 'a,
    {
        records
            .into_iter()
            .filter(|r| self.matches(*r))
            .cloned()
            .collect()
    }
}

/// Which part of the list the scope control selects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    #[default]
    All,
    Active,
}

/// UI filter state: the scope control plus the search field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub scope: Scope,
    pub search_text: String,
}

impl FilterState {
    pub fn new(scope: Scope, search_text: impl Into<String>) -> Self {
        Self {
            scope,
            search_text: search_text.into(),
        }
    }

    /// Switches scope. The search text is cleared, matching the list screen's
    /// behaviour when the segmented control changes.
    pub fn set_scope(&mut self, scope: Scope) {
        self.scope = scope;
        self.search_text.clear();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    /// Composes the predicates selected by this state.
    pub fn to_filter(&self) -> Filter {
        let filter = match self.scope {
            Scope::All => Filter::all(),
            Scope::Active => Filter::all().and(Predicate::Active),
        };
        filter.and_text(&self.search_text)
    }
}
