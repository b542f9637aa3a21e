//! Alphabetical sections.
//!
//! Groups a flat list into titled sections ordered by title. Items keep
//! their input order inside a section.

use roster_types::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A titled group of items shown under one header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section<T> {
    pub title: String,
    pub items: Vec<T>,
}

impl<T> Section<T> {
    pub fn new(title: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Groups `items` into sections by `key`.
///
/// Every item lands in exactly one section, titled `key(item)`. Sections are
/// ordered by title (ordinal string order) and keep the input order of their
/// items. An empty input yields no sections.
pub fn group_into_sections<T, F>(items: &[T], key: F) -> Vec<Section<T>>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    let mut groups: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
        .into_iter()
        .map(|(title, items)| Section { title, items })
        .collect()
}

/// Groups records by [`Record::section_key`].
pub fn section_records<R: Record>(records: &[R]) -> Vec<Section<R>> {
    group_into_sections(records, R::section_key)
}

/// Section titles in display order, for a jump-to-letter index.
pub fn section_titles<T>(sections: &[Section<T>]) -> Vec<String> {
    sections.iter().map(|s| s.title.clone()).collect()
}

/// Concatenates sections back into one list, in section order.
pub fn flatten<T: Clone>(sections: &[Section<T>]) -> Vec<T> {
    sections.iter().flat_map(|s| s.items.iter().cloned()).collect()
}
