//! Flat index to section/row mapping for one sectioned list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Position of a row in a sectioned list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowPath {
    pub section: usize,
    pub item: usize,
}

impl RowPath {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// Where each element of a flat list ends up after sectioning.
///
/// Built from the same flat list and key function as the sections, so
/// `locate(i)` names the row holding the `i`-th element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionLayout {
    titles: Vec<String>,
    sizes: Vec<usize>,
    rows: Vec<RowPath>,
    keys: Vec<String>,
}

impl SectionLayout {
    pub fn new<T, F>(items: &[T], key: F) -> Self
    where
        F: Fn(&T) -> String,
    {
        let keys: Vec<String> = items.iter().map(&key).collect();
        let titles: Vec<String> = keys
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut sizes = vec![0; titles.len()];
        let mut rows = Vec::with_capacity(keys.len());
        for k in &keys {
            // every key is one of the titles
            let section = titles.binary_search(k).unwrap_or_default();
            rows.push(RowPath::new(section, sizes[section]));
            sizes[section] += 1;
        }

        Self {
            titles,
            sizes,
            rows,
            keys,
        }
    }

    /// Row holding the `flat_index`-th element.
    pub fn locate(&self, flat_index: usize) -> Option<RowPath> {
        self.rows.get(flat_index).copied()
    }

    /// Section key of the `flat_index`-th element.
    pub fn key_at(&self, flat_index: usize) -> Option<&str> {
        self.keys.get(flat_index).map(String::as_str)
    }

    /// Section index for a title, as used by a jump-to-letter control.
    pub fn section_of(&self, title: &str) -> Option<usize> {
        self.titles.binary_search_by(|t| t.as_str().cmp(title)).ok()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn section_count(&self) -> usize {
        self.titles.len()
    }

    pub fn section_len(&self, section: usize) -> usize {
        self.sizes.get(section).copied().unwrap_or(0)
    }

    /// Number of elements in the flat list.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
