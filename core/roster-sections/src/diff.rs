//! Change-set diff application.
//!
//! Translates a store [`ChangeSet`] into the operations a sectioned list
//! widget performs to move from the old sections to the new ones:
//!
//! 1. rows and whole sections are deleted, addressed in the old sections
//! 2. sections and rows are inserted, addressed in the new sections
//! 3. modified rows are reloaded, addressed in the new sections
//!
//! A section that loses all of its rows is deleted as a whole instead of
//! being left empty. The new sections themselves are recomputed from scratch
//! from the current list; the row operations never feed back into them.

use crate::error::{SectionError, SectionResult};
use crate::layout::{RowPath, SectionLayout};
use crate::section::{group_into_sections, Section};
use roster_store::ChangeSet;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, warn};

/// What to do with change set indices that do not fit their list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// Reject the change set with an error.
    Strict,
    /// Log and skip bad indices; fall back to replacing every section when
    /// the remaining change set is inconsistent.
    Lenient,
}

impl Default for BoundsPolicy {
    /// `Strict` in debug builds, `Lenient` in release builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// Row and section operations for one update, each list sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowUpdate {
    /// Sections removed entirely, indexed in the old sections.
    pub deleted_sections: Vec<usize>,
    /// Sections added, indexed in the new sections.
    pub inserted_sections: Vec<usize>,
    /// Rows removed from surviving sections, in old coordinates.
    pub deleted_rows: Vec<RowPath>,
    /// Rows added to surviving sections, in new coordinates.
    pub inserted_rows: Vec<RowPath>,
    /// Rows whose contents changed, in new coordinates.
    pub reloaded_rows: Vec<RowPath>,
}

impl RowUpdate {
    pub fn is_empty(&self) -> bool {
        self.deleted_sections.is_empty()
            && self.inserted_sections.is_empty()
            && self.deleted_rows.is_empty()
            && self.inserted_rows.is_empty()
            && self.reloaded_rows.is_empty()
    }

    /// Performs the update on `rendered` the way a list widget would, taking
    /// inserted and reloaded content from `next`.
    ///
    /// Returns `None` if an operation does not fit. A correct update turns
    /// the old sections into exactly `next`.
    pub fn replay<T: Clone>(&self, rendered: &[Section<T>], next: &[Section<T>]) -> Option<Vec<Section<T>>> {
        let mut sections = rendered.to_vec();

        for path in self.deleted_rows.iter().rev() {
            let section = sections.get_mut(path.section)?;
            if path.item >= section.items.len() {
                return None;
            }
            section.items.remove(path.item);
        }
        for &index in self.deleted_sections.iter().rev() {
            if index >= sections.len() {
                return None;
            }
            sections.remove(index);
        }
        for &index in &self.inserted_sections {
            if index > sections.len() {
                return None;
            }
            sections.insert(index, next.get(index)?.clone());
        }
        for path in &self.inserted_rows {
            let item = next.get(path.section)?.items.get(path.item)?.clone();
            let section = sections.get_mut(path.section)?;
            if path.item > section.items.len() {
                return None;
            }
            section.items.insert(path.item, item);
        }
        for path in &self.reloaded_rows {
            let item = next.get(path.section)?.items.get(path.item)?.clone();
            *sections.get_mut(path.section)?.items.get_mut(path.item)? = item;
        }

        Some(sections)
    }
}

/// New sections plus the operations that animate the old ones into them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionUpdate<T> {
    pub sections: Vec<Section<T>>,
    pub rows: RowUpdate,
}

/// Applies `changes` (which must describe `previous` → `current`) to the
/// sectioning of `previous`.
///
/// A modification that moves an element to another section is reported as a
/// row deletion plus a row insertion.
pub fn apply_change_set<T, F>(
    previous: &[T],
    current: &[T],
    changes: &ChangeSet,
    key: F,
    policy: BoundsPolicy,
) -> SectionResult<SectionUpdate<T>>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    let deletions = checked_indices("deletion", &changes.deletions, previous.len(), policy)?;
    let insertions = checked_indices("insertion", &changes.insertions, current.len(), policy)?;
    let modifications =
        checked_indices("modification", &changes.modifications, current.len(), policy)?;

    let sections = group_into_sections(current, &key);
    let old_layout = SectionLayout::new(previous, &key);
    let new_layout = SectionLayout::new(current, &key);

    if previous.len() - deletions.len() != current.len() - insertions.len() {
        let err = SectionError::InconsistentChangeSet {
            previous: previous.len(),
            current: current.len(),
            deletions: deletions.len(),
            insertions: insertions.len(),
        };
        if policy == BoundsPolicy::Strict {
            return Err(err);
        }
        warn!("{err}; replacing all sections");
        let rows = RowUpdate {
            deleted_sections: (0..old_layout.section_count()).collect(),
            inserted_sections: (0..new_layout.section_count()).collect(),
            ..RowUpdate::default()
        };
        return Ok(SectionUpdate { sections, rows });
    }

    // Surviving elements in order: the k-th survivor of `previous` is the
    // k-th non-inserted element of `current`.
    let old_survivors = (0..previous.len()).filter(|i| !deletions.contains(i));
    let new_survivors = (0..current.len()).filter(|j| !insertions.contains(j));
    let new_to_old: HashMap<usize, usize> = new_survivors.zip(old_survivors).collect();

    let mut deleted: BTreeSet<usize> = deletions;
    let mut inserted: BTreeSet<usize> = insertions;
    let mut reloaded: BTreeSet<usize> = BTreeSet::new();
    for &j in &modifications {
        let Some(&i) = new_to_old.get(&j) else {
            // already an insertion
            continue;
        };
        if old_layout.key_at(i) == new_layout.key_at(j) {
            reloaded.insert(j);
        } else {
            deleted.insert(i);
            inserted.insert(j);
        }
    }

    let mut removed_per_section: HashMap<usize, usize> = HashMap::new();
    let deleted_paths: Vec<RowPath> = deleted.iter().filter_map(|&i| old_layout.locate(i)).collect();
    for path in &deleted_paths {
        *removed_per_section.entry(path.section).or_default() += 1;
    }
    let deleted_sections: BTreeSet<usize> = removed_per_section
        .iter()
        .filter(|&(&section, &count)| count == old_layout.section_len(section))
        .map(|(&section, _)| section)
        .collect();

    let surviving_titles: HashSet<&str> = old_layout
        .titles()
        .iter()
        .enumerate()
        .filter(|(index, _)| !deleted_sections.contains(index))
        .map(|(_, title)| title.as_str())
        .collect();
    let inserted_sections: BTreeSet<usize> = new_layout
        .titles()
        .iter()
        .enumerate()
        .filter(|(_, title)| !surviving_titles.contains(title.as_str()))
        .map(|(index, _)| index)
        .collect();

    let mut deleted_rows: Vec<RowPath> = deleted_paths
        .into_iter()
        .filter(|p| !deleted_sections.contains(&p.section))
        .collect();
    deleted_rows.sort_unstable();
    let mut inserted_rows: Vec<RowPath> = inserted
        .iter()
        .filter_map(|&j| new_layout.locate(j))
        .filter(|p| !inserted_sections.contains(&p.section))
        .collect();
    inserted_rows.sort_unstable();
    let mut reloaded_rows: Vec<RowPath> = reloaded
        .iter()
        .filter_map(|&j| new_layout.locate(j))
        .filter(|p| !inserted_sections.contains(&p.section))
        .collect();
    reloaded_rows.sort_unstable();

    let rows = RowUpdate {
        deleted_sections: deleted_sections.into_iter().collect(),
        inserted_sections: inserted_sections.into_iter().collect(),
        deleted_rows,
        inserted_rows,
        reloaded_rows,
    };
    debug!(
        "Section update: -{} sections, +{} sections, -{} rows, +{} rows, ~{} rows",
        rows.deleted_sections.len(),
        rows.inserted_sections.len(),
        rows.deleted_rows.len(),
        rows.inserted_rows.len(),
        rows.reloaded_rows.len()
    );
    Ok(SectionUpdate { sections, rows })
}

/// Deduplicates `indices` and enforces `policy` on the ones `>= len`.
fn checked_indices(
    kind: &'static str,
    indices: &[usize],
    len: usize,
    policy: BoundsPolicy,
) -> SectionResult<BTreeSet<usize>> {
    let mut checked = BTreeSet::new();
    for &index in indices {
        if index < len {
            checked.insert(index);
            continue;
        }
        match policy {
            BoundsPolicy::Strict => {
                return Err(SectionError::IndexOutOfBounds { kind, index, len });
            }
            BoundsPolicy::Lenient => {
                warn!("Ignoring {kind} index {index} out of bounds for list of {len}");
            }
        }
    }
    Ok(checked)
}
