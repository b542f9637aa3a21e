//! Index-level description of how a query result changed.
//!
//! Index conventions:
//! - `deletions` index into the previous result
//! - `insertions` and `modifications` index into the new result
//!
//! Replaying a change set means removing the deleted rows from the previous
//! result, inserting the new rows at the inserted indices in ascending order,
//! then overwriting the modified indices. The outcome is exactly the new
//! result (see [`ChangeSet::replay`]).

use roster_types::Record;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Deleted, inserted, and modified indices between two results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    pub deletions: Vec<usize>,
    pub insertions: Vec<usize>,
    pub modifications: Vec<usize>,
}

impl ChangeSet {
    pub fn new(deletions: Vec<usize>, insertions: Vec<usize>, modifications: Vec<usize>) -> Self {
        Self {
            deletions,
            insertions,
            modifications,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty() && self.insertions.is_empty() && self.modifications.is_empty()
    }

    /// Computes the change set between two results of the same query.
    ///
    /// Records are matched by ID. Records present in both results keep their
    /// position when they belong to the longest run that preserves relative
    /// order; any other surviving record moved and is reported as a deletion
    /// plus an insertion. Kept records whose contents differ are modifications.
    ///
    /// IDs are expected to be unique within each result.
    pub fn between<R: Record>(previous: &[R], current: &[R]) -> Self {
        let current_pos: HashMap<R::Id, usize> = current
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id(), i))
            .collect();

        // (old index, new index) for every record present in both results
        let common: Vec<(usize, usize)> = previous
            .iter()
            .enumerate()
            .filter_map(|(i, r)| current_pos.get(&r.id()).map(|&j| (i, j)))
            .collect();

        let kept: Vec<(usize, usize)> = longest_increasing_run(&common)
            .into_iter()
            .map(|k| common[k])
            .collect();
        let kept_old: HashSet<usize> = kept.iter().map(|&(i, _)| i).collect();
        let kept_new: HashSet<usize> = kept.iter().map(|&(_, j)| j).collect();

        let deletions = (0..previous.len()).filter(|i| !kept_old.contains(i)).collect();
        let insertions = (0..current.len()).filter(|j| !kept_new.contains(j)).collect();
        let mut modifications: Vec<usize> = kept
            .iter()
            .filter(|&&(i, j)| previous[i] != current[j])
            .map(|&(_, j)| j)
            .collect();
        modifications.sort_unstable();

        Self {
            deletions,
            insertions,
            modifications,
        }
    }

    /// Replays the change set against `previous`, taking inserted and
    /// modified rows from `current`.
    ///
    /// Returns `None` if any index is out of bounds for the list it refers to.
    pub fn replay<T: Clone>(&self, previous: &[T], current: &[T]) -> Option<Vec<T>> {
        let mut deletions = self.deletions.clone();
        deletions.sort_unstable();
        deletions.dedup();
        if deletions.last().is_some_and(|&i| i >= previous.len()) {
            return None;
        }

        let mut list: Vec<T> = previous
            .iter()
            .enumerate()
            .filter(|(i, _)| deletions.binary_search(i).is_err())
            .map(|(_, item)| item.clone())
            .collect();

        let mut insertions = self.insertions.clone();
        insertions.sort_unstable();
        insertions.dedup();
        for &j in &insertions {
            if j > list.len() || j >= current.len() {
                return None;
            }
            list.insert(j, current[j].clone());
        }

        for &j in &self.modifications {
            if j >= list.len() || j >= current.len() {
                return None;
            }
            list[j] = current[j].clone();
        }

        Some(list)
    }
}

/// Indices into `pairs` forming the longest subsequence whose second
/// components strictly increase. `pairs` is already ordered by first component.
fn longest_increasing_run(pairs: &[(usize, usize)]) -> Vec<usize> {
    // tails[len - 1] = index into `pairs` of the smallest tail of a run of `len`
    let mut tails: Vec<usize> = Vec::new();
    let mut parent: Vec<Option<usize>> = vec![None; pairs.len()];

    for (k, &(_, value)) in pairs.iter().enumerate() {
        let slot = tails.partition_point(|&t| pairs[t].1 < value);
        if slot > 0 {
            parent[k] = Some(tails[slot - 1]);
        }
        if slot == tails.len() {
            tails.push(k);
        } else {
            tails[slot] = k;
        }
    }

    let mut run = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(k) = cursor {
        run.push(k);
        cursor = parent[k];
    }
    run.reverse();
    run
}
