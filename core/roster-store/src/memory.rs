//! In-memory record store with change observation and JSON snapshots.

use crate::change_set::ChangeSet;
use crate::error::{StoreError, StoreResult};
use crate::repository::{Notification, NotificationCallback, Repository};
use crate::subscription::{SubscriptionHandle, SubscriptionId};
use roster_types::{Filter, Record};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::{Rc, Weak};
use tracing::{debug, warn};

/// Snapshot file format version.
const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Snapshot<R> {
    version: u32,
    records: R,
}

type SharedCallback<T> = Rc<RefCell<NotificationCallback<T>>>;

struct Subscriber<T> {
    id: SubscriptionId,
    filter: Filter,
    /// Result last delivered to this subscriber.
    snapshot: Vec<T>,
    callback: SharedCallback<T>,
}

struct StoreState<T: Record> {
    /// Records in insertion order.
    records: Vec<T>,
    /// Position of each record in `records`.
    positions: HashMap<T::Id, usize>,
    subscribers: Vec<Subscriber<T>>,
    delivering: bool,
    invalidated: Option<String>,
}

impl<T: Record> StoreState<T> {
    fn new(records: Vec<T>) -> Self {
        let mut state = Self {
            records: Vec::new(),
            positions: HashMap::new(),
            subscribers: Vec::new(),
            delivering: false,
            invalidated: None,
        };
        for record in records {
            state.put(record);
        }
        state
    }

    fn check_valid(&self) -> StoreResult<()> {
        match &self.invalidated {
            Some(reason) => Err(StoreError::Invalidated(reason.clone())),
            None => Ok(()),
        }
    }

    fn check_writable(&self) -> StoreResult<()> {
        self.check_valid()?;
        if self.delivering {
            return Err(StoreError::WriteDuringNotification);
        }
        Ok(())
    }

    /// Last write wins: an existing record keeps its position.
    fn put(&mut self, record: T) {
        match self.positions.get(&record.id()) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.positions.insert(record.id(), self.records.len());
                self.records.push(record);
            }
        }
    }

    fn reindex(&mut self) {
        self.positions = self
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id(), i))
            .collect();
    }

    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers.iter().any(|s| s.id == id)
    }
}

/// Record store backed by a `Vec`, observable through [`Repository::subscribe`].
///
/// Cloning a `MemoryStore` yields another handle to the same records.
pub struct MemoryStore<T: Record> {
    inner: Rc<RefCell<StoreState<T>>>,
}

impl<T: Record> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Record + 'static> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> std::fmt::Debug for MemoryStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("MemoryStore")
            .field("records", &state.records.len())
            .field("subscribers", &state.subscribers.len())
            .field("invalidated", &state.invalidated)
            .finish()
    }
}

impl<T: Record + 'static> MemoryStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Creates a store seeded with `records`. Later duplicates win.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreState::new(records))),
        }
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.inner.borrow().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a record by ID.
    pub fn get(&self, id: &T::Id) -> StoreResult<Option<T>> {
        let state = self.inner.borrow();
        state.check_valid()?;
        Ok(state.positions.get(id).map(|&pos| state.records[pos].clone()))
    }

    /// All cached records in store order.
    pub fn all(&self) -> StoreResult<Vec<T>> {
        self.query(&Filter::all())
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Removes every record.
    pub fn clear(&self) -> StoreResult<usize> {
        let removed = {
            let mut state = self.inner.borrow_mut();
            state.check_writable()?;
            let removed = state.records.len();
            state.records.clear();
            state.positions.clear();
            removed
        };
        self.notify();
        Ok(removed)
    }

    /// Marks the store unusable and reports `reason` to every subscriber.
    ///
    /// Subsequent reads and writes fail with [`StoreError::Invalidated`].
    pub fn invalidate(&self, reason: impl Into<String>) {
        let reason = reason.into();
        let callbacks: Vec<(SubscriptionId, SharedCallback<T>)> = {
            let mut state = self.inner.borrow_mut();
            if state.invalidated.is_some() {
                return;
            }
            state.invalidated = Some(reason.clone());
            state
                .subscribers
                .iter()
                .map(|s| (s.id, Rc::clone(&s.callback)))
                .collect()
        };
        warn!("Record store invalidated: {reason}");
        for (id, callback) in callbacks {
            let notification = Notification::Error(StoreError::Invalidated(reason.clone()));
            self.deliver(id, &callback, &notification);
        }
    }

    /// Re-runs every subscriber's filter and delivers non-empty change sets.
    fn notify(&self) {
        let pending: Vec<(SubscriptionId, SharedCallback<T>, Notification<T>)> = {
            let mut guard = self.inner.borrow_mut();
            let state = &mut *guard;
            let mut pending = Vec::new();
            for subscriber in &mut state.subscribers {
                let results = subscriber.filter.apply(&state.records);
                let changes = ChangeSet::between(&subscriber.snapshot, &results);
                if changes.is_empty() {
                    continue;
                }
                debug!(
                    "Subscription {}: -{} +{} ~{}",
                    subscriber.id,
                    changes.deletions.len(),
                    changes.insertions.len(),
                    changes.modifications.len()
                );
                subscriber.snapshot = results.clone();
                pending.push((
                    subscriber.id,
                    Rc::clone(&subscriber.callback),
                    Notification::Update { results, changes },
                ));
            }
            pending
        };

        for (id, callback, notification) in pending {
            self.deliver(id, &callback, &notification);
        }
    }

    fn deliver(&self, id: SubscriptionId, callback: &SharedCallback<T>, notification: &Notification<T>) {
        // A callback may have cancelled a later subscriber.
        if !self.inner.borrow().is_subscribed(id) {
            return;
        }
        let was_delivering = std::mem::replace(&mut self.inner.borrow_mut().delivering, true);
        match callback.try_borrow_mut() {
            Ok(mut callback) => (&mut **callback)(notification),
            Err(_) => warn!("Subscription {id} is already running, notification dropped"),
        }
        self.inner.borrow_mut().delivering = was_delivering;
    }
}

impl<T: Record + 'static> Repository<T> for MemoryStore<T> {
    fn query(&self, filter: &Filter) -> StoreResult<Vec<T>> {
        let state = self.inner.borrow();
        state.check_valid()?;
        Ok(filter.apply(&state.records))
    }

    fn subscribe(
        &self,
        filter: Filter,
        callback: NotificationCallback<T>,
    ) -> StoreResult<SubscriptionHandle> {
        let id = SubscriptionId::new();
        let callback = Rc::new(RefCell::new(callback));
        let initial = {
            let mut state = self.inner.borrow_mut();
            state.check_valid()?;
            let snapshot = filter.apply(&state.records);
            state.subscribers.push(Subscriber {
                id,
                filter,
                snapshot: snapshot.clone(),
                callback: Rc::clone(&callback),
            });
            snapshot
        };
        debug!("Subscription {id} registered with {} records", initial.len());

        let weak: Weak<RefCell<StoreState<T>>> = Rc::downgrade(&self.inner);
        let handle = SubscriptionHandle::new(
            id,
            Box::new(move |id| {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|s| s.id != id);
                    debug!("Subscription {id} released");
                }
            }),
        );

        self.deliver(id, &callback, &Notification::Initial(initial));
        Ok(handle)
    }

    fn upsert(&self, records: Vec<T>) -> StoreResult<usize> {
        let written = records.len();
        {
            let mut state = self.inner.borrow_mut();
            state.check_writable()?;
            for record in records {
                state.put(record);
            }
        }
        self.notify();
        Ok(written)
    }

    fn remove(&self, ids: &[T::Id]) -> StoreResult<usize> {
        let removed = {
            let mut state = self.inner.borrow_mut();
            state.check_writable()?;
            let before = state.records.len();
            state.records.retain(|r| !ids.contains(&r.id()));
            let removed = before - state.records.len();
            if removed > 0 {
                state.reindex();
            }
            removed
        };
        if removed > 0 {
            self.notify();
        }
        Ok(removed)
    }
}

impl<T: Record + Serialize> MemoryStore<T> {
    /// Writes all records to `path` as JSON.
    pub fn save_snapshot(&self, path: &Path) -> StoreResult<()> {
        let state = self.inner.borrow();
        state.check_valid()?;
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            records: state.records.as_slice(),
        };
        let json = serde_json::to_vec_pretty(&snapshot)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)?;
        debug!("Saved {} records to {}", state.records.len(), path.display());
        Ok(())
    }
}

impl<T: Record + DeserializeOwned + 'static> MemoryStore<T> {
    /// Opens a store from a snapshot written by [`MemoryStore::save_snapshot`].
    ///
    /// A missing file yields an empty store.
    pub fn open_snapshot(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            debug!("No snapshot at {}, starting empty", path.display());
            return Ok(Self::new());
        }
        let bytes = fs::read(path)?;
        let snapshot: Snapshot<Vec<T>> = serde_json::from_slice(&bytes)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::InvalidData(format!(
                "unsupported snapshot version {}",
                snapshot.version
            )));
        }
        Ok(Self::with_records(snapshot.records))
    }
}
