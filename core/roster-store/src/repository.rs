//! The repository interface the presentation layer observes.

use crate::change_set::ChangeSet;
use crate::error::{StoreError, StoreResult};
use crate::subscription::SubscriptionHandle;
use roster_types::{Filter, Record};

/// A message delivered to a subscription callback.
#[derive(Debug)]
pub enum Notification<T> {
    /// First delivery: the current filtered result.
    Initial(Vec<T>),
    /// The filtered result changed. `changes` describes how to get from the
    /// previously delivered result to `results`.
    Update { results: Vec<T>, changes: ChangeSet },
    /// The store can no longer be observed.
    Error(StoreError),
}

/// Callback invoked for every notification of one subscription.
pub type NotificationCallback<T> = Box<dyn FnMut(&Notification<T>)>;

/// Storage-agnostic access to cached records of one type.
pub trait Repository<T: Record> {
    /// Returns the records matching `filter`, in store order.
    fn query(&self, filter: &Filter) -> StoreResult<Vec<T>>;

    /// Registers `callback` for the records matching `filter`.
    ///
    /// The callback receives [`Notification::Initial`] before this returns.
    fn subscribe(
        &self,
        filter: Filter,
        callback: NotificationCallback<T>,
    ) -> StoreResult<SubscriptionHandle>;

    /// Inserts new records and replaces existing ones with the same ID.
    /// Returns the number of records written.
    fn upsert(&self, records: Vec<T>) -> StoreResult<usize>;

    /// Removes records by ID. Returns the number actually removed.
    fn remove(&self, ids: &[T::Id]) -> StoreResult<usize>;
}
