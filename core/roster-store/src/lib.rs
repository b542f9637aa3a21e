//! Observable local record cache for Roster.
//!
//! Holds the records fetched from the remote service and lets the
//! presentation layer observe filtered views of them.
//!
//! # Architecture
//!
//! - [`Repository`] is the storage-agnostic query/subscribe/write interface
//! - [`MemoryStore`] keeps records in insertion order, keyed by ID, and can be
//!   persisted as a JSON snapshot
//! - every subscription owns a filtered snapshot; after each write the store
//!   re-runs the filter and reports the difference as a [`ChangeSet`]
//! - [`SubscriptionHandle`] releases the subscription when cancelled or dropped
//!
//! # Execution context
//!
//! The store is `!Send`. Queries, writes, and notification callbacks all run
//! on the thread that owns the store, and callbacks are invoked synchronously
//! after each write.

mod cache;
mod change_set;
mod error;
mod memory;
mod repository;
mod subscription;

pub use cache::LocalCache;
pub use change_set::ChangeSet;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use repository::{Notification, NotificationCallback, Repository};
pub use subscription::{SubscriptionHandle, SubscriptionId};
