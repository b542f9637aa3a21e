//! Subscription identifiers and cancellable handles.
//!
//! Dropping a [`SubscriptionHandle`] releases the subscription.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies one registered subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scoped ownership of a subscription.
///
/// The callback stays registered while the handle is alive. Cancelling or
/// dropping the handle unregisters it; no notification is delivered after
/// that point, including one already queued by an in-progress write.
#[must_use = "dropping the handle cancels the subscription"]
pub struct SubscriptionHandle {
    id: SubscriptionId,
    release: Option<Box<dyn FnOnce(SubscriptionId)>>,
}

impl SubscriptionHandle {
    pub(crate) fn new(id: SubscriptionId, release: Box<dyn FnOnce(SubscriptionId)>) -> Self {
        Self {
            id,
            release: Some(release),
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Unregisters the subscription now.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release(self.id);
        }
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("id", &self.id)
            .field("active", &self.release.is_some())
            .finish()
    }
}
