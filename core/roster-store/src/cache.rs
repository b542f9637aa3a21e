//! The on-device cache of users and groups, persisted as JSON snapshots.

use crate::error::StoreResult;
use crate::memory::MemoryStore;
use roster_types::{Group, User};
use std::path::{Path, PathBuf};

const USERS_FILE: &str = "users.json";
const GROUPS_FILE: &str = "groups.json";

/// The client's local cache: one store per record type.
#[derive(Debug, Clone, Default)]
pub struct LocalCache {
    pub users: MemoryStore<User>,
    pub groups: MemoryStore<Group>,
}

impl LocalCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the cache from `dir`. Missing files start empty.
    pub fn open(dir: &Path) -> StoreResult<Self> {
        Ok(Self {
            users: MemoryStore::open_snapshot(&Self::users_path(dir))?,
            groups: MemoryStore::open_snapshot(&Self::groups_path(dir))?,
        })
    }

    /// Persists both stores into `dir`.
    pub fn save(&self, dir: &Path) -> StoreResult<()> {
        self.users.save_snapshot(&Self::users_path(dir))?;
        self.groups.save_snapshot(&Self::groups_path(dir))
    }

    /// Invalidates both stores.
    pub fn invalidate(&self, reason: &str) {
        self.users.invalidate(reason);
        self.groups.invalidate(reason);
    }

    fn users_path(dir: &Path) -> PathBuf {
        dir.join(USERS_FILE)
    }

    fn groups_path(dir: &Path) -> PathBuf {
        dir.join(GROUPS_FILE)
    }
}
