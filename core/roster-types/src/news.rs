//! News feed posts and author lookup.

use crate::group::Group;
use crate::ids::{GroupId, UserId};
use crate::user::User;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A post in the news feed.
///
/// `source_id` follows the remote convention: a positive value is a user ID,
/// a negative value is a negated group ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsPost {
    #[serde(rename = "post_id")]
    pub id: i64,
    pub source_id: i64,
    pub date: i64,
    #[serde(default)]
    pub text: String,
}

/// Display fields of whoever published a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Author<'a> {
    pub name: &'a str,
    pub avatar_url: &'a str,
}

impl NewsPost {
    pub fn user_source(&self) -> Option<UserId> {
        (self.source_id > 0).then(|| UserId::new(self.source_id))
    }

    /// `None` for user posts and for a source ID with no positive
    /// counterpart (`i64::MIN`).
    pub fn group_source(&self) -> Option<GroupId> {
        if self.source_id < 0 {
            self.source_id.checked_neg().map(GroupId::new)
        } else {
            None
        }
    }

    /// Looks up the author among the profiles and groups delivered with the
    /// feed page. Returns `None` when the source is missing from both.
    pub fn resolve_author<'a>(
        &self,
        users: &'a HashMap<UserId, User>,
        groups: &'a HashMap<GroupId, Group>,
    ) -> Option<Author<'a>> {
        if let Some(id) = self.user_source() {
            return users.get(&id).map(|u| Author {
                name: &u.name,
                avatar_url: &u.avatar_url,
            });
        }
        self.group_source().and_then(|id| {
            groups.get(&id).map(|g| Author {
                name: &g.name,
                avatar_url: &g.avatar_url,
            })
        })
    }
}
