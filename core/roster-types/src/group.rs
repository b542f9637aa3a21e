//! Communities the account follows or belongs to.

use crate::ids::GroupId;
use crate::record::{section_key_of, Record};
use serde::{Deserialize, Serialize};

/// Placeholder avatar for groups without a photo.
pub const NONEXISTENT_GROUP_PHOTO_URL: &str = "https://vk.com/images/community_100.png";

fn default_group_photo() -> String {
    NONEXISTENT_GROUP_PHOTO_URL.to_string()
}

/// A community the user belongs to or found through search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(with = "crate::int_flag", default)]
    pub is_member: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members_count: Option<u64>,
    #[serde(rename = "photo_100", default = "default_group_photo")]
    pub avatar_url: String,
}

impl Group {
    /// Creates a group the user is not a member of, with the placeholder avatar.
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_member: false,
            members_count: None,
            avatar_url: default_group_photo(),
        }
    }

    /// Sets the membership flag.
    #[must_use]
    pub fn member(mut self, is_member: bool) -> Self {
        self.is_member = is_member;
        self
    }

    /// Sets the member count.
    #[must_use]
    pub fn with_members(mut self, count: u64) -> Self {
        self.members_count = Some(count);
        self
    }

    /// Member count, treating an unknown count as zero.
    pub fn members(&self) -> u64 {
        self.members_count.unwrap_or(0)
    }
}

impl Record for Group {
    type Id = GroupId;

    fn id(&self) -> GroupId {
        self.id
    }

    fn is_active(&self) -> bool {
        self.is_member
    }

    fn search_text(&self) -> String {
        self.name.clone()
    }

    fn section_key(&self) -> String {
        section_key_of(&self.name)
    }
}
