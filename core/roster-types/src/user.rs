//! Friends list entries.

use crate::ids::UserId;
use crate::record::{section_key_of, Record};
use serde::{Deserialize, Serialize};

/// Avatar used when the remote service omits a user photo.
pub const DEFAULT_USER_PHOTO_URL: &str = "https://vk.com/images/camera_100.png";

fn default_user_photo() -> String {
    DEFAULT_USER_PHOTO_URL.to_string()
}

/// A friend as returned by the remote friends list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(rename = "first_name")]
    pub name: String,
    #[serde(rename = "last_name")]
    pub surname: String,
    #[serde(rename = "online", with = "crate::int_flag", default)]
    pub is_online: bool,
    #[serde(rename = "photo_100", default = "default_user_photo")]
    pub avatar_url: String,
}

impl User {
    /// Creates an offline user with the default avatar.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            surname: surname.into(),
            is_online: false,
            avatar_url: default_user_photo(),
        }
    }

    /// Sets the online flag.
    #[must_use]
    pub fn online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }

    /// Sets the avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = url.into();
        self
    }

    /// "Name Surname", as shown in list cells.
    pub fn full_name(&self) -> String {
        match (self.name.is_empty(), self.surname.is_empty()) {
            (false, false) => format!("{} {}", self.name, self.surname),
            (false, true) => self.name.clone(),
            _ => self.surname.clone(),
        }
    }
}

impl Record for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }

    fn is_active(&self) -> bool {
        self.is_online
    }

    fn search_text(&self) -> String {
        format!("{}{}", self.name, self.surname)
    }

    fn section_key(&self) -> String {
        section_key_of(&self.surname)
    }
}
