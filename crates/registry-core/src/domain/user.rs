//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// A stored user record.
///
/// The `id` is assigned by the store when the record is first persisted and
/// never changes afterwards; only `username` and `email` are mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,

    /// Login name.
    pub username: String,

    /// Contact email address.
    pub email: String,
}

impl User {
    /// Creates a user with a known identifier.
    #[must_use]
    pub fn new(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Replaces the mutable fields, keeping the identifier.
    pub fn apply_changes(&mut self, username: String, email: String) {
        self.username = username;
        self.email = email;
    }
}

/// A user that has not been persisted yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

impl NewUser {
    /// Creates a new unsaved user.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Attaches a store-assigned id, producing the persisted record.
    #[must_use]
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
        }
    }
}
