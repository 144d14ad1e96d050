use std::fmt;

use super::{InvalidIdentifier, UserId};

/// Separates the owning user from the session part of a composite key.
pub const USER_SEPARATOR: char = '+';

/// Opaque key naming one conversation's history.
///
/// Keys built with [`ConversationId::for_user`] have the form
/// `user+session`; the user segment is what per-user listing matches on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        let value = value.into();
        if value.is_empty() {
            return Err(InvalidIdentifier::Empty("conversation id"));
        }
        Ok(Self(value))
    }

    pub fn for_user(user: &UserId, session: impl fmt::Display) -> Self {
        Self(format!("{}{}{}", user.as_str(), USER_SEPARATOR, session))
    }

    /// The owning user segment, if the key is composite.
    pub fn user_id(&self) -> Option<&str> {
        self.0
            .split_once(USER_SEPARATOR)
            .map(|(user, _)| user)
            .filter(|user| !user.is_empty())
    }

    pub fn belongs_to(&self, user: &UserId) -> bool {
        self.user_id() == Some(user.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
