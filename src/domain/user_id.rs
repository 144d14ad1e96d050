use std::fmt;

use super::{InvalidIdentifier, USER_SEPARATOR};

/// Owner of a set of conversations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        let value = value.into();
        if value.is_empty() {
            return Err(InvalidIdentifier::Empty("user id"));
        }
        if value.contains(USER_SEPARATOR) {
            return Err(InvalidIdentifier::ContainsSeparator {
                kind: "user id",
                separator: USER_SEPARATOR,
                value,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
