use std::fmt::Display;

use chrono::{DateTime, Utc};
use roster_common::views::User;

/// A user record as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct DbUser {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Display for DbUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DbUser {{ id: {}, name: {} }}", self.id, self.name)
    }
}

impl From<DbUser> for User {
    fn from(value: DbUser) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// The fields of a user that has not been persisted yet. The store assigns
/// the id and both timestamps.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
}

/// A replacement for an existing record, addressed by its id.
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}
