use async_trait::async_trait;
use thiserror::Error;

use crate::models::{DbUser, NewUser, UserChanges};

pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[async_trait]
pub trait Storage: UserStore + Send + Sync + 'static {
    async fn ping(&self) -> Result<(), StoreError>;
}

/// The store contract consumed by the user endpoints.
///
/// Absence is a value, not an error: every id-addressed operation returns
/// `None` when no record matches, and the caller decides what that means.
#[async_trait]
pub trait UserStore {
    /// All records, in ascending id order.
    async fn list(&self) -> Result<Vec<DbUser>, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<DbUser>, StoreError>;

    /// Persist a new record under a freshly assigned id.
    async fn create(&self, user: NewUser) -> Result<DbUser, StoreError>;

    /// Replace the fields of the record addressed by `changes.id` and return
    /// the updated record.
    async fn update(&self, changes: UserChanges) -> Result<Option<DbUser>, StoreError>;

    /// Remove the record with the given id and return it.
    async fn delete(&self, id: i64) -> Result<Option<DbUser>, StoreError>;
}
