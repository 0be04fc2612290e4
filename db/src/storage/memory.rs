use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    models::{DbUser, NewUser, UserChanges},
    storage::{Storage, StoreError, UserStore},
};

/// In-memory storage backend.
///
/// Records live in a `BTreeMap` keyed by id, so `list` comes back in
/// ascending id order. Ids start at 1 and are never reused, even after the
/// record they belonged to has been deleted.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<i64, DbUser>,
    last_id: i64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStorage {
    async fn list(&self) -> Result<Vec<DbUser>, StoreError> {
        let inner = self.inner.read().await;

        Ok(inner.users.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<DbUser>, StoreError> {
        let inner = self.inner.read().await;

        Ok(inner.users.get(&id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<DbUser, StoreError> {
        let mut inner = self.inner.write().await;

        inner.last_id += 1;
        let now = Utc::now();
        let record = DbUser {
            id: inner.last_id,
            name: user.name,
            email: user.email,
            created_at: now,
            updated_at: now,
        };

        inner.users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, changes: UserChanges) -> Result<Option<DbUser>, StoreError> {
        let mut inner = self.inner.write().await;

        let Some(record) = inner.users.get_mut(&changes.id) else {
            return Ok(None);
        };

        record.name = changes.name;
        record.email = changes.email;
        record.updated_at = Utc::now();

        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: i64) -> Result<Option<DbUser>, StoreError> {
        let mut inner = self.inner.write().await;

        Ok(inner.users.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.into(),
            email: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = MemoryStorage::new();

        let first = store.create(new_user("Ada")).await.unwrap();
        let second = store.create(new_user("Grace")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn get_returns_created_record() {
        let store = MemoryStorage::new();

        let created = store
            .create(NewUser {
                name: "Ada".into(),
                email: Some("ada@example.com".into()),
            })
            .await
            .unwrap();

        let fetched = store.get(created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn get_unknown_id_returns_none() {
        let store = MemoryStorage::new();

        assert_eq!(store.get(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = MemoryStorage::new();

        for name in ["Ada", "Grace", "Edsger"] {
            store.create(new_user(name)).await.unwrap();
        }

        let ids: Vec<i64> = store.list().await.unwrap().iter().map(|u| u.id).collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_created_at() {
        let store = MemoryStorage::new();
        let created = store.create(new_user("Ada")).await.unwrap();

        let updated = store
            .update(UserChanges {
                id: created.id,
                name: "Ada Lovelace".into(),
                email: Some("ada@example.com".into()),
            })
            .await
            .unwrap()
            .expect("record exists");

        assert_eq!(updated.name, "Ada Lovelace");
        assert_eq!(updated.email.as_deref(), Some("ada@example.com"));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let store = MemoryStorage::new();

        let result = store
            .update(UserChanges {
                id: 42,
                name: "Nobody".into(),
                email: None,
            })
            .await
            .unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn delete_returns_record_then_none() {
        let store = MemoryStorage::new();
        let created = store.create(new_user("Ada")).await.unwrap();

        assert_eq!(store.delete(created.id).await.unwrap(), Some(created));
        assert_eq!(store.delete(1).await.unwrap(), None);
        assert_eq!(store.get(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStorage::new();

        let first = store.create(new_user("Ada")).await.unwrap();
        store.delete(first.id).await.unwrap();
        let second = store.create(new_user("Grace")).await.unwrap();

        assert_eq!(second.id, 2);
    }
}
