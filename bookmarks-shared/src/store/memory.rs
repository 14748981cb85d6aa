/// In-memory store
///
/// Keeps users in a map and bookmarks in insertion order behind a single
/// `tokio::sync::RwLock`. Mirrors the Postgres store's observable behaviour:
/// email uniqueness produces [`StoreError::Conflict`] with the same constraint
/// name, and `find_many` returns oldest first.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{BookmarkRepository, Store, StoreError, StoreResult, UserRepository};
use crate::models::{
    bookmark::{Bookmark, BookmarkFilter, CreateBookmark, UpdateBookmark},
    user::{CreateUser, UpdateUser, User},
};

const EMAIL_CONSTRAINT: &str = "users_email_key";

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    bookmarks: Vec<Bookmark>,
}

impl Tables {
    fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

/// Process-local backend
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_user(&self, data: CreateUser) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        if tables.email_taken(&data.email, None) {
            return Err(StoreError::Conflict(EMAIL_CONSTRAINT.to_string()));
        }

        let now = chrono::Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: data.email,
            password_hash: data.password_hash,
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn update_user(&self, id: Uuid, data: UpdateUser) -> StoreResult<Option<User>> {
        let mut tables = self.tables.write().await;
        if let Some(ref email) = data.email {
            if tables.email_taken(email, Some(id)) {
                return Err(StoreError::Conflict(EMAIL_CONSTRAINT.to_string()));
            }
        }

        Ok(tables.users.get_mut(&id).map(|user| {
            user.apply(data);
            user.clone()
        }))
    }
}

#[async_trait]
impl BookmarkRepository for MemoryStore {
    async fn find_many(&self, filter: BookmarkFilter) -> StoreResult<Vec<Bookmark>> {
        let tables = self.tables.read().await;
        Ok(tables
            .bookmarks
            .iter()
            .filter(|b| filter.matches(b))
            .cloned()
            .collect())
    }

    async fn find_first(&self, filter: BookmarkFilter) -> StoreResult<Option<Bookmark>> {
        let tables = self.tables.read().await;
        Ok(tables.bookmarks.iter().find(|b| filter.matches(b)).cloned())
    }

    async fn find_unique(&self, id: Uuid) -> StoreResult<Option<Bookmark>> {
        let tables = self.tables.read().await;
        Ok(tables.bookmarks.iter().find(|b| b.id == id).cloned())
    }

    async fn create(&self, user_id: Uuid, data: CreateBookmark) -> StoreResult<Bookmark> {
        let bookmark = Bookmark::new(user_id, data);
        self.tables.write().await.bookmarks.push(bookmark.clone());
        Ok(bookmark)
    }

    async fn update(&self, id: Uuid, data: UpdateBookmark) -> StoreResult<Option<Bookmark>> {
        let mut tables = self.tables.write().await;
        Ok(tables.bookmarks.iter_mut().find(|b| b.id == id).map(|bookmark| {
            bookmark.apply(data);
            bookmark.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.bookmarks.len();
        tables.bookmarks.retain(|b| b.id != id);
        Ok(tables.bookmarks.len() < before)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn clean_db(&self) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        debug!(
            users = tables.users.len(),
            bookmarks = tables.bookmarks.len(),
            "Wiping in-memory store"
        );
        tables.bookmarks.clear();
        tables.users.clear();
        Ok(())
    }
}
