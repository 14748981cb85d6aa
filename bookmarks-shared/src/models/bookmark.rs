/// Bookmark model
///
/// A bookmark is a saved link owned by exactly one user. The owner is fixed
/// at creation; no input type carries a `user_id` for updates.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE bookmarks (
///     id UUID PRIMARY KEY,
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     title VARCHAR(1024) NOT NULL,
///     description TEXT,
///     link TEXT NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Saved link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Unique bookmark ID (UUID v4)
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Title (required)
    pub title: String,

    /// Free-form description
    pub description: Option<String>,

    /// Target URL (required)
    pub link: String,

    /// When the bookmark was created
    pub created_at: DateTime<Utc>,

    /// When the bookmark was last edited
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a bookmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookmark {
    pub title: String,
    pub link: String,
    pub description: Option<String>,
}

/// Partial bookmark update
///
/// Only `Some` fields are written; the rest keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateBookmark {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// Equality filter over bookmarks
///
/// Unset fields match every row, so `BookmarkFilter::default()` selects all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookmarkFilter {
    pub id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}

impl BookmarkFilter {
    /// All bookmarks owned by `user_id`
    pub fn owned_by(user_id: Uuid) -> Self {
        Self {
            id: None,
            user_id: Some(user_id),
        }
    }

    /// Narrows the filter to a single bookmark id
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Checks a bookmark against the filter
    pub fn matches(&self, bookmark: &Bookmark) -> bool {
        self.id.map_or(true, |id| bookmark.id == id)
            && self.user_id.map_or(true, |user_id| bookmark.user_id == user_id)
    }
}

impl Bookmark {
    /// Builds a new bookmark row for `user_id` with fresh id and timestamps
    pub fn new(user_id: Uuid, data: CreateBookmark) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: data.title,
            description: data.description,
            link: data.link,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if `user_id` owns this bookmark
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Applies a partial update in place and bumps `updated_at`
    pub fn apply(&mut self, update: UpdateBookmark) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(link) = update.link {
            self.link = link;
        }
        self.updated_at = Utc::now();
    }
}
