/// Bookmark service
///
/// The only code path that reads or mutates bookmarks. Every operation takes
/// the caller's user id explicitly and is scoped to it.
///
/// # Access rules
///
/// - `list` and `get_by_id` only ever return the caller's own rows. A foreign
///   id reads exactly like a missing one (`None`).
/// - `edit_by_id` and `delete_by_id` look the row up by id, then compare the
///   owner. Missing and foreign rows both fail with
///   [`BookmarkError::AccessDenied`], so callers can't probe for other users'
///   bookmarks.
///
/// # Example
///
/// ```
/// use bookmarks_shared::models::bookmark::CreateBookmark;
/// use bookmarks_shared::service::bookmark::{BookmarkError, BookmarkService};
/// use bookmarks_shared::store::memory::MemoryStore;
/// use std::sync::Arc;
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), BookmarkError> {
/// let service = BookmarkService::new(Arc::new(MemoryStore::new()));
/// let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
///
/// let bookmark = service
///     .create(
///         alice,
///         CreateBookmark {
///             title: "First Bookmark".to_string(),
///             link: "http://www.youtube.com".to_string(),
///             description: None,
///         },
///     )
///     .await?;
///
/// assert!(service.get_by_id(bob, bookmark.id).await?.is_none());
/// assert!(matches!(
///     service.delete_by_id(bob, bookmark.id).await,
///     Err(BookmarkError::AccessDenied)
/// ));
/// # Ok(())
/// # }
/// ```

use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::bookmark::{Bookmark, BookmarkFilter, CreateBookmark, UpdateBookmark};
use crate::store::{BookmarkRepository, StoreError};

/// Error type for bookmark operations
#[derive(Debug, thiserror::Error)]
pub enum BookmarkError {
    /// Target bookmark is missing or belongs to someone else
    #[error("Access to resources denied")]
    AccessDenied,

    /// Storage failure, passed through untouched
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Bookmark result type alias
pub type BookmarkResult<T> = Result<T, BookmarkError>;

/// Owner-scoped bookmark CRUD
#[derive(Clone)]
pub struct BookmarkService {
    repo: Arc<dyn BookmarkRepository>,
}

impl BookmarkService {
    /// Creates the service over a repository handle
    pub fn new(repo: Arc<dyn BookmarkRepository>) -> Self {
        Self { repo }
    }

    /// All of `owner_id`'s bookmarks, oldest first
    pub async fn list(&self, owner_id: Uuid) -> BookmarkResult<Vec<Bookmark>> {
        let bookmarks = self.repo.find_many(BookmarkFilter::owned_by(owner_id)).await?;
        debug!(user_id = %owner_id, count = bookmarks.len(), "Listed bookmarks");
        Ok(bookmarks)
    }

    /// One of `owner_id`'s bookmarks, or `None`
    pub async fn get_by_id(
        &self,
        owner_id: Uuid,
        bookmark_id: Uuid,
    ) -> BookmarkResult<Option<Bookmark>> {
        let filter = BookmarkFilter::owned_by(owner_id).with_id(bookmark_id);
        Ok(self.repo.find_first(filter).await?)
    }

    /// Saves a new bookmark owned by `owner_id`
    pub async fn create(&self, owner_id: Uuid, data: CreateBookmark) -> BookmarkResult<Bookmark> {
        let bookmark = self.repo.create(owner_id, data).await?;
        info!(user_id = %owner_id, bookmark_id = %bookmark.id, "Created bookmark");
        Ok(bookmark)
    }

    /// Applies a partial update to one of `owner_id`'s bookmarks
    ///
    /// # Errors
    ///
    /// [`BookmarkError::AccessDenied`] if the bookmark doesn't exist, isn't
    /// owned by `owner_id`, or disappears before the write lands.
    pub async fn edit_by_id(
        &self,
        owner_id: Uuid,
        bookmark_id: Uuid,
        data: UpdateBookmark,
    ) -> BookmarkResult<Bookmark> {
        self.ensure_owner(owner_id, bookmark_id).await?;

        let bookmark = self
            .repo
            .update(bookmark_id, data)
            .await?
            .ok_or(BookmarkError::AccessDenied)?;

        info!(user_id = %owner_id, bookmark_id = %bookmark_id, "Edited bookmark");
        Ok(bookmark)
    }

    /// Permanently removes one of `owner_id`'s bookmarks
    ///
    /// # Errors
    ///
    /// [`BookmarkError::AccessDenied`] if the bookmark doesn't exist or isn't
    /// owned by `owner_id`.
    pub async fn delete_by_id(&self, owner_id: Uuid, bookmark_id: Uuid) -> BookmarkResult<()> {
        self.ensure_owner(owner_id, bookmark_id).await?;

        // A concurrent delete may have won the race; the row is gone either way
        if !self.repo.delete(bookmark_id).await? {
            debug!(bookmark_id = %bookmark_id, "Bookmark already deleted");
        }

        info!(user_id = %owner_id, bookmark_id = %bookmark_id, "Deleted bookmark");
        Ok(())
    }

    async fn ensure_owner(&self, owner_id: Uuid, bookmark_id: Uuid) -> BookmarkResult<()> {
        match self.repo.find_unique(bookmark_id).await? {
            Some(bookmark) if bookmark.is_owned_by(owner_id) => Ok(()),
            _ => {
                warn!(user_id = %owner_id, bookmark_id = %bookmark_id, "Bookmark access denied");
                Err(BookmarkError::AccessDenied)
            }
        }
    }
}
