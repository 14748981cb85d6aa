/// Persistence gateway
///
/// Typed repository traits over the `users` and `bookmarks` tables, plus the
/// [`Store`] trait that bundles both with health and test-support operations.
///
/// # Backends
///
/// - [`postgres::PgStore`]: sqlx over a `PgPool`
/// - [`memory::MemoryStore`]: in-process maps, for tests and embedding
///
/// Services take `Arc<dyn ...Repository>` handles at construction, so either
/// backend can be plugged in without touching service code.
///
/// # Example
///
/// ```
/// use bookmarks_shared::models::bookmark::{BookmarkFilter, CreateBookmark};
/// use bookmarks_shared::store::{memory::MemoryStore, BookmarkRepository};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryStore::new();
/// let owner = Uuid::new_v4();
///
/// store
///     .create(
///         owner,
///         CreateBookmark {
///             title: "Rust".to_string(),
///             link: "https://www.rust-lang.org".to_string(),
///             description: None,
///         },
///     )
///     .await?;
///
/// let mine = store.find_many(BookmarkFilter::owned_by(owner)).await?;
/// assert_eq!(mine.len(), 1);
/// # Ok(())
/// # }
/// ```

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    bookmark::{Bookmark, BookmarkFilter, CreateBookmark, UpdateBookmark},
    user::{CreateUser, UpdateUser, User},
};

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Unique constraint violated (e.g. duplicate email)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other database failure
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or("unique").to_string();
                return StoreError::Conflict(constraint);
            }
        }
        StoreError::Database(err)
    }
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Access to the `users` table
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user; duplicate email yields [`StoreError::Conflict`]
    async fn create_user(&self, data: CreateUser) -> StoreResult<User>;

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Applies a partial update; `None` if the user doesn't exist
    async fn update_user(&self, id: Uuid, data: UpdateUser) -> StoreResult<Option<User>>;
}

/// Access to the `bookmarks` table
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// All rows matching `filter`, oldest first
    async fn find_many(&self, filter: BookmarkFilter) -> StoreResult<Vec<Bookmark>>;

    /// First row matching `filter`, oldest first
    async fn find_first(&self, filter: BookmarkFilter) -> StoreResult<Option<Bookmark>>;

    /// Row by primary key, regardless of owner
    async fn find_unique(&self, id: Uuid) -> StoreResult<Option<Bookmark>>;

    async fn create(&self, user_id: Uuid, data: CreateBookmark) -> StoreResult<Bookmark>;

    /// Applies a partial update; `None` if the row doesn't exist
    async fn update(&self, id: Uuid, data: UpdateBookmark) -> StoreResult<Option<Bookmark>>;

    /// Removes the row; `false` if it didn't exist
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}

/// A complete backend: both repositories plus health and cleanup
#[async_trait]
pub trait Store: UserRepository + BookmarkRepository {
    /// Cheap liveness probe for health checks
    async fn ping(&self) -> StoreResult<()>;

    /// Deletes every bookmark and every user
    ///
    /// ⚠️  Test support only. Never call this against production data.
    async fn clean_db(&self) -> StoreResult<()>;
}
