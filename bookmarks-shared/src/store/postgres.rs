/// PostgreSQL store
///
/// Implements the repository traits with runtime-checked `sqlx::query_as`
/// queries against the schema in `migrations/`.
///
/// # Example
///
/// ```no_run
/// use bookmarks_shared::db::pool::{create_pool, DatabaseConfig};
/// use bookmarks_shared::store::{postgres::PgStore, UserRepository};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig {
///     url: std::env::var("DATABASE_URL")?,
///     ..Default::default()
/// })
/// .await?;
///
/// let store = PgStore::new(pool);
/// let user = store.find_user_by_id(Uuid::new_v4()).await?;
/// assert!(user.is_none());
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use super::{BookmarkRepository, Store, StoreResult, UserRepository};
use crate::models::{
    bookmark::{Bookmark, BookmarkFilter, CreateBookmark, UpdateBookmark},
    user::{CreateUser, UpdateUser, User},
};

const USER_COLUMNS: &str =
    "id, email, password_hash, first_name, last_name, created_at, updated_at";

const BOOKMARK_COLUMNS: &str = "id, user_id, title, description, link, created_at, updated_at";

/// Postgres-backed store
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserRepository for PgStore {
    async fn create_user(&self, data: CreateUser) -> StoreResult<User> {
        let query = format!(
            "INSERT INTO users (id, email, password_hash) VALUES ($1, $2, $3) RETURNING {}",
            USER_COLUMNS
        );

        let user = sqlx::query_as::<_, User>(&query)
            .bind(Uuid::new_v4())
            .bind(data.email)
            .bind(data.password_hash)
            .fetch_one(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);

        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);

        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn update_user(&self, id: Uuid, data: UpdateUser) -> StoreResult<Option<User>> {
        let query = format!(
            r#"
            UPDATE users
            SET email = COALESCE($2, email),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(data.email)
            .bind(data.first_name)
            .bind(data.last_name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}

#[async_trait]
impl BookmarkRepository for PgStore {
    async fn find_many(&self, filter: BookmarkFilter) -> StoreResult<Vec<Bookmark>> {
        let query = format!(
            r#"
            SELECT {}
            FROM bookmarks
            WHERE ($1::uuid IS NULL OR id = $1)
              AND ($2::uuid IS NULL OR user_id = $2)
            ORDER BY created_at ASC, id ASC
            "#,
            BOOKMARK_COLUMNS
        );

        let bookmarks = sqlx::query_as::<_, Bookmark>(&query)
            .bind(filter.id)
            .bind(filter.user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(bookmarks)
    }

    async fn find_first(&self, filter: BookmarkFilter) -> StoreResult<Option<Bookmark>> {
        let query = format!(
            r#"
            SELECT {}
            FROM bookmarks
            WHERE ($1::uuid IS NULL OR id = $1)
              AND ($2::uuid IS NULL OR user_id = $2)
            ORDER BY created_at ASC, id ASC
            LIMIT 1
            "#,
            BOOKMARK_COLUMNS
        );

        let bookmark = sqlx::query_as::<_, Bookmark>(&query)
            .bind(filter.id)
            .bind(filter.user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(bookmark)
    }

    async fn find_unique(&self, id: Uuid) -> StoreResult<Option<Bookmark>> {
        let query = format!("SELECT {} FROM bookmarks WHERE id = $1", BOOKMARK_COLUMNS);

        let bookmark = sqlx::query_as::<_, Bookmark>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(bookmark)
    }

    async fn create(&self, user_id: Uuid, data: CreateBookmark) -> StoreResult<Bookmark> {
        let query = format!(
            r#"
            INSERT INTO bookmarks (id, user_id, title, description, link)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            BOOKMARK_COLUMNS
        );

        let bookmark = sqlx::query_as::<_, Bookmark>(&query)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(data.title)
            .bind(data.description)
            .bind(data.link)
            .fetch_one(&self.pool)
            .await?;

        Ok(bookmark)
    }

    async fn update(&self, id: Uuid, data: UpdateBookmark) -> StoreResult<Option<Bookmark>> {
        let query = format!(
            r#"
            UPDATE bookmarks
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                link = COALESCE($4, link),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            BOOKMARK_COLUMNS
        );

        let bookmark = sqlx::query_as::<_, Bookmark>(&query)
            .bind(id)
            .bind(data.title)
            .bind(data.description)
            .bind(data.link)
            .fetch_optional(&self.pool)
            .await?;

        Ok(bookmark)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        crate::db::pool::health_check(&self.pool).await?;
        Ok(())
    }

    async fn clean_db(&self) -> StoreResult<()> {
        info!("Wiping all bookmarks and users");

        let mut tx = self.pool.begin().await?;
        let bookmarks = sqlx::query("DELETE FROM bookmarks").execute(&mut *tx).await?;
        let users = sqlx::query("DELETE FROM users").execute(&mut *tx).await?;
        tx.commit().await?;

        debug!(
            bookmarks = bookmarks.rows_affected(),
            users = users.rows_affected(),
            "Store wiped"
        );
        Ok(())
    }
}
