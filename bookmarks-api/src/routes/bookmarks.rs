/// Bookmark endpoints
///
/// Every handler is scoped to the authenticated caller. Another user's
/// bookmark looks exactly like a missing one: `GET` returns `null`, and
/// `PATCH`/`DELETE` return 403.
///
/// # Endpoints
///
/// - `GET    /bookmarks`     - List (oldest first)
/// - `POST   /bookmarks`     - Create (201)
/// - `GET    /bookmarks/:id` - Fetch one, or `null`
/// - `PATCH  /bookmarks/:id` - Partial update
/// - `DELETE /bookmarks/:id` - Delete (204)

use crate::{
    app::AppState,
    error::ApiResult,
    extract::{Id, ValidatedJson},
};
use axum::{extract::State, http::StatusCode, Extension, Json};
use bookmarks_shared::{
    auth::middleware::AuthContext,
    models::bookmark::{Bookmark, CreateBookmark, UpdateBookmark},
};
use serde::Deserialize;
use validator::Validate;

/// Create bookmark request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookmarkRequest {
    #[validate(length(min = 1, message = "title should not be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "link should not be empty"))]
    pub link: String,

    pub description: Option<String>,
}

impl From<CreateBookmarkRequest> for CreateBookmark {
    fn from(req: CreateBookmarkRequest) -> Self {
        CreateBookmark {
            title: req.title,
            link: req.link,
            description: req.description,
        }
    }
}

/// Edit bookmark request; omitted fields are left alone
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl From<EditBookmarkRequest> for UpdateBookmark {
    fn from(req: EditBookmarkRequest) -> Self {
        UpdateBookmark {
            title: req.title,
            description: req.description,
            link: req.link,
        }
    }
}

pub async fn list_bookmarks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<Bookmark>>> {
    let bookmarks = state.bookmarks.list(auth.user_id).await?;
    Ok(Json(bookmarks))
}

/// Returns the bookmark, or `null` when it's missing or owned by someone else
pub async fn get_bookmark(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Id(id): Id,
) -> ApiResult<Json<Option<Bookmark>>> {
    let bookmark = state.bookmarks.get_by_id(auth.user_id, id).await?;
    Ok(Json(bookmark))
}

pub async fn create_bookmark(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    ValidatedJson(req): ValidatedJson<CreateBookmarkRequest>,
) -> ApiResult<(StatusCode, Json<Bookmark>)> {
    let bookmark = state.bookmarks.create(auth.user_id, req.into()).await?;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// # Errors
///
/// - `403 Forbidden`: Bookmark missing or owned by someone else
pub async fn edit_bookmark(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Id(id): Id,
    ValidatedJson(req): ValidatedJson<EditBookmarkRequest>,
) -> ApiResult<Json<Bookmark>> {
    let bookmark = state
        .bookmarks
        .edit_by_id(auth.user_id, id, req.into())
        .await?;
    Ok(Json(bookmark))
}

/// # Errors
///
/// - `403 Forbidden`: Bookmark missing or owned by someone else
pub async fn delete_bookmark(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Id(id): Id,
) -> ApiResult<StatusCode> {
    state.bookmarks.delete_by_id(auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
