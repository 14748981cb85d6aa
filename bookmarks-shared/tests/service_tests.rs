/// Integration tests wiring every service to one in-memory store
///
/// Mirrors what the API does per request: sign up, turn the token back into
/// a caller identity, then act as that caller.

use axum::http::{header, HeaderMap, HeaderValue};
use bookmarks_shared::auth::middleware::{authenticate, AuthContext};
use bookmarks_shared::models::bookmark::{CreateBookmark, UpdateBookmark};
use bookmarks_shared::models::user::UpdateUser;
use bookmarks_shared::service::{
    auth::{AuthCredentials, AuthService, AuthServiceError},
    bookmark::{BookmarkError, BookmarkService},
    user::UserService,
};
use bookmarks_shared::store::memory::MemoryStore;
use std::sync::Arc;

const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

struct Services {
    auth: AuthService,
    users: UserService,
    bookmarks: BookmarkService,
}

fn services() -> Services {
    let store = Arc::new(MemoryStore::new());
    Services {
        auth: AuthService::new(store.clone(), SECRET, chrono::Duration::minutes(15)),
        users: UserService::new(store.clone()),
        bookmarks: BookmarkService::new(store),
    }
}

async fn sign_up(services: &Services, email: &str) -> AuthContext {
    let token = services
        .auth
        .signup(AuthCredentials {
            email: email.to_string(),
            password: "123".to_string(),
        })
        .await
        .unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token.access_token)).unwrap(),
    );
    authenticate(&headers, SECRET).unwrap()
}

fn bookmark(title: &str) -> CreateBookmark {
    CreateBookmark {
        title: title.to_string(),
        link: "http://www.youtube.com".to_string(),
        description: None,
    }
}

#[tokio::test]
async fn test_token_identifies_signed_up_user() {
    let services = services();
    let caller = sign_up(&services, "vlad@gmail.com").await;

    let me = services.users.get_me(caller.user_id).await.unwrap();

    assert_eq!(me.email, "vlad@gmail.com");
    assert_eq!(caller.email, "vlad@gmail.com");
}

#[tokio::test]
async fn test_signin_after_email_change_uses_new_email() {
    let services = services();
    let caller = sign_up(&services, "old@example.com").await;

    services
        .users
        .edit(
            caller.user_id,
            UpdateUser {
                email: Some("new@example.com".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let old = services
        .auth
        .signin(AuthCredentials {
            email: "old@example.com".to_string(),
            password: "123".to_string(),
        })
        .await;
    assert!(matches!(old, Err(AuthServiceError::CredentialsIncorrect)));

    let new = services
        .auth
        .signin(AuthCredentials {
            email: "new@example.com".to_string(),
            password: "123".to_string(),
        })
        .await;
    assert!(new.is_ok());
}

#[tokio::test]
async fn test_owners_are_isolated() {
    let services = services();
    let alice = sign_up(&services, "alice@example.com").await;
    let bob = sign_up(&services, "bob@example.com").await;

    let mine = services
        .bookmarks
        .create(alice.user_id, bookmark("Alice's"))
        .await
        .unwrap();
    services
        .bookmarks
        .create(bob.user_id, bookmark("Bob's"))
        .await
        .unwrap();

    let alice_list = services.bookmarks.list(alice.user_id).await.unwrap();
    assert_eq!(alice_list.len(), 1);
    assert_eq!(alice_list[0].id, mine.id);

    assert!(services
        .bookmarks
        .get_by_id(bob.user_id, mine.id)
        .await
        .unwrap()
        .is_none());

    let edit = services
        .bookmarks
        .edit_by_id(
            bob.user_id,
            mine.id,
            UpdateBookmark {
                title: Some("Stolen".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(edit, Err(BookmarkError::AccessDenied)));

    let delete = services.bookmarks.delete_by_id(bob.user_id, mine.id).await;
    assert!(matches!(delete, Err(BookmarkError::AccessDenied)));

    let still_there = services
        .bookmarks
        .get_by_id(alice.user_id, mine.id)
        .await
        .unwrap();
    assert_eq!(still_there, Some(mine));
}

#[tokio::test]
async fn test_delete_is_terminal() {
    let services = services();
    let caller = sign_up(&services, "vlad@gmail.com").await;
    let created = services
        .bookmarks
        .create(caller.user_id, bookmark("Gone soon"))
        .await
        .unwrap();

    services
        .bookmarks
        .delete_by_id(caller.user_id, created.id)
        .await
        .unwrap();

    assert!(services
        .bookmarks
        .get_by_id(caller.user_id, created.id)
        .await
        .unwrap()
        .is_none());
    assert!(matches!(
        services.bookmarks.delete_by_id(caller.user_id, created.id).await,
        Err(BookmarkError::AccessDenied)
    ));
    assert!(matches!(
        services
            .bookmarks
            .edit_by_id(caller.user_id, created.id, UpdateBookmark::default())
            .await,
        Err(BookmarkError::AccessDenied)
    ));
}
