/// Integration tests for the bookmark endpoints
///
/// Covers the full create → list → get → edit → delete flow and the
/// owner isolation rules between two users.

mod common;

use axum::http::StatusCode;
use common::TestContext;
use serde_json::{json, Value};

async fn create_bookmark(ctx: &mut TestContext, body: Value) -> Value {
    let (status, bookmark) = ctx.send_authed("POST", "/bookmarks", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", bookmark);
    bookmark
}

#[tokio::test]
async fn test_bookmark_lifecycle() {
    let mut ctx = TestContext::new().await;

    let (status, list) = ctx.send_authed("GET", "/bookmarks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));

    let created = create_bookmark(
        &mut ctx,
        json!({ "title": "First Bookmark", "link": "http://www.youtube.com" }),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["title"], "First Bookmark");
    assert_eq!(created["link"], "http://www.youtube.com");
    assert_eq!(created["description"], Value::Null);

    let (status, list) = ctx.send_authed("GET", "/bookmarks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, fetched) = ctx
        .send_authed("GET", &format!("/bookmarks/{}", id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], id.as_str());

    let (status, edited) = ctx
        .send_authed(
            "PATCH",
            &format!("/bookmarks/{}", id),
            Some(json!({ "title": "THIS IS IT", "description": "Here we are again" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["title"], "THIS IS IT");
    assert_eq!(edited["description"], "Here we are again");
    assert_eq!(edited["link"], "http://www.youtube.com");

    let (status, body) = ctx
        .send_authed("DELETE", &format!("/bookmarks/{}", id), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, list) = ctx.send_authed("GET", "/bookmarks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_create_bookmark_validation() {
    let mut ctx = TestContext::new().await;

    let (status, _) = ctx
        .send_authed("POST", "/bookmarks", Some(json!({ "link": "http://a.com" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = ctx
        .send_authed(
            "POST",
            "/bookmarks",
            Some(json!({ "title": "", "link": "" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_is_oldest_first() {
    let mut ctx = TestContext::new().await;

    for title in ["one", "two", "three"] {
        create_bookmark(&mut ctx, json!({ "title": title, "link": "http://x.com" })).await;
    }

    let (_, list) = ctx.send_authed("GET", "/bookmarks", None).await;
    let titles: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_get_missing_bookmark_is_null() {
    let mut ctx = TestContext::new().await;

    let (status, body) = ctx
        .send_authed(
            "GET",
            &format!("/bookmarks/{}", uuid::Uuid::new_v4()),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let mut ctx = TestContext::new().await;

    let (status, body) = ctx.send_authed("GET", "/bookmarks/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_edit_and_delete_missing_bookmark_are_forbidden() {
    let mut ctx = TestContext::new().await;
    let uri = format!("/bookmarks/{}", uuid::Uuid::new_v4());

    let (status, body) = ctx
        .send_authed("PATCH", &uri, Some(json!({ "title": "x" })))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access to resources denied");

    let (status, _) = ctx.send_authed("DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_other_users_bookmarks_are_invisible() {
    let mut ctx = TestContext::new().await;
    let created = create_bookmark(
        &mut ctx,
        json!({ "title": "Mine", "link": "http://mine.com" }),
    )
    .await;
    let uri = format!("/bookmarks/{}", created["id"].as_str().unwrap());

    let intruder = ctx.signup("intruder@example.com", "secret").await;

    let (status, list) = ctx.send("GET", "/bookmarks", Some(&intruder), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));

    let (status, body) = ctx.send("GET", &uri, Some(&intruder), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, _) = ctx
        .send("PATCH", &uri, Some(&intruder), Some(json!({ "title": "Stolen" })))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = ctx.send("DELETE", &uri, Some(&intruder), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Owner still sees it untouched
    let (status, body) = ctx.send_authed("GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Mine");
}

#[tokio::test]
async fn test_bookmarks_require_token() {
    let mut ctx = TestContext::new().await;

    let (status, _) = ctx.send("GET", "/bookmarks", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = ctx
        .send(
            "POST",
            "/bookmarks",
            None,
            Some(json!({ "title": "t", "link": "l" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let mut ctx = TestContext::new().await;
    let first = create_bookmark(
        &mut ctx,
        json!({ "title": "First", "link": "http://one.com" }),
    )
    .await;
    create_bookmark(
        &mut ctx,
        json!({ "title": "Second", "link": "http://two.com", "description": "d" }),
    )
    .await;
    let uri = format!("/bookmarks/{}", first["id"].as_str().unwrap());

    let (_, list_a) = ctx.send_authed("GET", "/bookmarks", None).await;
    let (_, list_b) = ctx.send_authed("GET", "/bookmarks", None).await;
    assert_eq!(list_a.as_array().unwrap().len(), 2);
    assert_eq!(list_a, list_b);

    let (_, get_a) = ctx.send_authed("GET", &uri, None).await;
    let (_, get_b) = ctx.send_authed("GET", &uri, None).await;
    assert_eq!(get_a, get_b);
    assert_eq!(get_a["updatedAt"], first["updatedAt"]);
}

#[tokio::test]
async fn test_edit_without_body_is_bad_request() {
    let mut ctx = TestContext::new().await;
    let created = create_bookmark(
        &mut ctx,
        json!({ "title": "Keep", "link": "http://keep.com" }),
    )
    .await;
    let uri = format!("/bookmarks/{}", created["id"].as_str().unwrap());

    let (status, body) = ctx.send_authed("PATCH", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");

    // An empty object is the way to send "no changes"
    let (status, edited) = ctx.send_authed("PATCH", &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["title"], "Keep");
}
