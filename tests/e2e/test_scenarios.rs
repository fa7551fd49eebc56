use crate::e2e::helpers;

use helpers::{session_from_set_cookie, TestContext};
use hyper::StatusCode;
use serde_json::{json, Value};
use test_context::test_context;

/// Register and log in through the public API, returning the session token
async fn sign_up(ctx: &TestContext, username: &str) -> String {
    let password = format!("{}-password", username);

    ctx.client
        .post(
            "/auth/register",
            &json!({ "username": username, "password": password }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::CREATED);

    let login = ctx
        .client
        .post(
            "/auth/login",
            &json!({ "username": username, "password": password }),
        )
        .await
        .unwrap();
    login.assert_status(StatusCode::OK);

    let set_cookie = login.header("set-cookie").expect("Missing Set-Cookie");
    session_from_set_cookie(set_cookie).expect("Missing session cookie")
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_run_full_post_lifecycle_between_two_users(ctx: &TestContext) {
    let alice = sign_up(ctx, "alice").await;

    let response = ctx
        .client
        .post_with_session("/posts", &json!({ "post_content": "hello" }), &alice)
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);
    let post_id = response.created_id();
    let post_path = format!("/posts/{}", post_id);
    let delete_path = format!("{}/delete", post_path);

    let post: Value = ctx
        .client
        .get_with_session(&post_path, &alice)
        .await
        .unwrap()
        .assert_status(StatusCode::OK)
        .json()
        .unwrap();
    assert_eq!(post["_id"], post_id.as_str());
    assert_eq!(post["post_content"], "hello");

    ctx.client
        .put_with_session(&post_path, &json!({ "post_content": "hello, edited" }), &alice)
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let post: Value = ctx
        .client
        .get_with_session(&post_path, &alice)
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_ne!(post["post_content"], "hello");
    assert_eq!(post["post_content"], "hello, edited");

    let bob = sign_up(ctx, "bob").await;
    ctx.client
        .delete_with_session(&delete_path, &bob)
        .await
        .unwrap()
        .assert_status(StatusCode::FORBIDDEN);

    ctx.client
        .delete_with_session(&delete_path, &alice)
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    ctx.client
        .get_with_session(&post_path, &alice)
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_comment_ownership_apart_from_post_ownership(ctx: &TestContext) {
    let alice = sign_up(ctx, "alice").await;
    let bob = sign_up(ctx, "bob").await;

    let response = ctx
        .client
        .post_with_session("/posts", &json!({ "post_content": "thoughts?" }), &alice)
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);
    let post_id = response.created_id();

    let response = ctx
        .client
        .post_with_session(
            &format!("/posts/{}/comment", post_id),
            &json!({ "comment_content": "strong disagree" }),
            &bob,
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);
    let comment_id = response.created_id();

    let comment_path = format!("/posts/{}/comment/{}", post_id, comment_id);
    ctx.client
        .delete_with_session(&comment_path, &alice)
        .await
        .unwrap()
        .assert_status(StatusCode::FORBIDDEN);

    ctx.client
        .delete_with_session(&comment_path, &bob)
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
}
