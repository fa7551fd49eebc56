use crate::e2e::helpers;

use chrono::{Duration, Utc};
use helpers::TestContext;
use hyper::StatusCode;
use postboard_backend::domain::shared::ObjectId;
use serde_json::{json, Value};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_create_and_fetch_a_post(ctx: &TestContext) {
    let (user, session) = ctx.user_with_session("author").await;

    let response = ctx
        .client
        .post_with_session("/posts", &json!({ "post_content": "hello" }), &session)
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);
    let post_id = response.created_id();
    assert_eq!(post_id.len(), 24);

    let response = ctx
        .client
        .get_with_session(&format!("/posts/{}", post_id), &session)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["_id"], post_id.as_str());
    assert_eq!(body["user_id"], user.id.as_str());
    assert_eq!(body["username"], "author");
    assert_eq!(body["post_content"], "hello");
    assert_eq!(body["archived"], false);
    assert_eq!(body["like_count"], 0);
    assert_eq!(body["comment_count"], 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_post_without_content(ctx: &TestContext) {
    let (_, session) = ctx.user_with_session("author").await;

    for body in [json!({}), json!({ "post_content": "" }), json!({ "post_content": "   " })] {
        let response = ctx
            .client
            .post_with_session("/posts", &body, &session)
            .await
            .unwrap();
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    // No body at all
    let response = ctx
        .client
        .post_empty_with_session("/posts", &session)
        .await
        .unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("post_content is required");

    assert_eq!(ctx.fixtures.count_rows(helpers::Table::Posts).await.unwrap(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_unknown_or_invalid_post_id(ctx: &TestContext) {
    let (_, session) = ctx.user_with_session("reader").await;

    let unknown = ObjectId::new();
    for path in [
        format!("/posts/{}", unknown),
        "/posts/invalidpostid".to_string(),
        "/posts".to_string(),
    ] {
        let response = ctx.client.get_with_session(&path, &session).await.unwrap();
        response.assert_status(StatusCode::NOT_FOUND);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_user_posts_newest_first(ctx: &TestContext) {
    let (user, session) = ctx.user_with_session("writer").await;
    let base = Utc::now() - Duration::hours(1);
    for i in 0..12 {
        ctx.fixtures
            .create_post_at(&user.id, &format!("post {}", i), base + Duration::minutes(i))
            .await
            .unwrap();
    }

    let first = ctx
        .client
        .get_with_session("/posts/user/writer/1", &session)
        .await
        .unwrap();
    first.assert_status(StatusCode::OK);
    let first: Vec<Value> = first.json().unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(first[0]["post_content"], "post 11");
    assert_eq!(first[9]["post_content"], "post 2");

    let second: Vec<Value> = ctx
        .client
        .get_with_session("/posts/user/writer/2", &session)
        .await
        .unwrap()
        .json()
        .unwrap();
    let contents: Vec<&str> = second
        .iter()
        .map(|p| p["post_content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["post 1", "post 0"]);

    let beyond: Vec<Value> = ctx
        .client
        .get_with_session("/posts/user/writer/3", &session)
        .await
        .unwrap()
        .json()
        .unwrap();
    assert!(beyond.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_empty_list_for_user_without_posts(ctx: &TestContext) {
    let (_, session) = ctx.user_with_session("quiet").await;

    let response = ctx
        .client
        .get_with_session("/posts/user/quiet/1", &session)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Vec<Value>>().unwrap().len(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_validate_page_before_username(ctx: &TestContext) {
    let (_, session) = ctx.user_with_session("pager").await;

    for path in [
        "/posts/user/pager/0",
        "/posts/user/pager/-1",
        "/posts/user/nobody/0",
        "/posts/user/pager/first",
    ] {
        let response = ctx.client.get_with_session(path, &session).await.unwrap();
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    let response = ctx
        .client
        .get_with_session("/posts/user/nobody/1", &session)
        .await
        .unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_hide_archived_posts_from_other_users(ctx: &TestContext) {
    let (owner, owner_session) = ctx.user_with_session("owner").await;
    let (_, other_session) = ctx.user_with_session("other").await;
    ctx.fixtures.create_post(&owner.id, "visible").await.unwrap();
    let archived = ctx
        .fixtures
        .create_archived_post(&owner.id, "archived")
        .await
        .unwrap();

    let as_other: Vec<Value> = ctx
        .client
        .get_with_session("/posts/user/owner/1", &other_session)
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(as_other.len(), 1);
    assert_eq!(as_other[0]["post_content"], "visible");

    let as_owner: Vec<Value> = ctx
        .client
        .get_with_session("/posts/user/owner/1", &owner_session)
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(as_owner.len(), 2);

    // Direct lookups still resolve
    let response = ctx
        .client
        .get_with_session(&format!("/posts/{}", archived), &other_session)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap()["archived"], true);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_update_own_post(ctx: &TestContext) {
    let (user, session) = ctx.user_with_session("editor").await;
    let post_id = ctx.fixtures.create_post(&user.id, "draft").await.unwrap();

    let response = ctx
        .client
        .put_with_session(
            &format!("/posts/{}", post_id),
            &json!({ "post_content": "final" }),
            &session,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap()["post_content"], "final");

    let response = ctx
        .client
        .get_with_session(&format!("/posts/{}", post_id), &session)
        .await
        .unwrap();
    assert_eq!(response.body.as_ref().unwrap()["post_content"], "final");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_order_update_failures_not_found_forbidden_then_invalid(ctx: &TestContext) {
    let (owner, _) = ctx.user_with_session("owner").await;
    let (_, intruder) = ctx.user_with_session("intruder").await;
    let post_id = ctx.fixtures.create_post(&owner.id, "mine").await.unwrap();
    let path = format!("/posts/{}", post_id);

    // Foreign post with a valid body
    let response = ctx
        .client
        .put_with_session(&path, &json!({ "post_content": "yours now" }), &intruder)
        .await
        .unwrap();
    response.assert_status(StatusCode::FORBIDDEN);

    // Foreign post with a bad body is still forbidden
    let response = ctx
        .client
        .put_with_session(&path, &json!({}), &intruder)
        .await
        .unwrap();
    response.assert_status(StatusCode::FORBIDDEN);

    // Unknown and malformed ids win over a bad body
    for path in [format!("/posts/{}", ObjectId::new()), "/posts/nope".to_string()] {
        let response = ctx
            .client
            .put_with_session(&path, &json!({}), &intruder)
            .await
            .unwrap();
        response.assert_status(StatusCode::NOT_FOUND);
    }

    let response = ctx
        .client
        .get_with_session(&path, &intruder)
        .await
        .unwrap();
    assert_eq!(response.body.as_ref().unwrap()["post_content"], "mine");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_update_without_content(ctx: &TestContext) {
    let (user, session) = ctx.user_with_session("editor").await;
    let post_id = ctx.fixtures.create_post(&user.id, "keep me").await.unwrap();

    let response = ctx
        .client
        .put_with_session(
            &format!("/posts/{}", post_id),
            &json!({ "post_content": "" }),
            &session,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_delete_own_post_with_its_comments_and_likes(ctx: &TestContext) {
    let (user, session) = ctx.user_with_session("owner").await;
    let fan = ctx.fixtures.create_user("fan").await.unwrap();
    let post_id = ctx.fixtures.create_post(&user.id, "short lived").await.unwrap();
    ctx.fixtures.like_post(&post_id, &fan.id).await.unwrap();
    ctx.fixtures
        .create_comment(&post_id, &fan.id, "nice")
        .await
        .unwrap();

    let response = ctx
        .client
        .delete_with_session(&format!("/posts/{}/delete", post_id), &session)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);

    assert!(!ctx.fixtures.post_exists(&post_id).await.unwrap());
    assert_eq!(ctx.fixtures.count_likes(&post_id).await.unwrap(), 0);
    assert_eq!(ctx.fixtures.count_comments(&post_id).await.unwrap(), 0);

    let response = ctx
        .client
        .get_with_session(&format!("/posts/{}", post_id), &session)
        .await
        .unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_deleting_foreign_or_unknown_posts(ctx: &TestContext) {
    let owner = ctx.fixtures.create_user("owner").await.unwrap();
    let (_, intruder) = ctx.user_with_session("intruder").await;
    let post_id = ctx.fixtures.create_post(&owner.id, "stays").await.unwrap();

    let response = ctx
        .client
        .delete_with_session(&format!("/posts/{}/delete", post_id), &intruder)
        .await
        .unwrap();
    response.assert_status(StatusCode::FORBIDDEN);
    assert!(ctx.fixtures.post_exists(&post_id).await.unwrap());

    let response = ctx
        .client
        .delete_with_session("/posts/invalidPostId/delete", &intruder)
        .await
        .unwrap();
    response.assert_status(StatusCode::NOT_FOUND);

    let response = ctx
        .client
        .delete_with_session(&format!("/posts/{}/delete", ObjectId::new()), &intruder)
        .await
        .unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_archive_and_unarchive_idempotently(ctx: &TestContext) {
    let (user, session) = ctx.user_with_session("archivist").await;
    let post_id = ctx.fixtures.create_post(&user.id, "old news").await.unwrap();

    for _ in 0..2 {
        let response = ctx
            .client
            .put_empty_with_session(&format!("/posts/{}/archive", post_id), &session)
            .await
            .unwrap();
        response.assert_status(StatusCode::OK);
        assert_eq!(response.body.as_ref().unwrap()["archived"], true);
    }
    assert!(ctx.fixtures.is_archived(&post_id).await.unwrap());

    for _ in 0..2 {
        let response = ctx
            .client
            .put_empty_with_session(&format!("/posts/{}/unarchive", post_id), &session)
            .await
            .unwrap();
        response.assert_status(StatusCode::OK);
        assert_eq!(response.body.as_ref().unwrap()["archived"], false);
    }
    assert!(!ctx.fixtures.is_archived(&post_id).await.unwrap());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_archiving_foreign_or_unknown_posts(ctx: &TestContext) {
    let owner = ctx.fixtures.create_user("owner").await.unwrap();
    let (_, intruder) = ctx.user_with_session("intruder").await;
    let post_id = ctx.fixtures.create_post(&owner.id, "not yours").await.unwrap();

    for action in ["archive", "unarchive"] {
        let response = ctx
            .client
            .put_empty_with_session(&format!("/posts/{}/{}", post_id, action), &intruder)
            .await
            .unwrap();
        response.assert_status(StatusCode::FORBIDDEN);

        let response = ctx
            .client
            .put_empty_with_session(&format!("/posts/invalidpostid/{}", action), &intruder)
            .await
            .unwrap();
        response.assert_status(StatusCode::NOT_FOUND);
    }

    assert!(!ctx.fixtures.is_archived(&post_id).await.unwrap());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_engagement_counts(ctx: &TestContext) {
    let (user, session) = ctx.user_with_session("popular").await;
    let fan_a = ctx.fixtures.create_user("fan_a").await.unwrap();
    let fan_b = ctx.fixtures.create_user("fan_b").await.unwrap();
    let post_id = ctx.fixtures.create_post(&user.id, "look").await.unwrap();
    ctx.fixtures.like_post(&post_id, &fan_a.id).await.unwrap();
    ctx.fixtures.like_post(&post_id, &fan_b.id).await.unwrap();
    ctx.fixtures
        .create_comment(&post_id, &fan_a.id, "wow")
        .await
        .unwrap();

    let response = ctx
        .client
        .get_with_session(&format!("/posts/{}", post_id), &session)
        .await
        .unwrap();

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["like_count"], 2);
    assert_eq!(body["comment_count"], 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_wrong_method_on_delete_route_with_not_found(ctx: &TestContext) {
    let (user, session) = ctx.user_with_session("owner").await;
    let post_id = ctx.fixtures.create_post(&user.id, "gone soon").await.unwrap();
    let delete_path = format!("/posts/{}/delete", post_id);

    ctx.client
        .delete_with_session(&delete_path, &session)
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let response = ctx
        .client
        .get_with_session(&delete_path, &session)
        .await
        .unwrap();
    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("not found")
        .assert_header_exists("x-request-id");
}
