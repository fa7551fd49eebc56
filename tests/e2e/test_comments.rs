use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use postboard_backend::domain::shared::ObjectId;
use serde_json::{json, Value};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_comment_on_a_post(ctx: &TestContext) {
    let author = ctx.fixtures.create_user("author").await.unwrap();
    let (commenter, session) = ctx.user_with_session("commenter").await;
    let post_id = ctx.fixtures.create_post(&author.id, "discuss").await.unwrap();

    let response = ctx
        .client
        .post_with_session(
            &format!("/posts/{}/comment", post_id),
            &json!({ "comment_content": "first!" }),
            &session,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);
    let comment_id = response.created_id();

    let comments: Vec<Value> = ctx
        .client
        .get_with_session(&format!("/posts/{}/1/allComments", post_id), &session)
        .await
        .unwrap()
        .json()
        .unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["_id"], comment_id.as_str());
    assert_eq!(comments[0]["post_id"], post_id.as_str());
    assert_eq!(comments[0]["user_id"], commenter.id.as_str());
    assert_eq!(comments[0]["username"], "commenter");
    assert_eq!(comments[0]["comment_content"], "first!");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_comment_without_content(ctx: &TestContext) {
    let author = ctx.fixtures.create_user("author").await.unwrap();
    let (_, session) = ctx.user_with_session("commenter").await;
    let post_id = ctx.fixtures.create_post(&author.id, "discuss").await.unwrap();
    let path = format!("/posts/{}/comment", post_id);

    for body in [json!({}), json!({ "comment_content": "" })] {
        let response = ctx
            .client
            .post_with_session(&path, &body, &session)
            .await
            .unwrap();
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    let response = ctx
        .client
        .post_empty_with_session(&path, &session)
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(ctx.fixtures.count_comments(&post_id).await.unwrap(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_when_commenting_on_unknown_post(ctx: &TestContext) {
    let (_, session) = ctx.user_with_session("commenter").await;

    for path in [
        format!("/posts/{}/comment", ObjectId::new()),
        "/posts/invalidpostid/comment".to_string(),
    ] {
        // Unknown post wins over a missing body
        for body in [json!({ "comment_content": "hello?" }), json!({})] {
            let response = ctx
                .client
                .post_with_session(&path, &body, &session)
                .await
                .unwrap();
            response.assert_status(StatusCode::NOT_FOUND);
        }
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_comments_oldest_first_in_pages(ctx: &TestContext) {
    let author = ctx.fixtures.create_user("author").await.unwrap();
    let (_, session) = ctx.user_with_session("reader").await;
    let post_id = ctx.fixtures.create_post(&author.id, "thread").await.unwrap();
    for i in 0..11 {
        ctx.fixtures
            .create_comment(&post_id, &author.id, &format!("reply {}", i))
            .await
            .unwrap();
    }

    let first: Vec<Value> = ctx
        .client
        .get_with_session(&format!("/posts/{}/1/allComments", post_id), &session)
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(first[0]["comment_content"], "reply 0");

    let second: Vec<Value> = ctx
        .client
        .get_with_session(&format!("/posts/{}/2/allComments", post_id), &session)
        .await
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0]["comment_content"], "reply 10");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_validate_comments_page_before_post(ctx: &TestContext) {
    let (_, session) = ctx.user_with_session("reader").await;

    let response = ctx
        .client
        .get_with_session(&format!("/posts/{}/0/allComments", ObjectId::new()), &session)
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = ctx
        .client
        .get_with_session(&format!("/posts/{}/1/allComments", ObjectId::new()), &session)
        .await
        .unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_delete_own_comment(ctx: &TestContext) {
    let author = ctx.fixtures.create_user("author").await.unwrap();
    let (commenter, session) = ctx.user_with_session("commenter").await;
    let post_id = ctx.fixtures.create_post(&author.id, "post").await.unwrap();
    let comment_id = ctx
        .fixtures
        .create_comment(&post_id, &commenter.id, "oops")
        .await
        .unwrap();

    let path = format!("/posts/{}/comment/{}", post_id, comment_id);
    let response = ctx.client.delete_with_session(&path, &session).await.unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(ctx.fixtures.count_comments(&post_id).await.unwrap(), 0);

    let response = ctx.client.delete_with_session(&path, &session).await.unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_forbid_post_owner_from_deleting_others_comments(ctx: &TestContext) {
    let (author, author_session) = ctx.user_with_session("author").await;
    let commenter = ctx.fixtures.create_user("commenter").await.unwrap();
    let post_id = ctx.fixtures.create_post(&author.id, "my post").await.unwrap();
    let comment_id = ctx
        .fixtures
        .create_comment(&post_id, &commenter.id, "my comment")
        .await
        .unwrap();

    let response = ctx
        .client
        .delete_with_session(
            &format!("/posts/{}/comment/{}", post_id, comment_id),
            &author_session,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(ctx.fixtures.count_comments(&post_id).await.unwrap(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_unknown_or_mismatched_comment(ctx: &TestContext) {
    let (author, session) = ctx.user_with_session("author").await;
    let post_a = ctx.fixtures.create_post(&author.id, "a").await.unwrap();
    let post_b = ctx.fixtures.create_post(&author.id, "b").await.unwrap();
    let comment_on_a = ctx
        .fixtures
        .create_comment(&post_a, &author.id, "on a")
        .await
        .unwrap();

    for path in [
        format!("/posts/{}/comment/{}", post_a, ObjectId::new()),
        format!("/posts/{}/comment/invalidcommentid", post_a),
        format!("/posts/invalidpostid/comment/{}", comment_on_a),
        // The comment exists but under another post
        format!("/posts/{}/comment/{}", post_b, comment_on_a),
    ] {
        let response = ctx.client.delete_with_session(&path, &session).await.unwrap();
        response.assert_status(StatusCode::NOT_FOUND);
    }

    assert_eq!(ctx.fixtures.count_comments(&post_a).await.unwrap(), 1);
}
