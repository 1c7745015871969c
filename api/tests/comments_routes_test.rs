#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use sb_api::app::create_app;
use sb_api::middleware::auth::{ACCESS_DENIED, AUTHORIZATION_ERROR};
use sb_shared::errors::ErrorResponse;
use sb_shared::types::CommentView;
use uuid::Uuid;

use common::{bearer, tamper_last_char, test_state};

#[actix_web::test]
async fn test_create_comment() {
    let app = test::init_service(create_app(test_state())).await;
    let (alice, _) = sign_up!(app, "alice");
    let (bob, bob_id) = sign_up!(app, "bob");
    let post = publish!(app, alice, "Commentable");

    let req = test::TestRequest::post()
        .uri(&format!("/api/comments/{}", post.id))
        .insert_header(bearer(&bob))
        .set_json(serde_json::json!({ "comment": "Nice post" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let comment: CommentView = test::read_body_json(resp).await;
    assert_eq!(comment.comment, "Nice post");
    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.author.id, bob_id);
    assert_eq!(comment.author.username, "bob");
}

#[actix_web::test]
async fn test_empty_comment_rejected() {
    let app = test::init_service(create_app(test_state())).await;
    let (alice, _) = sign_up!(app, "alice");
    let post = publish!(app, alice, "Commentable");

    for body in [
        serde_json::json!({ "comment": "" }),
        serde_json::json!({ "comment": "   " }),
        serde_json::json!({}),
    ] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/comments/{}", post.id))
            .insert_header(bearer(&alice))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.message, "The comment cannot be empty");
    }
}

#[actix_web::test]
async fn test_comment_on_missing_post() {
    let app = test::init_service(create_app(test_state())).await;
    let (alice, _) = sign_up!(app, "alice");

    let req = test::TestRequest::post()
        .uri(&format!("/api/comments/{}", Uuid::new_v4()))
        .insert_header(bearer(&alice))
        .set_json(serde_json::json!({ "comment": "Hello?" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_comment_requires_valid_token() {
    let app = test::init_service(create_app(test_state())).await;
    let (alice, _) = sign_up!(app, "alice");
    let post = publish!(app, alice, "Commentable");

    let req = test::TestRequest::post()
        .uri(&format!("/api/comments/{}", post.id))
        .set_json(serde_json::json!({ "comment": "Anonymous" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.message, ACCESS_DENIED);

    let req = test::TestRequest::post()
        .uri(&format!("/api/comments/{}", post.id))
        .insert_header(bearer(&tamper_last_char(&alice)))
        .set_json(serde_json::json!({ "comment": "Forged" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.message, AUTHORIZATION_ERROR);

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}/comments", post.id))
        .to_request();
    let comments: Vec<CommentView> = test::call_and_read_body_json(&app, req).await;
    assert!(comments.is_empty());
}
