#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use sb_api::app::create_app;
use sb_api::middleware::auth::ACCESS_DENIED;
use sb_api::routes::posts::POST_DELETED_MESSAGE;
use sb_shared::errors::ErrorResponse;
use sb_shared::types::{CommentView, DeletePostResponse, PostView, PostsOverview};
use uuid::Uuid;

use common::{bearer, multipart_body, test_state};

#[actix_web::test]
async fn test_create_post_requires_token() {
    let app = test::init_service(create_app(test_state())).await;

    let (name, value, body) = multipart_body(&[("title", "T"), ("text", "X")], None);
    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header((name, value))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, ACCESS_DENIED);
}

#[actix_web::test]
async fn test_create_post_with_image() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;
    let (token, user_id) = sign_up!(app, "alice");

    let post = publish!(app, token, "Hello", Some(("cat.png", b"\x89PNG-bytes".as_slice())));

    assert_eq!(post.title, "Hello");
    assert_eq!(post.username, "alice");
    assert_eq!(post.author, user_id);
    assert_eq!(post.views, 0);
    assert!(post.image_url.ends_with("cat.png"));
    assert_eq!(state.image_store.file_names().await, vec![post.image_url.clone()]);

    let req = test::TestRequest::get()
        .uri(&format!("/uploads/{}", post.image_url))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("content-type").unwrap(), "image/png");
    let bytes = test::read_body(resp).await;
    assert_eq!(bytes.as_ref(), b"\x89PNG-bytes");
}

#[actix_web::test]
async fn test_uploaded_svg_is_not_served_as_image() {
    let app = test::init_service(create_app(test_state())).await;
    let (token, _) = sign_up!(app, "mallory");

    let svg = b"<svg xmlns=\"http://www.w3.org/2000/svg\"><script>alert(1)</script></svg>";
    let post = publish!(app, token, "Vector", Some(("logo.svg", svg.as_slice())));

    let req = test::TestRequest::get()
        .uri(&format!("/uploads/{}", post.image_url))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/octet-stream"
    );
    assert_eq!(resp.headers().get("x-content-type-options").unwrap(), "nosniff");
}

#[actix_web::test]
async fn test_create_post_without_image() {
    let app = test::init_service(create_app(test_state())).await;
    let (token, _) = sign_up!(app, "alice");

    let post = publish!(app, token, "Plain");
    assert_eq!(post.image_url, "");
}

#[actix_web::test]
async fn test_create_post_requires_title_and_text() {
    let app = test::init_service(create_app(test_state())).await;
    let (token, _) = sign_up!(app, "alice");

    for fields in [[("title", ""), ("text", "X")], [("title", "T"), ("text", "  ")]] {
        let (name, value, body) = multipart_body(&fields, None);
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(bearer(&token))
            .insert_header((name, value))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn test_create_post_rejects_non_multipart_body() {
    let app = test::init_service(create_app(test_state())).await;
    let (token, _) = sign_up!(app, "alice");

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(bearer(&token))
        .set_json(serde_json::json!({ "title": "T", "text": "X" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_get_post_counts_views() {
    let app = test::init_service(create_app(test_state())).await;
    let (token, _) = sign_up!(app, "alice");
    let post = publish!(app, token, "Counted");

    for expected in 1..=2u64 {
        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", post.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let viewed: PostView = test::read_body_json(resp).await;
        assert_eq!(viewed.views, expected);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_list_posts_and_popular() {
    let app = test::init_service(create_app(test_state())).await;
    let (token, _) = sign_up!(app, "alice");

    let mut created = Vec::new();
    for i in 0..7 {
        created.push(publish!(app, token, &format!("Post {}", i)));
    }

    // Post 2 gets three views, post 5 one
    for (index, views) in [(2usize, 3), (5, 1)] {
        for _ in 0..views {
            let req = test::TestRequest::get()
                .uri(&format!("/api/posts/{}", created[index].id))
                .to_request();
            test::call_service(&app, req).await;
        }
    }

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let overview: PostsOverview = test::read_body_json(resp).await;

    assert_eq!(overview.posts.len(), 7);
    assert_eq!(overview.posts[0].id, created[6].id);
    assert_eq!(overview.popular_posts.len(), 5);
    assert_eq!(overview.popular_posts[0].id, created[2].id);
    assert_eq!(overview.popular_posts[1].id, created[5].id);
    assert!(overview
        .popular_posts
        .windows(2)
        .all(|pair| pair[0].views >= pair[1].views));
}

#[actix_web::test]
async fn test_my_posts_in_ownership_order() {
    let app = test::init_service(create_app(test_state())).await;
    let (alice, _) = sign_up!(app, "alice");
    let (bob, _) = sign_up!(app, "bob");

    let first = publish!(app, alice, "First");
    publish!(app, bob, "Bob's");
    let second = publish!(app, alice, "Second");

    let req = test::TestRequest::get()
        .uri("/api/posts/user/myposts")
        .insert_header(bearer(&alice))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let mine: Vec<PostView> = test::read_body_json(resp).await;

    let ids: Vec<Uuid> = mine.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    let req = test::TestRequest::get().uri("/api/posts/user/myposts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_only_author_updates_post() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;
    let (alice, _) = sign_up!(app, "alice");
    let (bob, _) = sign_up!(app, "bob");
    let post = publish!(app, alice, "Original", Some(("a.jpg", b"jpeg".as_slice())));

    let (name, value, body) = multipart_body(&[("title", "Hijacked"), ("text", "X")], None);
    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", post.id))
        .insert_header(bearer(&bob))
        .insert_header((name, value))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let (name, value, body) = multipart_body(&[("title", "Edited"), ("text", "New text")], None);
    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", post.id))
        .insert_header(bearer(&alice))
        .insert_header((name, value))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let edited: PostView = test::read_body_json(resp).await;

    assert_eq!(edited.title, "Edited");
    assert_eq!(edited.text, "New text");
    assert_eq!(edited.image_url, post.image_url);
    assert_eq!(state.image_store.file_names().await.len(), 1);
}

#[actix_web::test]
async fn test_update_replaces_image() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;
    let (alice, _) = sign_up!(app, "alice");
    let post = publish!(app, alice, "Pictured", Some(("old.png", b"old".as_slice())));

    let (name, value, body) = multipart_body(
        &[("title", "Pictured"), ("text", "Body text")],
        Some(("new.png", b"new".as_slice())),
    );
    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", post.id))
        .insert_header(bearer(&alice))
        .insert_header((name, value))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let edited: PostView = test::read_body_json(resp).await;

    assert!(edited.image_url.ends_with("new.png"));
    assert_eq!(state.image_store.file_names().await, vec![edited.image_url]);
}

#[actix_web::test]
async fn test_update_missing_post() {
    let app = test::init_service(create_app(test_state())).await;
    let (alice, _) = sign_up!(app, "alice");

    let (name, value, body) = multipart_body(&[("title", "T"), ("text", "X")], None);
    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", Uuid::new_v4()))
        .insert_header(bearer(&alice))
        .insert_header((name, value))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_post_cascades() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;
    let (alice, _) = sign_up!(app, "alice");
    let (bob, _) = sign_up!(app, "bob");
    let post = publish!(app, alice, "Doomed", Some(("d.gif", b"gif".as_slice())));

    let req = test::TestRequest::post()
        .uri(&format!("/api/comments/{}", post.id))
        .insert_header(bearer(&bob))
        .set_json(serde_json::json!({ "comment": "First!" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{}", post.id))
        .insert_header(bearer(&bob))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{}", post.id))
        .insert_header(bearer(&alice))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: DeletePostResponse = test::read_body_json(resp).await;
    assert_eq!(deleted.id, post.id);
    assert_eq!(deleted.message, POST_DELETED_MESSAGE);

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", post.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}/comments", post.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    assert!(state.image_store.file_names().await.is_empty());

    let req = test::TestRequest::get()
        .uri("/api/posts/user/myposts")
        .insert_header(bearer(&alice))
        .to_request();
    let mine: Vec<PostView> = test::call_and_read_body_json(&app, req).await;
    assert!(mine.is_empty());
}

#[actix_web::test]
async fn test_post_comments_listing() {
    let app = test::init_service(create_app(test_state())).await;
    let (alice, alice_id) = sign_up!(app, "alice");
    let post = publish!(app, alice, "Discussed");

    for text in ["one", "two"] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/comments/{}", post.id))
            .insert_header(bearer(&alice))
            .set_json(serde_json::json!({ "comment": text }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}/comments", post.id))
        .to_request();
    let comments: Vec<CommentView> = test::call_and_read_body_json(&app, req).await;

    let texts: Vec<&str> = comments.iter().map(|c| c.comment.as_str()).collect();
    assert_eq!(texts, vec!["one", "two"]);
    assert!(comments.iter().all(|c| c.author.id == alice_id && c.author.username == "alice"));
}

#[actix_web::test]
async fn test_uploads_rejects_unsafe_and_missing_names() {
    let app = test::init_service(create_app(test_state())).await;

    for uri in ["/uploads/.env", "/uploads/..secret", "/uploads/missing.png"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
