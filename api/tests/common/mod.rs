//! Shared fixtures for the API integration tests

#![allow(dead_code, unused_macros)]

use std::sync::Arc;

use actix_web::{http::header, test, web};
use sb_api::app::AppState;
use sb_core::repositories::{MockCommentRepository, MockPostRepository, MockUserRepository};
use sb_core::services::{AuthServiceConfig, MockImageStore, TokenService, TokenServiceConfig};
use sb_shared::types::AuthCredentials;

pub type TestState =
    AppState<MockUserRepository, MockPostRepository, MockCommentRepository, MockImageStore>;

pub const TEST_SECRET: &str = "api-integration-test-secret";

/// Smallest bcrypt cost, keeps the suite fast
pub const TEST_BCRYPT_COST: u32 = 4;

pub const UPLOAD_LIMIT: usize = 64 * 1024;

const BOUNDARY: &str = "----scribe-test-boundary";

pub fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenServiceConfig::with_secret(TEST_SECRET)))
}

/// Application state over fresh in-memory stores
pub fn test_state() -> web::Data<TestState> {
    web::Data::new(AppState::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(MockPostRepository::new()),
        Arc::new(MockCommentRepository::new()),
        Arc::new(MockImageStore::new()),
        token_service(),
        AuthServiceConfig::with_bcrypt_cost(TEST_BCRYPT_COST),
        UPLOAD_LIMIT,
    ))
}

pub fn register_request(username: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(AuthCredentials::new(username, password))
}

pub fn login_request(username: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(AuthCredentials::new(username, password))
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

/// A multipart/form-data body with text fields and an optional image part
pub fn multipart_body(
    fields: &[(&str, &str)],
    image: Option<(&str, &[u8])>,
) -> (header::HeaderName, String, Vec<u8>) {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((file_name, bytes)) = image {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\n",
                file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    (
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={}", BOUNDARY),
        body,
    )
}

/// Alter the last character of a token so its signature no longer matches
pub fn tamper_last_char(token: &str) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
    let mut tampered = token.to_string();
    let last = tampered.pop().unwrap();
    let index = ALPHABET.iter().position(|&b| b as char == last).unwrap();
    tampered.push(ALPHABET[index ^ 0b10_0000] as char);
    tampered
}

/// Register `username` through the API and return its token and id
macro_rules! sign_up {
    ($app:expr, $username:expr) => {{
        let req = crate::common::register_request($username, "pw").to_request();
        let resp = ::actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), ::actix_web::http::StatusCode::OK);
        let body: ::sb_shared::types::RegisterResponse =
            ::actix_web::test::read_body_json(resp).await;
        (body.token, body.user.id)
    }};
}

/// Create a post through the API and return it
macro_rules! publish {
    ($app:expr, $token:expr, $title:expr) => {
        publish!($app, $token, $title, None)
    };
    ($app:expr, $token:expr, $title:expr, $image:expr) => {{
        let title: &str = $title;
        let (name, value, body) =
            crate::common::multipart_body(&[("title", title), ("text", "Body text")], $image);
        let req = ::actix_web::test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(crate::common::bearer(&$token))
            .insert_header((name, value))
            .set_payload(body)
            .to_request();
        let resp = ::actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), ::actix_web::http::StatusCode::OK);
        let post: ::sb_shared::types::PostView = ::actix_web::test::read_body_json(resp).await;
        post
    }};
}
