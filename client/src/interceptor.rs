//! Outgoing request authorization

use reqwest::{header::AUTHORIZATION, RequestBuilder};

/// Attach `Authorization: Bearer <token>` when a token is stored
///
/// Without a token (or with an empty one) the request is returned untouched.
pub fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) if !token.is_empty() => {
            request.header(AUTHORIZATION, format!("Bearer {}", token))
        }
        _ => request,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Client;

    fn build(token: Option<&str>) -> reqwest::Request {
        let request = Client::new().get("http://localhost:3003/api/auth/me");
        authorize(request, token).build().unwrap()
    }

    #[test]
    fn test_sets_bearer_header_when_token_stored() {
        let request = build(Some("abc.def.ghi"));
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer abc.def.ghi"
        );
    }

    #[test]
    fn test_leaves_request_untouched_without_token() {
        assert!(build(None).headers().get(AUTHORIZATION).is_none());
        assert!(build(Some("")).headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_keeps_other_headers() {
        let request = Client::new()
            .get("http://localhost:3003/api/posts")
            .header("x-request-id", "42");
        let request = authorize(request, Some("t")).build().unwrap();

        assert_eq!(request.headers().get("x-request-id").unwrap(), "42");
        assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer t");
    }
}
