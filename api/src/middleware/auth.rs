//! JWT authentication middleware for protecting API endpoints.
//!
//! The middleware reads the `Authorization` header, verifies the bearer token
//! with the core `TokenService`, and attaches an [`AuthContext`] to the
//! request before the handler runs. Rejections never reach the handler.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use sb_core::services::token::TokenService;
use sb_shared::errors::{error_codes, ErrorResponse};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};
use uuid::Uuid;

/// Rejection message when no token is presented
pub const ACCESS_DENIED: &str = "Access denied";

/// Rejection message when a presented token does not verify
pub const AUTHORIZATION_ERROR: &str = "Authorization error";

/// Authenticated identity attached to a request by [`JwtAuth`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// Subject of the verified token
    pub user_id: Uuid,
}

/// Strip an optional `Bearer` scheme (and one whitespace character after it)
/// from an `Authorization` header value.
///
/// Values without the scheme are taken as the bare token.
pub fn extract_token(header_value: &str) -> &str {
    match header_value.strip_prefix("Bearer") {
        Some(rest) => rest
            .strip_prefix(|c: char| c.is_ascii_whitespace())
            .unwrap_or(rest),
        None => header_value,
    }
}

/// Build the 401 JSON response used for every gate rejection
pub fn unauthorized(message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new(error_codes::UNAUTHORIZED, message))
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates a gate that verifies tokens with `token_service`
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let verdict = match req.headers().get(AUTHORIZATION) {
            None => Err(ACCESS_DENIED),
            Some(value) => match value.to_str() {
                Err(_) => Err(AUTHORIZATION_ERROR),
                Ok(raw) => {
                    let token = extract_token(raw.trim());
                    if token.is_empty() {
                        Err(ACCESS_DENIED)
                    } else {
                        self.token_service.verify(token).map_err(|e| {
                            log::debug!("Rejected bearer token: {}", e);
                            AUTHORIZATION_ERROR
                        })
                    }
                }
            },
        };

        Box::pin(async move {
            match verdict {
                Ok(user_id) => {
                    req.extensions_mut().insert(AuthContext { user_id });
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(message) => Ok(req
                    .into_response(unauthorized(message))
                    .map_into_right_body()),
            }
        })
    }
}

/// Extractor for required authentication
///
/// Only succeeds behind [`JwtAuth`]; elsewhere the request is rejected as if
/// no token had been sent.
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result: Result<Self, Error> = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| {
                InternalError::from_response(ACCESS_DENIED, unauthorized(ACCESS_DENIED)).into()
            });

        ready(result)
    }
}
