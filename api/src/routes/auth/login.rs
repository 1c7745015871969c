use actix_web::{web, HttpResponse};

use sb_core::repositories::{CommentRepository, PostRepository, UserRepository};
use sb_core::services::ImageStore;
use sb_shared::types::{AuthCredentials, LoginResponse};

use crate::app::AppState;
use crate::dto::auth::LoginRequest;
use crate::handlers::handle_domain_error;

use super::LOGGED_IN_MESSAGE;

/// Handler for POST /api/auth/login
///
/// Unknown usernames and wrong passwords get the same 401 answer.
pub async fn login<U, P, C, I>(
    state: web::Data<AppState<U, P, C, I>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
    I: ImageStore + 'static,
{
    let credentials = AuthCredentials::from(request.into_inner());

    match state.auth_service.login(&credentials).await {
        Ok(session) => HttpResponse::Ok().json(LoginResponse {
            token: session.token,
            message: LOGGED_IN_MESSAGE.to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
