use actix_web::{web, HttpResponse};
use validator::Validate;

use sb_core::repositories::{CommentRepository, PostRepository, UserRepository};
use sb_core::services::ImageStore;
use sb_shared::types::{AuthCredentials, RegisterResponse};

use crate::app::AppState;
use crate::dto::auth::RegisterRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};

use super::REGISTERED_MESSAGE;

/// Handler for POST /api/auth/register
///
/// Creates an account and signs it in.
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "pw1" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "user": { "id": "...", "username": "alice", "posts": [], "created_at": "..." },
///     "token": "eyJ...",
///     "message": "Successful registration"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or oversized username or password
/// - 409 Conflict: Username already taken
pub async fn register<U, P, C, I>(
    state: web::Data<AppState<U, P, C, I>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
    I: ImageStore + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    let credentials = AuthCredentials::from(request);
    match state.auth_service.register(&credentials).await {
        Ok(session) => HttpResponse::Ok().json(RegisterResponse {
            user: session.user.profile(),
            token: session.token,
            message: REGISTERED_MESSAGE.to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
