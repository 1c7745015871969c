use actix_web::{web, HttpResponse};

use sb_core::repositories::{CommentRepository, PostRepository, UserRepository};
use sb_core::services::ImageStore;
use sb_shared::types::MeResponse;

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/auth/me
///
/// # Request Headers
///
/// ```text
/// Authorization: Bearer {token}
/// ```
///
/// Returns the caller's profile and a new token with a fresh 30 day expiry.
/// A verified token whose user is gone is answered with 401.
pub async fn me<U, P, C, I>(
    state: web::Data<AppState<U, P, C, I>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
    I: ImageStore + 'static,
{
    match state.auth_service.me(auth.user_id).await {
        Ok(session) => HttpResponse::Ok().json(MeResponse {
            user: session.user.profile(),
            token: session.token,
        }),
        Err(error) => handle_domain_error(error),
    }
}
