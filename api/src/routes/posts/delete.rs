use actix_web::{web, HttpResponse};
use uuid::Uuid;

use sb_core::repositories::{CommentRepository, PostRepository, UserRepository};
use sb_core::services::ImageStore;
use sb_shared::types::DeletePostResponse;

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::POST_DELETED_MESSAGE;

/// Handler for DELETE /api/posts/{id}
///
/// Removes the post together with its comments and image.
pub async fn delete_post<U, P, C, I>(
    state: web::Data<AppState<U, P, C, I>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
    I: ImageStore + 'static,
{
    match state
        .post_service
        .delete_post(auth.user_id, path.into_inner())
        .await
    {
        Ok(id) => HttpResponse::Ok().json(DeletePostResponse {
            id,
            message: POST_DELETED_MESSAGE.to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
