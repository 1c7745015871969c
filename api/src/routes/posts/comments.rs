use actix_web::{web, HttpResponse};
use uuid::Uuid;

use sb_core::repositories::{CommentRepository, PostRepository, UserRepository};
use sb_core::services::ImageStore;

use crate::app::AppState;
use crate::handlers::handle_domain_error;

/// Handler for GET /api/posts/{id}/comments
///
/// Comments oldest first, each with its author's id and username.
pub async fn post_comments<U, P, C, I>(
    state: web::Data<AppState<U, P, C, I>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
    I: ImageStore + 'static,
{
    match state.comment_service.post_comments(path.into_inner()).await {
        Ok(comments) => HttpResponse::Ok().json(comments),
        Err(error) => handle_domain_error(error),
    }
}
