use actix_web::{web, HttpResponse};
use uuid::Uuid;

use sb_core::repositories::{CommentRepository, PostRepository, UserRepository};
use sb_core::services::ImageStore;
use sb_shared::types::CreateCommentRequest;

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for POST /api/comments/{post_id}
///
/// # Request Body
///
/// ```json
/// { "comment": "Nice post" }
/// ```
///
/// ## Success (201 Created)
/// The stored comment with `author: { id, username }`.
///
/// ## Errors
/// - 400 Bad Request: Blank comment
/// - 404 Not Found: No such post
pub async fn create_comment<U, P, C, I>(
    state: web::Data<AppState<U, P, C, I>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<CreateCommentRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
    I: ImageStore + 'static,
{
    match state
        .comment_service
        .create_comment(auth.user_id, path.into_inner(), &request.comment)
        .await
    {
        Ok(comment) => HttpResponse::Created().json(comment),
        Err(error) => handle_domain_error(error),
    }
}
