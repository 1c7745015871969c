use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};

use sb_core::repositories::{CommentRepository, PostRepository, UserRepository};
use sb_core::services::{ImageStore, NewPost};

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::PostForm;

/// Handler for POST /api/posts
///
/// Multipart body with `title`, `text` and an optional `image` file.
/// Responds with the stored post.
pub async fn create_post<U, P, C, I>(
    state: web::Data<AppState<U, P, C, I>>,
    auth: AuthContext,
    payload: Multipart,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
    I: ImageStore + 'static,
{
    let form = match PostForm::read(payload, state.upload_limit).await {
        Ok(form) => form,
        Err(error) => return handle_domain_error(error),
    };

    let input = NewPost {
        title: form.title,
        text: form.text,
        image: form.image,
    };

    match state.post_service.create_post(auth.user_id, input).await {
        Ok(post) => HttpResponse::Ok().json(post.view()),
        Err(error) => handle_domain_error(error),
    }
}
