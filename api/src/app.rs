//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};

use sb_core::repositories::{CommentRepository, PostRepository, UserRepository};
use sb_core::services::{
    AuthService, AuthServiceConfig, CommentService, ImageStore, PostService, TokenService,
};
use sb_shared::errors::error_codes;
use sb_shared::types::HealthResponse;

use crate::dto::ErrorResponse;
use crate::handlers::json_error_handler;
use crate::middleware::auth::JwtAuth;
use crate::routes::{auth, comments, posts, uploads};

/// Application state that holds shared services
pub struct AppState<U, P, C, I>
where
    U: UserRepository,
    P: PostRepository,
    C: CommentRepository,
    I: ImageStore,
{
    pub auth_service: Arc<AuthService<U>>,
    pub post_service: Arc<PostService<P, U, C, I>>,
    pub comment_service: Arc<CommentService<C, P, U>>,
    pub token_service: Arc<TokenService>,
    pub image_store: Arc<I>,
    /// Largest accepted multipart field, in bytes
    pub upload_limit: usize,
}

impl<U, P, C, I> AppState<U, P, C, I>
where
    U: UserRepository,
    P: PostRepository,
    C: CommentRepository,
    I: ImageStore,
{
    /// Wire the services over one set of stores
    pub fn new(
        users: Arc<U>,
        posts: Arc<P>,
        comments: Arc<C>,
        images: Arc<I>,
        token_service: Arc<TokenService>,
        auth_config: AuthServiceConfig,
        upload_limit: usize,
    ) -> Self {
        let auth_service = AuthService::new(Arc::clone(&users), Arc::clone(&token_service), auth_config);
        let post_service = PostService::new(
            Arc::clone(&posts),
            Arc::clone(&users),
            Arc::clone(&comments),
            Arc::clone(&images),
        );
        let comment_service = CommentService::new(comments, posts, users);

        Self {
            auth_service: Arc::new(auth_service),
            post_service: Arc::new(post_service),
            comment_service: Arc::new(comment_service),
            token_service,
            image_store: images,
            upload_limit,
        }
    }
}

/// Create and configure the application with all dependencies
///
/// Logging and CORS are left to the caller so tests can build the bare app.
pub fn create_app<U, P, C, I>(
    app_state: web::Data<AppState<U, P, C, I>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
    I: ImageStore + 'static,
{
    let gate = JwtAuth::new(Arc::clone(&app_state.token_service));
    let json_config = web::JsonConfig::default().error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .route("/health", web::get().to(health_check))
        .route("/uploads/{file}", web::get().to(uploads::serve::<U, P, C, I>))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<U, P, C, I>))
                        .route("/login", web::post().to(auth::login::<U, P, C, I>))
                        .route(
                            "/me",
                            web::get().to(auth::me::<U, P, C, I>).wrap(gate.clone()),
                        ),
                )
                .service(
                    web::scope("/posts")
                        .route(
                            "",
                            web::post()
                                .to(posts::create_post::<U, P, C, I>)
                                .wrap(gate.clone()),
                        )
                        .route("", web::get().to(posts::list_posts::<U, P, C, I>))
                        .route(
                            "/user/myposts",
                            web::get()
                                .to(posts::my_posts::<U, P, C, I>)
                                .wrap(gate.clone()),
                        )
                        .route("/{id}", web::get().to(posts::get_post::<U, P, C, I>))
                        .route(
                            "/{id}",
                            web::put()
                                .to(posts::update_post::<U, P, C, I>)
                                .wrap(gate.clone()),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(posts::delete_post::<U, P, C, I>)
                                .wrap(gate.clone()),
                        )
                        .route(
                            "/{id}/comments",
                            web::get().to(posts::post_comments::<U, P, C, I>),
                        ),
                )
                .service(
                    web::scope("/comments").route(
                        "/{post_id}",
                        web::post()
                            .to(comments::create_comment::<U, P, C, I>)
                            .wrap(gate),
                    ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy("scribe-api", env!("CARGO_PKG_VERSION")))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
