use std::sync::Arc;

use actix_web::{middleware::Logger, web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::{info, warn};

use sb_api::app::{create_app, AppState};
use sb_api::middleware::create_cors;
use sb_core::repositories::{
    CommentRepository, MockCommentRepository, MockPostRepository, MockUserRepository,
    PostRepository, UserRepository,
};
use sb_core::services::{AuthServiceConfig, ImageStore, TokenService, TokenServiceConfig};
use sb_infra::{
    DatabasePool, LocalImageStore, MySqlCommentRepository, MySqlPostRepository,
    MySqlUserRepository,
};
use sb_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.environment.default_log_filter()),
    );

    info!("Starting Scribe API Server ({:?})", config.environment);

    config.validate().context("Invalid configuration")?;

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
    let images = Arc::new(
        LocalImageStore::new(config.storage.uploads_dir.clone())
            .await
            .context("Failed to prepare the uploads directory")?,
    );

    match config.database.clone() {
        Some(database) => {
            let pool = DatabasePool::new(database)
                .await
                .context("Failed to connect to the database")?;
            pool.run_migrations()
                .await
                .context("Failed to run database migrations")?;
            info!("{}", pool.get_statistics());

            let db = pool.get_pool().clone();
            run(
                &config,
                Arc::new(MySqlUserRepository::new(db.clone())),
                Arc::new(MySqlPostRepository::new(db.clone())),
                Arc::new(MySqlCommentRepository::new(db)),
                images,
                token_service,
            )
            .await?;

            pool.close().await;
        }
        None => {
            warn!("DATABASE_URL is not set, data lives in memory and is lost on exit");
            run(
                &config,
                Arc::new(MockUserRepository::new()),
                Arc::new(MockPostRepository::new()),
                Arc::new(MockCommentRepository::new()),
                images,
                token_service,
            )
            .await?;
        }
    }

    Ok(())
}

/// Serve the API over the given stores until shutdown
async fn run<U, P, C, I>(
    config: &AppConfig,
    users: Arc<U>,
    posts: Arc<P>,
    comments: Arc<C>,
    images: Arc<I>,
    token_service: Arc<TokenService>,
) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
    I: ImageStore + 'static,
{
    let state = web::Data::new(AppState::new(
        users,
        posts,
        comments,
        images,
        token_service,
        AuthServiceConfig::from(&config.auth.password),
        config.server.max_payload_size,
    ));

    let server_config = config.server.clone();
    let environment = config.environment;
    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_app(state.clone())
            .wrap(create_cors(&server_config, environment))
            .wrap(Logger::default())
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated with an error")?;

    Ok(())
}
