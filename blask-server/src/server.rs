use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::DefaultHeaders;
use actix_web::{App, Error, HttpServer, web};
use tracing::{info, warn};

use crate::application::post_service::{PostService, SharedPostService};
use crate::data::memory::InMemoryPostRepository;
use crate::data::post_repository::{PostRepository, PostgresPostRepository};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::database::{create_pool, run_migrations};
use crate::presentation::handlers;
use crate::presentation::middleware::RequestTrace;

/// Largest accepted form or JSON payload; post bodies are otherwise unbounded.
pub const MAX_PAYLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Every route of the site. Handlers expect a `web::Data<SharedPostService>`.
pub fn routes(cfg: &mut web::ServiceConfig, cors_origins: &[String]) {
    cfg.app_data(web::FormConfig::default().limit(MAX_PAYLOAD_BYTES))
        .app_data(web::JsonConfig::default().limit(MAX_PAYLOAD_BYTES))
        .service(handlers::home::home_page)
        .service(handlers::blog::scope());
    handlers::api::configure(cfg, cors_origins);
}

/// Builds the post service for the configured storage engine.
pub async fn post_service(config: &AppConfig) -> anyhow::Result<SharedPostService> {
    let repo: Arc<dyn PostRepository> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url, config.database_max_connections).await?;
            run_migrations(&pool).await?;
            Arc::new(PostgresPostRepository::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set, posts are kept in memory only");
            Arc::new(InMemoryPostRepository::new())
        }
    };
    Ok(PostService::new(repo))
}

/// The whole application: middleware stack, shared service and routes.
pub fn app(
    posts: web::Data<SharedPostService>,
    cors_origins: Vec<String>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(RequestTrace)
        .wrap(
            DefaultHeaders::new()
                .add(("X-Content-Type-Options", "nosniff"))
                .add(("Referrer-Policy", "no-referrer"))
                .add(("Cross-Origin-Opener-Policy", "same-origin")),
        )
        .app_data(posts)
        .configure(move |cfg| routes(cfg, &cors_origins))
}

pub async fn run(config: AppConfig, posts: SharedPostService) -> anyhow::Result<()> {
    let bind_address = (config.host.clone(), config.port);
    info!(host = %bind_address.0, port = bind_address.1, "HTTP server starting");

    let posts = web::Data::new(posts);
    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || app(posts.clone(), cors_origins.clone()))
        .bind(bind_address)?
        .run()
        .await
        .map_err(anyhow::Error::new)?;

    Ok(())
}
