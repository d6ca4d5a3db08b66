use blask_server::infrastructure::config::AppConfig;
use blask_server::infrastructure::logging::init_logging;
use blask_server::server;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env()?;
    let posts = server::post_service(&config).await?;

    server::run(config, posts).await
}
