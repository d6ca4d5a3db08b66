mod seed;

use std::sync::Arc;

use anyhow::Context;
use blask_server::application::post_service::PostService;
use blask_server::data::post_repository::PostgresPostRepository;
use blask_server::domain::error::DomainError;
use blask_server::infrastructure::config::AppConfig;
use blask_server::infrastructure::database::{create_pool, run_migrations};
use clap::Parser;

/// Administer the posts stored in the blog database (`DATABASE_URL`).
#[derive(Parser, Debug)]
struct Cli {
    /// Overrides `DATABASE_URL`.
    #[clap(short, long)]
    database_url: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Remove every post and store the sample posts.
    Reset,
    /// Print every post, oldest first.
    List,
    /// Print a single post.
    Show { id: String },
    /// Validate and store a new post.
    Create {
        #[clap(long)]
        author: String,
        #[clap(long)]
        title: String,
        #[clap(long)]
        body: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = AppConfig::from_env()?;

    let database_url = args
        .database_url
        .or(config.database_url)
        .context("DATABASE_URL must be set (or pass --database-url)")?;
    let pool = create_pool(&database_url, config.database_max_connections).await?;
    run_migrations(&pool).await?;
    let posts = PostService::new(Arc::new(PostgresPostRepository::new(pool)));

    match args.command {
        Command::Reset => {
            let ids = seed::reset(&posts).await?;
            println!("Database reset, {} sample posts stored", ids.len());
        }
        Command::List => {
            let all = posts.list_all().await?;
            println!("Posts ({})", all.len());
            for post in all {
                println!("- [{}] {} (by {})", post.id, post.title, post.author);
            }
        }
        Command::Show { id } => {
            let post = posts.get_by_raw_id(&id).await?;
            println!("{}\nby {}\n\n{}", post.title, post.author, post.body);
        }
        Command::Create {
            author,
            title,
            body,
        } => match posts.create(&author, &title, &body).await {
            Ok(id) => println!("Post created! ID: {}", id),
            Err(DomainError::Validation(errors)) => {
                for error in errors.errors() {
                    eprintln!("{}: {}", error.field, error.message());
                }
                anyhow::bail!("post was not created");
            }
            Err(e) => return Err(e.into()),
        },
    }

    Ok(())
}
