use blask_server::application::post_service::PostService;
use blask_server::data::post_repository::PostRepository;
use blask_server::domain::error::DomainError;
use blask_server::domain::post::PostId;

/// `(author, title, body)` of the posts a fresh blog starts with.
pub const SAMPLE_POSTS: &[(&str, &str, &str)] = &[
    (
        "Cecelia Coder",
        "My First Blog Post",
        "Who knew this could be so easy?",
    ),
    (
        "Cecelia Coder",
        "Flask is Fun",
        "Everything is better with Mongoengine!",
    ),
];

/// Drops every post, then stores [`SAMPLE_POSTS`] in order.
pub async fn reset<R>(posts: &PostService<R>) -> Result<Vec<PostId>, DomainError>
where
    R: PostRepository + ?Sized + 'static,
{
    posts.clear_all().await?;

    let mut ids = Vec::with_capacity(SAMPLE_POSTS.len());
    for &(author, title, body) in SAMPLE_POSTS {
        ids.push(posts.create(author, title, body).await?);
    }
    Ok(ids)
}
