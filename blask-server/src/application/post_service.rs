use std::collections::HashMap;
use std::sync::Arc;

use crate::data::post_repository::PostRepository;
use crate::domain::post::{NewPost, Post, PostId};
use crate::domain::{error::DomainError, validation};
use tracing::instrument;

/// The service as handed to request handlers, independent of the storage engine.
pub type SharedPostService = PostService<dyn PostRepository>;

/// Create, list and fetch posts, validating every submission first.
pub struct PostService<R: PostRepository + ?Sized + 'static> {
    repo: Arc<R>,
}

impl<R: PostRepository + ?Sized + 'static> Clone for PostService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R> PostService<R>
where
    R: PostRepository + ?Sized + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        author: &str,
        title: &str,
        body: &str,
    ) -> Result<PostId, DomainError> {
        let post = self.create_post(author, title, body).await?;
        Ok(post.id)
    }

    /// Same as [`create`](Self::create), returning the stored record.
    #[instrument(skip(self, body))]
    pub async fn create_post(
        &self,
        author: &str,
        title: &str,
        body: &str,
    ) -> Result<Post, DomainError> {
        let new = NewPost::new(author, title, body)?;
        self.repo.create(new).await
    }

    /// Validates a raw form submission and stores it.
    #[instrument(skip_all)]
    pub async fn create_from_form(
        &self,
        form: &HashMap<String, String>,
    ) -> Result<PostId, DomainError> {
        let new = validation::validate_submission(form)?;
        let post = self.repo.create(new).await?;
        Ok(post.id)
    }

    pub async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.list_all().await
    }

    pub async fn get_by_id(&self, id: PostId) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(id.to_string()))
    }

    /// Like [`get_by_id`](Self::get_by_id), for identifiers taken from a URL
    /// or command line. Text that is not a valid id is simply not found.
    pub async fn get_by_raw_id(&self, raw: &str) -> Result<Post, DomainError> {
        let id = raw
            .parse::<PostId>()
            .map_err(|_| DomainError::PostNotFound(raw.to_string()))?;
        self.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn clear_all(&self) -> Result<u64, DomainError> {
        self.repo.clear_all().await
    }
}
