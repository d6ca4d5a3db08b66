use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::data::post_repository::PostRepository;
use crate::domain::error::DomainError;
use crate::domain::post::{NewPost, Post, PostId};

/// Process-local store used when no database is configured, and in tests.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, new: NewPost) -> Result<Post, DomainError> {
        let post = Post::from_new(PostId::generate(), new, Utc::now());
        self.posts.write().await.push(post.clone());

        info!(post_id = %post.id, author = %post.author, "post created");
        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, DomainError> {
        Ok(self.posts.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.read().await.clone())
    }

    async fn clear_all(&self) -> Result<u64, DomainError> {
        let mut posts = self.posts.write().await;
        let removed = posts.len() as u64;
        posts.clear();

        info!(removed, "posts cleared");
        Ok(removed)
    }
}
