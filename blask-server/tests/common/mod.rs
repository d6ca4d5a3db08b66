#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use blask_server::application::post_service::{PostService, SharedPostService};
use blask_server::data::memory::InMemoryPostRepository;
use blask_server::data::post_repository::PostRepository;
use blask_server::domain::error::DomainError;
use blask_server::domain::post::{NewPost, Post, PostId};

pub fn memory_posts() -> SharedPostService {
    let repo: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
    PostService::new(repo)
}

/// Storage that is never reachable.
pub struct UnreachableRepository;

#[async_trait]
impl PostRepository for UnreachableRepository {
    async fn create(&self, _post: NewPost) -> Result<Post, DomainError> {
        Err(DomainError::Storage("connection refused".into()))
    }

    async fn find_by_id(&self, _id: PostId) -> Result<Option<Post>, DomainError> {
        Err(DomainError::Storage("connection refused".into()))
    }

    async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        Err(DomainError::Storage("connection refused".into()))
    }

    async fn clear_all(&self) -> Result<u64, DomainError> {
        Err(DomainError::Storage("connection refused".into()))
    }
}

pub fn unreachable_posts() -> SharedPostService {
    let repo: Arc<dyn PostRepository> = Arc::new(UnreachableRepository);
    PostService::new(repo)
}

/// Initializes the application the server runs, around `$posts`.
macro_rules! test_app {
    ($posts:expr) => {
        actix_web::test::init_service(blask_server::server::app(
            actix_web::web::Data::new($posts),
            Vec::new(),
        ))
        .await
    };
}

pub async fn body_text<B: actix_web::body::MessageBody>(
    resp: actix_web::dev::ServiceResponse<B>,
) -> String {
    let bytes = actix_web::test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}
