use crate::domain::error::DomainError;
use crate::domain::post::{NewPost, Post, PostId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

/// Persistence for posts.
///
/// `list_all` returns posts in insertion order.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, DomainError>;
    async fn list_all(&self) -> Result<Vec<Post>, DomainError>;
    async fn clear_all(&self) -> Result<u64, DomainError>;
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    author: String,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: PostId::from(row.id),
            author: row.author,
            title: row.title,
            body: row.body,
            created_at: row.created_at,
        }
    }
}

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, new: NewPost) -> Result<Post, DomainError> {
        let post = Post::from_new(PostId::generate(), new, Utc::now());
        sqlx::query(
            r#"
            INSERT INTO posts (id, author, title, body, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(post.id.as_uuid())
        .bind(&post.author)
        .bind(&post.title)
        .bind(&post.body)
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to create post: {}", e);
            DomainError::from(e)
        })?;

        info!(post_id = %post.id, author = %post.author, "post created");
        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, author, title, body, created_at
            FROM posts WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("db error find_by_id {}: {}", id, e);
            DomainError::from(e)
        })?;

        Ok(row.map(Post::from))
    }

    async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, author, title, body, created_at
            FROM posts
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while fetching posts: {}", e);
            DomainError::from(e)
        })?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn clear_all(&self) -> Result<u64, DomainError> {
        let deleted = sqlx::query("DELETE FROM posts")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("failed to clear posts: {}", e);
                DomainError::from(e)
            })?;

        info!(removed = deleted.rows_affected(), "posts cleared");
        Ok(deleted.rows_affected())
    }
}
