use actix_cors::Cors;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use chrono::Utc;
use tracing::info;

use crate::application::post_service::SharedPostService;
use crate::domain::error::DomainError;
use crate::presentation::dto::{CreatePostRequest, HealthResponse, ListPostsResponse};
use crate::presentation::middleware::request_id;

/// Registers the JSON endpoints under `/api`, CORS-enabled for `cors_origins`.
pub fn configure(cfg: &mut web::ServiceConfig, cors_origins: &[String]) {
    cfg.service(
        web::scope("/api")
            .wrap(build_cors(cors_origins))
            .service(health)
            .service(list_posts)
            .service(get_post)
            .service(create_post),
    );
}

fn build_cors(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}

#[get("/health")]
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}

#[get("/posts")]
async fn list_posts(posts: web::Data<SharedPostService>) -> Result<HttpResponse, DomainError> {
    let posts = posts.list_all().await?;
    Ok(HttpResponse::Ok().json(ListPostsResponse {
        total: posts.len(),
        posts,
    }))
}

#[get("/posts/{id}")]
async fn get_post(
    posts: web::Data<SharedPostService>,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let post = posts.get_by_raw_id(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[post("/posts")]
async fn create_post(
    req: HttpRequest,
    posts: web::Data<SharedPostService>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, DomainError> {
    let post = posts
        .create_post(&payload.author, &payload.title, &payload.body)
        .await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.id,
        "post created"
    );

    Ok(HttpResponse::Created().json(post))
}
