use std::collections::HashMap;

use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, Scope, get, post, web};
use minijinja::context;
use tracing::info;

use crate::application::post_service::SharedPostService;
use crate::domain::error::DomainError;
use crate::presentation::dto::form_fields;
use crate::presentation::error::PageError;
use crate::presentation::middleware::request_id;
use crate::presentation::templates;

/// Pages under `/blog`.
pub fn scope() -> Scope {
    web::scope("/blog")
        .route("", web::get().to(blog_index_redirect))
        .service(blog_page)
        .service(new_post_form)
        .service(submit_post)
        .service(view_post)
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

async fn blog_index_redirect() -> HttpResponse {
    HttpResponse::PermanentRedirect()
        .insert_header((header::LOCATION, "/blog/"))
        .finish()
}

#[get("/")]
async fn blog_page(posts: web::Data<SharedPostService>) -> Result<HttpResponse, PageError> {
    let posts = posts.list_all().await?;
    let body = templates::render("blog.html", context! { posts => posts })?;
    Ok(html(StatusCode::OK, body))
}

#[get("/new")]
async fn new_post_form() -> Result<HttpResponse, PageError> {
    let fields = form_fields(&HashMap::new(), None);
    let body = templates::render("new.html", context! { fields => fields })?;
    Ok(html(StatusCode::OK, body))
}

#[post("/new")]
async fn submit_post(
    req: HttpRequest,
    posts: web::Data<SharedPostService>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, PageError> {
    let form = form.into_inner();

    match posts.create_from_form(&form).await {
        Ok(id) => {
            info!(request_id = %request_id(&req), post_id = %id, "post submitted");
            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/blog/"))
                .finish())
        }
        Err(DomainError::Validation(errors)) => {
            info!(request_id = %request_id(&req), %errors, "post submission rejected");
            let fields = form_fields(&form, Some(&errors));
            let body = templates::render("new.html", context! { fields => fields })?;
            Ok(html(StatusCode::UNPROCESSABLE_ENTITY, body))
        }
        Err(e) => Err(e.into()),
    }
}

#[get("/view/{id}")]
async fn view_post(
    posts: web::Data<SharedPostService>,
    path: web::Path<String>,
) -> Result<HttpResponse, PageError> {
    let post = posts.get_by_raw_id(&path.into_inner()).await?;
    let body = templates::render("post.html", context! { post => post })?;
    Ok(html(StatusCode::OK, body))
}
