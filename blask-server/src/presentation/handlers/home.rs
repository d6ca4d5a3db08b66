use actix_web::{HttpResponse, get};
use minijinja::context;

use crate::presentation::error::PageError;
use crate::presentation::templates;

#[get("/")]
pub async fn home_page() -> Result<HttpResponse, PageError> {
    let html = templates::render("home.html", context! {})?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
