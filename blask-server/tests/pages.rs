#[macro_use]
mod common;

use actix_web::http::{StatusCode, header};
use actix_web::test;

use common::{body_text, memory_posts, unreachable_posts};

#[actix_web::test]
async fn home_page_renders() {
    let app = test_app!(memory_posts());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Welcome to Blask"));
}

#[actix_web::test]
async fn blog_page_lists_posts_in_insertion_order() {
    let posts = memory_posts();
    posts
        .create(
            "Cecelia Coder",
            "My First Blog Post",
            "Who knew this could be so easy?",
        )
        .await
        .unwrap();
    posts
        .create(
            "Cecelia Coder",
            "Flask is Fun",
            "Everything is better with Mongoengine!",
        )
        .await
        .unwrap();
    let app = test_app!(posts);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/blog/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    let first = html.find("My First Blog Post").unwrap();
    let second = html.find("Flask is Fun").unwrap();
    assert!(first < second);
}

#[actix_web::test]
async fn empty_blog_says_so() {
    let app = test_app!(memory_posts());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/blog/").to_request()).await;

    assert!(body_text(resp).await.contains("No posts yet."));
}

#[actix_web::test]
async fn blog_without_slash_redirects() {
    let app = test_app!(memory_posts());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/blog").to_request()).await;

    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/blog/");
}

#[actix_web::test]
async fn new_post_form_renders_empty_fields() {
    let app = test_app!(memory_posts());

    let req = test::TestRequest::get().uri("/blog/new").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains(r#"name="author""#));
    assert!(html.contains(r#"name="title""#));
    assert!(html.contains(r#"name="body""#));
    assert!(!html.contains("class=\"error\""));
}

#[actix_web::test]
async fn valid_submission_is_stored_and_redirects_to_blog() {
    let posts = memory_posts();
    let app = test_app!(posts.clone());

    let req = test::TestRequest::post()
        .uri("/blog/new")
        .set_form([
            ("author", "Cecelia Coder"),
            ("title", "Flask is Fun"),
            ("body", "Everything is better with Mongoengine!"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/blog/");

    let stored = posts.list_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Flask is Fun");
}

#[actix_web::test]
async fn long_body_beyond_default_form_limit_is_accepted() {
    let posts = memory_posts();
    let app = test_app!(posts.clone());
    let body = "b".repeat(20_000);

    let req = test::TestRequest::post()
        .uri("/blog/new")
        .set_form([
            ("author", "Cecelia Coder"),
            ("title", "A long one"),
            ("body", body.as_str()),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let stored = posts.list_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].body.len(), 20_000);
}

#[actix_web::test]
async fn nul_in_submission_rerenders_form() {
    let posts = memory_posts();
    let app = test_app!(posts.clone());

    let req = test::TestRequest::post()
        .uri("/blog/new")
        .set_form([("author", "a"), ("title", "t\0t"), ("body", "b")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        body_text(resp)
            .await
            .contains("Field contains characters that are not allowed.")
    );
    assert!(posts.list_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn invalid_submission_rerenders_form_with_errors() {
    let posts = memory_posts();
    let app = test_app!(posts.clone());

    let req = test::TestRequest::post()
        .uri("/blog/new")
        .set_form([("author", ""), ("title", "Title"), ("body", "Body")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(resp).await;
    assert!(html.contains("This field is required."));
    assert!(html.contains(r#"value="Title""#));
    assert!(posts.list_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn overlong_title_is_reported_on_the_form() {
    let posts = memory_posts();
    let app = test_app!(posts.clone());
    let title = "t".repeat(101);

    let req = test::TestRequest::post()
        .uri("/blog/new")
        .set_form([("author", "a"), ("title", title.as_str()), ("body", "b")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        body_text(resp)
            .await
            .contains("Field cannot be longer than 100 characters.")
    );
    assert!(posts.list_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn view_shows_a_single_post_escaped() {
    let posts = memory_posts();
    let id = posts
        .create("Cecelia Coder", "<b>bold claims", "Who knew?")
        .await
        .unwrap();
    let app = test_app!(posts);

    let req = test::TestRequest::get()
        .uri(&format!("/blog/view/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("&lt;b&gt;bold claims"));
    assert!(html.contains("Who knew?"));
}

#[actix_web::test]
async fn unknown_post_is_a_404_page() {
    let app = test_app!(memory_posts());

    for uri in [
        "/blog/view/P1",
        "/blog/view/7f9c2ad4-5d0e-4e54-9f53-6a3c0b1d2e3f",
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_text(resp).await.contains("That post does not exist."));
    }
}

#[actix_web::test]
async fn storage_failure_is_a_500_page() {
    let app = test_app!(unreachable_posts());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/blog/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_text(resp).await;
    assert!(html.contains("Something went wrong"));
    assert!(!html.contains("connection refused"));
}

#[actix_web::test]
async fn responses_carry_a_request_id() {
    let app = test_app!(memory_posts());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert!(resp.headers().contains_key("x-request-id"));
    assert!(resp.headers().contains_key("server-timing"));

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header(("x-request-id", "abc-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "abc-123");
}

#[actix_web::test]
async fn responses_carry_security_headers() {
    let app = test_app!(memory_posts());

    for uri in ["/", "/blog/", "/api/health", "/blog/view/P1"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let headers = resp.headers();
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert_eq!(headers.get("referrer-policy").unwrap(), "no-referrer");
        assert_eq!(
            headers.get("cross-origin-opener-policy").unwrap(),
            "same-origin"
        );
    }
}
