use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use minijinja::context;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::domain::error::DomainError;
use crate::presentation::templates;

fn domain_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::PostNotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

/// JSON rendering used by the `/api` scope.
impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        domain_status(self)
    }

    fn error_response(&self) -> HttpResponse {
        let (message, details) = match self {
            DomainError::Validation(errors) => {
                ("validation failed".to_string(), Some(json!(errors)))
            }
            DomainError::PostNotFound(id) => (self.to_string(), Some(json!({ "resource": id }))),
            DomainError::Storage(e) => {
                error!(error = %e, "storage failure");
                ("internal error".to_string(), None)
            }
        };
        let body = ErrorBody {
            error: message.as_str(),
            details,
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Failure while serving an HTML page; rendered with `error.html`.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("template error: {0}")]
    Render(#[from] minijinja::Error),
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        match self {
            PageError::Domain(e) => domain_status(e),
            PageError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            PageError::Domain(DomainError::PostNotFound(_)) => {
                "That post does not exist.".to_string()
            }
            PageError::Domain(DomainError::Validation(e)) => e.to_string(),
            other => {
                error!(error = %other, "page failed");
                "Something went wrong on our side.".to_string()
            }
        };

        match templates::render(
            "error.html",
            context! { status => status.as_u16(), message => message },
        ) {
            Ok(html) => HttpResponse::build(status)
                .content_type("text/html; charset=utf-8")
                .body(html),
            Err(e) => {
                error!(error = %e, "failed to render error page");
                HttpResponse::build(status).body(message)
            }
        }
    }
}
