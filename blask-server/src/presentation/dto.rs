use std::collections::HashMap;

use crate::domain::post::Post;
use crate::domain::validation::{Field, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct ListPostsResponse {
    pub posts: Vec<Post>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// One input of the submission form, as handed to `new.html`.
#[derive(Debug, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub multiline: bool,
    pub value: String,
    pub error: Option<String>,
}

pub fn form_fields(
    submitted: &HashMap<String, String>,
    errors: Option<&ValidationErrors>,
) -> Vec<FormField> {
    [
        (Field::Author, "Author", false),
        (Field::Title, "Title", false),
        (Field::Body, "Body", true),
    ]
    .into_iter()
    .map(|(field, label, multiline)| FormField {
        name: field.as_str(),
        label,
        multiline,
        value: submitted.get(field.as_str()).cloned().unwrap_or_default(),
        error: errors
            .and_then(|e| e.for_field(field))
            .map(|e| e.message()),
    })
    .collect()
}
