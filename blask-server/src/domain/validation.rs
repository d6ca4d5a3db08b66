use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::post::NewPost;

pub const MAX_AUTHOR_LEN: usize = 100;
pub const MAX_TITLE_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Author,
    Title,
    Body,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Author => "author",
            Field::Title => "title",
            Field::Body => "body",
        }
    }

    /// Maximum length in characters, `None` when unbounded.
    pub fn max_len(&self) -> Option<usize> {
        match self {
            Field::Author => Some(MAX_AUTHOR_LEN),
            Field::Title => Some(MAX_TITLE_LEN),
            Field::Body => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    Missing,
    TooLong,
    /// Contains a NUL character, which the database cannot store.
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub reason: Reason,
}

impl FieldError {
    pub fn message(&self) -> String {
        match (self.reason, self.field.max_len()) {
            (Reason::Missing, _) => "This field is required.".to_string(),
            (Reason::TooLong, Some(max)) => {
                format!("Field cannot be longer than {max} characters.")
            }
            (Reason::TooLong, None) => "Field is too long.".to_string(),
            (Reason::Invalid, _) => "Field contains characters that are not allowed.".to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.reason {
            Reason::Missing => "missing",
            Reason::TooLong => "too_long",
            Reason::Invalid => "invalid",
        };
        write!(f, "{}: {}", self.field, reason)
    }
}

/// Every field that failed validation for a single submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[error("invalid post: {}", summary(.0))]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn contains(&self, field: Field, reason: Reason) -> bool {
        self.for_field(field).is_some_and(|e| e.reason == reason)
    }

    pub(crate) fn check(&mut self, field: Field, value: &str) {
        if value.trim().is_empty() {
            self.0.push(FieldError {
                field,
                reason: Reason::Missing,
            });
        } else if value.contains('\0') {
            self.0.push(FieldError {
                field,
                reason: Reason::Invalid,
            });
        } else if field
            .max_len()
            .is_some_and(|max| value.chars().count() > max)
        {
            self.0.push(FieldError {
                field,
                reason: Reason::TooLong,
            });
        }
    }

    pub(crate) fn into_result(self) -> Result<(), Self> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Turns a raw form submission into a [`NewPost`].
///
/// Absent keys count as missing. Surrounding whitespace is stripped from the
/// single-line fields (`author`, `title`); `body` is kept verbatim.
pub fn validate_submission(
    form: &HashMap<String, String>,
) -> Result<NewPost, ValidationErrors> {
    let raw = |field: Field| form.get(field.as_str()).map(String::as_str).unwrap_or("");

    NewPost::new(
        raw(Field::Author).trim(),
        raw(Field::Title).trim(),
        raw(Field::Body),
    )
}
