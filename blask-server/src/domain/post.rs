use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{Field, ValidationErrors};

/// Store-assigned identifier of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl PostId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PostId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Materializes a validated submission under a freshly assigned id.
    pub fn from_new(id: PostId, new: NewPost, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            author: new.author,
            title: new.title,
            body: new.body,
            created_at,
        }
    }
}

/// A submission that passed validation and can be handed to a repository.
///
/// The only way to obtain one is [`NewPost::new`] (or the form validator built
/// on top of it), so repositories never see an invalid record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    author: String,
    title: String,
    body: String,
}

impl NewPost {
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        let author = author.into();
        let title = title.into();
        let body = body.into();

        let mut errors = ValidationErrors::default();
        errors.check(Field::Author, &author);
        errors.check(Field::Title, &title);
        errors.check(Field::Body, &body);
        errors.into_result()?;

        Ok(Self {
            author,
            title,
            body,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
