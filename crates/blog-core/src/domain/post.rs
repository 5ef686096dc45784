use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a blog post.
///
/// Both name parts are optional on the way in and default to an empty string,
/// so a post written by `{"firstName": "Ada"}` renders as `"Ada"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Full display name: first and last name joined by a space, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// BlogPost entity - the stored shape of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-facing projection of a post. Storage fields are dropped and the
/// author collapses to its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedBlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Fields required to create a post.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub author: Author,
}

/// Partial replacement of a post's updatable fields. `None` leaves the stored
/// value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
}

impl BlogPostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }

    /// Apply the present fields to `post` and bump its `updated_at`.
    pub fn apply_to(self, post: &mut BlogPost) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        post.updated_at = Utc::now();
    }
}

impl BlogPost {
    /// Create a new post with a fresh id and timestamps.
    pub fn new(draft: NewBlogPost) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Storage-side requiredness check: title and content must be non-empty.
    pub fn ensure_required(&self) -> Result<(), DomainError> {
        if self.title.is_empty() {
            return Err(DomainError::Validation("Path `title` is required".into()));
        }
        if self.content.is_empty() {
            return Err(DomainError::Validation(
                "Path `content` is required".into(),
            ));
        }
        Ok(())
    }

    pub fn author_name(&self) -> String {
        self.author.full_name()
    }

    pub fn serialize(&self) -> SerializedBlogPost {
        SerializedBlogPost {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            author: self.author_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(first: &str, last: &str) -> NewBlogPost {
        NewBlogPost {
            title: "foo".to_string(),
            content: "bar".to_string(),
            author: Author::new(first, last),
        }
    }

    #[test]
    fn test_author_name_joins_and_trims() {
        assert_eq!(BlogPost::new(draft("foo", "bar")).author_name(), "foo bar");
        assert_eq!(BlogPost::new(draft("foo", "")).author_name(), "foo");
        assert_eq!(BlogPost::new(draft("", "bar")).author_name(), "bar");
        assert_eq!(BlogPost::new(draft("", "")).author_name(), "");
    }

    #[test]
    fn test_serialize_drops_storage_fields() {
        let post = BlogPost::new(draft("foo", "bar"));
        let value = serde_json::to_value(post.serialize()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": post.id,
                "title": "foo",
                "content": "bar",
                "author": "foo bar",
            })
        );
    }

    #[test]
    fn test_author_parts_default_to_empty() {
        let author: Author = serde_json::from_str(r#"{"firstName": "Ada"}"#).unwrap();
        assert_eq!(author, Author::new("Ada", ""));
        assert_eq!(author.full_name(), "Ada");
    }

    #[test]
    fn test_ensure_required_rejects_empty_text() {
        assert!(BlogPost::new(draft("a", "b")).ensure_required().is_ok());

        let mut missing_title = BlogPost::new(draft("a", "b"));
        missing_title.title.clear();
        assert!(matches!(
            missing_title.ensure_required(),
            Err(DomainError::Validation(msg)) if msg.contains("title")
        ));

        let mut missing_content = BlogPost::new(draft("a", "b"));
        missing_content.content.clear();
        assert!(missing_content.ensure_required().is_err());
    }

    #[test]
    fn test_changes_only_touch_present_fields() {
        let mut post = BlogPost::new(draft("foo", "bar"));
        let changes = BlogPostChanges {
            title: Some("fizz".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());

        changes.apply_to(&mut post);

        assert_eq!(post.title, "fizz");
        assert_eq!(post.content, "bar");
        assert_eq!(post.author_name(), "foo bar");
        assert!(post.updated_at >= post.created_at);
    }
}
