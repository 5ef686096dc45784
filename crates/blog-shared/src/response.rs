//! Standardized API response bodies.

use serde::{Deserialize, Serialize};

/// Envelope returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostListResponse<T> {
    #[serde(rename = "blogPost")]
    pub blog_post: Vec<T>,
}

impl<T> BlogPostListResponse<T> {
    pub fn new(blog_post: Vec<T>) -> Self {
        Self { blog_post }
    }
}

/// Error body: a single human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new("Not Found")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_uses_blog_post_key() {
        let body = BlogPostListResponse::<String>::new(Vec::new());
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "blogPost": [] })
        );
    }

    #[test]
    fn test_message_constructors() {
        assert_eq!(MessageResponse::not_found().message, "Not Found");
        assert_eq!(
            MessageResponse::internal_error().message,
            "Internal server error"
        );
    }
}
