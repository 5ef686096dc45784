//! Data Transfer Objects - request types for the API.
//!
//! Every field is optional so that presence can be checked explicitly after
//! deserialization instead of failing inside the JSON extractor.

use serde::{Deserialize, Serialize};

/// Author as sent by clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Request to create a blog post. Presence of `title`, `content` and
/// `author` is checked by the handler, in that order.
///
/// An explicit `null` deserializes to `None` and so counts as absent: it is
/// answered with the "Missing" 400 rather than reaching storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorPayload>,
}

/// Request to update a blog post. `id` must repeat the id in the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorPayload>,
}

impl UpdateBlogPostRequest {
    /// True when `path_id` is non-empty and equal to the body id.
    pub fn id_matches(&self, path_id: &str) -> bool {
        matches!(&self.id, Some(body_id) if !path_id.is_empty() && body_id == path_id)
    }
}
