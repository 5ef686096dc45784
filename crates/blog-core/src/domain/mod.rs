//! Domain entities - the core business objects.

mod post;

pub use post::{Author, BlogPost, BlogPostChanges, NewBlogPost, SerializedBlogPost};
