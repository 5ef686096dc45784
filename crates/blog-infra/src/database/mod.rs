//! Blog post persistence - SeaORM/PostgreSQL and in-memory repositories.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

pub use connections::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use connections::DatabaseConnections;
pub use memory::InMemoryBlogPostRepository;

#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresBlogPostRepository;
