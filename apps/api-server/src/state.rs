//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;
use blog_infra::database::{DatabaseConfig, InMemoryBlogPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::database::{DatabaseConnections, PostgresBlogPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
}

impl AppState {
    /// Build the application state: PostgreSQL when a database is
    /// configured, in-memory otherwise.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Result<Self, RepoError> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::in_memory());
        };

        let state = Self::connect(config).await?;
        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self {
            posts: Arc::new(InMemoryBlogPostRepository::new()),
        }
    }

    #[cfg(feature = "postgres")]
    async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let connections = DatabaseConnections::init(config)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        Ok(Self {
            posts: Arc::new(PostgresBlogPostRepository::new(connections.main)),
        })
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect(_config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
        Ok(Self::in_memory())
    }
}
