//! PostgreSQL repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostChanges};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};

use super::entity::blog_post::{self, Entity as BlogPostEntity};

/// PostgreSQL blog post repository.
pub struct PostgresBlogPostRepository {
    db: DbConn,
}

impl PostgresBlogPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_error(err: DbErr) -> RepoError {
    RepoError::Query(err.to_string())
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for PostgresBlogPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let rows = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let row = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        post.ensure_required()?;

        let active_model: blog_post::ActiveModel = post.into();
        let model = active_model.insert(&self.db).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Blog post already exists".to_string())
            } else {
                RepoError::Query(err_str)
            }
        })?;

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = BlogPostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            tracing::debug!(%id, "Delete matched no blog post");
        }

        Ok(())
    }
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn update(&self, id: Uuid, changes: BlogPostChanges) -> Result<(), RepoError> {
        let (author_first_name, author_last_name) = match changes.author {
            Some(author) => (Set(author.first_name), Set(author.last_name)),
            None => (NotSet, NotSet),
        };

        let active_model = blog_post::ActiveModel {
            title: changes.title.map_or(NotSet, Set),
            content: changes.content.map_or(NotSet, Set),
            author_first_name,
            author_last_name,
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let result = BlogPostEntity::update_many()
            .set(active_model)
            .filter(blog_post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            tracing::debug!(%id, "Update matched no blog post");
        }

        Ok(())
    }
}
