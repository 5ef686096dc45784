//! Blog post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost, BlogPostChanges, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};
use blog_shared::BlogPostListResponse;
use blog_shared::dto::{AuthorPayload, CreateBlogPostRequest, UpdateBlogPostRequest};

use super::extract::LenientJson;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Ids are opaque to clients; one that does not parse is a storage failure.
fn parse_id(raw: &str) -> Result<Uuid, RepoError> {
    Uuid::parse_str(raw).map_err(|e| RepoError::InvalidId(format!("{raw}: {e}")))
}

fn into_author(payload: AuthorPayload) -> Author {
    Author::new(payload.first_name, payload.last_name)
}

/// Checks presence of the required fields in order: title, content, author.
fn into_draft(req: CreateBlogPostRequest) -> AppResult<NewBlogPost> {
    match (req.title, req.content, req.author) {
        (Some(title), Some(content), Some(author)) => Ok(NewBlogPost {
            title,
            content,
            author: into_author(author),
        }),
        (None, _, _) => Err(AppError::MissingField("title")),
        (_, None, _) => Err(AppError::MissingField("content")),
        (_, _, None) => Err(AppError::MissingField("author")),
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body = BlogPostListResponse::new(posts.iter().map(|p| p.serialize()).collect());

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
///
/// An unknown id answers 500, the same as any other storage failure.
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(RepoError::NotFound)?;

    Ok(HttpResponse::Ok().json(post.serialize()))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: LenientJson<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let draft = into_draft(body.into_inner())?;

    let saved = state.posts.insert(BlogPost::new(draft)).await?;
    tracing::info!(post_id = %saved.id, "Blog post created");

    Ok(HttpResponse::Created().json(saved.serialize()))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: LenientJson<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let path_id = path.into_inner();
    let req = body.into_inner();

    if !req.id_matches(&path_id) {
        return Err(AppError::BadRequest(format!(
            "Request path id ({}) and request body id ({}) must match",
            path_id,
            req.id.as_deref().unwrap_or("undefined")
        )));
    }

    let id = parse_id(&path_id)?;
    let changes = BlogPostChanges {
        title: req.title,
        content: req.content,
        author: req.author.map(into_author),
    };
    if changes.is_empty() {
        tracing::debug!(post_id = %id, "Update carries no updatable fields");
    }

    state.posts.update(id, changes).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.posts.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}
