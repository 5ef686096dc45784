//! HTTP handlers and route configuration.

mod extract;
mod posts;

use actix_web::web;

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/posts")
            .route(web::get().to(posts::list_posts))
            .route(web::post().to(posts::create_post))
            .default_service(web::to(not_found)),
    )
    .service(
        web::resource("/posts/{id}")
            .route(web::get().to(posts::get_post))
            .route(web::put().to(posts::update_post))
            .route(web::delete().to(posts::delete_post))
            .default_service(web::to(not_found)),
    )
    .default_service(web::to(not_found));
}

/// Catch-all for unmatched paths and methods.
async fn not_found() -> AppResult<actix_web::HttpResponse> {
    Err(AppError::NotFound)
}
