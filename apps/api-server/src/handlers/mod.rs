//! HTTP handlers and route configuration.

mod accounts;
mod auth;
mod health;
mod pagination;
mod posts;
mod stories;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::middleware::error::{AppError, NOT_PERMITTED};

/// Only the owner may modify a resource.
fn ensure_owner(owner_id: Uuid, user: &CurrentUser) -> Result<(), AppError> {
    if owner_id != user.id() {
        tracing::debug!(%owner_id, account_id = %user.id(), "Rejected edit by non-owner");
        return Err(AppError::Forbidden(NOT_PERMITTED.to_string()));
    }
    Ok(())
}

/// Malformed bodies and query strings get the same problem document as
/// every other client error.
fn extractor_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    extractor_config(cfg);

    cfg
        // Public routes
        .route("/health", web::get().to(health::health_check))
        .route("/register", web::post().to(auth::register))
        .route("/login", web::post().to(auth::login))
        .route("/logout", web::post().to(auth::logout))
        // Fixed paths are registered before `/{id}` so they are not taken for ids.
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list))
                .route("", web::post().to(posts::create))
                .route("/feed", web::get().to(posts::feed))
                .route("/my_posts", web::get().to(posts::my_posts))
                .route("/my_feed", web::get().to(posts::my_feed))
                .route("/my_comments", web::get().to(posts::my_comments))
                .route("/my_likes", web::get().to(posts::my_likes))
                .route("/{id}", web::get().to(posts::retrieve))
                .route("/{id}", web::put().to(posts::replace))
                .route("/{id}", web::patch().to(posts::partial_update))
                .route("/{id}", web::delete().to(posts::destroy))
                .route("/{id}/like", web::post().to(posts::like))
                .route("/{id}/comment", web::post().to(posts::comment))
                .route("/{id}/seen", web::get().to(posts::seen)),
        )
        .service(
            web::scope("/stories")
                .route("", web::get().to(stories::list))
                .route("", web::post().to(stories::create))
                .route("/my_stories", web::get().to(stories::my_stories))
                .route("/user_stories", web::get().to(stories::user_stories))
                .route("/{id}", web::get().to(stories::retrieve))
                .route("/{id}", web::put().to(stories::replace))
                .route("/{id}", web::patch().to(stories::partial_update))
                .route("/{id}", web::delete().to(stories::destroy)),
        )
        .service(
            web::scope("/accounts")
                .route("/me", web::get().to(accounts::me))
                .route("/{id}", web::get().to(accounts::retrieve))
                .route("/{id}/follow", web::post().to(accounts::follow))
                .route("/{id}/unfollow", web::post().to(accounts::unfollow))
                .route("/{id}/followers", web::get().to(accounts::followers))
                .route("/{id}/following", web::get().to(accounts::following)),
        )
        .default_service(web::to(not_found));
}

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found())
}
