//! Post endpoints: CRUD, engagement actions and the personal listings.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use pixgram_core::domain::{Comment, Page, Post, PostChanges};
use pixgram_core::validation::{self, FieldErrors};
use pixgram_shared::dto::{CommentRequest, PageQuery, PostInput};

use super::ensure_owner;
use super::pagination::{ensure_in_range, envelope, page_request};
use crate::middleware::auth::CurrentUser;
use crate::middleware::error::{AppError, AppResult};
use crate::representation;
use crate::state::AppState;

async fn load(state: &AppState, id: Uuid) -> AppResult<Post> {
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(AppError::not_found)
}

async fn respond_page(
    state: &AppState,
    mut page: Page<Post>,
    viewer: Uuid,
) -> AppResult<HttpResponse> {
    ensure_in_range(&page)?;
    let posts = std::mem::take(&mut page.items);
    let results = representation::post_summaries(state, posts, viewer).await?;

    Ok(HttpResponse::Ok().json(envelope(&page, results)))
}

/// GET /posts
pub async fn list(
    state: web::Data<AppState>,
    user: CurrentUser,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let request = page_request(&query, state.settings.page_size)?;
    let page = state.posts.list(request).await?;
    respond_page(&state, page, user.id()).await
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    user: CurrentUser,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner();
    let post = Post::from_input(user.id(), input.image, input.description)?;
    let post = state.posts.insert(post).await?;

    tracing::info!(post_id = %post.id, account_id = %user.id(), "Post created");

    let summary = representation::post_summary(&state, post, user.id()).await?;
    Ok(HttpResponse::Created().json(summary))
}

/// GET /posts/{id}
pub async fn retrieve(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = load(&state, path.into_inner()).await?;
    let detail = representation::post_detail(&state, post, user.id()).await?;
    Ok(HttpResponse::Ok().json(detail))
}

async fn edit(
    state: &AppState,
    user: &CurrentUser,
    id: Uuid,
    input: PostInput,
    partial: bool,
) -> AppResult<HttpResponse> {
    let mut post = load(state, id).await?;
    ensure_owner(post.user_id, user)?;

    let changes = PostChanges::validate(input.image, input.description, partial)?;
    post.apply(changes);
    let post = state.posts.update(post).await?;

    let summary = representation::post_summary(state, post, user.id()).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// PUT /posts/{id}
pub async fn replace(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<Uuid>,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    edit(&state, &user, path.into_inner(), body.into_inner(), false).await
}

/// PATCH /posts/{id}
pub async fn partial_update(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<Uuid>,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    edit(&state, &user, path.into_inner(), body.into_inner(), true).await
}

/// DELETE /posts/{id}
pub async fn destroy(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = load(&state, path.into_inner()).await?;
    ensure_owner(post.user_id, &user)?;

    state.posts.delete(post.id).await?;
    tracing::info!(post_id = %post.id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}

/// POST /posts/{id}/like - toggles the requester's like.
pub async fn like(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = load(&state, path.into_inner()).await?;
    let like = state.engagement.toggle_like(user.id(), post.id).await?;

    tracing::debug!(post_id = %post.id, liked = like.is_liked(), "Like toggled");
    Ok(HttpResponse::Ok().finish())
}

/// POST /posts/{id}/comment
pub async fn comment(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<Uuid>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let post = load(&state, path.into_inner()).await?;
    let Some(text) = body.into_inner().text else {
        return Err(FieldErrors::single("text", validation::REQUIRED).into());
    };

    let comment = Comment::new(user.id(), post.id, text)?;
    let comment = state.comments.insert(comment).await?;

    let mut views = representation::comment_views(&state, vec![comment]).await?;
    let view = views
        .pop()
        .ok_or_else(|| AppError::Internal("comment view missing".to_string()))?;
    Ok(HttpResponse::Created().json(view))
}

/// GET /posts/{id}/seen - records that the requester viewed the post.
pub async fn seen(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = load(&state, path.into_inner()).await?;
    state.engagement.mark_seen(user.id(), post.id).await?;
    Ok(HttpResponse::Ok().finish())
}

/// GET /posts/feed - posts by accounts the requester follows.
pub async fn feed(
    state: web::Data<AppState>,
    user: CurrentUser,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let request = page_request(&query, state.settings.page_size)?;
    let page = state.posts.feed(user.id(), request).await?;
    respond_page(&state, page, user.id()).await
}

/// GET /posts/my_posts
pub async fn my_posts(
    state: web::Data<AppState>,
    user: CurrentUser,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let request = page_request(&query, state.settings.page_size)?;
    let page = state.posts.by_owner(user.id(), request).await?;
    respond_page(&state, page, user.id()).await
}

/// GET /posts/my_feed - same set as the feed, resolved from the follow list.
pub async fn my_feed(
    state: web::Data<AppState>,
    user: CurrentUser,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let request = page_request(&query, state.settings.page_size)?;
    let following = state.follows.following_ids(user.id()).await?;
    let page = state.posts.by_owners(&following, request).await?;
    respond_page(&state, page, user.id()).await
}

/// GET /posts/my_comments
pub async fn my_comments(
    state: web::Data<AppState>,
    user: CurrentUser,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let request = page_request(&query, state.settings.page_size)?;
    let mut page = state.comments.by_author(user.id(), request).await?;
    ensure_in_range(&page)?;

    let comments = std::mem::take(&mut page.items);
    let results = representation::comment_views(&state, comments).await?;
    Ok(HttpResponse::Ok().json(envelope(&page, results)))
}

/// GET /posts/my_likes
pub async fn my_likes(
    state: web::Data<AppState>,
    user: CurrentUser,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let request = page_request(&query, state.settings.page_size)?;
    let page = state.posts.liked_by(user.id(), request).await?;
    respond_page(&state, page, user.id()).await
}
