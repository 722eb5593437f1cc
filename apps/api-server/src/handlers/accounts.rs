//! Account profiles and follower relationships.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use pixgram_core::domain::{Account, FollowSide, FollowerConnection};
use pixgram_shared::dto::{MessageResponse, PageQuery};

use super::pagination::{ensure_in_range, envelope, page_request};
use crate::middleware::auth::CurrentUser;
use crate::middleware::error::{AppError, AppResult};
use crate::representation;
use crate::state::AppState;

async fn load(state: &AppState, id: Uuid) -> AppResult<Account> {
    state
        .accounts
        .find_by_id(id)
        .await?
        .ok_or_else(AppError::not_found)
}

/// GET /accounts/me
pub async fn me(state: web::Data<AppState>, user: CurrentUser) -> AppResult<HttpResponse> {
    let detail = representation::account_detail(&state, &user.account).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// GET /accounts/{id}
pub async fn retrieve(
    state: web::Data<AppState>,
    _user: CurrentUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let account = load(&state, path.into_inner()).await?;
    let detail = representation::account_detail(&state, &account).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// POST /accounts/{id}/follow - 201 for a new edge, 200 when it already existed.
pub async fn follow(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let target = load(&state, path.into_inner()).await?;
    let edge = FollowerConnection::new(user.id(), target.id)?;
    let (edge, created) = state.follows.follow(edge).await?;

    if created {
        tracing::info!(follower = %user.id(), following = %target.id, "Follow created");
    }

    let body = representation::follow_view(&edge, &user.account, &target);
    Ok(if created {
        HttpResponse::Created().json(body)
    } else {
        HttpResponse::Ok().json(body)
    })
}

/// POST /accounts/{id}/unfollow
pub async fn unfollow(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let target = load(&state, path.into_inner()).await?;
    let removed = state.follows.unfollow(user.id(), target.id).await?;

    let message = if removed {
        format!("You no longer follow {}.", target.username)
    } else {
        format!("You were not following {}.", target.username)
    };
    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}

async fn edges(
    state: &AppState,
    id: Uuid,
    side: FollowSide,
    query: &PageQuery,
) -> AppResult<HttpResponse> {
    let account = load(state, id).await?;
    let request = page_request(query, state.settings.page_size)?;

    let mut page = state.follows.edges(account.id, side, request).await?;
    ensure_in_range(&page)?;

    let edges = std::mem::take(&mut page.items);
    let results = representation::follow_edges(state, edges, side).await?;
    Ok(HttpResponse::Ok().json(envelope(&page, results)))
}

/// GET /accounts/{id}/followers
pub async fn followers(
    state: web::Data<AppState>,
    _user: CurrentUser,
    path: web::Path<Uuid>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    edges(&state, path.into_inner(), FollowSide::Followers, &query).await
}

/// GET /accounts/{id}/following
pub async fn following(
    state: web::Data<AppState>,
    _user: CurrentUser,
    path: web::Path<Uuid>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    edges(&state, path.into_inner(), FollowSide::Following, &query).await
}
