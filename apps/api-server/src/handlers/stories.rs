//! Story endpoints.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use pixgram_core::domain::{ImageRef, Page, Story};
use pixgram_core::validation::FieldErrors;
use pixgram_shared::dto::{PageQuery, StoryRequest, StoryView, UserStoriesQuery};

use super::ensure_owner;
use super::pagination::{ensure_in_range, envelope, page_request};
use crate::middleware::auth::CurrentUser;
use crate::middleware::error::{AppError, AppResult};
use crate::representation;
use crate::state::AppState;

async fn load(state: &AppState, id: Uuid) -> AppResult<Story> {
    state
        .stories
        .find_by_id(id)
        .await?
        .ok_or_else(AppError::not_found)
}

fn parse_image(raw: Option<String>) -> Result<ImageRef, FieldErrors> {
    ImageRef::parse(raw.unwrap_or_default()).map_err(|e| FieldErrors::single("image", e.to_string()))
}

async fn respond_page(state: &AppState, mut page: Page<Story>) -> AppResult<HttpResponse> {
    ensure_in_range(&page)?;
    let stories = std::mem::take(&mut page.items);
    let results = representation::story_views(state, stories).await?;

    Ok(HttpResponse::Ok().json(envelope(&page, results)))
}

async fn view(state: &AppState, story: Story) -> AppResult<StoryView> {
    representation::story_views(state, vec![story])
        .await?
        .pop()
        .ok_or_else(|| AppError::Internal("story view missing".to_string()))
}

/// GET /stories - own stories and those of followed accounts, of any age.
pub async fn list(
    state: web::Data<AppState>,
    user: CurrentUser,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let request = page_request(&query, state.settings.page_size)?;
    let page = state.stories.visible_to(user.id(), request).await?;
    respond_page(&state, page).await
}

/// POST /stories
pub async fn create(
    state: web::Data<AppState>,
    user: CurrentUser,
    body: web::Json<StoryRequest>,
) -> AppResult<HttpResponse> {
    let image = parse_image(body.into_inner().image)?;
    let story = state.stories.insert(Story::new(user.id(), image)).await?;

    tracing::info!(story_id = %story.id, account_id = %user.id(), "Story created");

    Ok(HttpResponse::Created().json(view(&state, story).await?))
}

/// GET /stories/{id}
pub async fn retrieve(
    state: web::Data<AppState>,
    _user: CurrentUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let story = load(&state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(view(&state, story).await?))
}

async fn edit(
    state: &AppState,
    user: &CurrentUser,
    id: Uuid,
    input: StoryRequest,
    partial: bool,
) -> AppResult<HttpResponse> {
    let mut story = load(state, id).await?;
    ensure_owner(story.user_id, user)?;

    if input.image.is_some() || !partial {
        story.image = parse_image(input.image)?.into_inner();
        story = state.stories.update(story).await?;
    }

    Ok(HttpResponse::Ok().json(view(state, story).await?))
}

/// PUT /stories/{id}
pub async fn replace(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<Uuid>,
    body: web::Json<StoryRequest>,
) -> AppResult<HttpResponse> {
    edit(&state, &user, path.into_inner(), body.into_inner(), false).await
}

/// PATCH /stories/{id}
pub async fn partial_update(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<Uuid>,
    body: web::Json<StoryRequest>,
) -> AppResult<HttpResponse> {
    edit(&state, &user, path.into_inner(), body.into_inner(), true).await
}

/// DELETE /stories/{id}
pub async fn destroy(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let story = load(&state, path.into_inner()).await?;
    ensure_owner(story.user_id, &user)?;

    state.stories.delete(story.id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /stories/my_stories - the requester's stories from the last day.
pub async fn my_stories(
    state: web::Data<AppState>,
    user: CurrentUser,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let request = page_request(&query, state.settings.page_size)?;
    let cutoff = Story::freshness_cutoff(Utc::now());
    let page = state
        .stories
        .by_owner_since(user.id(), cutoff, request)
        .await?;
    respond_page(&state, page).await
}

/// GET /stories/user_stories?user_id= - one account's stories from the last day.
pub async fn user_stories(
    state: web::Data<AppState>,
    _user: CurrentUser,
    query: web::Query<UserStoriesQuery>,
    page_query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let owner_id = match query.user_id.as_deref().map(str::trim) {
        None | Some("") => {
            return Err(AppError::BadRequest("user_id parameter is required".to_string()));
        }
        Some(raw) => Uuid::parse_str(raw)
            .map_err(|_| AppError::BadRequest("user_id must be a valid UUID".to_string()))?,
    };

    if state.accounts.find_by_id(owner_id).await?.is_none() {
        return Err(AppError::not_found());
    }

    let request = page_request(&page_query, state.settings.page_size)?;
    let cutoff = Story::freshness_cutoff(Utc::now());
    let page = state.stories.by_owner_since(owner_id, cutoff, request).await?;
    respond_page(&state, page).await
}
