//! Turns domain values into wire representations, computing derived fields
//! (owner briefs, counts, previews) for the requesting account.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use pixgram_core::domain::{Account, Comment, FollowSide, FollowerConnection, Post, Story};
use pixgram_core::validation::preview;
use pixgram_shared::dto::{
    AccountBrief, AccountDetail, AccountSummary, CommentView, FollowEdgeView, FollowView,
    PostDetail, PostSummary, StoryView,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Characters of a description shown in its preview.
pub const PREVIEW_LENGTH: usize = 50;

pub fn brief(account: &Account) -> AccountBrief {
    AccountBrief {
        id: account.id,
        username: account.username.clone(),
        profile_picture: account.profile_picture.clone(),
    }
}

pub fn summary(account: &Account) -> AccountSummary {
    AccountSummary {
        id: account.id,
        username: account.username.clone(),
        email: account.email.clone(),
        first_name: account.first_name.clone(),
        last_name: account.last_name.clone(),
        profile_picture: account.profile_picture.clone(),
        description: account.description.clone(),
        date_joined: account.date_joined,
    }
}

pub async fn account_detail(state: &AppState, account: &Account) -> AppResult<AccountDetail> {
    let stats = state.accounts.stats(account.id).await?;

    Ok(AccountDetail {
        account: summary(account),
        posts_count: stats.posts,
        followers_count: stats.followers,
        following_count: stats.following,
    })
}

/// Load the briefs of every referenced account in one query.
async fn briefs(
    state: &AppState,
    ids: impl IntoIterator<Item = Uuid>,
) -> AppResult<HashMap<Uuid, AccountBrief>> {
    let ids: Vec<Uuid> = ids
        .into_iter()
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    let accounts = state.accounts.find_many(&ids).await?;

    Ok(accounts.iter().map(|a| (a.id, brief(a))).collect())
}

fn lookup(briefs: &HashMap<Uuid, AccountBrief>, id: Uuid) -> AppResult<AccountBrief> {
    briefs
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::Internal(format!("account {} vanished while rendering", id)))
}

pub async fn post_summaries(
    state: &AppState,
    posts: Vec<Post>,
    viewer: Uuid,
) -> AppResult<Vec<PostSummary>> {
    let owners = briefs(state, posts.iter().map(|p| p.user_id)).await?;
    let ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
    let stats = state.posts.stats(&ids, Some(viewer)).await?;

    let mut summaries = Vec::with_capacity(posts.len());
    for post in posts {
        let stats = stats.get(&post.id).copied().unwrap_or_default();
        let owner = lookup(&owners, post.user_id)?;

        summaries.push(PostSummary {
            id: post.id,
            created_at: post.created_at,
            description_preview: preview(&post.description, PREVIEW_LENGTH),
            image: post.image,
            description: post.description,
            owner,
            likes_count: stats.likes,
            comments_count: stats.comments,
            seen_count: stats.seen,
            is_liked: stats.liked_by_viewer,
        });
    }

    Ok(summaries)
}

pub async fn post_summary(state: &AppState, post: Post, viewer: Uuid) -> AppResult<PostSummary> {
    post_summaries(state, vec![post], viewer)
        .await?
        .pop()
        .ok_or_else(|| AppError::Internal("post summary missing".to_string()))
}

/// Summary plus every comment, newest first.
pub async fn post_detail(state: &AppState, post: Post, viewer: Uuid) -> AppResult<PostDetail> {
    let comments = state.comments.for_post(post.id).await?;

    Ok(PostDetail {
        post: post_summary(state, post, viewer).await?,
        comments: comment_views(state, comments).await?,
    })
}

pub async fn comment_views(state: &AppState, comments: Vec<Comment>) -> AppResult<Vec<CommentView>> {
    let authors = briefs(state, comments.iter().map(|c| c.user_id)).await?;

    comments
        .into_iter()
        .map(|comment| {
            Ok(CommentView {
                user: lookup(&authors, comment.user_id)?,
                id: comment.id,
                created_at: comment.created_at,
                text: comment.text,
                post: comment.post_id,
            })
        })
        .collect()
}

pub async fn story_views(state: &AppState, stories: Vec<Story>) -> AppResult<Vec<StoryView>> {
    let owners = briefs(state, stories.iter().map(|s| s.user_id)).await?;

    stories
        .into_iter()
        .map(|story| {
            Ok(StoryView {
                owner: lookup(&owners, story.user_id)?,
                id: story.id,
                created_at: story.created_at,
                image: story.image,
            })
        })
        .collect()
}

/// Each edge rendered as the account on the far side from `side`'s subject.
pub async fn follow_edges(
    state: &AppState,
    edges: Vec<FollowerConnection>,
    side: FollowSide,
) -> AppResult<Vec<FollowEdgeView>> {
    let others = briefs(state, edges.iter().map(|e| side.counterpart(e))).await?;

    edges
        .into_iter()
        .map(|edge| {
            Ok(FollowEdgeView {
                account: lookup(&others, side.counterpart(&edge))?,
                id: edge.id,
                created_at: edge.created_at,
            })
        })
        .collect()
}

pub fn follow_view(edge: &FollowerConnection, follower: &Account, following: &Account) -> FollowView {
    FollowView {
        id: edge.id,
        follower: brief(follower),
        following: brief(following),
    }
}
