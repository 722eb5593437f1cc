use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    Account, AccountStats, Comment, FollowSide, FollowerConnection, LikeState, Page, PageRequest,
    Post, PostStats, Story,
};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity, returning it as stored.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Missing rows yield [`RepoError::NotFound`].
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Account repository with lookups used by registration and login.
#[async_trait]
pub trait AccountRepository: BaseRepository<Account, Uuid> {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepoError>;

    /// Accounts with any of the given ids, in no particular order.
    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Account>, RepoError>;

    async fn touch_last_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), RepoError>;

    /// Post, follower and following counts, computed fresh.
    async fn stats(&self, id: Uuid) -> Result<AccountStats, RepoError>;
}

/// Post repository. Every listing is newest-first.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn list(&self, page: PageRequest) -> Result<Page<Post>, RepoError>;

    /// Posts by accounts that `account_id` follows, resolved in one query.
    async fn feed(&self, account_id: Uuid, page: PageRequest) -> Result<Page<Post>, RepoError>;

    async fn by_owner(&self, owner_id: Uuid, page: PageRequest) -> Result<Page<Post>, RepoError>;

    async fn by_owners(&self, owner_ids: &[Uuid], page: PageRequest)
    -> Result<Page<Post>, RepoError>;

    /// Posts `account_id` currently likes.
    async fn liked_by(&self, account_id: Uuid, page: PageRequest)
    -> Result<Page<Post>, RepoError>;

    /// Fresh counters for every post in `post_ids`, keyed by post id.
    async fn stats(
        &self,
        post_ids: &[Uuid],
        viewer: Option<Uuid>,
    ) -> Result<HashMap<Uuid, PostStats>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    /// Every comment on a post, newest-first.
    async fn for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError>;

    async fn by_author(&self, user_id: Uuid, page: PageRequest)
    -> Result<Page<Comment>, RepoError>;
}

/// Likes and seen-marks.
#[async_trait]
pub trait EngagementRepository: Send + Sync {
    /// Flip the like of `user_id` on `post_id` and report the new state.
    async fn toggle_like(&self, user_id: Uuid, post_id: Uuid) -> Result<LikeState, RepoError>;

    /// Record that `user_id` viewed `post_id`. Returns `false` if it was already recorded.
    async fn mark_seen(&self, user_id: Uuid, post_id: Uuid) -> Result<bool, RepoError>;
}

/// Story repository. Every listing is newest-first.
#[async_trait]
pub trait StoryRepository: BaseRepository<Story, Uuid> {
    /// Stories owned by `account_id` or by any account it follows.
    async fn visible_to(&self, account_id: Uuid, page: PageRequest)
    -> Result<Page<Story>, RepoError>;

    /// Stories of one owner created at or after `cutoff`.
    async fn by_owner_since(
        &self,
        owner_id: Uuid,
        cutoff: DateTime<Utc>,
        page: PageRequest,
    ) -> Result<Page<Story>, RepoError>;
}

/// Follower edges.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Store the edge unless an equal one exists. Returns the stored edge and
    /// whether it was created by this call.
    async fn follow(
        &self,
        edge: FollowerConnection,
    ) -> Result<(FollowerConnection, bool), RepoError>;

    /// Remove the edge. Returns `false` if there was none.
    async fn unfollow(&self, follower_id: Uuid, following_id: Uuid) -> Result<bool, RepoError>;

    async fn following_ids(&self, account_id: Uuid) -> Result<Vec<Uuid>, RepoError>;

    /// Edges touching `account_id` on the given side, newest-first.
    async fn edges(
        &self,
        account_id: Uuid,
        side: FollowSide,
        page: PageRequest,
    ) -> Result<Page<FollowerConnection>, RepoError>;
}
