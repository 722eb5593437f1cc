//! Application state - shared across all handlers.

use std::sync::Arc;

use chrono::TimeDelta;
use pixgram_core::ports::{
    AccountRepository, CommentRepository, EngagementRepository, FollowRepository,
    PasswordService, PostRepository, SessionStore, StoryRepository,
};
use pixgram_infra::Argon2PasswordService;
use pixgram_infra::database::{
    DbConn, SqlAccountRepository, SqlCommentRepository, SqlEngagementRepository,
    SqlFollowRepository, SqlPostRepository, SqlSessionStore, SqlStoryRepository,
};

use crate::config::AppConfig;

/// Request-independent knobs the handlers need.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub page_size: u64,
    pub session_ttl: TimeDelta,
    pub cookie_secure: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: 10,
            session_ttl: TimeDelta::hours(336),
            cookie_secure: false,
        }
    }
}

impl From<&AppConfig> for Settings {
    fn from(config: &AppConfig) -> Self {
        Self {
            page_size: config.page_size,
            session_ttl: config.session_ttl,
            cookie_secure: config.session_cookie_secure,
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub engagement: Arc<dyn EngagementRepository>,
    pub stories: Arc<dyn StoryRepository>,
    pub follows: Arc<dyn FollowRepository>,
    pub sessions: Arc<dyn SessionStore>,
    pub passwords: Arc<dyn PasswordService>,
    pub settings: Settings,
}

impl AppState {
    /// Wire every port to its SQL implementation over one pool.
    pub fn new(db: DbConn, settings: Settings) -> Self {
        tracing::info!(page_size = settings.page_size, "Application state initialized");

        Self {
            accounts: Arc::new(SqlAccountRepository::new(db.clone())),
            posts: Arc::new(SqlPostRepository::new(db.clone())),
            comments: Arc::new(SqlCommentRepository::new(db.clone())),
            engagement: Arc::new(SqlEngagementRepository::new(db.clone())),
            stories: Arc::new(SqlStoryRepository::new(db.clone())),
            follows: Arc::new(SqlFollowRepository::new(db.clone())),
            sessions: Arc::new(SqlSessionStore::new(db)),
            passwords: Arc::new(Argon2PasswordService::new()),
            settings,
        }
    }
}
