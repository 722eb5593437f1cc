use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A like of a post by an account. At most one per (account, post).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
}

impl Like {
    pub fn new(user_id: Uuid, post_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            post_id,
        }
    }
}

/// Marks that an account has viewed a post. At most one per (account, post).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeenPost {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
}

impl SeenPost {
    pub fn new(user_id: Uuid, post_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            post_id,
        }
    }
}

/// State of a like after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeState {
    Liked,
    Unliked,
}

impl LikeState {
    pub fn is_liked(self) -> bool {
        matches!(self, LikeState::Liked)
    }
}
