use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Directed edge: `follower_id` sees the posts and stories of `following_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerConnection {
    pub id: Uuid,
    pub follower_id: Uuid,
    pub following_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl FollowerConnection {
    /// Create an edge. An account cannot follow itself.
    pub fn new(follower_id: Uuid, following_id: Uuid) -> Result<Self, DomainError> {
        if follower_id == following_id {
            return Err(DomainError::invalid(
                crate::validation::NON_FIELD_ERRORS,
                "You cannot follow yourself.",
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            follower_id,
            following_id,
            created_at: Utc::now(),
        })
    }
}

/// Which end of an edge a listing is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowSide {
    /// Accounts following the subject.
    Followers,
    /// Accounts the subject follows.
    Following,
}

impl FollowSide {
    /// The account on the other end of `edge` from the listing's subject.
    pub fn counterpart(self, edge: &FollowerConnection) -> Uuid {
        match self {
            FollowSide::Followers => edge.follower_id,
            FollowSide::Following => edge.following_id,
        }
    }
}
