use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::image::ImageRef;

/// How long a story stays in the "my stories" / "user stories" listings.
pub const STORY_LIFETIME_HOURS: i64 = 24;

/// Story entity - a picture shown to followers for a limited time.
///
/// Nothing is deleted when a story gets old; freshness is a query-time filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: Uuid,
    pub user_id: Uuid,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

impl Story {
    pub fn new(user_id: Uuid, image: ImageRef) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            image: image.into_inner(),
            created_at: Utc::now(),
        }
    }

    /// Oldest creation time still considered fresh at `now`.
    pub fn freshness_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
        now - TimeDelta::hours(STORY_LIFETIME_HOURS)
    }
}
