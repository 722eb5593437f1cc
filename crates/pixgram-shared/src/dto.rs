//! Data Transfer Objects - request/response types for the API.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Request to register a new account. Missing fields deserialize as empty
/// strings so that every problem is reported at once by validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
}

/// Request to log in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of post create, replace and partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostInput {
    pub image: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentRequest {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryRequest {
    pub image: Option<String>,
}

/// `?page=N`. Kept as a string so that garbage is reported as an invalid
/// page rather than a query parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserStoriesQuery {
    pub user_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Smallest account projection, nested inside other resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBrief {
    pub id: Uuid,
    pub username: String,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_picture: Option<String>,
    pub description: String,
    pub date_joined: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDetail {
    #[serde(flatten)]
    pub account: AccountSummary,
    pub posts_count: u64,
    pub followers_count: u64,
    pub following_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub image: String,
    pub description: String,
    pub description_preview: String,
    pub owner: AccountBrief,
    pub likes_count: u64,
    pub comments_count: u64,
    pub seen_count: u64,
    pub is_liked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: PostSummary,
    pub comments: Vec<CommentView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub text: String,
    pub user: AccountBrief,
    pub post: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub image: String,
    pub owner: AccountBrief,
}

/// A newly stored (or already existing) follower edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowView {
    pub id: Uuid,
    pub follower: AccountBrief,
    pub following: AccountBrief,
}

/// One entry of a followers or following list: the account on the other end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowEdgeView {
    pub id: Uuid,
    pub account: AccountBrief,
    pub created_at: DateTime<Utc>,
}

/// Body of successful register and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSuccess {
    pub message: String,
    pub user_id: Uuid,
    pub username: String,
}

/// Body of failed register and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthFailure {
    pub error: String,
    pub details: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief() -> AccountBrief {
        AccountBrief {
            id: Uuid::nil(),
            username: "alice".into(),
            profile_picture: None,
        }
    }

    #[test]
    fn test_register_request_tolerates_missing_fields() {
        let request: RegisterRequest =
            serde_json::from_str(r#"{"username":"alice","password":"pw"}"#).unwrap();
        assert_eq!(request.username, "alice");
        assert!(request.email.is_empty());
        assert!(request.password_confirm.is_empty());
    }

    #[test]
    fn test_post_detail_flattens_summary() {
        let detail = PostDetail {
            post: PostSummary {
                id: Uuid::nil(),
                created_at: Utc::now(),
                image: "a.png".into(),
                description: "hello".into(),
                description_preview: "hello".into(),
                owner: brief(),
                likes_count: 2,
                comments_count: 0,
                seen_count: 1,
                is_liked: true,
            },
            comments: Vec::new(),
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["likes_count"], 2);
        assert_eq!(value["owner"]["username"], "alice");
        assert!(value["comments"].as_array().unwrap().is_empty());
        assert!(value.get("post").is_none());
    }
}
