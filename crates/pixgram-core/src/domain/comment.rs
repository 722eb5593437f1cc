use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Longest comment accepted, in characters.
pub const MAX_COMMENT_LENGTH: usize = 255;

/// Comment entity - text left by an account on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a comment, rejecting blank or over-long text.
    pub fn new(user_id: Uuid, post_id: Uuid, text: String) -> Result<Self, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::invalid("text", crate::validation::BLANK));
        }
        let length = text.chars().count();
        if length > MAX_COMMENT_LENGTH {
            return Err(DomainError::invalid(
                "text",
                format!(
                    "Ensure this field has no more than {} characters (it has {}).",
                    MAX_COMMENT_LENGTH, length
                ),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            post_id,
            text,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_limit_is_inclusive() {
        let (user, post) = (Uuid::new_v4(), Uuid::new_v4());
        assert!(Comment::new(user, post, "x".repeat(255)).is_ok());

        let DomainError::Validation(errors) = Comment::new(user, post, "x".repeat(256)).unwrap_err();
        assert!(errors.contains("text"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let text = "é".repeat(255);
        assert!(text.len() > 255);
        assert!(Comment::new(Uuid::new_v4(), Uuid::new_v4(), text).is_ok());
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(Comment::new(Uuid::new_v4(), Uuid::new_v4(), " \n".into()).is_err());
    }
}
