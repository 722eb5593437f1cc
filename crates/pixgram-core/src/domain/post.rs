use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::image::ImageRef;
use crate::validation::{self, FieldErrors};

/// Post entity - a picture with a caption, owned by one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub image: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post.
    pub fn new(user_id: Uuid, image: ImageRef, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            image: image.into_inner(),
            description,
            created_at: Utc::now(),
        }
    }

    /// Validate complete input and build a new post for `user_id`.
    pub fn from_input(
        user_id: Uuid,
        image: Option<String>,
        description: Option<String>,
    ) -> Result<Self, FieldErrors> {
        let changes = PostChanges::validate(image, description, false)?;
        match (changes.image, changes.description) {
            (Some(image), Some(description)) => Ok(Self::new(user_id, image, description)),
            _ => Err(FieldErrors::general("Incomplete post.")),
        }
    }

    /// Apply validated changes. `created_at` and the owner never change.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(image) = changes.image {
            self.image = image.into_inner();
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
    }
}

/// Validated edit of a post. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub image: Option<ImageRef>,
    pub description: Option<String>,
}

impl PostChanges {
    /// Validate raw input. With `partial == false` every field is required
    /// (create and full replace); otherwise absent fields are skipped.
    pub fn validate(
        image: Option<String>,
        description: Option<String>,
        partial: bool,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut changes = PostChanges::default();

        match image {
            Some(raw) => match ImageRef::parse(raw) {
                Ok(image) => changes.image = Some(image),
                Err(e) => errors.add("image", e.to_string()),
            },
            None if !partial => errors.add("image", "No file was submitted."),
            None => {}
        }

        match description {
            Some(text) => {
                if validation::require_non_blank(&mut errors, "description", &text) {
                    changes.description = Some(text);
                }
            }
            None if !partial => errors.add("description", validation::REQUIRED),
            None => {}
        }

        errors.into_result().map(|_| changes)
    }
}

/// Engagement counters for one post, optionally relative to a viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostStats {
    pub likes: u64,
    pub comments: u64,
    pub seen: u64,
    pub liked_by_viewer: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_input_requires_every_field() {
        let errors = PostChanges::validate(None, None, false).unwrap_err();
        assert!(errors.contains("image"));
        assert!(errors.contains("description"));
    }

    #[test]
    fn test_from_input() {
        let owner = Uuid::new_v4();
        let post = Post::from_input(owner, Some("a.JPG".into()), Some("hi".into())).unwrap();
        assert_eq!(post.user_id, owner);
        assert_eq!(post.image, "a.JPG");

        let errors = Post::from_input(owner, Some("a.gif".into()), Some("hi".into())).unwrap_err();
        assert!(errors.contains("image"));
    }

    #[test]
    fn test_partial_input_skips_missing_fields() {
        let changes = PostChanges::validate(None, Some("new caption".into()), true).unwrap();
        assert!(changes.image.is_none());
        assert_eq!(changes.description.as_deref(), Some("new caption"));
    }

    #[test]
    fn test_bad_image_is_rejected_even_when_partial() {
        let errors = PostChanges::validate(Some("clip.mp4".into()), None, true).unwrap_err();
        assert!(errors.contains("image"));
    }

    #[test]
    fn test_apply_keeps_owner_and_timestamp() {
        let owner = Uuid::new_v4();
        let mut post = Post::new(owner, ImageRef::parse("a.png").unwrap(), "first".into());
        let created_at = post.created_at;

        let changes =
            PostChanges::validate(Some("b.jpg".into()), Some("second".into()), false).unwrap();
        post.apply(changes);

        assert_eq!(post.image, "b.jpg");
        assert_eq!(post.description, "second");
        assert_eq!(post.user_id, owner);
        assert_eq!(post.created_at, created_at);
    }
}
