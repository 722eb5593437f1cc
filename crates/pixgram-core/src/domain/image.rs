use std::fmt;

use serde::{Deserialize, Serialize};

/// File extensions accepted for uploaded pictures.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Reference to an image held by the external file store (URL or path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageRef(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageRefError {
    #[error("No file was submitted.")]
    Empty,

    #[error(
        "File extension \u{201c}{0}\u{201d} is not allowed. Allowed extensions are: png, jpg, jpeg."
    )]
    Extension(String),
}

impl ImageRef {
    pub fn parse(value: impl Into<String>) -> Result<Self, ImageRefError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ImageRefError::Empty);
        }

        // Only the path part counts: "a.png?v=2" is still a png.
        let path = trimmed
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let file_name = path.rsplit('/').next().unwrap_or_default();
        let extension = match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
            _ => String::new(),
        };

        if !ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ImageRefError::Extension(extension));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ImageRef {
    type Error = ImageRefError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ImageRef> for String {
    fn from(image: ImageRef) -> Self {
        image.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_raster_extensions() {
        for value in [
            "posts/sunset.png",
            "posts/sunset.JPG",
            "https://cdn.example.com/stories/a.jpeg",
            "https://cdn.example.com/p/b.jpg?w=640#top",
        ] {
            assert!(ImageRef::parse(value).is_ok(), "{value} should be accepted");
        }
    }

    #[test]
    fn test_rejects_other_files() {
        assert_eq!(ImageRef::parse("  "), Err(ImageRefError::Empty));
        assert_eq!(
            ImageRef::parse("posts/clip.gif"),
            Err(ImageRefError::Extension("gif".to_string()))
        );
        assert_eq!(
            ImageRef::parse("posts/noextension"),
            Err(ImageRefError::Extension(String::new()))
        );
        assert!(ImageRef::parse("posts/.png").is_err());
        assert!(ImageRef::parse("https://cdn.example.com/png?x=a.png").is_err());
    }
}
