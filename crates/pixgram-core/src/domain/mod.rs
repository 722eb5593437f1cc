//! Domain entities - the core business objects.

mod account;
mod comment;
mod engagement;
mod follow;
mod image;
mod page;
mod post;
mod session;
mod story;

pub use account::{Account, AccountStats, Registration};
pub use comment::{Comment, MAX_COMMENT_LENGTH};
pub use engagement::{Like, LikeState, SeenPost};
pub use follow::{FollowSide, FollowerConnection};
pub use image::{ALLOWED_IMAGE_EXTENSIONS, ImageRef, ImageRefError};
pub use page::{Page, PageRequest};
pub use post::{Post, PostChanges, PostStats};
pub use session::Session;
pub use story::{STORY_LIFETIME_HOURS, Story};
