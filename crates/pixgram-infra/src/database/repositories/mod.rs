//! SQL implementations of the repository and session ports.

mod account;
mod comment;
mod engagement;
mod follow;
mod post;
mod session;
mod story;

pub use account::SqlAccountRepository;
pub use comment::SqlCommentRepository;
pub use engagement::SqlEngagementRepository;
pub use follow::SqlFollowRepository;
pub use post::SqlPostRepository;
pub use session::SqlSessionStore;
pub use story::SqlStoryRepository;
