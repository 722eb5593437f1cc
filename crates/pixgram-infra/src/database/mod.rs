//! Database connection, schema and repositories.

mod base;
mod connections;
pub mod entity;
pub mod repositories;
pub mod schema;

pub use base::SeaOrmRepository;
pub use connections::{DatabaseConfig, connect};
pub use repositories::{
    SqlAccountRepository, SqlCommentRepository, SqlEngagementRepository, SqlFollowRepository,
    SqlPostRepository, SqlSessionStore, SqlStoryRepository,
};
pub use schema::create_schema;

/// Pool handle shared by every repository.
pub use sea_orm::DbConn;
