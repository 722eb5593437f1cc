//! # Pixgram Infrastructure
//!
//! Concrete implementations of the ports defined in `pixgram-core`:
//! SeaORM repositories, the database-backed session store and Argon2
//! password hashing.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL driver
//! - `sqlite` - SQLite driver, used by the test suites
//! - `auth` (default) - Argon2 password hashing

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

pub use database::{
    DatabaseConfig, SqlAccountRepository, SqlCommentRepository, SqlEngagementRepository,
    SqlFollowRepository, SqlPostRepository, SqlSessionStore, SqlStoryRepository, connect,
};

#[cfg(feature = "auth")]
pub use auth::Argon2PasswordService;
