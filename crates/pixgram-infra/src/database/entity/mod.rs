//! SeaORM entities, one per table.

pub mod account;
pub mod comment;
pub mod follower_connection;
pub mod like;
pub mod post;
pub mod seen_post;
pub mod session;
pub mod story;
