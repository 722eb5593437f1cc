//! # Pixgram Core
//!
//! The domain layer of the Pixgram backend: accounts, posts, comments,
//! likes, stories and follower edges, plus the ports infrastructure implements.
//! This crate has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::DomainError;
pub use validation::FieldErrors;
