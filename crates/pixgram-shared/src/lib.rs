//! # Pixgram Shared
//!
//! Wire types of the HTTP API: request bodies, resource representations,
//! the pagination envelope and the problem-details error body.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, Paginated};
