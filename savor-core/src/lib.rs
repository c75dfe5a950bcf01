//! Core types for the savor anonymous review service.
//!
//! Defines the fundamental domain types: subject and review identifiers,
//! the review record, and the payload normalization that splits a write
//! body into `rating`, `comment`, and `meta`.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod id;
pub mod review;

pub use error::CoreError;
pub use id::{ReviewId, SubjectId};
pub use review::Review;
