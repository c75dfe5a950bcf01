//! HTTP gateway for the savor anonymous review service.
//!
//! A thin adapter between the HTTP surface and the hierarchical document
//! store: path validation, review-id derivation, payload normalization,
//! and nothing else. Each request is stateless and performs at most one
//! store operation.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod routes;
